use tera::Tera;

use crate::error::AppError;
use crate::escape::escape_html;
use crate::label::{branded, generic};

/// Initialize the Tera template engine.
///
/// Label templates are compiled into the binary so a deployment is a single
/// file. Autoescaping stays on for `.html` templates and uses `escape_html`,
/// which is the only escaping applied to label output.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (
            generic::TEMPLATE_NAME,
            include_str!("../templates/label/generic.html"),
        ),
        (
            branded::TEMPLATE_NAME,
            include_str!("../templates/label/branded.html"),
        ),
    ])?;
    tera.set_escape_fn(escape_html);

    Ok(tera)
}
