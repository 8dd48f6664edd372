//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;
use crate::label::{build_renderer, LabelRenderer};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything in here is built once at startup and never mutated: the
/// configuration, the Tera template engine and the active label renderer
/// (which owns the preloaded logo for branded labels).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub renderer: Arc<dyn LabelRenderer>,
}

impl AppState {
    /// Creates application state, building the renderer selected by `config`.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        let renderer = build_renderer(&config);
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            renderer,
        }
    }
}
