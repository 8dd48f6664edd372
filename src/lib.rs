//! Shiplabel: printable 4x6 shipping labels over HTTP.
//!
//! `GET /print` turns order data carried in the query string into a complete
//! HTML document laid out for a thermal label printer. The label style is
//! chosen by configuration (see [`label::LabelVariant`]).

pub mod config;
pub mod error;
pub mod escape;
pub mod label;
pub mod logo;
pub mod middleware;
pub mod order;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;
