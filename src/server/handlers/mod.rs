//! HTTP handlers.

mod metrics;
mod route;
mod status;

pub use metrics::{metrics_handler, render_metrics};
pub use route::route_handler;
pub use status::{status_handler, status_snapshot};
