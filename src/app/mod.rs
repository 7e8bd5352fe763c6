//! Application orchestration: shared state, profiling and shutdown.

mod context;
mod lookup;
pub mod shutdown;


pub use context::AppState;
pub use lookup::{profile_for_ip, LookupOutcome};
pub use shutdown::{shutdown_signal, spawn_ctrl_c_listener};
