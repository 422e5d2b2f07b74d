//! Profiling utilities based on the `puffin` crate.

use std::sync::OnceLock;

pub use puffin::{profile_function, profile_scope};

/// Default address of the puffin HTTP server.
pub const DEFAULT_PROFILER_ADDR: &str = "0.0.0.0:8585";

/// Global profiling server instance.
static PROFILING_SERVER: OnceLock<puffin_http::Server> = OnceLock::new();

/// Enable puffin scopes and serve them over HTTP on `addr`.
///
/// Failure to bind is logged and profiling stays disabled.
///
/// # Example
/// ```no_run
/// use glassboard_core::profiling::{init_profiling, DEFAULT_PROFILER_ADDR};
///
/// init_profiling(DEFAULT_PROFILER_ADDR);
/// ```
pub fn init_profiling(addr: &str) {
    if PROFILING_SERVER.get().is_some() {
        tracing::debug!("puffin server already running");
        return;
    }

    match puffin_http::Server::new(addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            tracing::info!("Puffin profiler server started on http://{}", addr);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per rendered frame so scopes are grouped by frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

/// Whether scopes are currently being recorded.
#[inline]
pub fn is_enabled() -> bool {
    puffin::are_scopes_on()
}
