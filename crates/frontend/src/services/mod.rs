//! Remote API access.

mod api;

pub use api::{ApiClient, ApiError, Result};

/// Log a remote-call failure from inside a fetch effect without
/// blocking it.
pub fn report_failure(context: &str, err: &ApiError) {
    let message = format!("{context}: {err}");
    gloo_timers::callback::Timeout::new(0, move || {
        web_sys::console::error_1(&message.into());
    })
    .forget();
}
