//! Logging and debugging facilities for Rowkit.
//!
//! Rowkit uses the `tracing` crate for instrumentation. To see logs, install
//! a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "rowkit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "rowkit_core::signal";
    /// List controller target.
    pub const CONTROLLER: &str = "rowkit::controller";
    /// Cell pool target.
    pub const POOL: &str = "rowkit::pool";
}

/// RAII guard for performance tracing.
///
/// Creates a tracing span that measures the time between creation and drop.
/// Useful for profiling render passes.
///
/// # Example
///
/// ```
/// use rowkit_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("render_pass");
///     // ... work to measure ...
/// } // Span ends here
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "rowkit::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
