/// Conditional console logging for development builds
///
/// The `log!` macro writes informational messages to the browser console and
/// compiles to nothing in release builds unless the `console_logging` feature
/// is enabled. Failures go through `leptos::logging::error!` instead.
///
/// # Examples
///
/// ```no_run
/// use subway_admin::logging::log;
///
/// log!("Loaded {} lines", 3);
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),+ $(,)?) => {
        #[cfg(any(debug_assertions, feature = "console_logging"))]
        {
            web_sys::console::log_1(&format!($($arg),+).into());
        }
    };
}

pub use log;
