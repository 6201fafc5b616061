/// Macros for properly formatted console logging
/// In the browser these wrap gloo_console functions with a timestamp prefix.
/// Native builds (tests, tooling) have no browser console, so the same call
/// sites emit `tracing` events instead.
#[macro_export]
macro_rules! console_info {
    ($fmt:expr) => {
        $crate::__console_emit!(info, info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(info, info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_log {
    ($fmt:expr) => {
        $crate::__console_emit!(log, info, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(log, info, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($fmt:expr) => {
        $crate::__console_emit!(warn, warn, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(warn, warn, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_error {
    ($fmt:expr) => {
        $crate::__console_emit!(error, error, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(error, error, format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! console_debug {
    ($fmt:expr) => {
        $crate::__console_emit!(debug, debug, format!("{}", $fmt))
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::__console_emit!(debug, debug, format!($fmt, $($arg)*))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __console_emit {
    ($console:ident, $tracing:ident, $message:expr) => {{
        let message: String = $message;
        #[cfg(target_arch = "wasm32")]
        {
            gloo_console::$console!(format!("[{}] {}", js_sys::Date::now(), message));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::$tracing!("{}", message);
        }
    }};
}
