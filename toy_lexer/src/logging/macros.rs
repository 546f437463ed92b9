//! Logging macros
//!
//! Context values accept anything implementing `Display`. Every macro is a
//! no-op until the global logger is initialized.

/// Builds the owned context list shared by every logging macro
#[doc(hidden)]
#[macro_export]
macro_rules! __log_context {
    ($($key:expr => $value:expr),*) => {
        vec![$(($key, format!("{}", $value))),*]
    };
}

/// Log an error event with a registered code
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::error($code, &$message),
            None,
            vec![],
        )
    };

    ($code:expr, $message:expr, location = $location:expr) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::error($code, &$message),
            Some($location),
            vec![],
        )
    };

    ($code:expr, $message:expr, location = $location:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::error($code, &$message),
            Some($location),
            $crate::__log_context!($($key => $value),+),
        )
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::error($code, &$message),
            None,
            $crate::__log_context!($($key => $value),+),
        )
    };
}

/// Log a warning event with a registered code
#[macro_export]
macro_rules! log_warning {
    ($code:expr, $message:expr) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::warning_with_code($code, &$message),
            None,
            vec![],
        )
    };

    ($code:expr, $message:expr, location = $location:expr) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::warning_with_code($code, &$message),
            Some($location),
            vec![],
        )
    };

    ($code:expr, $message:expr, location = $location:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::warning_with_code($code, &$message),
            Some($location),
            $crate::__log_context!($($key => $value),+),
        )
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::warning_with_code($code, &$message),
            None,
            $crate::__log_context!($($key => $value),+),
        )
    };
}

/// Log a success event
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::success($code, &$message),
            None,
            vec![],
        )
    };

    ($code:expr, $message:expr, location = $location:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::success($code, &$message),
            Some($location),
            $crate::__log_context!($($key => $value),+),
        )
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::success($code, &$message),
            None,
            $crate::__log_context!($($key => $value),+),
        )
    };
}

/// Log an informational message without a code
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::dispatch($crate::logging::LogEvent::info(&$message), None, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        $crate::logging::dispatch(
            $crate::logging::LogEvent::info(&$message),
            None,
            $crate::__log_context!($($key => $value),+),
        )
    };
}

/// Log a debug message; context is only formatted when debug is enabled
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::dispatch($crate::logging::LogEvent::debug(&$message), None, vec![])
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
            $crate::logging::dispatch(
                $crate::logging::LogEvent::debug(&$message),
                None,
                $crate::__log_context!($($key => $value),+),
            )
        }
    };
}
