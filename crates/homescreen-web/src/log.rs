#![forbid(unsafe_code)]

//! Console diagnostics.
//!
//! The console is the only diagnostic surface this crate has; nothing here
//! is visible to the end user.

macro_rules! console_debug {
    ($($arg:tt)*) => {
        ::web_sys::console::debug_1(&::std::format!($($arg)*).into())
    };
}

macro_rules! console_warn {
    ($($arg:tt)*) => {
        ::web_sys::console::warn_1(&::std::format!($($arg)*).into())
    };
}

pub(crate) use console_debug;
pub(crate) use console_warn;
