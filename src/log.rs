use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("STRKIT_DEBUG").map_or(false, |level| level.eq("true") || level.eq("1"))
});

/// Builds an error or status message, appending `details` only when
/// `STRKIT_DEBUG` is enabled.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Extra context shown in debug mode.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Prints a yellow debug line to stderr when `STRKIT_DEBUG` is enabled.
///
/// # Examples
///
/// ```
/// use strkit::debug;
///
/// debug!("Applying transform");
/// debug!("Transform {} produced {} chars", "rot13", 5);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
