use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref ENABLED: AtomicBool = AtomicBool::new(false);
}

pub fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

pub fn disable() {
    ENABLED.store(false, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    (checkpoint, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "checkpoint".black().on_green(), format_args!($($token)*));
        }
    );
    (stale, $($token:tt)*) => (
        if $crate::log::is_enabled() {
            use colored::Colorize;

            eprintln!("<{}> [{}] {}", "LOG".black().on_purple(), "STALE".black().on_red(), format_args!($($token)*));
        }
    );
    ($($token:tt)*) => (
        if $crate::log::is_enabled() {
            use colored::Colorize;

            eprintln!("<{}> {}", "LOG".black().on_purple(), format_args!($($token)*));
        }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_toggle_logging() {
        enable();
        assert!(is_enabled());

        crate::log!(checkpoint, "registered `{}`", "p");
        crate::log!(stale, "lost `{}`", "p");
        crate::log!("plain message");

        disable();
        assert!(!is_enabled());
    }
}
