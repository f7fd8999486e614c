//! Console logging for the browser build.
//!
//! `console_log` backs the `log` facade; native test builds never install it.

use log::{Level, LevelFilter};

/// Installs the console logger and the panic hook.
///
/// A second call keeps the first logger and only changes the max level.
pub(crate) fn init_logging(filter: LevelFilter) {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(backend_level(filter)) {
        log::warn!("console logger not installed: {e}");
    }
    // `init_with_level` sets the max level itself; `Off` has no `Level`, so reapply.
    log::set_max_level(filter);
}

/// Level handed to `console_log`, which has no notion of `Off`.
fn backend_level(filter: LevelFilter) -> Level {
    filter.to_level().unwrap_or(Level::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_level_follows_filter() {
        assert_eq!(backend_level(LevelFilter::Debug), Level::Debug);
        assert_eq!(backend_level(LevelFilter::Trace), Level::Trace);
        assert_eq!(backend_level(LevelFilter::Off), Level::Error);
    }
}
