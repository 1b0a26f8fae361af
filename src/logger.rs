//! Logger setup for the pingen binary.

use log::LevelFilter;

/// Level used for `verbose`: per-template progress shows up at `Debug`.
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialises the global env_logger backend once, at startup.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new().filter_level(level_filter(verbose)).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(true), LevelFilter::Debug);
        assert_eq!(level_filter(false), LevelFilter::Info);
    }
}
