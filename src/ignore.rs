//! Exclude pattern handling for recursive template discovery.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles exclude patterns into a set of globs.
///
/// Patterns are matched against template paths relative to the discovery root.
/// An empty pattern list yields a set that matches nothing.
///
/// # Errors
/// * `Error::IgnorePatternError` if any pattern is not a valid glob
pub fn build_exclude_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        debug!("Excluding templates matching '{}'", pattern);
        builder.add(Glob::new(pattern).map_err(|e| Error::IgnorePatternError {
            pattern: pattern.to_string(),
            source: e,
        })?);
    }
    builder.build().map_err(|e| Error::IgnorePatternError {
        pattern: patterns.iter().map(|p| p.as_ref()).collect::<Vec<&str>>().join(", "),
        source: e,
    })
}
