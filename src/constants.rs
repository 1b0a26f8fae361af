//! Common constants used throughout pingen.

/// Configuration file read from the working directory by default
pub const CONFIG_FILE: &str = "config.yaml";

/// Marker suffix identifying a template file
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Folder name whose contents are generated into the parent directory
pub const TEMPLATES_DIR: &str = "templates";

/// Directory holding the designated fixed-mode template
pub const FIXED_TEMPLATE_DIR: &str = "lib/drivers/instances/stm32h5xx/templates";

/// File name of the designated fixed-mode template
pub const FIXED_TEMPLATE_NAME: &str = "raceup_setup.c.j2";

/// Output written by the designated fixed-mode template
pub const FIXED_OUTPUT: &str = "lib/drivers/instances/stm32h5xx/raceup_setup.c";
