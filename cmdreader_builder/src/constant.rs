pub(crate) const TRUE_ALIASES: [&str; 6] = ["1", "true", "t", "y", "yes", "on"];
pub(crate) const FALSE_ALIASES: [&str; 6] = ["0", "false", "f", "n", "no", "off"];

// Exclusion group shared by every parameter that declares an exclusion group without naming one.
pub(crate) const DEFAULT_GROUP: &str = "default";

pub(crate) const SCREEN_WIDTH: usize = 72;
pub(crate) const DESCRIPTION_INDENT: usize = 8;
pub(crate) const PARAMETER_HINT: &str = "=val";
