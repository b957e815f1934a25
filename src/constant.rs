pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const SWITCH_PREFIX: &str = "/";

// The first of either delimiter splits an option shaped token.
pub(crate) const VALUE_DELIMITERS: [char; 2] = ['=', ':'];

pub(crate) const ELLIPSIS: &str = "...";

pub(crate) const DEFAULT_NAME_WIDTH: usize = 80;
pub(crate) const DEFAULT_POSIX_DESCRIPTION_WIDTH: usize = 40;
pub(crate) const DEFAULT_SWITCH_DESCRIPTION_WIDTH: usize = 76;
