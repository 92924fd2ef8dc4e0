//! Fixed ANSI sequences. The terminal is assumed to understand them.

pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";
