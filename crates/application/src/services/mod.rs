pub mod style;
pub mod tree_formatter;

pub use tree_formatter::{render_header, render_step, TreeFormatter};
