//! CLI mode implementations

mod colorize;
mod list;
mod measure;

pub use colorize::{ColorizeConfig, Colorized, Scheme, colorize};
pub use list::list_table;
pub use measure::measure;
