//! Report and removal-command output.

pub mod report;
pub mod script;

pub use report::{write_content_report, write_name_report};
pub use script::{escape_posix, removal_commands};
