//! Duplicate detection: name-based grouping and content-based detection.

pub mod finder;
pub mod groups;

pub use finder::{find_content_duplicates, group_by_size, ContentStats};
pub use groups::{
    extension_filter, group_by_stem, select_name_keepers, DuplicateGroup, KeeperPolicy, NameGroup,
    RemovalPlan,
};
