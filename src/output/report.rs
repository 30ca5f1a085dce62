//! Human-readable duplicate report written to stdout.
//!
//! The report lists each duplicate group with its original (keeper) and
//! duplicates, file sizes for name groups, and the content digest for
//! content groups. Removal commands follow each section so the user can
//! review and paste them.

use std::io::Write;

use bytesize::ByteSize;

use crate::duplicates::{DuplicateGroup, KeeperPolicy, NameGroup, RemovalPlan};

use super::script::write_commands;

const SEPARATOR: &str = "--------------------------------------------------";

/// Write the name-duplicate section of the report.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_name_report<W: Write>(
    writer: &mut W,
    groups: &[NameGroup],
    policy: KeeperPolicy,
) -> std::io::Result<()> {
    if groups.is_empty() {
        writeln!(writer, "No duplicates found by name.")?;
        writeln!(writer)?;
        return Ok(());
    }

    let policy_label = match policy {
        KeeperPolicy::LargestWins => "Keeping Largest File",
        KeeperPolicy::SmallestWins => "Keeping Smallest File",
    };
    writeln!(
        writer,
        "--- Duplicates Found by Name ({}) ---",
        policy_label
    )?;

    for group in groups {
        let keeper = group.keeper();
        writeln!(writer)?;
        writeln!(
            writer,
            "Original: {} ({})",
            keeper.path.display(),
            ByteSize::b(keeper.size)
        )?;
        for dup in group.removable() {
            writeln!(
                writer,
                "Duplicate: {} ({})",
                dup.path.display(),
                ByteSize::b(dup.size)
            )?;
        }
    }

    let plans: Vec<RemovalPlan> = groups.iter().map(NameGroup::removal_plan).collect();
    if plans.iter().any(|p| !p.removable.is_empty()) {
        writeln!(writer)?;
        writeln!(writer, "--- Commands to Remove Name Duplicates ---")?;
        write_commands(writer, &plans)?;
    }
    writeln!(writer, "{}", SEPARATOR)?;

    Ok(())
}

/// Write the content-duplicate section of the report.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_content_report<W: Write>(
    writer: &mut W,
    groups: &[DuplicateGroup],
) -> std::io::Result<()> {
    if groups.is_empty() {
        writeln!(writer, "No duplicates found by content.")?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "--- Duplicates Found by Content (File Hash) ---")?;

    for group in groups {
        writeln!(writer)?;
        writeln!(writer, "Hash: {}", group.digest_hex())?;
        writeln!(writer, "Original: {}", group.keeper().display())?;
        for dup in group.removable() {
            writeln!(writer, "Duplicate: {}", dup.display())?;
        }
    }

    let plans: Vec<RemovalPlan> = groups.iter().map(DuplicateGroup::removal_plan).collect();
    writeln!(writer)?;
    writeln!(writer, "--- Commands to Remove Content Duplicates ---")?;
    write_commands(writer, &plans)?;
    writeln!(writer, "{}", SEPARATOR)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::FileEntry;
    use std::path::PathBuf;

    #[test]
    fn test_name_report_lists_sizes_and_commands() {
        let groups = vec![NameGroup {
            stem: "track".to_string(),
            files: vec![
                FileEntry::new(PathBuf::from("/big/track.mp3"), 5_000_000),
                FileEntry::new(PathBuf::from("/small/track.mp3"), 1_000_000),
            ],
        }];

        let mut buffer = Vec::new();
        write_name_report(&mut buffer, &groups, KeeperPolicy::LargestWins).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.contains("Keeping Largest File"));
        assert!(out.contains("Original: /big/track.mp3"));
        assert!(out.contains("Duplicate: /small/track.mp3"));
        assert!(out.contains("rm '/small/track.mp3'"));
        assert!(!out.contains("rm '/big/track.mp3'"));
    }

    #[test]
    fn test_name_report_empty() {
        let mut buffer = Vec::new();
        write_name_report(&mut buffer, &[], KeeperPolicy::SmallestWins).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.contains("No duplicates found by name."));
        assert!(!out.contains("rm "));
    }

    #[test]
    fn test_content_report_lists_hash_and_commands() {
        let groups = vec![DuplicateGroup::new(
            [0x11u8; 32],
            64,
            vec![
                PathBuf::from("/z/copy.txt"),
                PathBuf::from("/a/original.txt"),
            ],
        )];

        let mut buffer = Vec::new();
        write_content_report(&mut buffer, &groups).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.contains(&format!("Hash: {}", "11".repeat(32))));
        assert!(out.contains("Original: /a/original.txt"));
        assert!(out.contains("Duplicate: /z/copy.txt"));
        assert!(out.contains("rm '/z/copy.txt'"));
        assert!(!out.contains("rm '/a/original.txt'"));
    }

    #[test]
    fn test_content_report_empty() {
        let mut buffer = Vec::new();
        write_content_report(&mut buffer, &[]).unwrap();
        let out = String::from_utf8(buffer).unwrap();

        assert!(out.contains("No duplicates found by content."));
    }
}
