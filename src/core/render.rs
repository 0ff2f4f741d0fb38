//! Text rendering of the grouped view.

use crate::core::colors::{get_colored_origin, get_freshness_label, get_freshness_marker};
use crate::core::record::{Mode, SortDirection};
use crate::core::view::{DirectoryGroup, GroupedFile};
use chrono::{DateTime, Local, Utc};
use colored::*;
use std::fmt::Write;

/// Local date and time, e.g. `2024-05-01, 14:03:22`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d, %H:%M:%S")
        .to_string()
}

pub fn render_file_line(file: &GroupedFile) -> String {
    format!(
        "  {} {} ({})  {}  {}\n      {}",
        get_freshness_marker(file.freshness),
        file.record.file_name().white(),
        format_timestamp(&file.record.timestamp),
        get_freshness_label(file.freshness),
        get_colored_origin(file.record.origin),
        file.record.path.display().to_string().bright_black(),
    )
}

pub fn render_grouped_view(groups: &[DirectoryGroup], mode: Mode, direction: SortDirection) -> String {
    let file_count: usize = groups.iter().map(|g| g.files.len()).sum();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} ({}, {}): {} files in {} directories",
        "Recent files".white().bold(),
        mode,
        direction.label().to_lowercase(),
        file_count,
        groups.len()
    );

    if groups.is_empty() {
        let _ = writeln!(out, "\n{}", "No recent files found.".bright_black());
        return out;
    }

    for group in groups {
        let _ = writeln!(
            out,
            "\n{}",
            group.directory.display().to_string().cyan().bold()
        );
        for file in &group.files {
            let _ = writeln!(out, "{}", render_file_line(file));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ranking::RankedSet;
    use crate::core::record::{FileRecord, Origin};
    use crate::core::view::group_by_directory;
    use chrono::TimeZone;

    fn groups() -> Vec<DirectoryGroup> {
        let set = RankedSet::build(
            vec![vec![
                FileRecord::new("/ws/a.txt", Utc.timestamp_opt(10, 0).unwrap(), Origin::Vcs),
                FileRecord::new(
                    "/ws/sub/b.txt",
                    Utc.timestamp_opt(20, 0).unwrap(),
                    Origin::Uncommitted,
                ),
            ]],
            SortDirection::Descending,
        );
        group_by_directory(&set)
    }

    #[test]
    fn test_render_lists_directories_and_files() {
        let text = render_grouped_view(&groups(), Mode::Git, SortDirection::Descending);
        assert!(text.contains("2 files in 2 directories"));
        assert!(text.contains("/ws/sub"));
        assert!(text.contains("b.txt"));
        assert!(text.contains("Most Recent"));
        assert!(text.contains("[Uncommitted Changes]"));
        assert!(text.contains("[Git]"));
    }

    #[test]
    fn test_render_empty_view() {
        let text = render_grouped_view(&[], Mode::Os, SortDirection::Ascending);
        assert!(text.contains("No recent files found."));
        assert!(text.contains("ascending"));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(&Utc.timestamp_opt(1_700_000_000, 0).unwrap());
        assert_eq!(formatted.len(), "2023-11-14, 22:13:20".len());
        assert!(formatted.contains(", "));
    }
}
