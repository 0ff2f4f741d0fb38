//! Color system for the recent-files view.
//!
//! # Public API
//! - [`get_origin_color_style`]: Color function for a record's origin
//! - [`get_colored_origin`]: Bracketed origin label in its color
//! - [`get_freshness_marker`]: Star or circle marker for a grouped file
//! - [`get_freshness_label`]: "Most Recent" / "Older" description
//!
//! # Color Scheme
//! - **OS**: Blue
//! - **Git**: Green
//! - **Uncommitted Changes**: Yellow, the same as modified files in `git status`
//! - **Most Recent**: Bright yellow bold star
//! - **Older**: Muted circle

use crate::core::record::Origin;
use crate::core::view::Freshness;
use colored::*;

pub const MOST_RECENT_ICON: &str = "★";
pub const OLDER_ICON: &str = "○";

/// Returns a closure that applies the origin's color to any text
pub fn get_origin_color_style(origin: Origin) -> Box<dyn Fn(&str) -> ColoredString> {
    match origin {
        Origin::Os => Box::new(|text: &str| text.blue()),
        Origin::Vcs => Box::new(|text: &str| text.green()),
        Origin::Uncommitted => Box::new(|text: &str| text.yellow()),
    }
}

pub fn get_colored_origin(origin: Origin) -> ColoredString {
    let color_fn = get_origin_color_style(origin);
    color_fn(&format!("[{}]", origin.label()))
}

pub fn get_freshness_marker(freshness: Freshness) -> ColoredString {
    match freshness {
        Freshness::MostRecent => MOST_RECENT_ICON.bright_yellow().bold(),
        Freshness::Older => OLDER_ICON.bright_black(),
    }
}

pub fn get_freshness_label(freshness: Freshness) -> ColoredString {
    match freshness {
        Freshness::MostRecent => freshness.label().white().bold(),
        Freshness::Older => freshness.label().bright_black(),
    }
}
