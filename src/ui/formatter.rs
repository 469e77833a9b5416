//! Pure formatting functions for UI output.
//!
//! Standard output is reserved for the result line, so every message here goes
//! to standard error, except workflow commands, which the GitHub runner reads
//! from standard output.

use std::env;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionTag;

/// Whether the process runs as a GitHub Actions step.
pub fn in_github_actions() -> bool {
    env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

/// Escape a message for use in a workflow command.
pub fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a workflow command such as `::error::message`.
pub fn format_workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_workflow_data(message))
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    if in_github_actions() {
        println!("{}", format_workflow_command("error", message));
    } else {
        eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
    }
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    if in_github_actions() {
        println!("{}", format_workflow_command("warning", &warning.to_string()));
    } else {
        eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
    }
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message);
}

/// Describe the tag a bump started from and where it ended.
pub fn format_selection(latest: &VersionTag, updated: &VersionTag) -> String {
    if latest.full_tag == updated.full_tag {
        format!("Latest tag {} is kept as is", latest.full_tag)
    } else {
        format!("{} -> {}", latest.full_tag, updated.full_tag)
    }
}

/// Display the selected and the computed tag.
pub fn display_selection(latest: &VersionTag, updated: &VersionTag) {
    display_success(&format_selection(latest, updated));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionNumber;

    #[test]
    fn test_escape_workflow_data() {
        assert_eq!(escape_workflow_data("50% done\nnext"), "50%25 done%0Anext");
        assert_eq!(escape_workflow_data("a\r\nb"), "a%0D%0Ab");
    }

    #[test]
    fn test_format_workflow_command() {
        assert_eq!(
            format_workflow_command("error", "Prerelease bumps must be used with a suffix"),
            "::error::Prerelease bumps must be used with a suffix"
        );
    }

    #[test]
    fn test_format_selection() {
        let latest = VersionTag::render("v", "", VersionNumber::new(2, 3, 4));
        let updated = VersionTag::render("v", "", VersionNumber::new(2, 4, 0));
        assert_eq!(format_selection(&latest, &updated), "v2.3.4 -> v2.4.0");
        assert_eq!(
            format_selection(&latest, &latest),
            "Latest tag v2.3.4 is kept as is"
        );
    }

    #[test]
    fn test_display_status() {
        // Visual verification test - output is printed to stderr
        display_status("test status");
    }
}
