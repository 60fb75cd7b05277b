//! Status icons for CLI output

/// Status icons for backend resolution
pub struct StatusIcon;

impl StatusIcon {
    /// Every backend cluster is known
    pub const SUCCESS: &'static str = "✓";

    /// Some backend clusters are unknown
    pub const WARNING: &'static str = "⚠";

    /// No backend cluster is known
    pub const ERROR: &'static str = "✗";

    /// Service has no backends
    pub const UNKNOWN: &'static str = "?";

    pub fn get_resolution_icon(resolved: usize, total: usize) -> &'static str {
        if total == 0 {
            Self::UNKNOWN
        } else if resolved == total {
            Self::SUCCESS
        } else if resolved > 0 {
            Self::WARNING
        } else {
            Self::ERROR
        }
    }

    pub fn get_status_text(resolved: usize, total: usize) -> &'static str {
        if total == 0 {
            "No backends"
        } else if resolved == total {
            "Resolved"
        } else if resolved > 0 {
            "Partial"
        } else {
            "Unresolved"
        }
    }
}
