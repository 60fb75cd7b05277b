//! Color theme for CLI output

use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color based on how many backends resolved to a known cluster
    pub fn get_resolution_color(&self, resolved: usize, total: usize) -> TableColor {
        if total == 0 {
            self.muted
        } else if resolved == total {
            self.success
        } else if resolved > 0 {
            self.warning
        } else {
            self.error
        }
    }

    /// Local kubeconfig fields are shown muted when absent
    pub fn get_optional_color(&self, value: Option<&str>) -> TableColor {
        match value {
            Some(_) => self.info,
            None => self.muted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.success, TableColor::Green);
        assert_eq!(theme.warning, TableColor::Yellow);
        assert_eq!(theme.error, TableColor::Red);
    }

    #[test]
    fn test_get_resolution_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_resolution_color(2, 2), TableColor::Green);
        assert_eq!(theme.get_resolution_color(1, 2), TableColor::Yellow);
        assert_eq!(theme.get_resolution_color(0, 2), TableColor::Red);
        assert_eq!(theme.get_resolution_color(0, 0), TableColor::DarkGrey);
    }

    #[test]
    fn test_get_optional_color() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_optional_color(Some("/k")), TableColor::Cyan);
        assert_eq!(theme.get_optional_color(None), TableColor::DarkGrey);
    }
}
