use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Theme configuration for the application
///
/// Colors are stored as strings so users can set names ("Cyan") or
/// indexed values ("214") in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Primary accent color (borders, header)
    pub primary: String,
    /// Success/connected state color
    pub success: String,
    /// Selected item color
    pub warning: String,
    /// Error state color
    pub error: String,
    /// Secondary/muted text color
    pub text_muted: String,
    /// Border color for focused elements
    pub border_focused: String,
    /// Border color for normal elements
    pub border_normal: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "Magenta".to_string(),
            success: "Green".to_string(),
            warning: "Yellow".to_string(),
            error: "Red".to_string(),
            text_muted: "Gray".to_string(),
            border_focused: "Magenta".to_string(),
            border_normal: "DarkGray".to_string(),
        }
    }
}

impl Theme {
    /// Parse a color string to ratatui Color
    pub fn parse_color(color_str: &str) -> Color {
        match color_str.trim() {
            "Black" => Color::Black,
            "Red" => Color::Red,
            "Green" => Color::Green,
            "Yellow" => Color::Yellow,
            "Blue" => Color::Blue,
            "Magenta" => Color::Magenta,
            "Cyan" => Color::Cyan,
            "Gray" | "Grey" => Color::Gray,
            "DarkGray" | "DarkGrey" => Color::DarkGray,
            "White" => Color::White,
            s => {
                if let Ok(index) = s.parse::<u8>() {
                    Color::Indexed(index)
                } else {
                    Color::Reset
                }
            }
        }
    }

    // Color accessors
    pub fn primary(&self) -> Color {
        Self::parse_color(&self.primary)
    }

    pub fn success(&self) -> Color {
        Self::parse_color(&self.success)
    }

    pub fn warning(&self) -> Color {
        Self::parse_color(&self.warning)
    }

    pub fn error(&self) -> Color {
        Self::parse_color(&self.error)
    }

    pub fn text_muted(&self) -> Color {
        Self::parse_color(&self.text_muted)
    }

    pub fn border_focused(&self) -> Color {
        Self::parse_color(&self.border_focused)
    }

    pub fn border_normal(&self) -> Color {
        Self::parse_color(&self.border_normal)
    }

    // Style helpers
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.warning())
            .add_modifier(Modifier::BOLD)
    }

    pub fn record_style(&self, is_selected: bool) -> Style {
        if is_selected {
            self.highlight_style()
        } else {
            Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Theme::parse_color("Magenta"), Color::Magenta);
        assert_eq!(Theme::parse_color(" Green "), Color::Green);
        assert_eq!(Theme::parse_color("Grey"), Color::Gray);
    }

    #[test]
    fn test_parse_indexed_and_unknown() {
        assert_eq!(Theme::parse_color("214"), Color::Indexed(214));
        assert_eq!(Theme::parse_color("not-a-color"), Color::Reset);
    }
}
