use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Completed tasks and their checkbox
    pub done: Color,
    pub red: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1F, 0x1E, 0x25),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x88, 0x84, 0xD3),
            dim: Color::Rgb(0x66, 0x66, 0x66),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            selection_bg: Color::Rgb(0x33, 0x31, 0x44),
            border: Color::Rgb(0xC4, 0xC4, 0xC4),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(slot = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "red" => theme.red = color,
                "selection_bg" => theme.selection_bg = color,
                "border" => theme.border = color,
                _ => tracing::warn!(slot = %key, "unknown color slot"),
            }
        }

        theme
    }

    /// Foreground for a task title
    pub fn task_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#1DB863"),
            Some(Color::Rgb(0x1D, 0xB8, 0x63))
        );
        assert_eq!(parse_hex_color("1DB863"), None); // missing #
        assert_eq!(parse_hex_color("#1DB8"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
        assert_eq!(parse_hex_color("#1\u{e9}234"), None); // 6 bytes, not 6 digits
        assert_eq!(parse_hex_color("#+1+2+3"), None);
    }

    #[test]
    fn non_ascii_color_keeps_default() {
        let mut ui = UiConfig::default();
        ui.colors.insert("done".into(), "#1\u{e9}234".into());
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.done, Theme::default().done);
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("done".into(), "#00FF00".into());
        ui.colors.insert("background".into(), "not-a-color".into());
        ui.colors.insert("nonsense".into(), "#123456".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.done, Color::Rgb(0, 0xFF, 0));
        // Unchanged defaults still present
        assert_eq!(theme.background, Theme::default().background);
        assert_eq!(theme.text, Color::Rgb(0xB2, 0xB2, 0xB2));
    }

    #[test]
    fn test_task_color() {
        let theme = Theme::default();
        assert_eq!(theme.task_color(true), theme.done);
        assert_eq!(theme.task_color(false), theme.text);
    }
}
