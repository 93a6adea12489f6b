use ratatui::style::Color;

use crate::kernel::Severity;

/// Fixed palette for the staging UI.
#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub heading_fg: Color,
    pub pre_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub success_bg: Color,
    pub error_bg: Color,
    pub warning_bg: Color,
    pub info_bg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Cyan,
            inactive_border: Color::DarkGray,
            accent_fg: Color::Yellow,
            muted_fg: Color::DarkGray,
            heading_fg: Color::Cyan,
            pre_fg: Color::Gray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            dialog_bg: Color::Black,
            dialog_fg: Color::White,
            success_bg: Color::Green,
            error_bg: Color::Red,
            warning_bg: Color::Yellow,
            info_bg: Color::Blue,
        }
    }
}

impl UiTheme {
    pub fn notice_bg(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success_bg,
            Severity::Error => self.error_bg,
            Severity::Warning => self.warning_bg,
            Severity::Info => self.info_bg,
        }
    }

    /// Yellow backgrounds need a dark foreground to stay readable.
    pub fn notice_fg(&self, severity: Severity) -> Color {
        match severity {
            Severity::Warning => Color::Black,
            _ => Color::White,
        }
    }
}
