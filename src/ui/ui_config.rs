use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub subdued: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub accent_alt: Color32,
    pub result: Color32,
    pub warning: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(190, 195, 205),
        subdued: Color32::from_rgb(130, 135, 150),
        heading: Color32::from_rgb(245, 245, 255),
        accent: Color32::from_rgb(96, 165, 250),   // blue
        accent_alt: Color32::from_rgb(192, 132, 252), // purple
        result: Color32::from_rgb(74, 222, 128),
        warning: Color32::from_rgb(251, 191, 36),
        central_panel: Color32::from_rgb(17, 14, 35),
        card: Color32::from_rgb(36, 32, 58),
        card_border: Color32::from_rgb(70, 64, 100),
    },
};

impl UiConfig {
    /// Frame for the converter card and the landing feature cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            corner_radius: CornerRadius::same(12),
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for the converter header bar
    pub fn header_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    /// Frame for the landing footer (tighter vertical padding)
    pub fn footer_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 6),
            ..Default::default()
        }
    }
}
