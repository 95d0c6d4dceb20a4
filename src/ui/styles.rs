use eframe::egui::{RichText, Ui};

use crate::ui::ui_config::UI_CONFIG;

/// Small extensions so screens don't repeat RichText color plumbing.
pub(crate) trait UiStyleExt {
    /// Dim caption text (timestamps, footers).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Form field label above an input.
    fn label_field(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .size(12.0)
                .color(UI_CONFIG.colors.subdued),
        );
    }

    fn label_field(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text.into())
                .size(13.0)
                .strong()
                .color(UI_CONFIG.colors.label),
        );
    }
}
