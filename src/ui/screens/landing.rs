use eframe::egui::{
    Button, CentralPanel, Context, CornerRadius, RichText, ScrollArea, TopBottomPanel, Ui,
};

use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

/// What the landing screen asked the shell to do this frame.
pub(crate) enum LandingAction {
    LaunchConverter,
}

pub(crate) fn render_landing(ctx: &Context) -> Option<LandingAction> {
    let mut action = None;

    TopBottomPanel::bottom("landing_footer")
        .frame(UI_CONFIG.footer_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label_subdued(&UI_TEXT.footer);
            });
        });

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(640.0);

                ui.add_space(16.0);
                ui.label(
                    RichText::new(&UI_TEXT.app_name)
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent),
                );

                // Hero
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(&UI_TEXT.hero_title_top)
                        .size(44.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.heading(
                    RichText::new(&UI_TEXT.hero_title_bottom)
                        .size(36.0)
                        .strong()
                        .color(UI_CONFIG.colors.accent_alt),
                );
                ui.add_space(12.0);
                ui.label(RichText::new(&UI_TEXT.hero_body).color(UI_CONFIG.colors.label));

                ui.add_space(20.0);
                if cta_button(ui, &UI_TEXT.cta_start) {
                    action = Some(LandingAction::LaunchConverter);
                }

                // Features
                ui.add_space(40.0);
                ui.heading(
                    RichText::new(&UI_TEXT.features_heading)
                        .size(24.0)
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(12.0);
                for (icon, title, body) in UI_TEXT.feature_cards {
                    feature_card(ui, icon, title, body);
                    ui.add_space(8.0);
                }

                // Call to action
                ui.add_space(24.0);
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(
                            RichText::new(&UI_TEXT.ready_heading)
                                .size(20.0)
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.add_space(6.0);
                        ui.label(RichText::new(&UI_TEXT.ready_body).color(UI_CONFIG.colors.label));
                        ui.add_space(12.0);
                        if cta_button(ui, &UI_TEXT.cta_launch) {
                            action = Some(LandingAction::LaunchConverter);
                        }
                    });
                });
                ui.add_space(24.0);
            });
        });
    });

    action
}

fn cta_button(ui: &mut Ui, label: &str) -> bool {
    ui.add(
        Button::new(RichText::new(label).size(16.0).strong())
            .fill(UI_CONFIG.colors.accent)
            .corner_radius(CornerRadius::same(18)),
    )
    .clicked()
}

fn feature_card(ui: &mut Ui, icon: &str, title: &str, body: &str) {
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(24.0));
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(title)
                        .size(16.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label(RichText::new(body).color(UI_CONFIG.colors.label));
            });
        });
    });
}
