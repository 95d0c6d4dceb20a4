use eframe::egui::{
    Align, Button, CentralPanel, ComboBox, Context, CornerRadius, Layout, RichText, ScrollArea,
    TextEdit, TopBottomPanel, Ui,
};
use strum::IntoEnumIterator;

use crate::{
    app::ConverterState,
    config::constants::quick_access,
    domain::Currency,
    ui::{UI_CONFIG, UI_TEXT, UiStyleExt, ui_text::ICON_SWAP},
    utils::format_clock_time,
};

/// What the converter screen asked the shell to do this frame.
pub(crate) enum ConverterAction {
    BackToHome,
    /// Amount or currency changed; restarts the debounce window.
    Edited,
    Swap,
    /// Explicit Convert click, bypasses the debounce window.
    ConvertNow,
    QuickPair(Currency, Currency),
}

pub(crate) fn render_converter(
    ctx: &Context,
    state: &mut ConverterState,
    busy: bool,
) -> Option<ConverterAction> {
    let mut action = None;

    TopBottomPanel::top("converter_header")
        .frame(UI_CONFIG.header_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(&UI_TEXT.cv_back).clicked() {
                    action = Some(ConverterAction::BackToHome);
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.cv_title)
                            .size(18.0)
                            .strong()
                            .color(UI_CONFIG.colors.accent),
                    );
                });
            });
        });

    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(420.0);
                ui.add_space(24.0);

                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    render_form(ui, state, busy, &mut action);
                });

                ui.add_space(16.0);
                render_quick_access(ui, &mut action);
                ui.add_space(24.0);
            });
        });
    });

    action
}

fn render_form(
    ui: &mut Ui,
    state: &mut ConverterState,
    busy: bool,
    action: &mut Option<ConverterAction>,
) {
    ui.vertical_centered(|ui| {
        ui.heading(
            RichText::new(&UI_TEXT.cv_heading)
                .size(24.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(&UI_TEXT.cv_sub);
    });
    ui.add_space(12.0);

    // Amount
    ui.label_field(&UI_TEXT.label_amount);
    let response = ui.add(
        TextEdit::singleline(&mut state.amount_text)
            .hint_text(&UI_TEXT.amount_hint)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        *action = Some(ConverterAction::Edited);
    }
    ui.add_space(10.0);

    // From
    ui.label_field(&UI_TEXT.label_from);
    if currency_select(ui, "from_currency", &mut state.from) {
        *action = Some(ConverterAction::Edited);
    }

    // Swap
    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        if ui
            .add(Button::new(RichText::new(ICON_SWAP).size(16.0)).corner_radius(CornerRadius::same(14)))
            .on_hover_text("Swap currencies")
            .clicked()
        {
            *action = Some(ConverterAction::Swap);
        }
    });
    ui.add_space(6.0);

    // To
    ui.label_field(&UI_TEXT.label_to);
    if currency_select(ui, "to_currency", &mut state.to) {
        *action = Some(ConverterAction::Edited);
    }

    // Convert
    ui.add_space(14.0);
    let label = if busy {
        UI_TEXT.btn_converting.as_str()
    } else {
        UI_TEXT.btn_convert.as_str()
    };
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            let button = Button::new(RichText::new(label).size(15.0).strong())
                .fill(UI_CONFIG.colors.accent)
                .corner_radius(CornerRadius::same(8));
            let enabled = !busy && !state.amount_text.is_empty();
            if ui.add_enabled(enabled, button).clicked() {
                *action = Some(ConverterAction::ConvertNow);
            }
            if busy {
                ui.spinner();
            }
        });
    });

    if let Some(_err) = state.validation {
        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&UI_TEXT.invalid_amount).color(UI_CONFIG.colors.warning));
        });
    }

    if let Some(quote) = &state.quote {
        ui.add_space(14.0);
        ui.vertical_centered(|ui| {
            ui.label_subdued(&UI_TEXT.result_caption);
            ui.label(
                RichText::new(format!("{} {}", quote.converted, quote.to))
                    .size(30.0)
                    .strong()
                    .color(UI_CONFIG.colors.result),
            );
            ui.label_subdued(quote.unit_rate_line());
            ui.label_subdued(format!(
                "{} {}",
                UI_TEXT.last_updated_prefix,
                format_clock_time(&quote.resolved_at)
            ));
        });
    }
}

fn currency_select(ui: &mut Ui, id: &str, selected: &mut Currency) -> bool {
    let mut changed = false;
    ComboBox::from_id_salt(id)
        .width(ui.available_width())
        .selected_text(currency_label(*selected))
        .show_ui(ui, |ui| {
            for currency in Currency::iter() {
                if ui
                    .selectable_value(selected, currency, currency_label(currency))
                    .changed()
                {
                    changed = true;
                }
            }
        });
    changed
}

fn currency_label(currency: Currency) -> String {
    format!("{} - {}", currency.code(), currency.name())
}

fn render_quick_access(ui: &mut Ui, action: &mut Option<ConverterAction>) {
    ui.horizontal_wrapped(|ui| {
        for (from, to) in quick_access::PAIRS {
            let label = format!("{from} → {to}");
            if ui.button(label).clicked() {
                *action = Some(ConverterAction::QuickPair(from, to));
            }
        }
    });
}
