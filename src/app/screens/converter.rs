use eframe::egui::Context;

use crate::app::{
    App,
    screens::screen_view::ScreenView,
    state::{AppState, ConverterState},
};

impl ScreenView for ConverterState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_converter_state(ctx, self)
    }
}
