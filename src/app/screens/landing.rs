// app/screens/landing.rs

use eframe::egui::Context;

use crate::app::{App, screens::ScreenView, state::AppState, state::LandingState};

impl ScreenView for LandingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_landing_state(ctx, self)
    }
}
