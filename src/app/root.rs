use {
    eframe::{
        Frame,
        egui::{Context, Visuals},
    },
    std::mem,
};

use crate::{
    Cli,
    app::{
        screens::ScreenView,
        state::{AppState, ConverterState, LandingState},
    },
    config::{DF, constants::PENDING_REPAINT_INTERVAL},
    domain::validate_amount,
    engine::QuoteEngine,
    ui::{ConverterAction, LandingAction, UI_CONFIG, render_converter, render_landing},
};

pub struct App {
    state: AppState,
    pub(crate) engine: QuoteEngine,
}

impl App {
    pub(crate) fn new(_cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let state = if args.skip_landing {
            AppState::Converter(ConverterState::default())
        } else {
            AppState::default()
        };

        Self {
            state,
            engine: QuoteEngine::new(),
        }
    }

    pub(crate) fn tick_landing_state(
        &mut self,
        ctx: &Context,
        state: &mut LandingState,
    ) -> AppState {
        match render_landing(ctx) {
            Some(LandingAction::LaunchConverter) => {
                if DF.log_navigation {
                    log::info!("Navigating to converter screen");
                }
                AppState::Converter(ConverterState::default())
            }
            None => AppState::Landing(state.clone()),
        }
    }

    /// CONVERTER SCREEN MAIN LOOP
    pub(crate) fn tick_converter_state(
        &mut self,
        ctx: &Context,
        state: &mut ConverterState,
    ) -> AppState {
        // Drain finished quotes first. The newest drained quote wins, even
        // when it was superseded while in flight.
        if let Some(quote) = self.engine.poll() {
            state.quote = Some(quote);
        }

        if state.debounce_elapsed() {
            self.submit_recompute(state);
        }

        match render_converter(ctx, state, self.engine.is_busy()) {
            Some(ConverterAction::BackToHome) => {
                if DF.log_navigation {
                    log::info!("Navigating back to landing screen");
                }
                return AppState::Landing(LandingState);
            }
            Some(ConverterAction::Edited) => state.mark_dirty(),
            Some(ConverterAction::Swap) => state.swap(),
            Some(ConverterAction::QuickPair(from, to)) => state.set_pair(from, to),
            // The Convert button bypasses the debounce window.
            Some(ConverterAction::ConvertNow) => self.submit_recompute(state),
            None => {}
        }

        // Idle frames don't repaint on their own; keep ticking while a
        // debounce window or a resolution is pending.
        if state.dirty_since.is_some() || self.engine.is_busy() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }

        AppState::Converter(state.clone())
    }

    /// Validate the amount, then hand the request to the engine. An invalid
    /// amount short-circuits: no rate lookup is scheduled.
    fn submit_recompute(&mut self, state: &mut ConverterState) {
        state.dirty_since = None;
        match validate_amount(&state.amount_text) {
            Ok(amount) => {
                state.validation = None;
                let seq = self.engine.submit(state.from, state.to, amount);
                if DF.log_debounce {
                    log::info!("Debounce elapsed, submitted quote request #{seq}");
                }
            }
            Err(err) => {
                state.quote = None;
                state.validation = Some(err);
                if DF.log_debounce {
                    log::info!("Recompute rejected: {err}");
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Landing(mut s) => s.tick(self, ctx),
            AppState::Converter(mut s) => s.tick(self, ctx),
        };
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
