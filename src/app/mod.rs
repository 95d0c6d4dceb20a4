mod root;
mod screens;
mod state;

pub(crate) use state::{AppState, ConverterState, LandingState};

pub use root::App;
