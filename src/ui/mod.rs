mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use screens::{ConverterAction, LandingAction, render_converter, render_landing};

pub(crate) use styles::UiStyleExt;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
