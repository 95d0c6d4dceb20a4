mod converter;
mod landing;

pub(crate) use converter::{ConverterAction, render_converter};
pub(crate) use landing::{LandingAction, render_landing};
