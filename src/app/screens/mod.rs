pub(super) mod converter;
pub(super) mod landing;
pub(super) mod screen_view;

pub(crate) use screen_view::ScreenView;
