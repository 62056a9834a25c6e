mod details_panel;
mod map_panel;
mod title_bar;

pub use details_panel::{DetailsContent, UNKNOWN_COUNTRY, details_panel};
pub use map_panel::map_panel;
pub use title_bar::title_bar;
