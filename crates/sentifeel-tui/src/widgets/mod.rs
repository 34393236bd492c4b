//! Custom widget components

mod confidence_bar;
mod details_card;
mod footer;
mod header;
mod input_panel;
mod preset_bar;
mod result_card;

pub use confidence_bar::ConfidenceBar;
pub use details_card::DetailsCard;
pub use footer::Footer;
pub use header::MainHeader;
pub use input_panel::{wrap_text, InputPanel, WrappedText};
pub use preset_bar::PresetBar;
pub use result_card::ResultCard;
