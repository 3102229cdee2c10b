// GUI Elements module
// Visual components that render UI elements

pub mod heading;
pub mod paragraph;
pub mod tab_bar;
pub mod tab_panel;

pub use heading::*;
pub use paragraph::*;
pub use tab_bar::*;
pub use tab_panel::*;
