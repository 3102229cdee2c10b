// Shared TUI components library
// Accessible tab panel, headings and text blocks for ratatui applications

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: tab_panel exists in both elements and managers but refers to different
// types (TabPanel widget vs TabPanelManager), so the glob ambiguity is expected
#[allow(ambiguous_glob_reexports)]
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
