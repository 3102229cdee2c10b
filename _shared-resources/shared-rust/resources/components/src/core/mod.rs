// Core infrastructure module
// Selection state, render model and control registry that the elements build on

pub mod control_registry;
pub mod panel_view;
pub mod tab_selector;

pub use control_registry::{ControlHandle, ControlRegistry};
pub use panel_view::{ContentRegion, PanelView, Role, TabControl, ALERT_ID, TAB_LIST_ID};
pub use tab_selector::{
    tab_control_id, tab_index_from_control_id, tab_panel_id,
    Direction, FocusRequest, FocusTarget, NavCommand, SelectorState, Tab, TabSelector,
    EMPTY_NOTICE, TAB_CONTROL_PREFIX, TAB_PANEL_PREFIX,
};
