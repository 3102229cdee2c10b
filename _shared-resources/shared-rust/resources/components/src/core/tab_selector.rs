// Tab Selector
// Selection state machine for a fixed, ordered list of tabs
//
// Usage:
//   let mut selector = TabSelector::new(tabs, 0);
//   if let Some(request) = selector.advance(Direction::Next) {
//       registry.focus_control(request);
//   }

use serde::Deserialize;
use tracing::debug;

use super::panel_view::{ContentRegion, PanelView, TabControl};
use crate::elements::heading::HeadingLevel;

/// Notice shown in place of the tab strip when there is nothing to select
pub const EMPTY_NOTICE: &str = "No tabs to display";

/// Prefix shared by every tab control id (`tab-0`, `tab-1`, ...)
pub const TAB_CONTROL_PREFIX: &str = "tab-";

/// Prefix shared by every content region id (`panel-0`, `panel-1`, ...)
pub const TAB_PANEL_PREFIX: &str = "panel-";

/// Control id for the tab at `index`
pub fn tab_control_id(index: usize) -> String {
    format!("{TAB_CONTROL_PREFIX}{index}")
}

/// Tab index encoded in a control id, `None` for non-tab controls
pub fn tab_index_from_control_id(id: &str) -> Option<usize> {
    id.strip_prefix(TAB_CONTROL_PREFIX)?.parse().ok()
}

/// Content region id for the tab at `index`
pub fn tab_panel_id(index: usize) -> String {
    format!("{TAB_PANEL_PREFIX}{index}")
}

/// One labeled entry in the panel. Identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Tab {
    /// Text on the tab control
    pub label: String,
    /// Heading shown at the top of the content region
    pub heading: String,
    /// Body text shown under the heading
    pub body: String,
}

impl Tab {
    pub fn new(label: impl Into<String>, heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            heading: heading.into(),
            body: body.into(),
        }
    }
}

/// Directional navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move right, wrapping from last to first
    Next,
    /// Move left, wrapping from first to last
    Previous,
    /// Jump to the first tab
    First,
    /// Jump to the last tab
    Last,
}

/// Discrete command delivered by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Direct selection (click or number key)
    Select(usize),
    /// Directional navigation
    Advance(Direction),
}

/// Instruction to move input focus to the control of the tab at `index`.
/// Emitted once per selection change; never inferred from render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub index: usize,
}

impl FocusRequest {
    /// Id of the control that should receive focus
    pub fn control_id(&self) -> String {
        tab_control_id(self.index)
    }
}

/// Anything that can move input focus to a tab control
pub trait FocusTarget {
    fn focus_control(&mut self, request: FocusRequest);

    /// Drop focus when no tab control is left to hold it
    fn release_focus(&mut self);
}

/// Selector state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No tabs; terminal while the list stays empty
    Empty,
    /// A tab is active; `0 <= index < len`
    Active(usize),
}

/// Owns the active index of a tab list
#[derive(Debug, Clone)]
pub struct TabSelector {
    tabs: Vec<Tab>,
    state: SelectorState,
}

impl TabSelector {
    /// Create a selector. An out-of-range `initial_index` (negative or past the
    /// end) falls back to the first tab.
    pub fn new(tabs: Vec<Tab>, initial_index: i64) -> Self {
        let state = Self::initial_state(tabs.len(), initial_index);
        debug!(tab_count = tabs.len(), initial_index, ?state, "tab selector created");
        Self { tabs, state }
    }

    /// Create a selector with the first tab active
    pub fn with_default_index(tabs: Vec<Tab>) -> Self {
        Self::new(tabs, 0)
    }

    fn initial_state(len: usize, initial_index: i64) -> SelectorState {
        if len == 0 {
            return SelectorState::Empty;
        }
        match usize::try_from(initial_index) {
            Ok(index) if index < len => SelectorState::Active(index),
            _ => SelectorState::Active(0),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Index of the active tab, `None` when empty
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            SelectorState::Empty => None,
            SelectorState::Active(index) => Some(index),
        }
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_index().and_then(|index| self.tabs.get(index))
    }

    /// Select a tab directly. Re-selecting the active tab still returns a focus
    /// request. Indices outside the list are ignored.
    pub fn select(&mut self, index: usize) -> Option<FocusRequest> {
        if self.state == SelectorState::Empty || index >= self.tabs.len() {
            debug!(index, tab_count = self.tabs.len(), "ignoring out-of-range tab selection");
            return None;
        }
        Some(self.set_active(index))
    }

    /// Navigate relative to the active tab. No-op for lists of one tab or fewer.
    pub fn advance(&mut self, direction: Direction) -> Option<FocusRequest> {
        let len = self.tabs.len();
        let current = match self.state {
            SelectorState::Active(index) if len > 1 => index,
            _ => return None,
        };

        let next = match direction {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
            Direction::First => 0,
            Direction::Last => len - 1,
        };
        Some(self.set_active(next))
    }

    /// Apply an input command
    pub fn apply(&mut self, command: NavCommand) -> Option<FocusRequest> {
        match command {
            NavCommand::Select(index) => self.select(index),
            NavCommand::Advance(direction) => self.advance(direction),
        }
    }

    /// Swap the tab list. The active index is kept when it still fits, otherwise
    /// the first tab becomes active. Does not request focus.
    pub fn replace_tabs(&mut self, tabs: Vec<Tab>) {
        let keep = self.active_index().map(|i| i as i64).unwrap_or(0);
        self.state = Self::initial_state(tabs.len(), keep);
        self.tabs = tabs;
        debug!(tab_count = self.tabs.len(), state = ?self.state, "tab list replaced");
    }

    fn set_active(&mut self, index: usize) -> FocusRequest {
        debug!(from = ?self.active_index(), to = index, "active tab changed");
        self.state = SelectorState::Active(index);
        FocusRequest { index }
    }

    /// Describe what the renderer should draw for the current state
    pub fn view(&self) -> PanelView<'_> {
        let active = match self.state {
            SelectorState::Empty => return PanelView::Empty { notice: EMPTY_NOTICE },
            SelectorState::Active(index) => index,
        };

        let controls = self
            .tabs
            .iter()
            .enumerate()
            .map(|(index, tab)| TabControl {
                index,
                id: tab_control_id(index),
                controls: tab_panel_id(index),
                label: &tab.label,
                selected: index == active,
                tab_stop: index == active,
            })
            .collect();

        let tab = &self.tabs[active];
        let content = ContentRegion {
            index: active,
            id: tab_panel_id(active),
            labelled_by: tab_control_id(active),
            heading: &tab.heading,
            heading_level: HeadingLevel::H2,
            body: &tab.body,
        };

        PanelView::Tabs { controls, content }
    }
}
