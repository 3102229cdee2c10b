// Panel View
// Render model handed from the tab selector to the renderer

use crate::elements::heading::HeadingLevel;

/// Accessibility role of a rendered region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Notice announced instead of the tab strip
    Alert,
    /// Container of the tab controls
    TabList,
    /// A single tab control
    Tab,
    /// Content region owned by a tab
    TabPanel,
}

/// Id of the region holding the tab controls
pub const TAB_LIST_ID: &str = "tablist";

/// Id of the notice region shown when there are no tabs
pub const ALERT_ID: &str = "alert";

impl Role {
    /// Name announced for the role; also used as the notice box title
    pub fn label(self) -> &'static str {
        match self {
            Role::Alert => "Alert",
            Role::TabList => "Tab list",
            Role::Tab => "Tab",
            Role::TabPanel => "Tab panel",
        }
    }
}

/// One tab control in the strip; registered with `Role::Tab`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabControl<'a> {
    pub index: usize,
    /// Addressable id (`tab-{index}`)
    pub id: String,
    /// Id of the content region this control owns (`panel-{index}`)
    pub controls: String,
    pub label: &'a str,
    /// Exposed as the "selected" signal
    pub selected: bool,
    /// Sole sequential-focus stop among the controls
    pub tab_stop: bool,
}

/// The single visible content region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRegion<'a> {
    pub index: usize,
    /// Region id (`panel-{index}`)
    pub id: String,
    /// Id of the control that labels this region
    pub labelled_by: String,
    pub heading: &'a str,
    pub heading_level: HeadingLevel,
    pub body: &'a str,
}

impl ContentRegion<'_> {
    pub fn role(&self) -> Role {
        Role::TabPanel
    }
}

/// What the renderer draws for the current selector state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    /// No tabs: notice only, no strip, no content region
    Empty { notice: &'static str },
    /// Tab strip plus exactly one content region
    Tabs {
        controls: Vec<TabControl<'a>>,
        content: ContentRegion<'a>,
    },
}

impl<'a> PanelView<'a> {
    /// Role of the outermost region
    pub fn role(&self) -> Role {
        match self {
            PanelView::Empty { .. } => Role::Alert,
            PanelView::Tabs { .. } => Role::TabList,
        }
    }

    /// Id of the outermost region
    pub fn region_id(&self) -> &'static str {
        match self {
            PanelView::Empty { .. } => ALERT_ID,
            PanelView::Tabs { .. } => TAB_LIST_ID,
        }
    }

    pub fn controls(&self) -> &[TabControl<'a>] {
        match self {
            PanelView::Empty { .. } => &[],
            PanelView::Tabs { controls, .. } => controls,
        }
    }

    pub fn content(&self) -> Option<&ContentRegion<'a>> {
        match self {
            PanelView::Empty { .. } => None,
            PanelView::Tabs { content, .. } => Some(content),
        }
    }

    pub fn selected_control(&self) -> Option<&TabControl<'a>> {
        self.controls().iter().find(|control| control.selected)
    }

    pub fn tab_stops(&self) -> impl Iterator<Item = &TabControl<'a>> {
        self.controls().iter().filter(|control| control.tab_stop)
    }

    /// Whether `needle` appears anywhere in the view's text
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            PanelView::Empty { notice } => notice.contains(needle),
            PanelView::Tabs { controls, content } => {
                controls.iter().any(|control| control.label.contains(needle))
                    || content.heading.contains(needle)
                    || content.body.contains(needle)
            }
        }
    }
}
