// Control Registry (HWND-like)
// Tracks rendered controls by name so they can be hit-tested and focused
//
// Usage:
//   let mut registry = ControlRegistry::new();
//   registry.register("tab-0", Role::Tab, rect);
//   registry.link("tab-0", "panel-0");
//   registry.focus("tab-0");
//   assert_eq!(registry.control_at(rect.x, rect.y), Some("tab-0"));

use ratatui::layout::Rect;
use std::collections::HashMap;
use tracing::trace;

use super::panel_view::Role;
use super::tab_selector::{FocusRequest, FocusTarget};

/// Handle to a registered control (similar to Windows HWND)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlHandle(u64);

#[derive(Debug, Clone)]
struct RegistryEntry {
    name: String,
    role: Role,
    rect: Rect,
    /// Related control: the region a tab controls, or the tab labelling a region
    link: Option<String>,
}

impl RegistryEntry {
    fn contains(&self, x: u16, y: u16) -> bool {
        let r = self.rect;
        x >= r.x && x < r.x.saturating_add(r.width) && y >= r.y && y < r.y.saturating_add(r.height)
    }

    fn area(&self) -> u32 {
        u32::from(self.rect.width) * u32::from(self.rect.height)
    }
}

/// Registry of addressable controls and the current focus owner
#[derive(Debug, Clone)]
pub struct ControlRegistry {
    /// Map of handle ID to registry entry
    handles: HashMap<u64, RegistryEntry>,
    /// Map of name to handle ID
    name_to_handle: HashMap<String, u64>,
    /// Next handle ID to assign
    next_id: u64,
    /// Name of the focused control. Kept by name so focus survives re-registration.
    focused: Option<String>,
}

impl ControlRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
            name_to_handle: HashMap::new(),
            next_id: 1, // 0 is never a valid handle
            focused: None,
        }
    }

    /// Register a control and return its handle.
    /// Registering an existing name updates its role and rect and keeps the handle.
    pub fn register(&mut self, name: &str, role: Role, rect: Rect) -> ControlHandle {
        if let Some(&existing) = self.name_to_handle.get(name) {
            if let Some(entry) = self.handles.get_mut(&existing) {
                entry.role = role;
                entry.rect = rect;
                return ControlHandle(existing);
            }
        }

        let handle_id = self.next_id;
        self.next_id += 1;
        self.handles.insert(
            handle_id,
            RegistryEntry {
                name: name.to_string(),
                role,
                rect,
                link: None,
            },
        );
        self.name_to_handle.insert(name.to_string(), handle_id);
        ControlHandle(handle_id)
    }

    /// Point a registered control at a related one. False if `name` is unknown.
    pub fn link(&mut self, name: &str, target: &str) -> bool {
        match self.entry_mut(name) {
            Some(entry) => {
                entry.link = Some(target.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get_handle(&self, name: &str) -> Option<ControlHandle> {
        self.name_to_handle.get(name).map(|&id| ControlHandle(id))
    }

    pub fn get_rect(&self, handle: ControlHandle) -> Option<Rect> {
        self.handles.get(&handle.0).map(|entry| entry.rect)
    }

    pub fn get_rect_by_name(&self, name: &str) -> Option<Rect> {
        self.get_handle(name).and_then(|handle| self.get_rect(handle))
    }

    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.entry(name).map(|entry| entry.role)
    }

    pub fn linked(&self, name: &str) -> Option<&str> {
        self.entry(name).and_then(|entry| entry.link.as_deref())
    }

    /// Name of the innermost control under (x, y), if any
    pub fn control_at(&self, x: u16, y: u16) -> Option<&str> {
        self.handles
            .values()
            .filter(|entry| entry.contains(x, y))
            .min_by_key(|entry| entry.area())
            .map(|entry| entry.name.as_str())
    }

    /// Remove a control by handle
    pub fn unregister(&mut self, handle: ControlHandle) -> bool {
        if let Some(entry) = self.handles.remove(&handle.0) {
            self.name_to_handle.remove(&entry.name);
            true
        } else {
            false
        }
    }

    /// Remove every control whose name starts with `prefix`
    pub fn unregister_prefixed(&mut self, prefix: &str) -> usize {
        let stale: Vec<u64> = self
            .handles
            .iter()
            .filter(|(_, entry)| entry.name.starts_with(prefix))
            .map(|(&id, _)| id)
            .collect();
        for id in &stale {
            self.unregister(ControlHandle(*id));
        }
        stale.len()
    }

    /// Move input focus to the named control
    pub fn focus(&mut self, name: &str) {
        trace!(control = name, "focus moved");
        self.focused = Some(name.to_string());
    }

    /// Drop input focus
    pub fn blur(&mut self) {
        if let Some(name) = self.focused.take() {
            trace!(control = %name, "focus released");
        }
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, name: &str) -> bool {
        self.focused.as_deref() == Some(name)
    }

    fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        self.name_to_handle.get(name).and_then(|id| self.handles.get(id))
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut RegistryEntry> {
        let id = *self.name_to_handle.get(name)?;
        self.handles.get_mut(&id)
    }
}

impl Default for ControlRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTarget for ControlRegistry {
    fn focus_control(&mut self, request: FocusRequest) {
        self.focus(&request.control_id());
    }

    fn release_focus(&mut self) {
        self.blur();
    }
}
