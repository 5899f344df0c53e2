use crate::component_hierarchy::domain::ComponentId;

/// Currently inspected component, shared by the installed tree and the
/// inventory list so one detail panel shows whichever was picked last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<ComponentId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, id: ComponentId) {
        self.selected = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Called on every vessel change.
    pub fn reset(&mut self) {
        self.clear();
    }

    pub fn selected(&self) -> Option<ComponentId> {
        self.selected
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.selected == Some(id)
    }
}
