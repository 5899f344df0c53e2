use crate::component_hierarchy::domain::{ComponentId, TreeNode};
use std::collections::HashSet;

/// Set of tree nodes whose children are currently shown.
///
/// `expand_all` is computed from the unfiltered forest, so the current
/// search never narrows what "expand all" opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: HashSet<ComponentId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the expansion of a single node.
    pub fn toggle(&mut self, id: ComponentId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Replaces the set with every node of `forest` that has children.
    pub fn expand_all(&mut self, forest: &[TreeNode]) {
        self.expanded.clear();
        for root in forest {
            root.visit(&mut |node| {
                if node.has_children() {
                    self.expanded.insert(node.id());
                }
            });
        }
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Called on every vessel change.
    pub fn reset(&mut self) {
        self.expanded.clear();
    }

    pub fn is_expanded(&self, id: ComponentId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded ids in ascending order.
    pub fn expanded_ids(&self) -> Vec<ComponentId> {
        let mut ids: Vec<ComponentId> = self.expanded.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
