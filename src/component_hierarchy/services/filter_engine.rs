use crate::component_hierarchy::domain::{
    Component, CriticalityFilter, FilterCriteria, TreeNode,
};

/// FilterEngine service applying search and criticality criteria to the
/// installed forest and to the inventory list.
///
/// The forest filter is ancestor-preserving: a node that does not match is
/// kept when any of its descendants does, so the path to every hit stays
/// navigable. Only matching branches survive below a retained node.
pub struct FilterEngine;

impl FilterEngine {
    /// Filters a forest, post-order.
    pub fn filter_forest(forest: &[TreeNode], criteria: &FilterCriteria) -> Vec<TreeNode> {
        if criteria.is_identity() {
            return forest.to_vec();
        }

        let matcher = ComponentMatcher::new(criteria);
        forest
            .iter()
            .filter_map(|node| Self::filter_node(node, &matcher))
            .collect()
    }

    /// Filters a flat list with the same per-item predicate; no ancestor logic.
    pub fn filter_list(items: &[Component], criteria: &FilterCriteria) -> Vec<Component> {
        if criteria.is_identity() {
            return items.to_vec();
        }

        let matcher = ComponentMatcher::new(criteria);
        items
            .iter()
            .filter(|item| matcher.matches(item))
            .cloned()
            .collect()
    }

    /// True when `component` satisfies `criteria` on its own.
    pub fn matches(component: &Component, criteria: &FilterCriteria) -> bool {
        ComponentMatcher::new(criteria).matches(component)
    }

    fn filter_node(node: &TreeNode, matcher: &ComponentMatcher) -> Option<TreeNode> {
        node.fold(|node, kept: Vec<Option<TreeNode>>| {
            let children: Vec<TreeNode> = kept.into_iter().flatten().collect();
            if matcher.matches(&node.component) || !children.is_empty() {
                Some(TreeNode::with_children(node.component.clone(), children))
            } else {
                None
            }
        })
    }
}

/// Criteria prepared once per filter pass (search text trimmed and lowercased).
struct ComponentMatcher {
    needle: String,
    criticality: CriticalityFilter,
}

impl ComponentMatcher {
    fn new(criteria: &FilterCriteria) -> Self {
        Self {
            needle: criteria.search_text.trim().to_lowercase(),
            criticality: criteria.criticality,
        }
    }

    fn matches(&self, component: &Component) -> bool {
        self.matches_search(component) && self.criticality.accepts(component.is_critical)
    }

    fn matches_search(&self, component: &Component) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            &component.name,
            &component.serial_number,
            &component.asset_code,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}
