//! Component report read model
//!
//! A denormalized snapshot of a session, ready for formatting.

use crate::component_hierarchy::domain::{
    Component, ComponentId, ComponentStatistics, FilterCriteria, TreeNode,
};
use serde::Serialize;

/// One visible line of the installed tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeRow {
    pub id: ComponentId,
    pub name: String,
    /// Nesting level, 0 for roots
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
    pub critical: bool,
    pub condition: String,
    pub running_hours: u64,
}

/// Snapshot of one vessel's component views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReport {
    /// RFC 3339 timestamp of when the snapshot was taken
    pub generated_at: String,
    pub vessel_id: Option<String>,
    pub status: String,
    /// Message of the last failed fetch, when the status is "failed"
    pub error: Option<String>,
    pub statistics: ComponentStatistics,
    pub criteria: FilterCriteria,
    /// Rows of the filtered forest, children listed only under expanded nodes
    pub rows: Vec<TreeRow>,
    /// Filtered forest with every retained node, regardless of expansion
    pub forest: Vec<TreeNode>,
    pub inventory: Vec<Component>,
    pub selected: Option<Component>,
}
