//! Builder projecting a component session into a `ComponentReport`

use super::component_report::{ComponentReport, TreeRow};
use crate::application::state::{ExpansionState, SelectionState};
use crate::application::use_cases::{ComponentSessionController, SessionStatus};
use crate::component_hierarchy::domain::TreeNode;
use crate::ports::outbound::{Clock, ComponentRepository, ProgressReporter};
use chrono::{DateTime, SecondsFormat, Utc};

/// Builder for constructing a ComponentReport from a session
pub struct ComponentReportBuilder;

impl ComponentReportBuilder {
    /// Snapshots the session's current filtered views
    pub fn from_session<R, C, P>(
        session: &ComponentSessionController<R, C, P>,
        generated_at: DateTime<Utc>,
    ) -> ComponentReport
    where
        R: ComponentRepository,
        C: Clock,
        P: ProgressReporter,
    {
        ComponentReport {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            vessel_id: session.current_vessel().map(str::to_string),
            status: Self::status_label(session.status()),
            error: match session.status() {
                SessionStatus::Failed { message } => Some(message.clone()),
                _ => None,
            },
            statistics: session.statistics(),
            criteria: session.criteria().clone(),
            rows: Self::visible_rows(session.forest(), session.expansion(), session.selection()),
            forest: session.forest().to_vec(),
            inventory: session.inventory().to_vec(),
            selected: session.selected_component().cloned(),
        }
    }

    /// Flattens a forest into display rows, descending only into expanded nodes
    pub fn visible_rows(
        forest: &[TreeNode],
        expansion: &ExpansionState,
        selection: &SelectionState,
    ) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        let mut pending: Vec<(&TreeNode, usize)> = forest.iter().rev().map(|root| (root, 0)).collect();

        while let Some((node, depth)) = pending.pop() {
            let expanded = expansion.is_expanded(node.id());
            rows.push(TreeRow {
                id: node.id(),
                name: node.component.name.clone(),
                depth,
                has_children: node.has_children(),
                expanded,
                selected: selection.is_selected(node.id()),
                critical: node.component.is_critical,
                condition: node.component.last_condition.clone(),
                running_hours: node.component.running_hours,
            });

            if expanded {
                pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
            }
        }
        rows
    }

    fn status_label(status: &SessionStatus) -> String {
        match status {
            SessionStatus::Idle => "idle".to_string(),
            SessionStatus::Loading => "loading".to_string(),
            SessionStatus::Ready => "ready".to_string(),
            SessionStatus::Failed { .. } => "failed".to_string(),
        }
    }
}
