use crate::component_hierarchy::domain::{
    Component, ComponentId, ComponentStatistics, CriticalityFilter, TreeNode,
};

/// ComponentSessionPort - Inbound port for the component views of one vessel
///
/// Read methods return the filtered views; write methods are UI events.
/// Fetching is split in two: `select_vessel` and `retry` hand back a pending
/// fetch which the caller runs and feeds back, so input can keep flowing
/// while the request is in flight.
pub trait ComponentSessionPort {
    /// Handle for a fetch that has been requested but not yet applied
    type Fetch;

    /// Installed forest after search and criticality filtering
    fn forest(&self) -> &[TreeNode];

    /// Unmounted components after search and criticality filtering
    fn inventory(&self) -> &[Component];

    /// Counts over the full, unfiltered component list
    fn statistics(&self) -> ComponentStatistics;

    fn set_search_text(&mut self, text: &str);

    fn set_criticality_filter(&mut self, filter: CriticalityFilter);

    fn toggle(&mut self, id: ComponentId);

    fn expand_all(&mut self);

    fn collapse_all(&mut self);

    fn select(&mut self, id: ComponentId);

    /// Switches to another vessel, resetting all per-vessel view state
    ///
    /// Returns `None` when `vessel_id` is already the current vessel.
    fn select_vessel(&mut self, vessel_id: &str) -> Option<Self::Fetch>;

    /// Re-requests the current vessel's components, keeping the view state
    ///
    /// Returns `None` when no vessel has been selected yet.
    fn retry(&mut self) -> Option<Self::Fetch>;
}
