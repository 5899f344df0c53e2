use crate::application::state::{ExpansionState, SelectionState};
use crate::component_hierarchy::domain::{
    Component, ComponentId, ComponentStatistics, CriticalityFilter, FilterCriteria, TreeNode,
};
use crate::component_hierarchy::services::{
    FilterEngine, RunningHoursCalculator, StatisticsAggregator, TreeBuilder,
};
use crate::ports::inbound::ComponentSessionPort;
use crate::ports::outbound::{Clock, ComponentRepository, ProgressReporter};
use crate::shared::error::FleetError;
use crate::shared::Result;
use std::sync::Arc;


/// Lifecycle of a component session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No vessel selected yet
    Idle,
    /// A fetch for the current vessel is in flight
    Loading,
    /// The latest fetch succeeded and the derived views are current
    Ready,
    /// The latest fetch failed; `retry` re-issues it
    Failed { message: String },
}

/// Identifies one fetch request: the vessel and the generation it was issued in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    vessel_id: String,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn vessel_id(&self) -> &str {
        &self.vessel_id
    }
}

/// A fetch that has been requested but not run yet.
///
/// Holds its own handle on the repository, so running it does not borrow
/// the controller.
pub struct PendingFetch<R> {
    ticket: FetchTicket,
    repository: Arc<R>,
}

impl<R: ComponentRepository> PendingFetch<R> {
    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }

    /// Performs the repository call.
    pub async fn run(self) -> FetchOutcome {
        let result = self
            .repository
            .fetch_by_vessel(&self.ticket.vessel_id)
            .await;
        FetchOutcome::new(self.ticket, result)
    }
}

/// Result of a fetch, tagged with the ticket it answers.
pub struct FetchOutcome {
    ticket: FetchTicket,
    result: Result<Vec<Component>>,
}

impl FetchOutcome {
    pub fn new(ticket: FetchTicket, result: Result<Vec<Component>>) -> Self {
        Self { ticket, result }
    }

    pub fn ticket(&self) -> &FetchTicket {
        &self.ticket
    }
}

/// ComponentSessionController - orchestrates the component views of one
/// selected vessel
///
/// Owns the flat record list of the current vessel and everything derived
/// from it (running hours, statistics, forest, filtered views) together with
/// the per-vessel view state. Every vessel change is a full invalidation
/// boundary, and only the response to the most recent request is applied.
///
/// # Type Parameters
/// * `R` - ComponentRepository implementation
/// * `C` - Clock implementation
/// * `P` - ProgressReporter implementation
pub struct ComponentSessionController<R, C, P> {
    repository: Arc<R>,
    clock: C,
    progress_reporter: P,
    vessel_id: Option<String>,
    generation: u64,
    status: SessionStatus,
    records: Vec<Component>,
    statistics: ComponentStatistics,
    unfiltered_forest: Vec<TreeNode>,
    unfiltered_inventory: Vec<Component>,
    criteria: FilterCriteria,
    filtered_forest: Vec<TreeNode>,
    filtered_inventory: Vec<Component>,
    expansion: ExpansionState,
    selection: SelectionState,
}

impl<R, C, P> ComponentSessionController<R, C, P>
where
    R: ComponentRepository,
    C: Clock,
    P: ProgressReporter,
{
    /// Creates an idle session with injected dependencies
    pub fn new(repository: R, clock: C, progress_reporter: P) -> Self {
        Self {
            repository: Arc::new(repository),
            clock,
            progress_reporter,
            vessel_id: None,
            generation: 0,
            status: SessionStatus::Idle,
            records: Vec::new(),
            statistics: ComponentStatistics::default(),
            unfiltered_forest: Vec::new(),
            unfiltered_inventory: Vec::new(),
            criteria: FilterCriteria::default(),
            filtered_forest: Vec::new(),
            filtered_inventory: Vec::new(),
            expansion: ExpansionState::new(),
            selection: SelectionState::new(),
        }
    }

    /// Switches the session to `vessel_id`
    ///
    /// Expansion, selection and filter criteria go back to their defaults and
    /// the previous vessel's data is dropped before the new fetch is issued.
    ///
    /// # Returns
    /// The fetch to run, or `None` if `vessel_id` is already selected
    pub fn select_vessel(&mut self, vessel_id: &str) -> Option<PendingFetch<R>> {
        if self.vessel_id.as_deref() == Some(vessel_id) {
            return None;
        }

        self.vessel_id = Some(vessel_id.to_string());
        self.expansion.reset();
        self.selection.reset();
        self.criteria = FilterCriteria::default();
        self.clear_vessel_data();

        Some(self.begin_fetch(vessel_id.to_string()))
    }

    /// Re-issues the fetch for the current vessel without touching the view state
    pub fn retry(&mut self) -> Option<PendingFetch<R>> {
        let vessel_id = self.vessel_id.clone()?;
        Some(self.begin_fetch(vessel_id))
    }

    /// Applies a fetch outcome
    ///
    /// # Returns
    /// `false` when the outcome answers a superseded request and was discarded
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { ticket, result } = outcome;

        if ticket.generation != self.generation {
            self.progress_reporter.report_warning(&format!(
                "⏭️  Discarded stale component list for vessel '{}'",
                ticket.vessel_id
            ));
            return false;
        }

        match result {
            Ok(records) => self.apply_records(&ticket.vessel_id, records),
            Err(error) => {
                let failure = FleetError::FetchFailure {
                    vessel_id: ticket.vessel_id.clone(),
                    details: format!("{:#}", error),
                };
                self.progress_reporter.report_warning(&format!(
                    "⚠️  Failed to load components for vessel '{}': {:#}",
                    ticket.vessel_id, error
                ));
                self.status = SessionStatus::Failed {
                    message: failure.to_string(),
                };
            }
        }
        true
    }

    /// Selects `vessel_id` and waits for its components
    pub async fn load_vessel(&mut self, vessel_id: &str) -> &SessionStatus {
        if let Some(pending) = self.select_vessel(vessel_id) {
            let outcome = pending.run().await;
            self.complete(outcome);
        }
        &self.status
    }

    /// Retries the current vessel and waits for the result
    pub async fn reload(&mut self) -> &SessionStatus {
        if let Some(pending) = self.retry() {
            let outcome = pending.run().await;
            self.complete(outcome);
        }
        &self.status
    }

    pub fn set_search_text(&mut self, text: &str) {
        if self.criteria.search_text != text {
            self.criteria.search_text = text.to_string();
            self.refresh_views();
        }
    }

    pub fn set_criticality_filter(&mut self, filter: CriticalityFilter) {
        if self.criteria.criticality != filter {
            self.criteria.criticality = filter;
            self.refresh_views();
        }
    }

    pub fn toggle(&mut self, id: ComponentId) {
        self.expansion.toggle(id);
    }

    /// Expands every node with children in the unfiltered forest
    pub fn expand_all(&mut self) {
        self.expansion.expand_all(&self.unfiltered_forest);
    }

    pub fn collapse_all(&mut self) {
        self.expansion.collapse_all();
    }

    pub fn select(&mut self, id: ComponentId) {
        self.selection.select(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Filtered installed forest
    pub fn forest(&self) -> &[TreeNode] {
        &self.filtered_forest
    }

    /// Filtered inventory list
    pub fn inventory(&self) -> &[Component] {
        &self.filtered_inventory
    }

    pub fn statistics(&self) -> ComponentStatistics {
        self.statistics
    }

    pub fn unfiltered_forest(&self) -> &[TreeNode] {
        &self.unfiltered_forest
    }

    /// All records of the current vessel, annotated with running hours
    pub fn records(&self) -> &[Component] {
        &self.records
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn current_vessel(&self) -> Option<&str> {
        self.vessel_id.as_deref()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The selected record, whether mounted or in inventory
    pub fn selected_component(&self) -> Option<&Component> {
        let id = self.selection.selected()?;
        // Matches the tree index, where a later duplicate id wins
        self.records.iter().rev().find(|c| c.id == id)
    }

    fn begin_fetch(&mut self, vessel_id: String) -> PendingFetch<R> {
        self.generation += 1;
        self.status = SessionStatus::Loading;
        self.progress_reporter.begin_activity(&format!(
            "🔄 Loading components for vessel '{}'...",
            vessel_id
        ));

        PendingFetch {
            ticket: FetchTicket {
                generation: self.generation,
                vessel_id,
            },
            repository: Arc::clone(&self.repository),
        }
    }

    fn apply_records(&mut self, vessel_id: &str, mut records: Vec<Component>) {
        RunningHoursCalculator::annotate(&mut records, self.clock.now_millis());

        let statistics = StatisticsAggregator::stats(&records);
        let build = TreeBuilder::build_with_report(&records);

        if build.orphans_promoted > 0 {
            self.progress_reporter.report(&format!(
                "🌱 {} component(s) with a missing parent shown as top-level",
                build.orphans_promoted
            ));
        }
        if build.cycles_broken > 0 {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: {} component(s) form a parent cycle and were shown as top-level",
                build.cycles_broken
            ));
        }

        self.unfiltered_inventory = records.iter().filter(|c| !c.is_mounted).cloned().collect();
        self.unfiltered_forest = build.forest;
        self.statistics = statistics;
        self.records = records;
        self.status = SessionStatus::Ready;
        self.refresh_views();

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} component(s) for vessel '{}' ({} installed, {} in inventory)",
            statistics.total, vessel_id, statistics.mounted, statistics.inventory
        ));
    }

    fn clear_vessel_data(&mut self) {
        self.records.clear();
        self.statistics = ComponentStatistics::default();
        self.unfiltered_forest.clear();
        self.unfiltered_inventory.clear();
        self.filtered_forest.clear();
        self.filtered_inventory.clear();
    }

    fn refresh_views(&mut self) {
        self.filtered_forest = FilterEngine::filter_forest(&self.unfiltered_forest, &self.criteria);
        self.filtered_inventory =
            FilterEngine::filter_list(&self.unfiltered_inventory, &self.criteria);
    }
}

impl<R, C, P> ComponentSessionPort for ComponentSessionController<R, C, P>
where
    R: ComponentRepository,
    C: Clock,
    P: ProgressReporter,
{
    type Fetch = PendingFetch<R>;

    fn forest(&self) -> &[TreeNode] {
        Self::forest(self)
    }

    fn inventory(&self) -> &[Component] {
        Self::inventory(self)
    }

    fn statistics(&self) -> ComponentStatistics {
        Self::statistics(self)
    }

    fn set_search_text(&mut self, text: &str) {
        Self::set_search_text(self, text)
    }

    fn set_criticality_filter(&mut self, filter: CriticalityFilter) {
        Self::set_criticality_filter(self, filter)
    }

    fn toggle(&mut self, id: ComponentId) {
        Self::toggle(self, id)
    }

    fn expand_all(&mut self) {
        Self::expand_all(self)
    }

    fn collapse_all(&mut self) {
        Self::collapse_all(self)
    }

    fn select(&mut self, id: ComponentId) {
        Self::select(self, id)
    }

    fn select_vessel(&mut self, vessel_id: &str) -> Option<Self::Fetch> {
        Self::select_vessel(self, vessel_id)
    }

    fn retry(&mut self) -> Option<Self::Fetch> {
        Self::retry(self)
    }
}
