//! fleet-components - component hierarchy engine for fleet maintenance
//!
//! Turns the flat component list of a vessel into an installed-equipment
//! forest plus an inventory list, filters both by search text and
//! criticality, and keeps per-vessel view state (expansion, selection)
//! consistent while the user switches vessels.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`component_hierarchy`): records, tree building,
//!   filtering, statistics and running hours
//! - **Application Layer** (`application`): the component session, view
//!   state and report read model
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): fleet API client, JSON snapshots, console
//!   progress and report formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fleet_components::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let mut session = ComponentSessionController::new(
//!     JsonSnapshotRepository::new("snapshots"),
//!     SystemClock::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! session.load_vessel("V-100").await;
//! session.set_search_text("pump");
//! session.expand_all();
//!
//! let report = ComponentReportBuilder::from_session(&session, chrono::Utc::now());
//! println!("{}", MarkdownReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

// Lets the shared test doubles under tests/ name the crate from unit tests too
#[cfg(test)]
extern crate self as fleet_components;

pub mod adapters;
pub mod application;
pub mod component_hierarchy;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, JsonSnapshotRepository, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
    pub use crate::adapters::outbound::network::{
        ApiSettings, EnvTokenProvider, HttpComponentRepository, StaticTokenProvider,
    };
    pub use crate::application::read_models::{ComponentReport, ComponentReportBuilder, TreeRow};
    pub use crate::application::state::{ExpansionState, SelectionState};
    pub use crate::application::use_cases::{
        ComponentSessionController, FetchOutcome, PendingFetch, SessionStatus,
    };
    pub use crate::component_hierarchy::domain::{
        find_node, forest_size, Component, ComponentId, ComponentStatistics, CriticalityFilter,
        FilterCriteria, TreeNode,
    };
    pub use crate::component_hierarchy::services::{
        FilterEngine, RunningHoursCalculator, StatisticsAggregator, TreeBuilder,
    };
    pub use crate::ports::inbound::ComponentSessionPort;
    pub use crate::ports::outbound::{
        AuthHeaderProvider, Clock, ComponentRepository, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
