//! Read models for the presentation side
//!
//! View-optimized structs projected from a component session.

mod component_report;
mod component_report_builder;

pub use component_report::{ComponentReport, TreeRow};
pub use component_report_builder::ComponentReportBuilder;
