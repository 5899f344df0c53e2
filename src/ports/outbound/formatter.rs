use crate::application::read_models::ComponentReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a component report
///
/// Implementations exist for JSON and Markdown.
pub trait ReportFormatter {
    /// Renders the report to a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ComponentReport) -> Result<String>;
}
