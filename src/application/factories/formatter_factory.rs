use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Lives in the application layer: it picks the infrastructure adapter
/// that matches an application-level output choice.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fleet_components::application::dto::ReportFormat;
    /// use fleet_components::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Markdown);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
            ReportFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
        }
    }

    /// Returns the progress message shown while rendering
    pub fn progress_message(format: ReportFormat) -> String {
        format!("📝 Rendering component report as {}...", format.display_name())
    }
}
