/// Data Transfer Objects for application layer
///
/// DTOs carry choices between the CLI and the application layer,
/// keeping the domain layer isolated.
mod report_format;

pub use report_format::ReportFormat;
