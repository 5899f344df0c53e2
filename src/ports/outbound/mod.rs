/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the engine needs from the outside world:
/// the component source, credentials, time, progress output and rendering.
pub mod auth_header_provider;
pub mod clock;
pub mod component_repository;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use auth_header_provider::AuthHeaderProvider;
pub use clock::Clock;
pub use component_repository::ComponentRepository;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
