use std::path::Path;

/// Rendering of a component report.
///
/// Chosen on the command line with `--format`; when the flag is absent the
/// extension of the `--output` file decides, and Markdown is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Full report as JSON, including the unexpanded forest
    Json,
    /// Summary, indented tree, inventory table and selected-component details
    #[default]
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// Infers the format from a report file name, e.g. `V-100.json`.
    pub fn for_output_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Markdown => "md",
        }
    }

    /// Name shown in progress output.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Markdown => "Markdown",
        }
    }
}
