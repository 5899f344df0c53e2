use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Criticality toggle of the component views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CriticalityFilter {
    #[default]
    All,
    Critical,
    NotCritical,
}

impl CriticalityFilter {
    pub fn accepts(self, is_critical: bool) -> bool {
        match self {
            CriticalityFilter::All => true,
            CriticalityFilter::Critical => is_critical,
            CriticalityFilter::NotCritical => !is_critical,
        }
    }
}

impl FromStr for CriticalityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CriticalityFilter::All),
            "critical" => Ok(CriticalityFilter::Critical),
            "not_critical" | "not-critical" => Ok(CriticalityFilter::NotCritical),
            _ => Err(format!(
                "Invalid criticality filter: {}. Please specify 'all', 'critical' or 'not_critical'",
                s
            )),
        }
    }
}

impl fmt::Display for CriticalityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriticalityFilter::All => write!(f, "all"),
            CriticalityFilter::Critical => write!(f, "critical"),
            CriticalityFilter::NotCritical => write!(f, "not_critical"),
        }
    }
}

/// User-driven filter input shared by the installed tree and the inventory list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub search_text: String,
    pub criticality: CriticalityFilter,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, criticality: CriticalityFilter) -> Self {
        Self {
            search_text: search_text.into(),
            criticality,
        }
    }

    /// True when applying these criteria cannot remove anything.
    pub fn is_identity(&self) -> bool {
        self.search_text.trim().is_empty() && self.criticality == CriticalityFilter::All
    }
}
