use serde::Serialize;

/// Summary counts over a vessel's full, unfiltered component list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComponentStatistics {
    pub total: usize,
    pub mounted: usize,
    pub inventory: usize,
    pub critical: usize,
    pub normal: usize,
}
