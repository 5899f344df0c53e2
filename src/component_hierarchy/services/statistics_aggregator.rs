use crate::component_hierarchy::domain::{Component, ComponentStatistics};

/// StatisticsAggregator service producing the dashboard summary counts.
///
/// Always fed the full record list; search and criticality filters never
/// influence these numbers.
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    pub fn stats(components: &[Component]) -> ComponentStatistics {
        let total = components.len();
        let mounted = components.iter().filter(|c| c.is_mounted).count();

        ComponentStatistics {
            total,
            mounted,
            inventory: total - mounted,
            critical: components.iter().filter(|c| c.is_critical).count(),
            normal: components.iter().filter(|c| c.is_normal()).count(),
        }
    }
}
