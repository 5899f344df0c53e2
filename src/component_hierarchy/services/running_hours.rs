use crate::component_hierarchy::domain::Component;

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// RunningHoursCalculator service deriving running hours from the last
/// condition-check timestamp.
///
/// Never fails: a future or malformed timestamp yields `0` hours.
pub struct RunningHoursCalculator;

impl RunningHoursCalculator {
    /// Whole hours elapsed between `last_condition_date_ms` and `now_ms`.
    pub fn hours(last_condition_date_ms: i64, now_ms: i64) -> u64 {
        let elapsed = now_ms.saturating_sub(last_condition_date_ms);
        if elapsed <= 0 {
            return 0;
        }
        (elapsed / MILLIS_PER_HOUR) as u64
    }

    /// Same as `hours`, starting from the raw stored value.
    ///
    /// Absent, blank or unparsable input yields `0`.
    pub fn hours_from_raw(raw: Option<&str>, now_ms: i64) -> u64 {
        raw.and_then(|value| value.trim().parse::<i64>().ok())
            .map(|timestamp| Self::hours(timestamp, now_ms))
            .unwrap_or(0)
    }

    /// Writes `running_hours` on every record.
    pub fn annotate(components: &mut [Component], now_ms: i64) {
        for component in components.iter_mut() {
            component.running_hours =
                Self::hours_from_raw(component.last_condition_date.as_deref(), now_ms);
        }
    }
}
