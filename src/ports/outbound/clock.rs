/// Clock port giving the current wall-clock time in epoch milliseconds
///
/// Running hours are derived against this clock so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}
