use async_trait::async_trait;
use fleet_components::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock ComponentRepository serving canned component lists per vessel
///
/// Clones share state, so a test can keep a handle after moving the
/// repository into a session and flip a vessel to failing between fetches.
#[derive(Default, Clone)]
pub struct MockComponentRepository {
    vessels: Arc<Mutex<HashMap<String, Vec<Component>>>>,
    failing: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
}

impl MockComponentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vessel(self, vessel_id: &str, components: Vec<Component>) -> Self {
        self.vessels
            .lock()
            .unwrap()
            .insert(vessel_id.to_string(), components);
        self
    }

    pub fn set_failing(&self, vessel_id: &str, failing: bool) {
        let mut set = self.failing.lock().unwrap();
        set.retain(|v| v != vessel_id);
        if failing {
            set.push(vessel_id.to_string());
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ComponentRepository for MockComponentRepository {
    async fn fetch_by_vessel(&self, vessel_id: &str) -> Result<Vec<Component>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.lock().unwrap().iter().any(|v| v == vessel_id) {
            anyhow::bail!("HTTP 503 from component API for vessel '{}'", vessel_id);
        }

        Ok(self
            .vessels
            .lock()
            .unwrap()
            .get(vessel_id)
            .cloned()
            .unwrap_or_default())
    }
}
