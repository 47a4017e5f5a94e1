use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use tracing::warn;

use examq_ingest::{RosterSchema, RosterSource};

use crate::cache::UpdateCache;

/// Monotonic time source for cache-expiry decisions. Tests swap in a manual
/// clock so TTL expiry never needs a sleep.
pub type Clock = Arc<dyn Fn() -> Instant + Send + Sync>;

/// Shared server state: the update cache, the live fallback source, and the
/// column schema.
pub struct AppState {
    pub cache: UpdateCache,
    pub source: Box<dyn RosterSource>,
    pub schema: RosterSchema,
    /// Fixed "today" for tests and rehearsals; live deployments leave it unset.
    pub today_override: Option<NaiveDate>,
    clock: Clock,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(source: Box<dyn RosterSource>, ttl: Duration) -> Self {
        Self {
            cache: UpdateCache::new(ttl),
            source,
            schema: RosterSchema::default(),
            today_override: None,
            clock: Arc::new(Instant::now),
        }
    }

    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today_override = today;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// The current instant on this state's clock.
    pub fn now(&self) -> Instant {
        (self.clock)()
    }

    /// The freshest full matrix available: the cached push if it is within
    /// its TTL, otherwise a live read. A failed live read degrades to a
    /// header-only matrix so the board shows empty rather than erroring.
    pub fn current_matrix(&self) -> Vec<Vec<String>> {
        if let Some(matrix) = self.cache.get_at(self.now()) {
            return matrix;
        }
        match self.source.load() {
            Ok(matrix) if !matrix.is_empty() => matrix,
            Ok(_) => {
                warn!("live roster source returned an empty matrix");
                self.header_only_matrix()
            }
            Err(error) => {
                warn!(%error, "live roster read failed; serving empty board");
                self.header_only_matrix()
            }
        }
    }

    fn header_only_matrix(&self) -> Vec<Vec<String>> {
        // Shaped like a raw sheet so projection lines up.
        let mut header = vec![String::new(); 21];
        for (index, label) in self
            .schema
            .projection_indices()
            .into_iter()
            .zip(self.schema.expected_header())
        {
            if index >= header.len() {
                header.resize(index + 1, String::new());
            }
            header[index] = label;
        }
        vec![header]
    }
}
