//! Append-only snapshot history.
//!
//! Snapshot ids are derived from a clock and a disambiguating suffix. Both
//! sources are injected so tests can pin them; production wiring uses the
//! local system clock and a random suffix in `0..SUFFIX_RANGE`.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shapealbum_core::{AlbumError, Snapshot, SnapshotId, SnapshotStamp};
use tracing::info;

/// Exclusive upper bound of the random id suffix
pub const SUFFIX_RANGE: u32 = 100;

/// How many suffixes are drawn before falling back to a sequence tail
const MAX_SUFFIX_ATTEMPTS: usize = 100;

/// Source of capture times
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Source of id suffixes
pub trait Disambiguator {
    fn next_suffix(&mut self) -> u32;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Uniform random suffix in `0..SUFFIX_RANGE`
#[derive(Debug)]
pub struct RandomSuffix {
    rng: StdRng,
}

impl RandomSuffix {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl Disambiguator for RandomSuffix {
    fn next_suffix(&mut self) -> u32 {
        self.rng.gen_range(0..SUFFIX_RANGE)
    }
}

/// Counts up from a starting value, wrapping at `SUFFIX_RANGE`
#[derive(Debug, Clone, Default)]
pub struct SequenceSuffix {
    next: u32,
}

impl SequenceSuffix {
    pub fn starting_at(next: u32) -> Self {
        Self {
            next: next % SUFFIX_RANGE,
        }
    }
}

impl Disambiguator for SequenceSuffix {
    fn next_suffix(&mut self) -> u32 {
        let current = self.next;
        self.next = (self.next + 1) % SUFFIX_RANGE;
        current
    }
}

/// Ordered, append-only collection of snapshots
pub struct History {
    entries: Vec<Snapshot>,
    clock: Box<dyn Clock>,
    disambiguator: Box<dyn Disambiguator>,
}

impl History {
    /// History wired to the system clock and a random suffix
    pub fn new() -> Self {
        Self::with_sources(SystemClock, RandomSuffix::new())
    }

    pub fn with_sources(
        clock: impl Clock + 'static,
        disambiguator: impl Disambiguator + 'static,
    ) -> Self {
        Self {
            entries: Vec::new(),
            clock: Box::new(clock),
            disambiguator: Box::new(disambiguator),
        }
    }

    /// Produce the id and timestamp for the next capture.
    ///
    /// The returned id is not yet present in this history.
    pub fn next_stamp(&mut self) -> SnapshotStamp {
        let time = self.clock.now();
        for _ in 0..MAX_SUFFIX_ATTEMPTS {
            let suffix = self.disambiguator.next_suffix().to_string();
            let stamp = SnapshotStamp::at(time, &suffix);
            if !self.contains(&stamp.id) {
                return stamp;
            }
        }

        // Every drawn suffix collided; extend with a sequence tail until free
        let base = SnapshotStamp::at(time, &self.disambiguator.next_suffix().to_string());
        let mut seq = self.entries.len();
        loop {
            let id = SnapshotId(format!("{}-{}", base.id, seq));
            if !self.contains(&id) {
                return SnapshotStamp {
                    id,
                    timestamp: base.timestamp,
                };
            }
            seq += 1;
        }
    }

    /// Append a snapshot. Ids must be unique within the history.
    pub fn record(&mut self, snapshot: Snapshot) -> Result<(), AlbumError> {
        if self.contains(snapshot.id()) {
            return Err(AlbumError::DuplicateSnapshot(snapshot.id().to_string()));
        }
        info!(
            id = %snapshot.id(),
            shapes = snapshot.len(),
            description = snapshot.description(),
            "recorded snapshot"
        );
        self.entries.push(snapshot);
        Ok(())
    }

    /// Independent copies of every snapshot, in the order they were taken
    pub fn all(&self) -> Vec<Snapshot> {
        self.entries.clone()
    }

    /// Copy of the snapshot with the given id
    pub fn get(&self, id: &str) -> Option<Snapshot> {
        self.entries.iter().find(|s| s.id().as_str() == id).cloned()
    }

    pub fn ids(&self) -> Vec<SnapshotId> {
        self.entries.iter().map(|s| s.id().clone()).collect()
    }

    pub fn contains(&self, id: &SnapshotId) -> bool {
        self.entries.iter().any(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
