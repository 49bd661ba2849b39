use crate::mining::types::ScoredCandidate;

/// Fixed-capacity collection of the highest-coverage admissions seen so far.
///
/// Below capacity every admission is appended. At capacity the newcomer must
/// strictly beat the current worst entry to replace it, so exact-score ties
/// keep the earlier admission. The worst slot is cached and marked stale on
/// any mutation; it is recomputed with one linear scan only when the next
/// decision depends on its exact value.
#[derive(Debug)]
pub struct CoverageDictionary {
    entries: Vec<ScoredCandidate>,
    capacity: usize,
    /// Index of the minimum-coverage entry, or `None` when stale.
    worst: Option<usize>,
}

impl CoverageDictionary {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            worst: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn entries(&self) -> &[ScoredCandidate] {
        &self.entries
    }

    /// Admits one scored candidate.
    pub fn admit(&mut self, scored: ScoredCandidate) {
        if self.entries.len() < self.capacity {
            self.entries.push(scored);
            self.worst = None;
            return;
        }

        let worst = match self.worst {
            Some(index) => index,
            None => {
                let index = self.scan_worst();
                self.worst = Some(index);
                index
            }
        };

        if scored.coverage > self.entries[worst].coverage {
            self.entries[worst] = scored;
            self.worst = None;
        }
    }

    // First minimum wins, so repeated scans over unchanged entries agree.
    fn scan_worst(&self) -> usize {
        let mut worst = 0;
        for (index, entry) in self.entries.iter().enumerate().skip(1) {
            if entry.coverage < self.entries[worst].coverage {
                worst = index;
            }
        }
        worst
    }

    /// Consumes the dictionary and returns its contents sorted descending by
    /// coverage. The sort is stable, so equal scores keep their slot order.
    pub fn finalize(mut self) -> Vec<ScoredCandidate> {
        self.entries
            .sort_by(|a, b| b.coverage.cmp(&a.coverage));
        self.entries
    }
}
