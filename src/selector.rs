//! Bounded top-K selection over a stream of [`Record`]s.

use crate::record::Record;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Upper bound on the capacity reserved up front; larger `k` grows on demand.
const PREALLOC_LIMIT: usize = 1024;

/// Heap entry ordered by count alone.
///
/// Equal counts compare equal, so which of several tied records sits at the
/// eviction boundary is left to the heap.
#[derive(Debug)]
struct ByCount(Record);

impl PartialEq for ByCount {
    fn eq(&self, other: &Self) -> bool {
        self.0.count() == other.0.count()
    }
}

impl Eq for ByCount {}

impl PartialOrd for ByCount {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByCount {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.count().cmp(&other.0.count())
    }
}

/// Keeps the `k` records with the largest counts seen so far.
///
/// Candidates live in a **min-heap** (via `BinaryHeap<Reverse<_>>`) of size ≤ `k`,
/// so the weakest candidate is always at the root and memory is bounded by `k`
/// regardless of how many records are observed.
///
/// - [`observe`](Self::observe): O(log k)
/// - [`drain`](Self::drain): O(k log k), consumes the selector
///
/// # Notes
/// - `k == 0` is valid and always drains to an empty vector.
/// - A record whose count equals the current minimum is **not** admitted once
///   the selector is full.
///
/// # Example
/// ```
/// use topk::{Record, TopK};
///
/// let mut top = TopK::new(2);
/// for (key, count) in [("a", 5), ("b", 3), ("c", 9), ("d", 1)] {
///     top.observe(Record::new(key, count));
/// }
/// let keys: Vec<Vec<u8>> = top.drain().into_iter().map(Record::into_key).collect();
/// assert_eq!(keys, [b"c".to_vec(), b"a".to_vec()]);
/// ```
#[derive(Debug)]
pub struct TopK {
    k: usize,
    heap: BinaryHeap<Reverse<ByCount>>,
}

impl TopK {
    /// Create an empty selector that retains at most `k` records.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.min(PREALLOC_LIMIT)),
        }
    }

    /// Build a selector from an iterator of records.
    #[must_use]
    pub fn from_records<I, R>(k: usize, records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Record>,
    {
        let mut top = Self::new(k);
        top.extend(records.into_iter().map(Into::into));
        top
    }

    /// Offer a record to the candidate set.
    ///
    /// Below capacity the record is always admitted. At capacity it replaces
    /// the current minimum only if its count is strictly greater; otherwise it
    /// is dropped.
    pub fn observe(&mut self, record: Record) {
        if self.heap.len() < self.k {
            self.heap.push(Reverse(ByCount(record)));
            return;
        }
        // Empty here only when k == 0.
        if let Some(mut min) = self.heap.peek_mut()
            && record.count() > min.0.0.count()
        {
            // Sifts down when `min` drops.
            *min = Reverse(ByCount(record));
        }
    }

    /// Fold another selector's candidates into this one.
    ///
    /// Equivalent to observing every record `other` retained.
    pub fn merge(&mut self, other: TopK) {
        for Reverse(ByCount(record)) in other.heap {
            self.observe(record);
        }
    }

    /// Empty the candidate set into a vector sorted by descending count.
    #[must_use]
    pub fn drain(mut self) -> Vec<Record> {
        let mut v = Vec::with_capacity(self.heap.len());
        while let Some(Reverse(ByCount(record))) = self.heap.pop() {
            v.push(record);
        }
        v.reverse(); // largest first
        v
    }

    /// The capacity this selector was built with.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Number of records currently held; always `min(k, observed)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest count currently held, i.e. the eviction boundary once full.
    #[must_use]
    pub fn min_count(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(ByCount(r))| r.count())
    }
}

impl Extend<Record> for TopK {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.observe(record);
        }
    }
}
