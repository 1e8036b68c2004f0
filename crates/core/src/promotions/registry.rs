//! Promotion Registry

use std::collections::{VecDeque, vec_deque::Iter};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    products::ProductId,
    promotions::{Expiration, PromotionRecord, expiry::ExpiresAt},
};

/// Storage key under which the registry snapshot is kept.
pub const SNAPSHOT_KEY: &str = "promoted_products";

/// Products evicted by a single sweep, most recently promoted first.
pub type Evicted = SmallVec<[ProductId; 4]>;

/// The persisted form of a [`PromotionRegistry`], most recently promoted first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    records: Vec<PromotionRecord>,
}

impl Snapshot {
    /// Build a snapshot from records ordered most recent first.
    #[must_use]
    pub fn new(records: Vec<PromotionRecord>) -> Self {
        Self { records }
    }

    /// Stored records, most recent first.
    #[must_use]
    pub fn records(&self) -> &[PromotionRecord] {
        &self.records
    }

    /// Whether the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Ordered set of active promotions keyed by product.
///
/// The head of the order is the product promoted most recently, which is the one the
/// storefront displays. Each product appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionRegistry {
    records: VecDeque<PromotionRecord>,
}

impl PromotionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from a stored snapshot.
    ///
    /// Duplicate products keep only their first (most recent) occurrence.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut seen = FxHashSet::default();

        let records = snapshot
            .records
            .into_iter()
            .filter(|record| seen.insert(record.product_id))
            .collect();

        Self { records }
    }

    /// Copy the registry into its persisted form.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.records.iter().cloned().collect())
    }

    /// Convert the registry into its persisted form.
    #[must_use]
    pub fn into_snapshot(self) -> Snapshot {
        Snapshot::new(self.records.into())
    }

    /// Promote `product_id`, making it the most recent promotion.
    ///
    /// An existing record has its expiration replaced and is moved to the head, even when
    /// nothing else changed. Returns `true` when a new record was created.
    pub fn upsert(&mut self, product_id: ProductId, expiration: Expiration) -> bool {
        let existing = self
            .position(product_id)
            .and_then(|index| self.records.remove(index));

        self.records
            .push_front(PromotionRecord::new(product_id, expiration));

        existing.is_none()
    }

    /// Drop the promotion for `product_id`, returning it if there was one.
    pub fn remove(&mut self, product_id: ProductId) -> Option<PromotionRecord> {
        self.position(product_id)
            .and_then(|index| self.records.remove(index))
    }

    /// Evict every promotion whose expiry is strictly before `now`.
    ///
    /// Records without an expiry are kept regardless of `now`.
    pub fn sweep_expired(&mut self, now: ExpiresAt) -> Evicted {
        let mut evicted = Evicted::new();

        self.records.retain(|record| {
            if record.expiration.has_lapsed(now) {
                evicted.push(record.product_id);

                false
            } else {
                true
            }
        });

        evicted
    }

    /// The promotion to display: the most recently promoted product still active.
    #[must_use]
    pub fn most_recent(&self) -> Option<&PromotionRecord> {
        self.records.front()
    }

    /// The promotion for `product_id`, if active.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&PromotionRecord> {
        self.records
            .iter()
            .find(|record| record.product_id == product_id)
    }

    /// Whether `product_id` is currently promoted.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of active promotions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no active promotions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Active promotions, most recent first.
    pub fn iter(&self) -> Iter<'_, PromotionRecord> {
        self.records.iter()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.product_id == product_id)
    }
}

impl<'a> IntoIterator for &'a PromotionRegistry {
    type Item = &'a PromotionRecord;
    type IntoIter = Iter<'a, PromotionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Snapshot> for PromotionRegistry {
    fn from(snapshot: Snapshot) -> Self {
        Self::from_snapshot(snapshot)
    }
}

impl From<PromotionRegistry> for Snapshot {
    fn from(registry: PromotionRegistry) -> Self {
        registry.into_snapshot()
    }
}
