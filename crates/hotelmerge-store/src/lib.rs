//! In-memory hotel table indexed by hotel id and by destination id.
//!
//! Both indices sit behind one [`Mutex`]; every read and write is serialized.
//! Contents live only as long as the process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use hotelmerge_core::Hotel;

#[derive(Debug, Default)]
struct Indices {
    by_id: HashMap<String, Hotel>,
    /// Destination id to member hotel ids, in first-insert order.
    by_destination: HashMap<i64, Vec<String>>,
}

impl Indices {
    fn write(&mut self, hotel: Hotel) {
        let previous = self
            .by_id
            .get(&hotel.id)
            .map(|h| h.destination_id)
            .filter(|d| *d != hotel.destination_id);

        if let Some(old_destination) = previous {
            tracing::debug!(
                hotel_id = %hotel.id,
                from = old_destination,
                to = hotel.destination_id,
                "hotel moved destination"
            );
            if let Some(bucket) = self.by_destination.get_mut(&old_destination) {
                bucket.retain(|id| id != &hotel.id);
                if bucket.is_empty() {
                    self.by_destination.remove(&old_destination);
                }
            }
        }

        let bucket = self.by_destination.entry(hotel.destination_id).or_default();
        if !bucket.contains(&hotel.id) {
            bucket.push(hotel.id.clone());
        }
        self.by_id.insert(hotel.id.clone(), hotel);
    }
}

/// Thread-safe dual-indexed hotel store. Share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct HotelStore {
    inner: Mutex<Indices>,
}

impl HotelStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes are only applied after all fallible work has completed, so a
    /// poisoned lock still guards consistent indices and is recovered.
    fn lock(&self) -> MutexGuard<'_, Indices> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the stored hotels for `ids`, in request order. Unknown ids are
    /// omitted; a repeated id yields a repeated record.
    #[must_use]
    pub fn get_by_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Hotel> {
        let indices = self.lock();
        ids.iter()
            .filter_map(|id| indices.by_id.get(id.as_ref()).cloned())
            .collect()
    }

    /// Returns every hotel currently assigned to `destination_id`, in the
    /// order they first joined it. Unknown destinations yield an empty list.
    #[must_use]
    pub fn get_by_destination(&self, destination_id: i64) -> Vec<Hotel> {
        let indices = self.lock();
        indices
            .by_destination
            .get(&destination_id)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|id| indices.by_id.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replaces the record for `hotel.id` and files it under its destination.
    /// A hotel whose destination changed leaves its previous bucket.
    pub fn insert(&self, hotel: Hotel) {
        self.lock().write(hotel);
    }

    /// Atomically reads the record for `id` (or [`Hotel::default`] if absent),
    /// runs `merge` on it and stores the result, all under one lock
    /// acquisition. Returns a copy of the stored record.
    ///
    /// The stored record's `id` is forced to `id` so the primary index
    /// cannot drift from its key.
    pub fn upsert<F>(&self, id: &str, merge: F) -> Hotel
    where
        F: FnOnce(&Hotel) -> Hotel,
    {
        let mut indices = self.lock();
        let empty = Hotel::default();
        let existing = indices.by_id.get(id).unwrap_or(&empty);
        let mut merged = merge(existing);
        if merged.id != id {
            merged.id = id.to_string();
        }
        indices.write(merged.clone());
        merged
    }

    /// Snapshot of every stored hotel, sorted by id.
    #[must_use]
    pub fn all(&self) -> Vec<Hotel> {
        let indices = self.lock();
        let mut hotels: Vec<Hotel> = indices.by_id.values().cloned().collect();
        hotels.sort_by(|a, b| a.id.cmp(&b.id));
        hotels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().by_id.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().by_id.is_empty()
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
