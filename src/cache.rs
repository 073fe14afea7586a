// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Memoisation of computed prayer times.
//!
//! [`compute_prayer_times`] is pure, so its results can be stored under an
//! exact key of its inputs.  The cache keys on bit patterns: two locations
//! that differ only in the last bit of their latitude are distinct entries.
//! Entries are never invalidated.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::engine::{compute_prayer_times, PrayerTimes};
use crate::location::Location;
use crate::method::CalculationMethod;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    latitude: u64,
    longitude: u64,
    elevation: u64,
    instant: DateTime<Utc>,
    method: String,
    asr_factor: u64,
    fajr_angle: u64,
    isha_angle: u64,
}

impl CacheKey {
    fn new<M>(location: &Location, instant: DateTime<Utc>, method: &M) -> Self
    where
        M: CalculationMethod + ?Sized,
    {
        Self {
            latitude: location.latitude().to_bits(),
            longitude: location.longitude().to_bits(),
            elevation: location.elevation().to_bits(),
            instant,
            method: method.name().to_owned(),
            asr_factor: method.asr_factor().to_bits(),
            fajr_angle: method.fajr_angle().to_bits(),
            isha_angle: method.isha_angle().to_bits(),
        }
    }
}

/// Thread-safe cache in front of [`compute_prayer_times`].
#[derive(Debug, Default)]
pub struct PrayerTimesCache {
    entries: RwLock<HashMap<CacheKey, PrayerTimes>>,
}

impl PrayerTimesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored times for these inputs, computing and storing them
    /// on a miss.
    ///
    /// The computation runs without holding the lock, so two threads missing
    /// on the same key may both compute; the values are identical and the
    /// first insert wins.
    pub fn get_or_compute<M>(
        &self,
        location: &Location,
        instant: DateTime<Utc>,
        method: &M,
    ) -> PrayerTimes
    where
        M: CalculationMethod + ?Sized,
    {
        let key = CacheKey::new(location, instant, method);
        if let Some(times) = self.entries.read().get(&key) {
            log::debug!("prayer times cache hit for {} at {instant}", location.name());
            return *times;
        }

        log::debug!("prayer times cache miss for {} at {instant}", location.name());
        let times = compute_prayer_times(location, instant, method);
        *self.entries.write().entry(key).or_insert(times)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every stored entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}
