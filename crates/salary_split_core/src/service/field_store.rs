//! Bucket collection store.
//!
//! # Responsibility
//! - Hold the authoritative, ordered bucket collection in memory.
//! - Write the whole collection through the adapter after every mutation.
//!
//! # Invariants
//! - `create` never grows the collection past `StoreConfig::capacity`.
//! - Ids are unique and never reused; colours are fixed at creation.
//! - Loading and persisting never fail the caller: unreadable state falls
//!   back to an empty collection, failed writes only clear `is_durable`.
//! - Ids repaired during load are persisted immediately.

use crate::config::StoreConfig;
use crate::model::bucket::{Bucket, BucketId, FieldUpdate};
use crate::repo::bucket_codec::{decode_buckets, encode_buckets};
use crate::repo::persistence::PersistenceAdapter;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The collection already holds `capacity` buckets.
    CapacityExceeded { capacity: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityExceeded { capacity } => {
                write!(f, "bucket limit reached: at most {capacity} buckets allowed")
            }
        }
    }
}

impl Error for StoreError {}

/// Ordered bucket collection with write-through persistence.
pub struct FieldStore<A: PersistenceAdapter> {
    adapter: A,
    config: StoreConfig,
    buckets: Vec<Bucket>,
    durable: bool,
}

impl<A: PersistenceAdapter> FieldStore<A> {
    /// Loads the collection from `adapter` using default configuration.
    pub fn load(adapter: A) -> Self {
        Self::load_with_config(adapter, StoreConfig::default())
    }

    /// Loads the collection from `adapter`.
    ///
    /// Absent, unreadable or malformed state yields an empty collection.
    /// Buckets whose stored id was missing or duplicated get a fresh id, and
    /// the repaired collection is written back once so the new ids stay
    /// stable across sessions. Otherwise nothing is written during load.
    pub fn load_with_config(adapter: A, config: StoreConfig) -> Self {
        let (buckets, repaired) = match adapter.read() {
            Ok(Some(payload)) => match decode_buckets(&payload, &config) {
                Ok(decoded) => {
                    info!(
                        "event=store_load module=store status=ok count={} skipped={} reassigned_ids={}",
                        decoded.buckets.len(),
                        decoded.skipped,
                        decoded.reassigned_ids
                    );
                    (decoded.buckets, decoded.reassigned_ids > 0)
                }
                Err(err) => {
                    warn!(
                        "event=store_load module=store status=fallback reason=malformed error={}",
                        err
                    );
                    (Vec::new(), false)
                }
            },
            Ok(None) => {
                info!("event=store_load module=store status=ok count=0 reason=absent");
                (Vec::new(), false)
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=fallback reason=read_failed error={}",
                    err
                );
                (Vec::new(), false)
            }
        };

        let mut store = Self {
            adapter,
            config,
            buckets,
            durable: true,
        };
        if repaired {
            store.persist();
        }
        store
    }

    /// Buckets in display order.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn get(&self, id: &BucketId) -> Option<&Bucket> {
        self.buckets.iter().find(|bucket| &bucket.id == id)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether another `create` would be rejected.
    pub fn is_full(&self) -> bool {
        self.buckets.len() >= self.config.capacity
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// `false` once a write has failed and no later write has succeeded.
    pub fn is_durable(&self) -> bool {
        self.durable
    }

    /// Appends a bucket with creation defaults and returns its id.
    ///
    /// # Errors
    /// - `StoreError::CapacityExceeded` when the cap is reached; the
    ///   collection is left unchanged.
    pub fn create(&mut self) -> Result<BucketId, StoreError> {
        if self.is_full() {
            info!(
                "event=bucket_create module=store status=rejected reason=capacity count={} capacity={}",
                self.buckets.len(),
                self.config.capacity
            );
            return Err(StoreError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        let id = self.fresh_id();
        let color = self.config.palette.color_at(self.buckets.len()).to_string();
        self.buckets.push(Bucket::new(
            id.clone(),
            self.config.default_title.clone(),
            color,
        ));
        info!(
            "event=bucket_create module=store status=ok id={} count={}",
            id,
            self.buckets.len()
        );

        self.persist();
        Ok(id)
    }

    /// Replaces one attribute of the bucket with `id`.
    ///
    /// Returns `false` (and writes nothing) when `id` is unknown.
    pub fn update(&mut self, id: &BucketId, update: FieldUpdate) -> bool {
        let Some(bucket) = self.buckets.iter_mut().find(|bucket| &bucket.id == id) else {
            return false;
        };

        let key = update.key();
        bucket.apply(update);
        info!("event=bucket_update module=store status=ok id={id} field={key}");

        self.persist();
        true
    }

    /// Applies a raw UI edit (`title`, `kind`/`type` or `amount`).
    ///
    /// Returns `false` for unknown attribute names or unknown ids.
    pub fn update_raw(&mut self, id: &BucketId, key: &str, raw: &str) -> bool {
        match FieldUpdate::from_raw(key, raw) {
            Some(update) => self.update(id, update),
            None => false,
        }
    }

    /// Removes the bucket with `id`; other buckets keep their colours.
    ///
    /// Returns `false` (and writes nothing) when `id` is unknown.
    pub fn delete(&mut self, id: &BucketId) -> bool {
        let Some(position) = self.buckets.iter().position(|bucket| &bucket.id == id) else {
            return false;
        };

        self.buckets.remove(position);
        info!(
            "event=bucket_delete module=store status=ok id={id} count={}",
            self.buckets.len()
        );

        self.persist();
        true
    }

    fn fresh_id(&self) -> BucketId {
        loop {
            let id = BucketId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        let written = encode_buckets(&self.buckets)
            .map_err(|err| err.to_string())
            .and_then(|payload| self.adapter.write(&payload).map_err(|err| err.to_string()));

        match written {
            Ok(()) => {
                self.durable = true;
                info!(
                    "event=store_write module=store status=ok count={}",
                    self.buckets.len()
                );
            }
            Err(err) => {
                self.durable = false;
                warn!(
                    "event=store_write module=store status=error count={} error={}",
                    self.buckets.len(),
                    err
                );
            }
        }
    }
}
