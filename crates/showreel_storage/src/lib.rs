//! Run status store backends for the Showreel story pipeline.
//!
//! The pipeline writes run records through the [`RunStore`] trait defined in
//! `showreel_interface`; this crate provides the in-memory backend used by
//! embedders and tests. Production deployments substitute their own backend
//! (the original system kept run rows in a hosted key-value store).
//!
//! # Example
//!
//! ```rust
//! use showreel_storage::InMemoryRunStore;
//! use showreel_interface::RunStore;
//! use showreel_core::Run;
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryRunStore::new();
//! let id = Uuid::new_v4();
//! store.put(Run::new(id, "vin-123")).await?;
//! assert!(store.get(id).await?.is_some());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

pub use memory::InMemoryRunStore;
pub use showreel_error::{StoreError, StoreErrorKind};
