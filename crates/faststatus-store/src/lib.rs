//! Embedded resource storage for faststatus.
//!
//! This crate persists [`Resource`](faststatus_resource::Resource) records
//! under their id. Keys are the id in lowercase unpadded hex; values are
//! the resource's structured JSON form, byte for byte, so records on disk
//! stay readable by anything that speaks the wire format.
//!
//! # Storage Backends
//!
//! All backends implement the [`ResourceStore`] trait:
//!
//! - [`RedbResourceStore`] -- single-file embedded database, the backend
//!   the server runs on
//! - [`InMemoryResourceStore`] -- `HashMap`-based store for tests and
//!   embedding
//!
//! # Design Rules
//!
//! 1. One record per resource id; writes replace, reads never block writes.
//! 2. A resource that cannot be serialized is rejected whole; failed
//!    writes leave the previous record in place.
//! 3. Both backends persist the identical byte representation, so they
//!    accept and reject exactly the same values.
//! 4. All storage errors are propagated, never silently ignored.

pub mod codec;
pub mod disk;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use codec::resource_key;
pub use disk::RedbResourceStore;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryResourceStore;
pub use traits::ResourceStore;
