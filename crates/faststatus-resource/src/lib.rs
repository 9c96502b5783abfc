//! Core model types for faststatus.
//!
//! This crate provides the resource occupancy model shared by every other
//! faststatus crate: the [`Status`] code, the [`Resource`] record, and the
//! two textual forms (compact line text and structured JSON) they serialize
//! to. It contains no I/O; storage and transport live in `faststatus-store`
//! and `faststatus-server`.
//!
//! # Key Types
//!
//! - [`Status`] — Occupancy code over the closed range Free / Busy / Occupied
//! - [`ResourceId`] — 64-bit identifier with fixed hex rendering conventions
//! - [`Resource`] — A tracked resource: identity, name, status, and since-when
//! - [`ResourceError`] — Out-of-range and parse failures

pub mod error;
pub mod resource;
pub mod status;

pub use error::ResourceError;
pub use resource::{Resource, ResourceId};
pub use status::Status;
