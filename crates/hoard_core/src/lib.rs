//! # HOARD Core
//!
//! Common types used by both the drop engine and the host-side bridges
//! that feed it gameplay events.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - the host simulation or any scene/physics crate
//! - the drop engine itself
//!
//! If you need engine behavior, put it in `hoard_drops`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod ids;

pub use constants::{DEFAULT_DROP_CHANCE, DEFAULT_DROP_QUANTITY};
pub use events::{ResolvedDrop, RewardTrigger};
pub use ids::{ResourceId, SourceTypeId};
