//! # HOARD Drop Engine
//!
//! Fairness-corrected drop resolution for simulation reward events.
//!
//! ## Design Principles
//!
//! 1. **Registration order is trial order** - tables are scanned the way
//!    they were built, first success wins the roll
//! 2. **Fairness is a property of the resource** - one entropy state per
//!    resource, shared by every table that references it
//! 3. **Callers always get something spawnable** - empty tables and
//!    all-miss events resolve to the caller's fallback
//! 4. **External configuration** - drop tables load from TOML files
//!
//! ## Thread Safety
//!
//! The registry and the corrector each sit behind one coarse lock; the
//! engine never holds both at once. Operations are cheap and bounded by
//! table size times roll count.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hoard_drops::{DropTableConfig, SelectionEngine};
//!
//! let engine = SelectionEngine::with_defaults();
//!
//! // Load tables once at startup
//! let config = DropTableConfig::from_path("data/drops.toml".as_ref())?;
//! config.apply(&mut engine.registry().write());
//!
//! // An outcrop broke: two rolls, plain stone as the fallback
//! let drops = engine.resolve(outcrop_kind, 2, STONE);
//! for drop in drops {
//!     host.spawn(drop.resource, drop.quantity);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod entropy;
pub mod entry;
pub mod error;
pub mod registry;
pub mod seeding;
pub mod selection;

pub use config::{DropConfig, DropTableConfig, SourceTableConfig};
pub use entropy::{EntropyState, FairnessCorrector};
pub use entry::DropEntry;
pub use error::{DropsError, DropsResult};
pub use registry::DropRegistry;
pub use seeding::{seed, NativeCandidate};
pub use selection::SelectionEngine;
