//! # Identifier Types
//!
//! Opaque identifiers shared between the engine and its hosts.
//! Both compare by value; neither carries any meaning the host
//! did not assign to it.

/// Unique identifier for a category of drop-triggering thing
/// (an outcrop kind, a creature species).
pub type SourceTypeId = u32;

/// Unique identifier for a resource that can be dropped.
pub type ResourceId = u32;
