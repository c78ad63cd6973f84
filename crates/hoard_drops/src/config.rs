//! # Drop Table Configuration
//!
//! TOML-backed load/save of registry contents. The startup loader reads one
//! or more table files and applies them; hosts can also snapshot the live
//! registry back out, and generate a commented starter file for players to
//! edit.
//!
//! A record decodes to `(source_type, resource, chance, quantity?,
//! exclusive?)`; quantity defaults to 1 and exclusive to false, matching
//! what small breakables need.

use crate::entry::DropEntry;
use crate::error::DropsResult;
use crate::registry::DropRegistry;
use hoard_core::{ResourceId, SourceTypeId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Starter file written by [`DropTableConfig::write_sample_to_path`].
const SAMPLE: &str = r#"# HOARD drop tables.
#
# Each [[source]] block configures one source type (an outcrop kind, a
# creature species). Drops are tried in file order; the first success of a
# roll wins it. Chances are per-trial probabilities in [0, 1].

[[source]]
source_type = 1

# Common haul, most rolls land here.
[[source.drop]]
resource = 100
chance = 0.7

# Long-shot crystal. Exclusive: when it drops, the event ends with it.
[[source.drop]]
resource = 101
chance = 0.05
quantity = 2
exclusive = true

[[source]]
source_type = 2

[[source.drop]]
resource = 100
chance = 0.25
"#;

/// One configured drop record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropConfig {
    /// The resource to spawn.
    pub resource: ResourceId,
    /// Per-trial probability in `[0, 1]`.
    pub chance: f32,
    /// Copies spawned when chosen; defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Whether this drop preempts the remaining rolls; defaults to false.
    #[serde(default)]
    pub exclusive: bool,
}

/// Default quantity for records that omit one.
const fn default_quantity() -> u32 {
    1
}

impl From<&DropConfig> for DropEntry {
    fn from(config: &DropConfig) -> Self {
        DropEntry::new(config.resource, config.chance)
            .with_quantity(config.quantity)
            .with_exclusive(config.exclusive)
    }
}

impl From<&DropEntry> for DropConfig {
    fn from(entry: &DropEntry) -> Self {
        Self {
            resource: entry.resource,
            chance: entry.chance,
            quantity: entry.quantity,
            exclusive: entry.exclusive,
        }
    }
}

/// The candidate table for one source type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceTableConfig {
    /// The source type this table belongs to.
    pub source_type: SourceTypeId,
    /// Candidate drops in trial order.
    #[serde(default, rename = "drop")]
    pub drops: Vec<DropConfig>,
}

/// A full drop table file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropTableConfig {
    /// Per source-type tables, in file order.
    #[serde(default, rename = "source")]
    pub sources: Vec<SourceTableConfig>,
}

impl DropTableConfig {
    /// Decodes a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DropsError::Parse`] when the text is not a valid
    /// drop table file.
    pub fn from_toml_str(text: &str) -> DropsResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DropsError::Io`] when the file cannot be read and
    /// [`crate::DropsError::Parse`] when it does not decode.
    pub fn from_path(path: &Path) -> DropsResult<Self> {
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        tracing::info!(
            path = %path.display(),
            sources = config.sources.len(),
            entries = config.entry_count(),
            "loaded drop tables"
        );
        Ok(config)
    }

    /// Encodes the config as TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DropsError::Serialize`] when encoding fails.
    pub fn to_toml_string(&self) -> DropsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Saves the config to a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DropsError::Serialize`] when encoding fails and
    /// [`crate::DropsError::Io`] when the file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> DropsResult<()> {
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Applies every record with upsert semantics.
    ///
    /// The startup loader's path: the file is authoritative and overwrites
    /// whatever is registered. Returns how many records were applied.
    pub fn apply(&self, registry: &mut DropRegistry) -> usize {
        let pairs = self.as_pairs();
        registry.upsert_many(&pairs);
        pairs.len()
    }

    /// Applies every record with try-add semantics.
    ///
    /// Baseline data that must not clobber custom registrations. Returns
    /// how many records were newly created.
    pub fn apply_defaults(&self, registry: &mut DropRegistry) -> usize {
        registry.try_add_many(&self.as_pairs())
    }

    /// Captures the live registry as a config, sources sorted by id.
    ///
    /// Entry order inside each source is registration order, so a snapshot
    /// applied to an empty registry reproduces the trial order exactly.
    #[must_use]
    pub fn snapshot(registry: &DropRegistry) -> Self {
        let mut source_ids: Vec<_> = registry.sources().collect();
        source_ids.sort_unstable();

        let sources = source_ids
            .into_iter()
            .map(|source_type| SourceTableConfig {
                source_type,
                drops: registry
                    .entries_for(source_type)
                    .iter()
                    .map(DropConfig::from)
                    .collect(),
            })
            .collect();
        Self { sources }
    }

    /// Writes a commented starter file players can edit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DropsError::Io`] when the file cannot be written.
    pub fn write_sample_to_path(path: &Path) -> DropsResult<()> {
        fs::write(path, SAMPLE)?;
        Ok(())
    }

    /// Total number of drop records across all sources.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.sources.iter().map(|s| s.drops.len()).sum()
    }

    fn as_pairs(&self) -> Vec<(SourceTypeId, DropEntry)> {
        self.sources
            .iter()
            .flat_map(|source| {
                source
                    .drops
                    .iter()
                    .map(|drop| (source.source_type, DropEntry::from(drop)))
            })
            .collect()
    }
}
