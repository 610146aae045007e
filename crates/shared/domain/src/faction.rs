//! The faction roster schema.
//!
//! One faction corresponds to one JSON fixture. The wire format keeps the
//! attribute keys of the source data (French display labels, camelCase list
//! keys) while the Rust fields carry language-neutral names. Parsing is
//! strict: a missing or unknown field is a deserialization error, so schema
//! drift surfaces at load time instead of rendering garbage.

use serde::{Deserialize, Serialize};

/// Display labels for the five unit attributes, in table order.
pub const STAT_LABELS: [&str; 5] = ["Mouvement", "CC", "CT", "Endurance", "Commandement"];

/// Profile line of a unit. Values are non-negative by construction; no upper
/// bound is assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitStats {
    #[serde(rename = "Mouvement")]
    pub movement: u32,
    #[serde(rename = "CC")]
    pub melee: u32,
    #[serde(rename = "CT")]
    pub ranged: u32,
    #[serde(rename = "Endurance")]
    pub endurance: u32,
    #[serde(rename = "Commandement")]
    pub command: u32,
}

impl UnitStats {
    /// Returns `(label, value)` pairs in declared attribute order.
    ///
    /// Renderers iterate this instead of naming fields so the label text and
    /// the ordering live in exactly one place.
    #[must_use]
    pub const fn rows(&self) -> [(&'static str, u32); 5] {
        [
            (STAT_LABELS[0], self.movement),
            (STAT_LABELS[1], self.melee),
            (STAT_LABELS[2], self.ranged),
            (STAT_LABELS[3], self.endurance),
            (STAT_LABELS[4], self.command),
        ]
    }
}

/// An optional, mutually-exclusive enhancement choice attached to a unit.
///
/// Display data only: selecting an upgrade has no modeled consequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Upgrade {
    pub name: String,
    /// Points added on top of the unit cost.
    pub cost: u32,
    /// Free-text effect description.
    pub effect: String,
}

/// A single roster entry: stats, equipment, rules, and optional upgrades.
///
/// Immutable once loaded. `id` is unique within its faction and keys the
/// rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Unit {
    pub id: String,
    pub name: String,
    /// Base point cost.
    pub cost: u32,
    pub stats: UnitStats,
    pub weapons: Vec<String>,
    pub special_rules: Vec<String>,
    pub upgrades: Vec<Upgrade>,
}

/// A named, ordered collection of units; the unit of data loaded per page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Faction {
    pub name: String,
    pub units: Vec<Unit>,
}
