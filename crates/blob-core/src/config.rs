//! Strongly-typed simulation parameters.
//!
//! [`BlobConfig`] groups every tunable of the colony into named sections.
//! All sections implement `Default`; when decoded from JSON, missing keys
//! fall back to those defaults. [`BlobConfig::validate()`] checks the
//! numeric invariants once, at construction or load time.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── ScouterConfig ──────────────────────────────────────────────────

/// Trail deposit and population floor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScouterConfig {
    /// Trail deposited on a cell per unit of stored food eaten. Default: 25.0.
    pub drop_by_eat: f64,
    /// Minimum number of agents kept alive. Default: 2.
    pub min: usize,
}

impl Default for ScouterConfig {
    fn default() -> Self {
        Self {
            drop_by_eat: 25.0,
            min: 2,
        }
    }
}

// ── HarvestConfig ──────────────────────────────────────────────────

/// The stored-resource economy that drives the ant state machine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Stored level at which a starving ant goes back to scouting. Default: 50.0.
    pub min: f64,
    /// Storage capacity of an ant. Default: 100.0.
    pub max: f64,
    /// Stored amount spent per step on an untouched cell. Default: 5.0.
    pub eat: f64,
    /// Amount withdrawn from a food cell per step. Default: 10.0.
    pub collect: f64,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 100.0,
            eat: 5.0,
            collect: 10.0,
        }
    }
}

// ── ScoutingConfig ─────────────────────────────────────────────────

/// Parameters of the exploring (scouting) behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutingConfig {
    /// Sightline radius in cells; `<= 0` means the whole board. Default: 3.
    pub sightline: i32,
    /// Allow diagonal steps when planning. Default: true.
    pub diagonal_moves: bool,
    /// Keep a planned path until it is exhausted instead of replanning
    /// every tick. Default: true.
    pub light_compute: bool,
    /// Probability of staying in (or returning to) local exploration.
    /// Default: 0.4.
    pub global_explore_probability: f64,
    /// Force local exploration while standing on food. Default: true.
    pub search_locally_on_food: bool,
}

impl Default for ScoutingConfig {
    fn default() -> Self {
        Self {
            sightline: 3,
            diagonal_moves: true,
            light_compute: true,
            global_explore_probability: 0.4,
            search_locally_on_food: true,
        }
    }
}

// ── GatheringConfig ────────────────────────────────────────────────

/// Parameters of the food-seeking (gathering) behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatheringConfig {
    /// Sightline radius in cells; `<= 0` means the whole board. Default: -1.
    pub sightline: i32,
    /// Allow diagonal steps when planning. Default: true.
    pub diagonal_moves: bool,
    /// Keep a planned path until it is exhausted. Default: true.
    pub light_compute: bool,
}

impl Default for GatheringConfig {
    fn default() -> Self {
        Self {
            sightline: -1,
            diagonal_moves: true,
            light_compute: true,
        }
    }
}

// ── PopulationWeights ──────────────────────────────────────────────

/// Weights of the population-control formula.
///
/// ```text
/// target = max(min, floor((Wb * total + Wc * cover + Wf * foods) * Wg * area / 100000))
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationWeights {
    /// `Wb`, applied to the total intensity percentage. Default: 5.0.
    pub blob_size_factor: f64,
    /// `Wc`, applied to the coverage percentage. Default: 1.0.
    pub covering_factor: f64,
    /// `Wf`, applied to the number of known food cells. Default: 10.0.
    pub known_foods_factor: f64,
    /// `Wg`, global multiplier. Default: 10.0.
    pub global_factor: f64,
}

impl Default for PopulationWeights {
    fn default() -> Self {
        Self {
            blob_size_factor: 5.0,
            covering_factor: 1.0,
            known_foods_factor: 10.0,
            global_factor: 10.0,
        }
    }
}

// ── BlobConfig ─────────────────────────────────────────────────────

/// Every tunable parameter of the colony.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    /// Deposit and population floor.
    pub scouters: ScouterConfig,
    /// Stored-resource economy.
    pub harvesting: HarvestConfig,
    /// Exploration behaviour.
    pub scouting: ScoutingConfig,
    /// Food-seeking behaviour.
    pub gathering: GatheringConfig,
    /// Population-control weights.
    pub computing: PopulationWeights,
    /// Intensity removed from every touched cell per tick. Default: 0.5.
    pub global_decrease: f64,
    /// Food cells at or below this intensity are exempt from decay. Default: 5.0.
    pub remaining_blob_on_food: f64,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            scouters: ScouterConfig::default(),
            harvesting: HarvestConfig::default(),
            scouting: ScoutingConfig::default(),
            gathering: GatheringConfig::default(),
            computing: PopulationWeights::default(),
            global_decrease: 0.5,
            remaining_blob_on_food: 5.0,
        }
    }
}

impl BlobConfig {
    /// Check every numeric invariant.
    ///
    /// Population weights may be negative (they are clamped by the
    /// population floor) but must be finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("scouters.drop_by_eat", self.scouters.drop_by_eat)?;
        non_negative("harvesting.min", self.harvesting.min)?;
        non_negative("harvesting.max", self.harvesting.max)?;
        non_negative("harvesting.eat", self.harvesting.eat)?;
        non_negative("harvesting.collect", self.harvesting.collect)?;
        if self.harvesting.min > self.harvesting.max {
            return Err(ConfigError::HarvestBoundsInverted {
                min: self.harvesting.min,
                max: self.harvesting.max,
            });
        }

        let p = self.scouting.global_explore_probability;
        finite("scouting.global_explore_probability", p)?;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange {
                field: "scouting.global_explore_probability",
                value: p,
            });
        }

        finite("computing.blob_size_factor", self.computing.blob_size_factor)?;
        finite("computing.covering_factor", self.computing.covering_factor)?;
        finite("computing.known_foods_factor", self.computing.known_foods_factor)?;
        finite("computing.global_factor", self.computing.global_factor)?;

        non_negative("global_decrease", self.global_decrease)?;
        non_negative("remaining_blob_on_food", self.remaining_blob_on_food)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
