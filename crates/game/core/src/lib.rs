//! Deterministic rules for the tactics prototype.
//!
//! `tactics-core` holds the unit build engine, the canonical source of every
//! unit's stat block, together with the small rule pieces that consume it:
//! the attack resolver, the terrain board generator and the fate deck.
//! Everything here is pure; randomness only enters through a seeded
//! [`rng::Dice`], so a session replays exactly from its seed.
pub mod board;
pub mod build;
pub mod combat;
pub mod config;
pub mod error;
pub mod fate;
pub mod rng;
pub mod stats;

pub use board::{Board, BoardSquare, Position, Terrain};
pub use build::{
    Archetype, AttackRange, AttackSpread, Axis, AxisSelection, AxisValue, BuildRules, ClassSpec,
    SynergyPolicy, UnitBuild, Weight, cross_modifiers, make_unit_build, make_unit_build_from_strs,
    parse_axis, presets,
};
pub use combat::{AttackOutcome, AttackResult, resolve_attack, roll_attack};
pub use config::GameConfig;
pub use error::{BuildError, DeckError, GameError};
pub use fate::{FateCard, FateDeck, Rarity, RarityCounts, RarityPolicy, RarityWeights};
pub use rng::{Dice, PcgRng, RngOracle, RollContext};
pub use stats::{StatBlock, StatDelta, StatField};
