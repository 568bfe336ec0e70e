//! Combat resolution.
//!
//! A single attack roll between two units: the attacker rolls a d6 and adds
//! `attack_hit`, the defender rolls a d6 and adds `attack_evade`. The attack
//! lands when the attack total is at least the evade total.
//!
//! - `resolve_attack`: resolution from explicit rolls
//! - `roll_attack`: rolls both dice through [`Dice`](crate::rng::Dice), then resolves
//! - `check_hit`: the bare comparison

pub mod hit;
pub mod result;

pub use hit::{attack_total, check_hit, evade_total};
pub use result::{AttackOutcome, AttackResult, RollLine, resolve_attack, roll_attack};
