//! Attack resolution between two unit builds.

use core::fmt;

use super::hit::{attack_total, check_hit, evade_total};
use crate::build::UnitBuild;
use crate::config::GameConfig;
use crate::rng::{Dice, RngOracle, RollContext};

/// Whether the attack landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum AttackOutcome {
    #[strum(serialize = "HIT!")]
    Hit,
    #[strum(serialize = "MISS!")]
    Miss,
}

/// One side of an attack exchange: the roll, the bonus added to it and the total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollLine {
    pub name: String,
    pub roll: u32,
    pub bonus: i32,
    pub total: i32,
}

/// Full record of a single attack roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackResult {
    pub attack: RollLine,
    pub evade: RollLine,
    pub outcome: AttackOutcome,
}

impl AttackResult {
    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }

    /// `"<name> ATK : <roll> + <hit> : <total>"`
    pub fn attack_line(&self) -> String {
        let line = &self.attack;
        format!("{} ATK : {} + {} : {}", line.name, line.roll, line.bonus, line.total)
    }

    /// `"<name> EVD : <roll> + <evade> : <total>"`
    pub fn evade_line(&self) -> String {
        let line = &self.evade;
        format!("{} EVD : {} + {} : {}", line.name, line.roll, line.bonus, line.total)
    }
}

impl fmt::Display for AttackResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.attack_line())?;
        writeln!(f, "{}", self.evade_line())?;
        write!(f, "{}", self.outcome)
    }
}

/// Resolves an attack from already-rolled dice.
///
/// Reads only `attack_hit` from the attacker and `attack_evade` from the
/// defender.
pub fn resolve_attack(
    attacker: &UnitBuild,
    defender: &UnitBuild,
    attack_roll: u32,
    evade_roll: u32,
) -> AttackResult {
    let hit = attacker.stats().attack_hit;
    let evade = defender.stats().attack_evade;

    let attack = RollLine {
        name: attacker.name().to_owned(),
        roll: attack_roll,
        bonus: hit,
        total: attack_total(attack_roll, hit),
    };
    let evade = RollLine {
        name: defender.name().to_owned(),
        roll: evade_roll,
        bonus: evade,
        total: evade_total(evade_roll, evade),
    };

    let outcome = if check_hit(attack.total, evade.total) {
        AttackOutcome::Hit
    } else {
        AttackOutcome::Miss
    };

    AttackResult {
        attack,
        evade,
        outcome,
    }
}

/// Rolls one d6 for each side, then resolves.
pub fn roll_attack<R: RngOracle>(
    attacker: &UnitBuild,
    defender: &UnitBuild,
    dice: &mut Dice<R>,
) -> AttackResult {
    let attack_roll = dice.roll(GameConfig::COMBAT_DIE_SIDES, RollContext::Attack);
    let evade_roll = dice.roll(GameConfig::COMBAT_DIE_SIDES, RollContext::Evade);
    resolve_attack(attacker, defender, attack_roll, evade_roll)
}
