//! Hit check: attack total against evade total.

/// Attack roll plus the attacker's hit bonus.
pub fn attack_total(roll: u32, attack_hit: i32) -> i32 {
    roll as i32 + attack_hit
}

/// Evade roll plus the defender's evade bonus.
pub fn evade_total(roll: u32, attack_evade: i32) -> i32 {
    roll as i32 + attack_evade
}

/// `true` when the attack lands. Ties go to the attacker.
pub fn check_hit(attack_total: i32, evade_total: i32) -> bool {
    attack_total >= evade_total
}
