//! Plain-text rendering shared by the TUI widgets and the headless report.

use tactics_core::{FateCard, UnitBuild};

use crate::state::{AppState, Slot};

/// Card face: the name, then one labelled line per stat.
pub fn card_lines(unit: &UnitBuild) -> Vec<String> {
    let stats = unit.stats();
    vec![
        unit.name().to_owned(),
        format!("Health: {}", stats.health),
        format!("Move: {}", stats.movement),
        format!("Atk_Damage: {}", stats.attack_damage),
        format!("Atk_Splash: {}", stats.attack_splash),
        format!("Atk_Range: {}", stats.attack_range),
        format!("Hit: {}", stats.attack_hit),
        format!("Evade: {}", stats.attack_evade),
    ]
}

pub fn fate_line(card: &FateCard) -> String {
    if card.text.is_empty() {
        format!("[{}] {}", card.rarity, card.name)
    } else {
        format!("[{}] {}: {}", card.rarity, card.name, card.text)
    }
}

/// One-shot report of the whole session.
pub fn report(state: &AppState) -> String {
    let mut lines = vec!["== Classes ==".to_owned()];
    for unit in &state.classes {
        lines.extend(card_lines(unit));
        lines.push(String::new());
    }

    for slot in [Slot::Attacker, Slot::Defender] {
        lines.push(format!("== {} ==", slot.label()));
        lines.extend(card_lines(state.slot(slot)));
        lines.push(String::new());
    }

    if let Some(attack) = &state.last_attack {
        lines.push("== Attack ==".to_owned());
        lines.push(attack.to_string());
        lines.push(String::new());
    }

    lines.push("== Board ==".to_owned());
    lines.push(state.board.render());

    if !state.fate_hand.is_empty() {
        lines.push(String::new());
        lines.push("== Fate ==".to_owned());
        lines.extend(state.fate_hand.iter().map(fate_line));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{BuildRules, GameConfig, Rarity, presets};

    #[test]
    fn card_lists_every_stat() {
        let unit = presets::find(&BuildRules::STANDARD, "Heavy Archer").unwrap();
        assert_eq!(
            card_lines(&unit),
            vec![
                "Heavy Archer",
                "Health: 6",
                "Move: 1",
                "Atk_Damage: 2",
                "Atk_Splash: 0",
                "Atk_Range: 7",
                "Hit: 4",
                "Evade: 2",
            ]
        );
    }

    #[test]
    fn fate_line_omits_empty_text() {
        assert_eq!(
            fate_line(&FateCard::new("Meteor", "", Rarity::Rare)),
            "[rare] Meteor"
        );
        assert_eq!(
            fate_line(&FateCard::new("Gust", "Move 1 less.", Rarity::Common)),
            "[common] Gust: Move 1 less."
        );
    }

    #[test]
    fn report_has_every_section() {
        let mut state = AppState::new(
            presets::all(&BuildRules::STANDARD),
            None,
            None,
            GameConfig::default(),
            None,
            9,
        )
        .unwrap();
        state.attack();

        let report = report(&state);

        assert!(report.contains("== Classes =="));
        assert!(report.contains("== Slot 1 (attacker) ==\nHeavy Archer"));
        assert!(report.contains("== Slot 2 (defender) ==\nLight Archer"));
        assert!(report.contains("Heavy Archer ATK : "));
        assert!(report.contains("== Board =="));
        assert!(!report.contains("== Fate =="));
    }

    #[test]
    fn report_ends_with_fate_hand_when_drawn() {
        let mut state = AppState::new(
            presets::all(&BuildRules::STANDARD),
            None,
            None,
            GameConfig::default(),
            None,
            9,
        )
        .unwrap();
        state.fate_hand = vec![
            FateCard::new("Gust", "Move 1 less.", Rarity::Common),
            FateCard::new("Meteor", "", Rarity::Rare),
        ];

        let report = report(&state);

        assert!(!report.contains("== Attack =="));
        assert!(report.ends_with("== Fate ==\n[common] Gust: Move 1 less.\n[rare] Meteor\n"));
    }
}
