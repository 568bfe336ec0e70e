//! Loads the shipped `data/` directory end to end.

use std::path::PathBuf;

use tactics_content::ContentFactory;
use tactics_core::{BuildRules, Dice, GameConfig, RarityPolicy, presets};

fn factory() -> ContentFactory {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
    ContentFactory::new(root)
}

#[test]
fn shipped_rules_are_standard() {
    assert_eq!(factory().load_rules().unwrap(), BuildRules::STANDARD);
}

#[test]
fn shipped_classes_match_presets() {
    let factory = factory();
    let rules = factory.load_rules().unwrap();
    let classes = factory.load_classes(&rules).unwrap();

    assert_eq!(classes, presets::all(&rules));
}

#[test]
fn shipped_config_is_default() {
    assert_eq!(factory().load_config().unwrap(), GameConfig::default());
}

#[test]
fn shipped_fate_deck_draws_a_hand() {
    let table = factory().load_fate().unwrap().expect("fate.ron is shipped");
    assert_eq!(table.policy, RarityPolicy::Proportional);

    let hand = table
        .deck
        .draw_hand(5, table.weights, table.policy, &mut Dice::new(77))
        .unwrap();
    assert_eq!(hand.len(), 5);
}
