//! Application state: the card rack, the two selection slots and the
//! results of the last attack, board and fate draw.

use anyhow::{Result, bail};
use tactics_content::FateTable;
use tactics_core::{AttackResult, Board, Dice, FateCard, GameConfig, UnitBuild, roll_attack};

/// One of the two selection slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Attacker,
    Defender,
}

impl Slot {
    pub const fn index(self) -> usize {
        match self {
            Slot::Attacker => 0,
            Slot::Defender => 1,
        }
    }

    pub const fn other(self) -> Self {
        match self {
            Slot::Attacker => Slot::Defender,
            Slot::Defender => Slot::Attacker,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Slot::Attacker => "Slot 1 (attacker)",
            Slot::Defender => "Slot 2 (defender)",
        }
    }
}

pub struct AppState {
    pub classes: Vec<UnitBuild>,
    /// Highlighted card in the rack.
    pub cursor: usize,
    /// Slot the next assignment writes into.
    pub active_slot: Slot,
    pub slots: [UnitBuild; 2],
    pub last_attack: Option<AttackResult>,
    pub board: Board,
    pub fate: Option<FateTable>,
    pub fate_hand: Vec<FateCard>,
    pub config: GameConfig,
    dice: Dice,
}

impl AppState {
    /// Builds the initial state. Slots take the named classes when they exist,
    /// otherwise the first two classes of the rack.
    pub fn new(
        classes: Vec<UnitBuild>,
        attacker: Option<&str>,
        defender: Option<&str>,
        config: GameConfig,
        fate: Option<FateTable>,
        seed: u64,
    ) -> Result<Self> {
        let Some(first) = classes.first() else {
            bail!("No classes to choose from");
        };
        let second = classes.get(1).unwrap_or(first);

        let attacker = pick_class(&classes, attacker).unwrap_or(first).clone();
        let defender = pick_class(&classes, defender).unwrap_or(second).clone();

        let mut dice = Dice::new(seed);
        let board = Board::generate(config.board_side, &mut dice);

        Ok(Self {
            classes,
            cursor: 0,
            active_slot: Slot::Attacker,
            slots: [attacker, defender],
            last_attack: None,
            board,
            fate,
            fate_hand: Vec::new(),
            config,
            dice,
        })
    }

    pub fn slot(&self, slot: Slot) -> &UnitBuild {
        &self.slots[slot.index()]
    }

    pub fn highlighted(&self) -> &UnitBuild {
        &self.classes[self.cursor]
    }

    /// Moves the rack cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, step: isize) {
        let len = self.classes.len() as isize;
        self.cursor = (self.cursor as isize + step).rem_euclid(len) as usize;
    }

    pub fn select_slot(&mut self, slot: Slot) {
        self.active_slot = slot;
    }

    pub fn toggle_slot(&mut self) {
        self.active_slot = self.active_slot.other();
    }

    /// Puts the highlighted class into the active slot.
    pub fn assign_highlighted(&mut self) {
        let unit = self.highlighted().clone();
        tracing::debug!("{} <- {}", self.active_slot.label(), unit.name());
        self.slots[self.active_slot.index()] = unit;
    }

    /// Rolls slot 1 against slot 2.
    pub fn attack(&mut self) -> &AttackResult {
        let [attacker, defender] = &self.slots;
        let result = roll_attack(attacker, defender, &mut self.dice);
        tracing::info!(
            "{} vs {}: {} against {} -> {}",
            attacker.name(),
            defender.name(),
            result.attack.total,
            result.evade.total,
            result.outcome
        );
        self.last_attack.insert(result)
    }

    pub fn regenerate_board(&mut self) {
        self.board = Board::generate(self.config.board_side, &mut self.dice);
    }

    /// Draws a fresh fate hand. Returns `false` when no deck is loaded.
    pub fn draw_fate(&mut self) -> Result<bool> {
        let Some(table) = &self.fate else {
            return Ok(false);
        };
        let hand = table.deck.draw_hand(
            self.config.fate_hand_size,
            table.weights,
            table.policy,
            &mut self.dice,
        )?;
        self.fate_hand = hand.into_iter().cloned().collect();
        Ok(true)
    }
}

fn pick_class<'a>(classes: &'a [UnitBuild], name: Option<&str>) -> Option<&'a UnitBuild> {
    let name = name?;
    let found = classes
        .iter()
        .find(|unit| unit.name().eq_ignore_ascii_case(name));
    if found.is_none() {
        tracing::warn!("Class '{}' not found, using default slot", name);
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{BuildRules, FateDeck, Rarity, RarityPolicy, RarityWeights, presets};

    fn state() -> AppState {
        AppState::new(
            presets::all(&BuildRules::STANDARD),
            None,
            None,
            GameConfig::default(),
            None,
            42,
        )
        .unwrap()
    }

    #[test]
    fn default_slots_are_first_two_classes() {
        let state = state();
        assert_eq!(state.slot(Slot::Attacker).name(), "Heavy Archer");
        assert_eq!(state.slot(Slot::Defender).name(), "Light Archer");
    }

    #[test]
    fn named_slots_are_case_insensitive_with_fallback() {
        let state = AppState::new(
            presets::all(&BuildRules::STANDARD),
            Some("light brawler"),
            Some("Nobody"),
            GameConfig::default(),
            None,
            1,
        )
        .unwrap();

        assert_eq!(state.slot(Slot::Attacker).name(), "Light Brawler");
        assert_eq!(state.slot(Slot::Defender).name(), "Light Archer");
    }

    #[test]
    fn empty_rack_is_an_error() {
        let result = AppState::new(Vec::new(), None, None, GameConfig::default(), None, 0);
        assert!(result.is_err());
    }

    #[test]
    fn cursor_wraps() {
        let mut state = state();
        state.move_cursor(-1);
        assert_eq!(state.cursor, 7);
        state.move_cursor(2);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn assignment_targets_active_slot() {
        let mut state = state();
        state.move_cursor(5);
        state.select_slot(Slot::Defender);
        state.assign_highlighted();

        assert_eq!(state.slot(Slot::Defender).name(), "Light Duelist");
        assert_eq!(state.slot(Slot::Attacker).name(), "Heavy Archer");

        state.toggle_slot();
        assert_eq!(state.active_slot, Slot::Attacker);
    }

    #[test]
    fn attack_records_result() {
        let mut state = state();
        let outcome = state.attack().outcome;
        assert_eq!(state.last_attack.as_ref().map(|r| r.outcome), Some(outcome));
    }

    #[test]
    fn fate_draw_without_deck_is_noop() {
        let mut state = state();
        assert!(!state.draw_fate().unwrap());
        assert!(state.fate_hand.is_empty());
    }

    #[test]
    fn fate_draw_fills_hand() {
        let deck = FateDeck::new([
            FateCard::new("Gust", "", Rarity::Common),
            FateCard::new("Meteor", "", Rarity::Rare),
        ])
        .unwrap();
        let fate = FateTable {
            deck,
            weights: RarityWeights::default(),
            policy: RarityPolicy::GuaranteeRare,
        };
        let mut state = AppState::new(
            presets::all(&BuildRules::STANDARD),
            None,
            None,
            GameConfig::default().with_fate_hand_size(5),
            Some(fate),
            3,
        )
        .unwrap();

        assert!(state.draw_fate().unwrap());
        assert_eq!(state.fate_hand.len(), 5);
        assert_eq!(state.fate_hand.last().map(|c| c.rarity), Some(Rarity::Rare));
    }
}
