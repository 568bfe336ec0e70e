/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Side length of the square terrain board.
    pub board_side: usize,
    /// Number of fate cards drawn per hand.
    pub fate_hand_size: usize,
}

impl GameConfig {
    // ===== fixed dice =====
    /// Attack and evade rolls.
    pub const COMBAT_DIE_SIDES: u32 = 6;
    /// Terrain roll per board square.
    pub const TERRAIN_DIE_SIDES: u32 = 20;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_SIDE: usize = 8;
    pub const MIN_BOARD_SIDE: usize = 3;
    pub const MAX_BOARD_SIDE: usize = 64;
    pub const DEFAULT_FATE_HAND_SIZE: usize = 5;
    pub const MAX_FATE_HAND_SIZE: usize = 64;

    pub fn new() -> Self {
        Self {
            board_side: Self::DEFAULT_BOARD_SIDE,
            fate_hand_size: Self::DEFAULT_FATE_HAND_SIZE,
        }
    }

    /// Overrides the board side, kept within
    /// [`Self::MIN_BOARD_SIDE`]..=[`Self::MAX_BOARD_SIDE`].
    #[must_use]
    pub fn with_board_side(mut self, board_side: usize) -> Self {
        self.board_side = board_side.clamp(Self::MIN_BOARD_SIDE, Self::MAX_BOARD_SIDE);
        self
    }

    /// Overrides the fate hand size, capped at [`Self::MAX_FATE_HAND_SIZE`].
    #[must_use]
    pub fn with_fate_hand_size(mut self, fate_hand_size: usize) -> Self {
        self.fate_hand_size = fate_hand_size.min(Self::MAX_FATE_HAND_SIZE);
        self
    }

    /// Re-applies the bounds of both `with_*` setters, for values that were
    /// deserialized directly.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (board_side, fate_hand_size) = (self.board_side, self.fate_hand_size);
        self.with_board_side(board_side)
            .with_fate_hand_size(fate_hand_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_side_has_a_minimum() {
        let config = GameConfig::new().with_board_side(1);
        assert_eq!(config.board_side, GameConfig::MIN_BOARD_SIDE);
    }

    #[test]
    fn board_side_and_hand_size_are_capped() {
        let config = GameConfig::new()
            .with_board_side(usize::MAX)
            .with_fate_hand_size(usize::MAX);

        assert_eq!(config.board_side, GameConfig::MAX_BOARD_SIDE);
        assert_eq!(config.fate_hand_size, GameConfig::MAX_FATE_HAND_SIZE);
    }

    #[test]
    fn normalized_applies_both_bounds() {
        let raw = GameConfig {
            board_side: 0,
            fate_hand_size: 1_000_000,
        };

        let config = raw.normalized();

        assert_eq!(config.board_side, GameConfig::MIN_BOARD_SIDE);
        assert_eq!(config.fate_hand_size, GameConfig::MAX_FATE_HAND_SIZE);
        assert_eq!(GameConfig::default().normalized(), GameConfig::default());
    }
}
