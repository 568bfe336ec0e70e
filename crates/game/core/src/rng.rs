//! Deterministic dice.
//!
//! Every random element of the prototype (attack and evade rolls, terrain,
//! fate draws) goes through an [`RngOracle`]. Given the same game seed the
//! whole session replays identically.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides.max(1)) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }
}

/// PCG-XSH-RR generator: 64-bit state, 32-bit output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// What a roll is for. Mixed into the seed so that two rolls made at the same
/// nonce for different purposes stay independent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollContext {
    Attack = 0,
    Evade = 1,
    Terrain = 2,
    FateRarity = 3,
    FateCard = 4,
}

/// Derives the seed of a single roll from the session seed, the roll counter
/// and the roll context.
pub fn compute_seed(game_seed: u64, nonce: u64, context: RollContext) -> u64 {
    let mut hash = game_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Stateful dice cup over an [`RngOracle`].
///
/// Each roll advances an internal nonce, so successive rolls differ while the
/// full sequence stays a pure function of the game seed.
#[derive(Clone, Debug)]
pub struct Dice<R: RngOracle = PcgRng> {
    oracle: R,
    game_seed: u64,
    nonce: u64,
}

impl Dice<PcgRng> {
    pub fn new(game_seed: u64) -> Self {
        Self::with_oracle(PcgRng, game_seed)
    }
}

impl<R: RngOracle> Dice<R> {
    pub fn with_oracle(oracle: R, game_seed: u64) -> Self {
        Self {
            oracle,
            game_seed,
            nonce: 0,
        }
    }

    /// Number of rolls made so far.
    pub fn rolls(&self) -> u64 {
        self.nonce
    }

    fn next_seed(&mut self, context: RollContext) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, context);
        self.nonce += 1;
        seed
    }

    /// Rolls a die with `sides` faces (1..=sides).
    pub fn roll(&mut self, sides: u32, context: RollContext) -> u32 {
        let seed = self.next_seed(context);
        self.oracle.roll_die(seed, sides)
    }

    /// Uniform value in `[min, max]`.
    pub fn range(&mut self, min: u32, max: u32, context: RollContext) -> u32 {
        let seed = self.next_seed(context);
        self.oracle.range(seed, min, max)
    }

    /// Uniform index in `0..len`. Returns 0 for empty or single-element ranges.
    pub fn index(&mut self, len: usize, context: RollContext) -> usize {
        if len <= 1 {
            return 0;
        }
        let upper = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.range(0, upper, context) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn die_rolls_stay_in_bounds() {
        let rng = PcgRng;
        for seed in 0..500 {
            let roll = rng.roll_die(seed, 6);
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn range_with_collapsed_bounds_returns_min() {
        assert_eq!(PcgRng.range(7, 3, 3), 3);
        assert_eq!(PcgRng.range(7, 5, 2), 5);
    }

    #[test]
    fn context_changes_the_seed() {
        let attack = compute_seed(1, 0, RollContext::Attack);
        let evade = compute_seed(1, 0, RollContext::Evade);
        assert_ne!(attack, evade);
    }

    #[test]
    fn dice_replay_from_same_seed() {
        let mut first = Dice::new(99);
        let mut second = Dice::new(99);

        let a: Vec<_> = (0..20).map(|_| first.roll(20, RollContext::Terrain)).collect();
        let b: Vec<_> = (0..20).map(|_| second.roll(20, RollContext::Terrain)).collect();

        assert_eq!(a, b);
        assert_eq!(first.rolls(), 20);
    }

    #[test]
    fn index_covers_the_whole_range() {
        let mut dice = Dice::new(5);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[dice.index(4, RollContext::FateCard)] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
        assert_eq!(dice.index(0, RollContext::FateCard), 0);
    }
}
