//! Fate cards and their rarity.

/// How often a card should come up.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare];

    /// Other rarities to try when a bucket is empty, nearest first.
    pub const fn fallbacks(self) -> [Rarity; 2] {
        match self {
            Rarity::Common => [Rarity::Uncommon, Rarity::Rare],
            Rarity::Uncommon => [Rarity::Common, Rarity::Rare],
            Rarity::Rare => [Rarity::Uncommon, Rarity::Common],
        }
    }
}

/// A random event card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateCard {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rarity: Rarity,
}

impl FateCard {
    pub fn new(name: impl Into<String>, text: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            rarity,
        }
    }
}
