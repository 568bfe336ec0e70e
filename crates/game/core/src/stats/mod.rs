//! Stat blocks and the sparse deltas that adjust them.
//!
//! # Composition
//!
//! ```text
//! [ Baseline StatBlock ]
//!      ↓  + weight delta
//!      ↓  + range delta
//!      ↓  + spread delta
//!      ↓  + cross-axis delta
//! [ Pre-clamp StatBlock ]
//!      ↓  clamp (once)
//! [ Finished StatBlock ]
//! ```
//!
//! Every step is a pure function over `Copy` values.

pub mod block;
pub mod delta;

pub use block::StatBlock;
pub use delta::{StatDelta, StatField};
