#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables for the machine opponent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    /// Replies searched below each root move
    pub depth: u32,
    /// Candidate destinations kept per piece at every node
    pub candidate_limit: usize,
    /// Half-width of the uniform noise added to leaf scores
    pub jitter: f64,
    /// Machine turns played with a random move before searching
    pub opening_random_turns: u32,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 2,
            candidate_limit: 5,
            jitter: 0.5,
            opening_random_turns: 5,
            seed: None,
        }
    }
}
