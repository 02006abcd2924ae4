//! Named mistake rates for the computer opponent.

use serde::{Deserialize, Serialize};

/// How often the computer ignores its search and plays a random square.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random half the time.
    Easy,
    /// One move in five is random.
    #[default]
    Normal,
    /// Rarely random.
    Hard,
    /// Never random; cannot be beaten.
    Perfect,
}

impl Difficulty {
    /// Chance per move of playing a random square.
    pub fn mistake_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.5,
            Difficulty::Normal => 0.2,
            Difficulty::Hard => 0.05,
            Difficulty::Perfect => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!("perfect".parse::<Difficulty>(), Ok(Difficulty::Perfect));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_probabilities_decrease_with_difficulty() {
        let rates: Vec<f64> = Difficulty::iter().map(Difficulty::mistake_probability).collect();
        assert!(rates.windows(2).all(|pair| pair[0] > pair[1]));
        assert!(rates.iter().all(|p| (0.0..=1.0).contains(p)));
    }
}
