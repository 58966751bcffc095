use std::str::FromStr;

/// Puzzle generation tier requested from the gateway.
///
/// The wire representation is the lowercase tier name, which is also what
/// [`std::fmt::Display`] produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
pub enum Difficulty {
    /// Few blanks, forgiving puzzles.
    #[display("easy")]
    Easy,
    /// The service default.
    #[default]
    #[display("medium")]
    Medium,
    /// Sparse clue sets.
    #[display("hard")]
    Hard,
    /// Let the service pick a tier.
    #[display("random")]
    Random,
}

impl Difficulty {
    /// All selectable tiers, in menu order.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Random];

    /// Returns the wire name of the tier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Random => "random",
        }
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("unknown difficulty: {name:?}")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub name: String,
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "random" => Ok(Self::Random),
            _ => Err(ParseDifficultyError {
                name: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Difficulty;

    #[test]
    fn display_and_parse_round_trip() {
        for difficulty in Difficulty::ALL {
            let name = difficulty.to_string();
            assert_eq!(name, difficulty.as_str());
            assert_eq!(name.parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
