use std::fmt;
use std::str::FromStr;

/// One of the two sides. Teams carry no colour or orientation of their own; which
/// way a piece advances is decided by its `Direction` at setup time.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    One = 0,
    Two = 1,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    /// Scores are always reported from team one's perspective, so team one
    /// maximizes and team two minimizes.
    pub fn maximize_score(&self) -> bool {
        match self {
            Team::One => true,
            Team::Two => false,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let team_str = match self {
            Team::One => "team one",
            Team::Two => "team two",
        };
        write!(f, "{}", team_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Team {
    type Err = ParseError;
    fn from_str(team: &str) -> Result<Self, Self::Err> {
        match team {
            "one" | "1" => Ok(Team::One),
            "two" | "2" => Ok(Team::Two),
            _ => Err("invalid team; options are: one, two"),
        }
    }
}
