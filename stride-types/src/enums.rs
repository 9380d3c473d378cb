use serde::{Deserialize, Serialize};

/// Tier classification for a user's activity count.
///
/// The ladder is evaluated top-down, first match wins:
/// 10 or more activities is a pro athlete, 3 to 9 is active,
/// everything below (0, 1 or 2) is a beginner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[serde(rename = "Pro Athlete")]
    ProAthlete,
    Active,
    Beginner,
}

impl ActivityLevel {
    pub fn from_count(activities_count: i64) -> Self {
        if activities_count >= 10 {
            ActivityLevel::ProAthlete
        } else if activities_count >= 3 {
            ActivityLevel::Active
        } else {
            ActivityLevel::Beginner
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::ProAthlete => "Pro Athlete",
            ActivityLevel::Active => "Active",
            ActivityLevel::Beginner => "Beginner",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pro Athlete" => Some(ActivityLevel::ProAthlete),
            "Active" => Some(ActivityLevel::Active),
            "Beginner" => Some(ActivityLevel::Beginner),
            _ => None,
        }
    }
}
