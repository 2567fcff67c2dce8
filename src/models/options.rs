//! Fixed option lists shared by the form, the validator and both message templates.

use serde::{Deserialize, Serialize};

/// Smallest number of courts that can be booked.
pub const MIN_COURTS: u8 = 1;

/// Largest number of courts that can be booked.
pub const MAX_COURTS: u8 = 4;

/// Every game is booked for this many hours.
pub const GAME_DURATION_HOURS: u32 = 2;

/// Shuttle type advertised in the RacketPal template.
pub const SHUTTLE_TYPE: &str = "Feather";

/// Venue the game is played at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Brentford Leisure Centre, Chiswick")]
    BrentfordLeisureCentre,
    #[serde(rename = "Reynolds Leisure Center")]
    ReynoldsLeisureCenter,
}

impl Location {
    /// All venues, in dropdown order. The first one is the form default.
    pub const ALL: [Location; 2] = [Location::BrentfordLeisureCentre, Location::ReynoldsLeisureCenter];

    pub fn label(self) -> &'static str {
        match self {
            Location::BrentfordLeisureCentre => "Brentford Leisure Centre, Chiswick",
            Location::ReynoldsLeisureCenter => "Reynolds Leisure Center",
        }
    }
}

/// Skill level the game is aimed at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "Intermediate and above")]
    IntermediateAndAbove,
}

impl SkillLevel {
    /// All levels, in dropdown order.
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::IntermediateAndAbove,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::IntermediateAndAbove => "Intermediate and above",
        }
    }
}

/// Which template the announcement is rendered with.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Short group-chat post: courts and players only.
    #[default]
    Whatsapp,
    /// Longer post: day, duration and price, courts and players, shuttles, level.
    Racketpal,
}

impl MessageType {
    pub const ALL: [MessageType; 2] = [MessageType::Whatsapp, MessageType::Racketpal];
}

/// Everything the page needs to build its dropdowns and stepper.
#[derive(Clone, Debug, Serialize)]
pub struct FormOptions {
    pub locations: Vec<&'static str>,
    pub levels: Vec<&'static str>,
    pub message_types: Vec<MessageType>,
    pub min_courts: u8,
    pub max_courts: u8,
}

impl FormOptions {
    pub fn current() -> Self {
        Self {
            locations: Location::ALL.iter().map(|l| l.label()).collect(),
            levels: SkillLevel::ALL.iter().map(|l| l.label()).collect(),
            message_types: MessageType::ALL.to_vec(),
            min_courts: MIN_COURTS,
            max_courts: MAX_COURTS,
        }
    }
}
