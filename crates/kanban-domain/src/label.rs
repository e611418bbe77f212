use chrono::{DateTime, Utc};
use kanban_core::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::board::BoardId;

pub type LabelId = Uuid;

/// Target label palette. Declaration order is significant: color matching
/// picks the first entry that fits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelColor {
    BerryRed,
    PumpkinOrange,
    LagoonBlue,
    PinkTulip,
    LightMud,
    OrangePeel,
    BrightMoss,
    AntiqueBlue,
    DarkGranite,
    LaguneBlue,
    SunnyGrass,
    MorningSky,
    LightOrange,
    MidnightBlue,
    TankGreen,
    GunMetal,
    WetMoss,
    RedBurgundy,
    LightConcrete,
    ApricotRed,
    #[default]
    DesertSand,
    NavyBlue,
    EggYellow,
    CoralGreen,
    LightCocoa,
}

impl LabelColor {
    pub const ALL: [LabelColor; 25] = [
        Self::BerryRed,
        Self::PumpkinOrange,
        Self::LagoonBlue,
        Self::PinkTulip,
        Self::LightMud,
        Self::OrangePeel,
        Self::BrightMoss,
        Self::AntiqueBlue,
        Self::DarkGranite,
        Self::LaguneBlue,
        Self::SunnyGrass,
        Self::MorningSky,
        Self::LightOrange,
        Self::MidnightBlue,
        Self::TankGreen,
        Self::GunMetal,
        Self::WetMoss,
        Self::RedBurgundy,
        Self::LightConcrete,
        Self::ApricotRed,
        Self::DesertSand,
        Self::NavyBlue,
        Self::EggYellow,
        Self::CoralGreen,
        Self::LightCocoa,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BerryRed => "berry-red",
            Self::PumpkinOrange => "pumpkin-orange",
            Self::LagoonBlue => "lagoon-blue",
            Self::PinkTulip => "pink-tulip",
            Self::LightMud => "light-mud",
            Self::OrangePeel => "orange-peel",
            Self::BrightMoss => "bright-moss",
            Self::AntiqueBlue => "antique-blue",
            Self::DarkGranite => "dark-granite",
            Self::LaguneBlue => "lagune-blue",
            Self::SunnyGrass => "sunny-grass",
            Self::MorningSky => "morning-sky",
            Self::LightOrange => "light-orange",
            Self::MidnightBlue => "midnight-blue",
            Self::TankGreen => "tank-green",
            Self::GunMetal => "gun-metal",
            Self::WetMoss => "wet-moss",
            Self::RedBurgundy => "red-burgundy",
            Self::LightConcrete => "light-concrete",
            Self::ApricotRed => "apricot-red",
            Self::DesertSand => "desert-sand",
            Self::NavyBlue => "navy-blue",
            Self::EggYellow => "egg-yellow",
            Self::CoralGreen => "coral-green",
            Self::LightCocoa => "light-cocoa",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelColor {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| KanbanError::Validation(format!("Unknown label color: {}", s)))
    }
}

/// Fields for creating a label on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLabel {
    pub name: Option<String>,
    pub color: LabelColor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    pub id: LabelId,
    pub board_id: BoardId,
    pub name: Option<String>,
    pub color: LabelColor,
    pub created_at: DateTime<Utc>,
}

impl Label {
    pub fn new(board_id: BoardId, fields: NewLabel) -> Self {
        Self {
            id: Uuid::new_v4(),
            board_id,
            name: fields.name,
            color: fields.color,
            created_at: Utc::now(),
        }
    }
}
