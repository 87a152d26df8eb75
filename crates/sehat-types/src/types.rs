//! Shared selector enums for form inputs and report generation

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// Display label for language selectors
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी (Hindi)",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "english"),
            Language::Hindi => write!(f, "hindi"),
        }
    }
}

/// Engine sound as reported by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineSound {
    #[default]
    Smooth,
    Grinding,
    Ticking,
    Knocking,
}

impl EngineSound {
    pub const ALL: [EngineSound; 4] = [
        EngineSound::Smooth,
        EngineSound::Grinding,
        EngineSound::Ticking,
        EngineSound::Knocking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EngineSound::Smooth => "Smooth",
            EngineSound::Grinding => "Grinding",
            EngineSound::Ticking => "Ticking",
            EngineSound::Knocking => "Knocking",
        }
    }
}

impl std::fmt::Display for EngineSound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Exhaust smoke color as reported by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhaustSmoke {
    #[default]
    None,
    White,
    Black,
    Blue,
}

impl ExhaustSmoke {
    pub const ALL: [ExhaustSmoke; 4] = [
        ExhaustSmoke::None,
        ExhaustSmoke::White,
        ExhaustSmoke::Black,
        ExhaustSmoke::Blue,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExhaustSmoke::None => "None",
            ExhaustSmoke::White => "White",
            ExhaustSmoke::Black => "Black",
            ExhaustSmoke::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for ExhaustSmoke {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accident history as reported by the user
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccidentHistory {
    #[default]
    NoAccidents,
    MinorDents,
    MajorCollision,
}

impl AccidentHistory {
    pub const ALL: [AccidentHistory; 3] = [
        AccidentHistory::NoAccidents,
        AccidentHistory::MinorDents,
        AccidentHistory::MajorCollision,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccidentHistory::NoAccidents => "No Accidents",
            AccidentHistory::MinorDents => "Minor Dents",
            AccidentHistory::MajorCollision => "Major Collision",
        }
    }
}

impl std::fmt::Display for AccidentHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Status label derived from the health score thresholds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Perfect,
    UnderStress,
    Damaged,
}

impl HealthStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Perfect => "Perfect",
            HealthStatus::UnderStress => "Under Stress",
            HealthStatus::Damaged => "Damaged",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
