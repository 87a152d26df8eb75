use serde::{Deserialize, Serialize};
use sehat_types::{AccidentHistory, EngineSound, ExhaustSmoke, HealthStatus};

/// Single-vehicle form input
///
/// Numeric ranges (months 0-48, body percent 0-100) are enforced by the input
/// surface; the scorer still clamps the final score defensively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleInput {
    pub model: String,
    pub months_since_service: u32,
    pub engine_sound: EngineSound,
    pub exhaust_smoke: ExhaustSmoke,
    pub accident_history: AccidentHistory,
    pub body_condition_percent: u8,
    /// Optional free-text issue description (Hindi/English/Hinglish)
    pub description: Option<String>,
}

/// Everything a diagnostic report template substitutes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub model: String,
    pub health_score: u8,
    pub status: HealthStatus,
    pub engine_sound: EngineSound,
    pub exhaust_smoke: ExhaustSmoke,
    pub accident_history: AccidentHistory,
    pub body_condition_percent: u8,
    /// Advisory lines from the symptom classifier (fallback line if none matched)
    pub advisories: Vec<String>,
    pub maintenance_window_days: u32,
    pub recommended_parts: String,
    pub verdict: String,
}
