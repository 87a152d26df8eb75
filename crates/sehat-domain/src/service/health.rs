//! Health scoring service
//!
//! Fixed linear penalty formula over a few form inputs. All thresholds are
//! constants; there is no learning or calibration.

use sehat_types::{AccidentHistory, EngineSound, HealthStatus, Language};

use crate::model::{DiagnosticRecord, VehicleInput};
use crate::service::symptoms::analyze_symptoms;

const SERVICE_PENALTY_PER_MONTH: i64 = 5;
const ROUGH_SOUND_PENALTY: i64 = 30;
const MAJOR_ACCIDENT_PENALTY: i64 = 40;

/// Compute the 0-100 health score
///
/// `100 - 5*months - 30 (non-smooth sound) - 40 (major collision)`, clamped.
/// The clamp covers arbitrary month counts, not just the 0-48 form range.
pub fn health_score(
    months_since_service: u32,
    engine_sound: EngineSound,
    accident_history: AccidentHistory,
) -> u8 {
    let mut score = 100 - SERVICE_PENALTY_PER_MONTH * months_since_service as i64;
    if engine_sound != EngineSound::Smooth {
        score -= ROUGH_SOUND_PENALTY;
    }
    if accident_history == AccidentHistory::MajorCollision {
        score -= MAJOR_ACCIDENT_PENALTY;
    }
    score.clamp(0, 100) as u8
}

/// Status label for a health score
pub fn status_for(score: u8) -> HealthStatus {
    if score > 75 {
        HealthStatus::Perfect
    } else if score > 50 {
        HealthStatus::UnderStress
    } else {
        HealthStatus::Damaged
    }
}

/// Days until the next recommended service: floor(score * 1.5)
pub fn maintenance_window_days(score: u8) -> u32 {
    (score as f64 * 1.5) as u32
}

fn recommended_parts(score: u8) -> &'static str {
    if score < 60 {
        "Engine Oil & Brake Pads"
    } else {
        "Routine Filters"
    }
}

fn verdict(score: u8) -> &'static str {
    if score > 70 {
        "Your car is safe."
    } else {
        "Visit mechanic soon!"
    }
}

/// Build the full diagnostic record for a vehicle input
///
/// The language only affects the classifier advisories; status, parts and
/// verdict labels stay in English in both report languages.
pub fn diagnose(input: &VehicleInput, lang: Language) -> DiagnosticRecord {
    let score = health_score(
        input.months_since_service,
        input.engine_sound,
        input.accident_history,
    );
    let advisories = analyze_symptoms(input.description.as_deref().unwrap_or(""), lang);

    DiagnosticRecord {
        model: input.model.clone(),
        health_score: score,
        status: status_for(score),
        engine_sound: input.engine_sound,
        exhaust_smoke: input.exhaust_smoke,
        accident_history: input.accident_history,
        body_condition_percent: input.body_condition_percent,
        advisories,
        maintenance_window_days: maintenance_window_days(score),
        recommended_parts: recommended_parts(score).to_string(),
        verdict: verdict(score).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sehat_types::ExhaustSmoke;

    #[test]
    fn test_smooth_sound_never_scores_lower() {
        for months in 0..=48 {
            for accident in AccidentHistory::ALL {
                let smooth = health_score(months, EngineSound::Smooth, accident);
                for sound in [EngineSound::Grinding, EngineSound::Ticking, EngineSound::Knocking] {
                    assert!(smooth >= health_score(months, sound, accident));
                }
            }
        }
    }

    #[test]
    fn test_score_clamps_to_zero() {
        assert_eq!(
            health_score(48, EngineSound::Knocking, AccidentHistory::MajorCollision),
            0
        );
    }

    #[test]
    fn test_score_clamps_for_out_of_range_months() {
        // The form caps months at 48, but the clamp must hold for any input
        assert_eq!(
            health_score(u32::MAX, EngineSound::Smooth, AccidentHistory::NoAccidents),
            0
        );
        assert_eq!(
            health_score(10_000, EngineSound::Knocking, AccidentHistory::MajorCollision),
            0
        );
    }

    #[test]
    fn test_score_formula() {
        // 100 - 6*5 = 70
        assert_eq!(
            health_score(6, EngineSound::Smooth, AccidentHistory::NoAccidents),
            70
        );
        // 100 - 6*5 - 30 = 40
        assert_eq!(
            health_score(6, EngineSound::Grinding, AccidentHistory::NoAccidents),
            40
        );
        // 100 - 6*5 - 40 = 30
        assert_eq!(
            health_score(6, EngineSound::Smooth, AccidentHistory::MajorCollision),
            30
        );
        // Minor dents carry no penalty
        assert_eq!(
            health_score(6, EngineSound::Smooth, AccidentHistory::MinorDents),
            70
        );
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(status_for(76), HealthStatus::Perfect);
        assert_eq!(status_for(75), HealthStatus::UnderStress);
        assert_eq!(status_for(51), HealthStatus::UnderStress);
        assert_eq!(status_for(50), HealthStatus::Damaged);
        assert_eq!(status_for(0), HealthStatus::Damaged);
    }

    #[test]
    fn test_maintenance_window_floors() {
        assert_eq!(maintenance_window_days(85), 127); // 127.5 floors to 127
        assert_eq!(maintenance_window_days(100), 150);
        assert_eq!(maintenance_window_days(0), 0);
    }

    #[test]
    fn test_parts_and_verdict_thresholds() {
        assert_eq!(recommended_parts(59), "Engine Oil & Brake Pads");
        assert_eq!(recommended_parts(60), "Routine Filters");
        assert_eq!(verdict(70), "Visit mechanic soon!");
        assert_eq!(verdict(71), "Your car is safe.");
    }

    #[test]
    fn test_diagnose_builds_full_record() {
        let input = VehicleInput {
            model: "Honda City 2022".to_string(),
            months_since_service: 6,
            engine_sound: EngineSound::Smooth,
            exhaust_smoke: ExhaustSmoke::None,
            accident_history: AccidentHistory::NoAccidents,
            body_condition_percent: 80,
            description: None,
        };
        let record = diagnose(&input, Language::English);
        assert_eq!(record.health_score, 70);
        assert_eq!(record.status, HealthStatus::UnderStress);
        assert_eq!(record.maintenance_window_days, 105);
        assert_eq!(record.recommended_parts, "Routine Filters");
        assert_eq!(record.verdict, "Visit mechanic soon!");
        // Empty description still yields the generic fallback line
        assert_eq!(record.advisories.len(), 1);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let input = VehicleInput {
            model: "Maruti Swift".to_string(),
            months_since_service: 12,
            engine_sound: EngineSound::Ticking,
            exhaust_smoke: ExhaustSmoke::Black,
            accident_history: AccidentHistory::MinorDents,
            body_condition_percent: 55,
            description: Some("brakes squeak".to_string()),
        };
        let record = diagnose(&input, Language::English);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"health_score\":10"));
        assert!(json.contains("\"status\":\"damaged\""));
    }
}
