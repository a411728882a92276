//! Match scoring — pluggable, trait-based scorer that measures a user's
//! assessment answers against the career archetype catalog.
//!
//! Default: `WeightedSumScorer` (pure-Rust, fast, deterministic, fully
//! testable). `AppState` holds an `Arc<dyn MatchScorer>` so a backend swap
//! never touches handlers or callers.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::recommend::catalog::{CareerArchetype, Skill, CAREER_CATALOG};

/// Ceiling for a single skill's contribution; also the per-skill denominator.
const MAX_LEVEL: i64 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// One scored archetype. Recomputed on every call, never cached.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub career: &'static CareerArchetype,
    /// 0–100, rounded to 2 decimals.
    pub match_percentage: f64,
}

impl MatchResult {
    /// Career payload with the score folded in — the JSON stored in
    /// `recommendations.recommendation_data` and returned to clients.
    pub fn to_payload(&self) -> Value {
        let mut payload = self.career.to_payload();
        if let Some(obj) = payload.as_object_mut() {
            obj.insert("match_percentage".to_string(), json!(self.match_percentage));
        }
        payload
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer seam. Carried in `AppState` as `Arc<dyn MatchScorer>`.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn recommend(&self, answers: &Value) -> Result<Vec<MatchResult>, AppError>;
}

/// Deterministic weighted-sum scorer over the static catalog.
pub struct WeightedSumScorer;

#[async_trait]
impl MatchScorer for WeightedSumScorer {
    async fn recommend(&self, answers: &Value) -> Result<Vec<MatchResult>, AppError> {
        generate_recommendations(answers)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Answer normalization
// ────────────────────────────────────────────────────────────────────────────

/// Canonical form of a user's assessment answers: raw level values keyed by
/// skill, split into the two requirement groups.
///
/// Values stay raw JSON here; coercion happens per lookup so that a malformed
/// level on a skill no archetype requires can never fail a score.
#[derive(Debug, Clone, Default)]
pub struct SkillLevels {
    tech: HashMap<Skill, Value>,
    soft: HashMap<Skill, Value>,
}

impl SkillLevels {
    pub fn technical_level(&self, skill: Skill) -> Result<i64, AppError> {
        level_in(&self.tech, skill)
    }

    pub fn soft_level(&self, skill: Skill) -> Result<i64, AppError> {
        level_in(&self.soft, skill)
    }
}

/// Normalizes answers into `SkillLevels`, accepting either shape the clients
/// send: skill keys nested under `technical_skills` / `soft_skills`, or flat
/// top-level skill keys. The two groups resolve independently.
pub fn normalize_answers(answers: &Value) -> SkillLevels {
    SkillLevels {
        tech: group_levels(answers, "technical_skills", Skill::TECHNICAL),
        soft: group_levels(answers, "soft_skills", Skill::SOFT),
    }
}

fn group_levels(answers: &Value, group_key: &str, members: &[Skill]) -> HashMap<Skill, Value> {
    let mut levels = HashMap::new();
    let Some(obj) = answers.as_object() else {
        return levels;
    };
    match obj.get(group_key) {
        // Nested form: the group object carries the skill keys directly.
        Some(group) => {
            if let Some(group) = group.as_object() {
                for (key, value) in group {
                    if let Some(skill) = Skill::from_key(key) {
                        levels.insert(skill, value.clone());
                    }
                }
            }
        }
        // Flat form: exact membership in the group's fixed key set decides
        // which top-level keys belong to it.
        None => {
            for skill in members {
                if let Some(value) = obj.get(skill.key()) {
                    levels.insert(*skill, value.clone());
                }
            }
        }
    }
    levels
}

fn level_in(levels: &HashMap<Skill, Value>, skill: Skill) -> Result<i64, AppError> {
    match levels.get(&skill) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => coerce_level(skill, value),
    }
}

/// The one coercion that can fail: numeric strings parse to integers,
/// anything else non-numeric surfaces as a validation error.
fn coerce_level(skill: Skill, value: &Value) -> Result<i64, AppError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| {
            AppError::Validation(format!(
                "Skill level for '{}' must be an integer",
                skill.key()
            ))
        }),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            AppError::Validation(format!(
                "Skill level for '{}' is not numeric: '{s}'",
                skill.key()
            ))
        }),
        _ => Err(AppError::Validation(format!(
            "Skill level for '{}' must be a number",
            skill.key()
        ))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring pass
// ────────────────────────────────────────────────────────────────────────────

/// Scores one archetype against normalized answers.
///
/// Only skills the archetype requires are inspected: each adds a fixed
/// `MAX_LEVEL` to the denominator and `min(user_level, MAX_LEVEL)` to the
/// numerator, so the denominator is always local to the archetype and extra
/// user skills never shift the score. An archetype with no requirements
/// scores 0.0.
pub fn calculate_match_percentage(
    levels: &SkillLevels,
    career: &CareerArchetype,
) -> Result<f64, AppError> {
    let mut total_score = 0i64;
    let mut max_score = 0i64;

    for (skill, _) in career.technical_skills {
        max_score += MAX_LEVEL;
        total_score += levels.technical_level(*skill)?.min(MAX_LEVEL);
    }
    for (skill, _) in career.soft_skills {
        max_score += MAX_LEVEL;
        total_score += levels.soft_level(*skill)?.min(MAX_LEVEL);
    }

    if max_score == 0 {
        return Ok(0.0);
    }
    Ok(round2(total_score as f64 / max_score as f64 * 100.0))
}

/// Scores every archetype in the catalog, sorted by match percentage
/// descending. The sort is stable: ties keep catalog order.
pub fn generate_recommendations(answers: &Value) -> Result<Vec<MatchResult>, AppError> {
    let levels = normalize_answers(answers);

    let mut results = Vec::with_capacity(CAREER_CATALOG.len());
    for career in CAREER_CATALOG {
        results.push(MatchResult {
            career,
            match_percentage: calculate_match_percentage(&levels, career)?,
        });
    }

    results.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });
    Ok(results)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn all_skills_at(level: i64) -> Value {
        let mut obj = serde_json::Map::new();
        for skill in Skill::TECHNICAL.iter().chain(Skill::SOFT) {
            obj.insert(skill.key().to_string(), json!(level));
        }
        Value::Object(obj)
    }

    fn data_scientist() -> &'static CareerArchetype {
        &CAREER_CATALOG[0]
    }

    #[test]
    fn test_all_skills_maxed_scores_100_everywhere() {
        let results = generate_recommendations(&all_skills_at(5)).unwrap();
        assert_eq!(results.len(), CAREER_CATALOG.len());
        for result in &results {
            assert_eq!(
                result.match_percentage, 100.0,
                "{} did not hit 100",
                result.career.title
            );
        }
    }

    #[test]
    fn test_all_skills_zero_scores_0_everywhere() {
        let results = generate_recommendations(&all_skills_at(0)).unwrap();
        for result in &results {
            assert_eq!(result.match_percentage, 0.0);
        }
    }

    #[test]
    fn test_empty_answers_score_0() {
        let results = generate_recommendations(&json!({})).unwrap();
        for result in &results {
            assert_eq!(result.match_percentage, 0.0);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        // Every archetype scores 0, so the sort must preserve catalog order.
        let results = generate_recommendations(&json!({})).unwrap();
        let titles: Vec<_> = results.iter().map(|r| r.career.title).collect();
        assert_eq!(
            titles,
            vec!["Data Scientist", "Software Engineer", "Business Analyst"]
        );
    }

    #[test]
    fn test_output_sorted_descending() {
        // Max out the software engineer requirements only.
        let answers = json!({
            "programming": 5, "webDevelopment": 5, "database": 5,
            "communication": 5, "teamwork": 5, "problemSolving": 5
        });
        let results = generate_recommendations(&answers).unwrap();
        assert_eq!(results[0].career.title, "Software Engineer");
        assert_eq!(results[0].match_percentage, 100.0);
        for pair in results.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_known_partial_score() {
        // Data Scientist requires 7 skills: 4 technical + 3 soft.
        // Levels sum to 3+4+2+1 + 3+4+2 = 19 of 35.
        let answers = json!({
            "programming": 3, "dataAnalysis": 4, "machineLearning": 2, "database": 1,
            "communication": 3, "problemSolving": 4, "creativity": 2
        });
        let levels = normalize_answers(&answers);
        let pct = calculate_match_percentage(&levels, data_scientist()).unwrap();
        assert!((pct - 54.29).abs() < 1e-9, "Score was {pct}");
    }

    #[test]
    fn test_levels_above_5_are_capped() {
        let answers = json!({ "technical_skills": { "programming": 9 } });
        let levels = normalize_answers(&answers);
        // Software Engineer: programming capped at 5 of 30 max.
        let pct = calculate_match_percentage(&levels, &CAREER_CATALOG[1]).unwrap();
        assert!((pct - 16.67).abs() < 1e-9, "Score was {pct}");
    }

    #[test]
    fn test_nested_and_flat_forms_are_equivalent() {
        let flat = json!({
            "programming": 4, "dataAnalysis": 3, "machineLearning": 2, "database": 5,
            "communication": 1, "problemSolving": 2, "creativity": 3
        });
        let nested = json!({
            "technical_skills": {
                "programming": 4, "dataAnalysis": 3, "machineLearning": 2, "database": 5
            },
            "soft_skills": {
                "communication": 1, "problemSolving": 2, "creativity": 3
            }
        });
        let from_flat = generate_recommendations(&flat).unwrap();
        let from_nested = generate_recommendations(&nested).unwrap();
        for (a, b) in from_flat.iter().zip(&from_nested) {
            assert_eq!(a.career.title, b.career.title);
            assert_eq!(a.match_percentage, b.match_percentage);
        }
    }

    #[test]
    fn test_numeric_strings_coerce() {
        let as_strings = json!({ "programming": "4", "dataAnalysis": "3" });
        let as_numbers = json!({ "programming": 4, "dataAnalysis": 3 });
        let a = calculate_match_percentage(&normalize_answers(&as_strings), data_scientist());
        let b = calculate_match_percentage(&normalize_answers(&as_numbers), data_scientist());
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_non_numeric_string_is_validation_error() {
        let answers = json!({ "programming": "expert" });
        let levels = normalize_answers(&answers);
        let err = calculate_match_percentage(&levels, data_scientist()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_unrequired_extra_keys_never_affect_score() {
        let base = json!({ "programming": 4, "dataAnalysis": 4 });
        // Extra keys: one outside the vocabulary, one valid-but-unrequired
        // for this archetype, one unrecognized with a junk value.
        let noisy = json!({
            "programming": 4, "dataAnalysis": 4,
            "teamwork": 5, "cooking": 3, "juggling": "not-a-number"
        });
        let clean = calculate_match_percentage(&normalize_answers(&base), data_scientist());
        let noisy = calculate_match_percentage(&normalize_answers(&noisy), data_scientist());
        assert_eq!(clean.unwrap(), noisy.unwrap());
    }

    #[test]
    fn test_null_level_counts_as_absent() {
        let answers = json!({ "programming": null, "dataAnalysis": 4 });
        let levels = normalize_answers(&answers);
        let pct = calculate_match_percentage(&levels, data_scientist()).unwrap();
        // 4 of 35 points.
        assert!((pct - 11.43).abs() < 1e-9, "Score was {pct}");
    }

    #[test]
    fn test_non_object_answers_degrade_to_zero() {
        let results = generate_recommendations(&json!("not an object")).unwrap();
        for result in &results {
            assert_eq!(result.match_percentage, 0.0);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let answers = json!({ "programming": 3, "communication": "2", "teamwork": 4 });
        let first = generate_recommendations(&answers).unwrap();
        let second = generate_recommendations(&answers).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.career.title, b.career.title);
            assert_eq!(a.match_percentage, b.match_percentage);
        }
    }

    #[test]
    fn test_payload_carries_score_and_career_fields() {
        let results = generate_recommendations(&all_skills_at(5)).unwrap();
        let payload = results[0].to_payload();
        assert_eq!(payload["match_percentage"], 100.0);
        assert!(payload["title"].is_string());
        assert!(payload["learningPath"].is_array());
    }
}
