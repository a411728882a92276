//! Profile completion — pure scoring of how filled-in a profile is.
//!
//! Required fields count double; the denominator is fixed at 15 points
//! (5 required × 2 + 5 optional × 1).

use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRow;

const REQUIRED_WEIGHT: u32 = 2;
const OPTIONAL_WEIGHT: u32 = 1;

/// The ten profile fields, all optional. Doubles as the create/update
/// request body: absent fields leave stored values untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFields {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub education_level: Option<String>,
    pub current_role: Option<String>,
    pub location: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileFields {
    fn required(&self) -> [&Option<String>; 5] {
        [
            &self.full_name,
            &self.email,
            &self.education_level,
            &self.skills,
            &self.interests,
        ]
    }

    fn optional(&self) -> [&Option<String>; 5] {
        [
            &self.current_role,
            &self.location,
            &self.bio,
            &self.linkedin,
            &self.portfolio,
        ]
    }

    /// Incoming update layered over a stored row; provided fields win.
    pub fn merged_over(&self, row: &ProfileRow) -> ProfileFields {
        ProfileFields {
            full_name: self.full_name.clone().or_else(|| row.full_name.clone()),
            email: self.email.clone().or_else(|| row.email.clone()),
            education_level: self
                .education_level
                .clone()
                .or_else(|| row.education_level.clone()),
            current_role: self.current_role.clone().or_else(|| row.current_role.clone()),
            location: self.location.clone().or_else(|| row.location.clone()),
            skills: self.skills.clone().or_else(|| row.skills.clone()),
            interests: self.interests.clone().or_else(|| row.interests.clone()),
            bio: self.bio.clone().or_else(|| row.bio.clone()),
            linkedin: self.linkedin.clone().or_else(|| row.linkedin.clone()),
            portfolio: self.portfolio.clone().or_else(|| row.portfolio.clone()),
        }
    }
}

/// A field counts only when it has non-whitespace content.
fn is_filled(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

/// Pure completion score in [0, 100], rounded to 2 decimals.
pub fn calculate_profile_completion(fields: &ProfileFields) -> f64 {
    let required = fields.required();
    let optional = fields.optional();
    let max_points = required.len() as u32 * REQUIRED_WEIGHT + optional.len() as u32 * OPTIONAL_WEIGHT;

    let mut points = 0u32;
    for field in required {
        if is_filled(field) {
            points += REQUIRED_WEIGHT;
        }
    }
    for field in optional {
        if is_filled(field) {
            points += OPTIONAL_WEIGHT;
        }
    }

    let completion = points as f64 / max_points as f64 * 100.0;
    ((completion.min(100.0)) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> ProfileFields {
        ProfileFields {
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            education_level: Some("Masters".to_string()),
            current_role: Some("Analyst".to_string()),
            location: Some("London".to_string()),
            skills: Some("mathematics, programming".to_string()),
            interests: Some("computing".to_string()),
            bio: Some("First programmer".to_string()),
            linkedin: Some("linkedin.com/in/ada".to_string()),
            portfolio: Some("ada.dev".to_string()),
        }
    }

    fn required_only() -> ProfileFields {
        ProfileFields {
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            education_level: Some("Masters".to_string()),
            skills: Some("mathematics".to_string()),
            interests: Some("computing".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_fields_is_100() {
        assert_eq!(calculate_profile_completion(&full_profile()), 100.0);
    }

    #[test]
    fn test_required_only_is_66_67() {
        assert_eq!(calculate_profile_completion(&required_only()), 66.67);
    }

    #[test]
    fn test_empty_profile_is_0() {
        assert_eq!(calculate_profile_completion(&ProfileFields::default()), 0.0);
    }

    #[test]
    fn test_optional_only_is_33_33() {
        let fields = ProfileFields {
            current_role: Some("Analyst".to_string()),
            location: Some("London".to_string()),
            bio: Some("Bio".to_string()),
            linkedin: Some("in/ada".to_string()),
            portfolio: Some("ada.dev".to_string()),
            ..Default::default()
        };
        assert_eq!(calculate_profile_completion(&fields), 33.33);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut fields = required_only();
        fields.skills = Some("   ".to_string());
        // Dropping one required field costs 2 of 15 points.
        assert_eq!(calculate_profile_completion(&fields), 53.33);
    }

    #[test]
    fn test_single_required_field() {
        let fields = ProfileFields {
            full_name: Some("Ada".to_string()),
            ..Default::default()
        };
        assert_eq!(calculate_profile_completion(&fields), 13.33);
    }

    #[test]
    fn test_deterministic() {
        let fields = required_only();
        assert_eq!(
            calculate_profile_completion(&fields),
            calculate_profile_completion(&fields)
        );
    }

    #[test]
    fn test_merge_keeps_stored_values_for_absent_fields() {
        use chrono::Utc;
        use uuid::Uuid;

        let row = ProfileRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            full_name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            education_level: None,
            current_role: Some("Analyst".to_string()),
            location: None,
            skills: None,
            interests: None,
            bio: None,
            linkedin: None,
            portfolio: None,
            profile_completion: 0.0,
            created_at: Utc::now(),
            updated_at: None,
        };
        let update = ProfileFields {
            education_level: Some("Masters".to_string()),
            current_role: Some("Engineer".to_string()),
            ..Default::default()
        };
        let merged = update.merged_over(&row);
        assert_eq!(merged.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(merged.education_level.as_deref(), Some("Masters"));
        assert_eq!(merged.current_role.as_deref(), Some("Engineer"));
    }
}
