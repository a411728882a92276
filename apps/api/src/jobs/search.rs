//! Pure filtering of the static job board.

use serde::Deserialize;

use crate::jobs::board::{JobPosting, JOB_BOARD};

/// Structured search filters. `salary` is accepted in the request shape but
/// is not applied as a predicate (carried over from the legacy behavior).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilters {
    pub location: Option<String>,
    pub experience: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
}

/// Filters the board in catalog order.
///
/// The search term matches title or company case-insensitively; `location`
/// is a case-insensitive substring predicate; `experience` and `job_type`
/// are exact equality.
pub fn search_jobs(search_term: Option<&str>, filters: &JobFilters) -> Vec<&'static JobPosting> {
    let mut jobs: Vec<&JobPosting> = JOB_BOARD.iter().collect();

    if let Some(term) = search_term {
        let term = term.to_lowercase();
        jobs.retain(|j| {
            j.title.to_lowercase().contains(&term) || j.company.to_lowercase().contains(&term)
        });
    }

    if let Some(location) = &filters.location {
        let location = location.to_lowercase();
        jobs.retain(|j| j.location.to_lowercase().contains(&location));
    }
    if let Some(experience) = &filters.experience {
        jobs.retain(|j| j.experience == experience);
    }
    if let Some(job_type) = &filters.job_type {
        jobs.retain(|j| j.job_type == job_type);
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_criteria_returns_full_board_in_order() {
        let jobs = search_jobs(None, &JobFilters::default());
        assert_eq!(jobs.len(), JOB_BOARD.len());
        let ids: Vec<_> = jobs.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_term_matches_title_case_insensitively() {
        let jobs = search_jobs(Some("DATA"), &JobFilters::default());
        assert_eq!(jobs.len(), 3);
    }

    #[test]
    fn test_term_matches_company() {
        let jobs = search_jobs(Some("startup"), &JobFilters::default());
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 3);
    }

    #[test]
    fn test_term_and_location_narrow_to_remote_posting() {
        let filters = JobFilters {
            location: Some("Remote".to_string()),
            ..Default::default()
        };
        let jobs = search_jobs(Some("data"), &filters);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Data Scientist");
        assert_eq!(jobs[0].location, "Remote");
    }

    #[test]
    fn test_location_substring_is_case_insensitive() {
        let filters = JobFilters {
            location: Some("san francisco".to_string()),
            ..Default::default()
        };
        let jobs = search_jobs(None, &filters);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 1);
    }

    #[test]
    fn test_experience_is_exact_equality() {
        let filters = JobFilters {
            experience: Some("0-2 years".to_string()),
            ..Default::default()
        };
        assert_eq!(search_jobs(None, &filters).len(), 1);

        let partial = JobFilters {
            experience: Some("0-2".to_string()),
            ..Default::default()
        };
        assert!(search_jobs(None, &partial).is_empty());
    }

    #[test]
    fn test_job_type_is_exact_equality() {
        let filters = JobFilters {
            job_type: Some("Full-time".to_string()),
            ..Default::default()
        };
        assert_eq!(search_jobs(None, &filters).len(), 3);

        let lowercase = JobFilters {
            job_type: Some("full-time".to_string()),
            ..Default::default()
        };
        assert!(search_jobs(None, &lowercase).is_empty());
    }

    #[test]
    fn test_salary_filter_has_no_effect() {
        let filters = JobFilters {
            salary: Some("$1".to_string()),
            ..Default::default()
        };
        assert_eq!(search_jobs(None, &filters).len(), JOB_BOARD.len());
    }

    #[test]
    fn test_unmatched_term_returns_empty() {
        assert!(search_jobs(Some("astronaut"), &JobFilters::default()).is_empty());
    }

    #[test]
    fn test_filters_compose() {
        let filters = JobFilters {
            location: Some("New York".to_string()),
            experience: Some("0-2 years".to_string()),
            job_type: Some("Full-time".to_string()),
            ..Default::default()
        };
        let jobs = search_jobs(Some("junior"), &filters);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, 3);
    }
}
