//! Static job board. Read-only within a process; search preserves this
//! order among surviving entries.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
    #[serde(rename = "type")]
    pub job_type: &'static str,
    pub experience: &'static str,
    pub posted: &'static str,
    #[serde(rename = "match")]
    pub match_score: u32,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

pub const JOB_BOARD: &[JobPosting] = &[
    JobPosting {
        id: 1,
        title: "Senior Data Scientist",
        company: "Tech Corp",
        location: "San Francisco, CA",
        salary: "$120,000 - $160,000",
        job_type: "Full-time",
        experience: "3-5 years",
        posted: "2 days ago",
        match_score: 92,
        description: "We are looking for an experienced Data Scientist to join our team...",
        requirements: &["Python", "Machine Learning", "SQL", "Statistics"],
    },
    JobPosting {
        id: 2,
        title: "Data Scientist",
        company: "Data Analytics Inc",
        location: "Remote",
        salary: "$95,000 - $130,000",
        job_type: "Full-time",
        experience: "2-4 years",
        posted: "5 days ago",
        match_score: 87,
        description: "Join our growing data science team to build innovative ML solutions...",
        requirements: &["Python", "R", "TensorFlow", "Data Visualization"],
    },
    JobPosting {
        id: 3,
        title: "Junior Data Scientist",
        company: "StartupXYZ",
        location: "New York, NY",
        salary: "$75,000 - $95,000",
        job_type: "Full-time",
        experience: "0-2 years",
        posted: "1 week ago",
        match_score: 82,
        description: "Great opportunity for entry-level data scientists to grow their career...",
        requirements: &["Python", "SQL", "Statistics", "Machine Learning Basics"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = JOB_BOARD.iter().map(|j| j.id).collect();
        assert_eq!(ids.len(), JOB_BOARD.len());
    }

    #[test]
    fn test_serde_field_names() {
        let value = serde_json::to_value(JOB_BOARD[0]).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["match"], 92);
        assert!(value["requirements"].is_array());
        assert!(value.get("job_type").is_none());
    }
}
