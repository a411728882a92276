//! Static career archetype catalog.
//!
//! The catalog is compile-time constant data: archetypes are never mutated
//! after load and adding one is a data-only change — the scoring pass in
//! `scoring` is archetype-agnostic.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The fixed assessment skill vocabulary. Serialized keys are the camelCase
/// names the frontend sends (`dataAnalysis`, `problemSolving`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skill {
    Programming,
    DataAnalysis,
    MachineLearning,
    WebDevelopment,
    Database,
    Communication,
    Leadership,
    ProblemSolving,
    Teamwork,
    Creativity,
}

impl Skill {
    pub const TECHNICAL: &'static [Skill] = &[
        Skill::Programming,
        Skill::DataAnalysis,
        Skill::MachineLearning,
        Skill::WebDevelopment,
        Skill::Database,
    ];

    pub const SOFT: &'static [Skill] = &[
        Skill::Communication,
        Skill::Leadership,
        Skill::ProblemSolving,
        Skill::Teamwork,
        Skill::Creativity,
    ];

    /// The wire key for this skill.
    pub fn key(self) -> &'static str {
        match self {
            Skill::Programming => "programming",
            Skill::DataAnalysis => "dataAnalysis",
            Skill::MachineLearning => "machineLearning",
            Skill::WebDevelopment => "webDevelopment",
            Skill::Database => "database",
            Skill::Communication => "communication",
            Skill::Leadership => "leadership",
            Skill::ProblemSolving => "problemSolving",
            Skill::Teamwork => "teamwork",
            Skill::Creativity => "creativity",
        }
    }

    /// Reverse lookup by exact wire key.
    pub fn from_key(key: &str) -> Option<Skill> {
        Skill::TECHNICAL
            .iter()
            .chain(Skill::SOFT)
            .copied()
            .find(|s| s.key() == key)
    }
}

/// One step of an archetype's suggested learning path.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LearningStep {
    pub step: u8,
    pub title: &'static str,
    pub duration: &'static str,
}

/// A static career profile used as a scoring target.
///
/// The per-skill levels in `technical_skills` / `soft_skills` are display
/// metadata; scoring weighs every listed skill with the same 5-point ceiling.
#[derive(Debug, Clone, Copy)]
pub struct CareerArchetype {
    pub title: &'static str,
    pub description: &'static str,
    pub salary: &'static str,
    pub growth: &'static str,
    pub technical_skills: &'static [(Skill, u8)],
    pub soft_skills: &'static [(Skill, u8)],
    pub education: &'static str,
    pub experience: &'static str,
    pub certifications: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub learning_path: &'static [LearningStep],
}

impl CareerArchetype {
    /// Renders the archetype in the JSON shape clients and the
    /// `recommendations` table expect.
    pub fn to_payload(&self) -> Value {
        json!({
            "title": self.title,
            "description": self.description,
            "salary": self.salary,
            "growth": self.growth,
            "technical_skills": skill_map(self.technical_skills),
            "soft_skills": skill_map(self.soft_skills),
            "requirements": {
                "education": self.education,
                "experience": self.experience,
                "certifications": self.certifications,
            },
            "skills": self.skills,
            "learningPath": self.learning_path,
        })
    }
}

fn skill_map(entries: &[(Skill, u8)]) -> Value {
    let mut map = Map::new();
    for (skill, level) in entries {
        map.insert(skill.key().to_string(), json!(level));
    }
    Value::Object(map)
}

/// The career archetype catalog. Read-only; scored in this order.
pub const CAREER_CATALOG: &[CareerArchetype] = &[
    CareerArchetype {
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make data-driven decisions.",
        salary: "$95,000 - $140,000",
        growth: "+18%",
        technical_skills: &[
            (Skill::Programming, 4),
            (Skill::DataAnalysis, 4),
            (Skill::MachineLearning, 4),
            (Skill::Database, 3),
        ],
        soft_skills: &[
            (Skill::Communication, 3),
            (Skill::ProblemSolving, 4),
            (Skill::Creativity, 3),
        ],
        education: "Bachelor's in Computer Science, Data Science, or related",
        experience: "2-5 years",
        certifications: &["Machine Learning", "Data Analytics", "Python Programming"],
        skills: &["Python", "Machine Learning", "Statistics", "Data Visualization"],
        learning_path: &[
            LearningStep { step: 1, title: "Learn Python Fundamentals", duration: "2-3 months" },
            LearningStep { step: 2, title: "Master Data Analysis Tools", duration: "1-2 months" },
            LearningStep { step: 3, title: "Study Machine Learning", duration: "3-4 months" },
            LearningStep { step: 4, title: "Build Portfolio Projects", duration: "2-3 months" },
        ],
    },
    CareerArchetype {
        title: "Software Engineer",
        description: "Design, develop, and maintain software applications and systems.",
        salary: "$85,000 - $130,000",
        growth: "+15%",
        technical_skills: &[
            (Skill::Programming, 5),
            (Skill::WebDevelopment, 4),
            (Skill::Database, 3),
        ],
        soft_skills: &[
            (Skill::Communication, 3),
            (Skill::Teamwork, 4),
            (Skill::ProblemSolving, 4),
        ],
        education: "Bachelor's in Computer Science or Software Engineering",
        experience: "1-4 years",
        certifications: &["Full Stack Development", "Cloud Computing"],
        skills: &["JavaScript", "React", "Node.js", "System Design"],
        learning_path: &[
            LearningStep { step: 1, title: "Learn Programming Fundamentals", duration: "3-4 months" },
            LearningStep { step: 2, title: "Master Web Technologies", duration: "2-3 months" },
            LearningStep { step: 3, title: "Learn Software Architecture", duration: "2-3 months" },
            LearningStep { step: 4, title: "Build Real Projects", duration: "3-4 months" },
        ],
    },
    CareerArchetype {
        title: "Business Analyst",
        description: "Bridge the gap between business needs and technical solutions.",
        salary: "$70,000 - $110,000",
        growth: "+12%",
        technical_skills: &[(Skill::DataAnalysis, 3), (Skill::Database, 2)],
        soft_skills: &[
            (Skill::Communication, 5),
            (Skill::Leadership, 3),
            (Skill::ProblemSolving, 4),
            (Skill::Teamwork, 4),
        ],
        education: "Bachelor's in Business, IT, or related field",
        experience: "1-3 years",
        certifications: &["Business Analysis", "Agile/Scrum", "SQL"],
        skills: &["SQL", "Business Analysis", "Project Management", "Communication"],
        learning_path: &[
            LearningStep { step: 1, title: "Learn Business Fundamentals", duration: "2-3 months" },
            LearningStep { step: 2, title: "Master Data Analysis", duration: "1-2 months" },
            LearningStep { step: 3, title: "Study Project Management", duration: "2-3 months" },
            LearningStep { step: 4, title: "Gain Industry Experience", duration: "3-6 months" },
        ],
    },
];
