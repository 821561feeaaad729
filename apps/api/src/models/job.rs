use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub job_title: String,
    pub required_skills: Vec<String>,
    pub min_experience: i32,
    pub max_salary: f64,
}

/// Payload for creating a job. The store assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewJob {
    pub job_title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: i32,
    #[serde(default)]
    pub max_salary: f64,
}

/// Splits a comma-separated skill list, trimming blanks away.
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
