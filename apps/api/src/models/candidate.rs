use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate record as the algorithms see it.
///
/// `skills` holds plain skill names, already resolved by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: i64,
    pub full_name: String,
    pub experience_years: i32,
    pub education: String,
    pub expected_salary: f64,
    pub resume_text: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Candidate {
    /// Skills with exact repeats dropped, first occurrence kept.
    pub fn distinct_skills(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            if !seen.contains(&skill.as_str()) {
                seen.push(skill.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
impl Candidate {
    /// Minimal record for algorithm fixtures; text fields are left empty.
    pub fn new(id: i64, full_name: &str, experience_years: i32, expected_salary: f64) -> Self {
        Self {
            id,
            full_name: full_name.to_string(),
            experience_years,
            education: String::new(),
            expected_salary,
            resume_text: String::new(),
            skills: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Ids of `records` in their current order. Used as a trace snapshot.
pub fn candidate_ids(records: &[Candidate]) -> Vec<i64> {
    records.iter().map(|c| c.id).collect()
}

/// Payload for creating a candidate. The store assigns the id and timestamp.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCandidate {
    pub full_name: String,
    #[serde(default)]
    pub experience_years: i32,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub expected_salary: f64,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub skills: Vec<String>,
}
