//! In-memory record store.
//!
//! Stands in for the persistence layer: it hands the algorithm engine plain
//! `Candidate`/`Job` records with skill names already resolved.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::models::{Candidate, Job, NewCandidate, NewJob};
use crate::seed;

#[derive(Debug, Default)]
pub struct RecordStore {
    candidates: Vec<Candidate>,
    jobs: Vec<Job>,
    skills: Vec<String>,
    next_candidate_id: i64,
    next_job_id: i64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            next_candidate_id: 1,
            next_job_id: 1,
            ..Self::default()
        }
    }

    /// A store pre-loaded with the demo skills, jobs and candidates.
    pub fn seeded() -> Result<Self> {
        let mut store = Self::new();
        seed::load_demo_data(&mut store).context("Failed to load demo data")?;
        info!(
            candidates = store.candidates.len(),
            jobs = store.jobs.len(),
            skills = store.skills.len(),
            "Demo data loaded"
        );
        Ok(store)
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, id: i64) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// The skill catalogue, in insertion order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Adds `name` unless a case-insensitive equal is already catalogued.
    pub fn add_skill(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.skills.iter().any(|s| s.eq_ignore_ascii_case(name)) {
            return false;
        }
        self.skills.push(name.to_string());
        true
    }

    /// Fails only when the id sequence is exhausted.
    pub fn add_candidate(&mut self, new: NewCandidate) -> Result<Candidate> {
        let id = self.next_candidate_id;
        self.next_candidate_id = id
            .checked_add(1)
            .context("Candidate id sequence exhausted")?;
        let candidate = Candidate {
            id,
            full_name: new.full_name,
            experience_years: new.experience_years,
            education: new.education,
            expected_salary: new.expected_salary,
            resume_text: new.resume_text,
            skills: new.skills,
            created_at: Utc::now(),
        };
        self.candidates.push(candidate.clone());
        Ok(candidate)
    }

    pub fn add_job(&mut self, new: NewJob) -> Result<Job> {
        let id = self.next_job_id;
        self.next_job_id = id.checked_add(1).context("Job id sequence exhausted")?;
        let job = Job {
            id,
            job_title: new.job_title,
            required_skills: new.required_skills,
            min_experience: new.min_experience,
            max_salary: new.max_salary,
        };
        self.jobs.push(job.clone());
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_from_one() {
        let mut store = RecordStore::new();
        let a = store
            .add_candidate(NewCandidate {
                full_name: "A".into(),
                ..Default::default()
            })
            .unwrap();
        let b = store
            .add_candidate(NewCandidate {
                full_name: "B".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let job = store
            .add_job(NewJob {
                job_title: "SQA".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(job.id, 1);
        assert_eq!(store.job(1).map(|j| j.job_title.as_str()), Some("SQA"));
        assert!(store.job(2).is_none());
    }

    #[test]
    fn test_add_skill_is_case_insensitive_unique() {
        let mut store = RecordStore::new();
        assert!(store.add_skill("Python"));
        assert!(!store.add_skill("python"));
        assert!(!store.add_skill("  "));
        assert_eq!(store.skills(), ["Python".to_string()]);
    }

    #[test]
    fn test_seeded_store_has_demo_records() {
        let store = RecordStore::seeded().unwrap();
        assert_eq!(store.candidates().len(), 5);
        assert_eq!(store.jobs().len(), 10);
        assert!(store.skills().iter().any(|s| s == "Data Structures"));
    }

    #[test]
    fn test_exhausted_id_sequence_is_an_error() {
        let mut store = RecordStore::new();
        store.next_candidate_id = i64::MAX;
        let err = store
            .add_candidate(NewCandidate {
                full_name: "Late".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err.to_string().contains("exhausted"));
        assert!(store.candidates().is_empty());

        store.next_job_id = i64::MAX;
        assert!(store.add_job(NewJob::default()).is_err());
        assert!(store.jobs().is_empty());
    }
}
