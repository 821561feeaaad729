//! Demo data: the skill catalogue, a set of open roles, and five candidates.

use anyhow::Result;

use crate::models::job::split_skill_list;
use crate::models::{NewCandidate, NewJob};
use crate::store::RecordStore;

const SKILLS: &[&str] = &[
    "Java", "Python", "C#", "SQL", "React", "Data Structures", "C++", "HTML", "CSS",
    "TypeScript", "Next.js", "Figma", "Machine Learning", "JavaScript", "Docker", "Kubernetes",
    "AWS", "Azure", "CI/CD", "Linux", "Networking", "Security", "Excel", "Tableau", "Jira",
    "Agile", "Selenium", "Testing", "NoSQL", "PostgreSQL", "Rust", "Go", "Golang", "Swift",
    "Kotlin",
];

// (title, required skills, min experience, max salary)
const JOBS: &[(&str, &str, i32, f64)] = &[
    ("Senior Backend Engineer", "C#, SQL, Data Structures", 5, 130000.0),
    ("Frontend Developer", "React, JavaScript", 1, 70000.0),
    ("Data Scientist", "Python, SQL, Machine Learning", 3, 110000.0),
    ("Cloud Engineer", "AWS, Docker, Kubernetes, SQL", 4, 125000.0),
    ("DevOps Engineer", "Docker, Kubernetes, Python, CI/CD", 3, 120000.0),
    ("Offensive Security", "Python, C++, Networking, Security", 4, 140000.0),
    ("Data Analyst", "Python, SQL, Excel, Tableau", 2, 85000.0),
    ("Project Manager", "Jira, Agile, Communication", 5, 115000.0),
    ("SQA", "Java, Python, SQL, Selenium, Testing", 2, 80000.0),
    ("Database Engineer", "SQL, PostgreSQL, NoSQL, Python", 5, 125000.0),
];

struct DemoCandidate {
    name: &'static str,
    experience: i32,
    education: &'static str,
    salary: f64,
    resume: &'static str,
    skills: &'static [&'static str],
}

const CANDIDATES: &[DemoCandidate] = &[
    DemoCandidate {
        name: "Alice Smith",
        experience: 5,
        education: "BS CS",
        salary: 90000.0,
        resume: "Experienced Java and SQL developer. Good with Algorithms.",
        skills: &["Java", "SQL"],
    },
    DemoCandidate {
        name: "Bob Jones",
        experience: 2,
        education: "Bootcamp",
        salary: 60000.0,
        resume: "Junior React developer. Learning Python.",
        skills: &["React", "Python"],
    },
    DemoCandidate {
        name: "Charlie Day",
        experience: 8,
        education: "MS CS",
        salary: 120000.0,
        resume: "Senior C# Architect. Expert in Data Structures and High Performance Computing.",
        skills: &["C#", "Data Structures"],
    },
    DemoCandidate {
        name: "Diana Prince",
        experience: 4,
        education: "BS Eng",
        salary: 85000.0,
        resume: "Full stack Python and React. SQL optimization expert.",
        skills: &["Python", "React", "SQL"],
    },
    DemoCandidate {
        name: "Evan Wright",
        experience: 10,
        education: "PhD AI",
        salary: 150000.0,
        resume: "Machine Learning, Python, C++, Advanced Algorithms.",
        skills: &["Python", "Data Structures", "C++"],
    },
];

pub fn load_demo_data(store: &mut RecordStore) -> Result<()> {
    for skill in SKILLS {
        store.add_skill(skill);
    }

    for &(title, required, min_experience, max_salary) in JOBS {
        store.add_job(NewJob {
            job_title: title.to_string(),
            required_skills: split_skill_list(required),
            min_experience,
            max_salary,
        })?;
    }

    for c in CANDIDATES {
        store.add_candidate(NewCandidate {
            full_name: c.name.to_string(),
            experience_years: c.experience,
            education: c.education.to_string(),
            expected_salary: c.salary,
            resume_text: c.resume.to_string(),
            skills: c.skills.iter().map(|s| s.to_string()).collect(),
        })?;
    }
    Ok(())
}
