//! Skill list cleanup for new candidates, and resume skill extraction:
//! catalogue skills mentioned in the resume text are attached to the candidate.

/// Trims names, drops blanks, and removes case-insensitive repeats keeping the
/// first spelling.
pub fn dedup_skills(skills: &mut Vec<String>) {
    let mut kept: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills.drain(..) {
        let skill = skill.trim();
        if !skill.is_empty() && !kept.iter().any(|k| k.eq_ignore_ascii_case(skill)) {
            kept.push(skill.to_string());
        }
    }
    *skills = kept;
}

/// Appends every catalogue skill that appears in `resume_text`
/// (case-insensitive substring) and is not already in `skills`.
/// Returns the names that were added.
pub fn extract_skills(
    resume_text: &str,
    catalogue: &[String],
    skills: &mut Vec<String>,
) -> Vec<String> {
    if resume_text.trim().is_empty() {
        return Vec::new();
    }

    let resume_lower = resume_text.to_lowercase();
    let mut added = Vec::new();

    for skill in catalogue {
        let already = skills.iter().any(|s| s.eq_ignore_ascii_case(skill));
        if !already && resume_lower.contains(&skill.to_lowercase()) {
            skills.push(skill.clone());
            added.push(skill.clone());
        }
    }
    added
}
