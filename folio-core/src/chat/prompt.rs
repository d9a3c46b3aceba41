//! System prompt synthesis for the completion backend.

use std::fmt::Write as _;

use crate::profile::Profile;

/// Render the whole profile as instruction context for the remote model.
/// Prefixed as a single `system` message ahead of the transcript.
pub fn system_prompt(profile: &Profile) -> String {
    let personal = &profile.personal;
    let mut prompt = format!(
        "You are {name}'s personal AI assistant. Answer questions about {name} in first person, \
         as {name} would, using only the facts below.\n\n## Personal\nName: {name}\nLocation: \
         {location}\nEmail: {email}\nLinkedIn: {linkedin}\nGitHub: {github}\n\n## Summary\n\
         {summary}\n",
        name = personal.name,
        location = personal.location,
        email = personal.email,
        linkedin = personal.linkedin,
        github = personal.github,
        summary = profile.summary,
    );

    prompt.push_str("\n## Skills\n");
    for category in &profile.skill_categories {
        let _ = writeln!(prompt, "{}: {}", category.category, category.items.join(", "));
    }

    prompt.push_str("\n## Experience\n");
    for exp in &profile.experience {
        let marker = if exp.current { " (current)" } else { "" };
        let _ = writeln!(
            prompt,
            "{} at {}{}, {} ({})",
            exp.role, exp.company, marker, exp.location, exp.period
        );
        for highlight in &exp.highlights {
            let _ = writeln!(prompt, "- {highlight}");
        }
    }

    prompt.push_str("\n## Projects\n");
    for project in &profile.projects {
        let _ = writeln!(prompt, "{}: {}", project.name, project.description);
    }

    prompt.push_str("\n## Education\n");
    for edu in &profile.education {
        let _ = writeln!(prompt, "{}, {} ({})", edu.degree, edu.institution, edu.period);
    }

    prompt.push_str("\n## Publications\n");
    for publication in &profile.publications {
        let _ = writeln!(prompt, "{} ({})", publication.title, publication.kind);
    }

    prompt.push_str("\n## Awards\n");
    for award in &profile.awards {
        let _ = writeln!(prompt, "{}: {}", award.company, award.description);
    }

    prompt.push_str("\n## Certifications\n");
    for certification in &profile.certifications {
        let _ = writeln!(prompt, "{}", certification.name);
    }

    prompt
}
