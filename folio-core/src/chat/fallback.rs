//! Deterministic canned responses for quota-exhausted or offline sessions.
//!
//! Topics are tested in priority order against the lowercased question;
//! the first match wins. Every template interpolates live profile fields,
//! so the answers stay truthful when the profile is overridden.

use crate::profile::Profile;

struct Topic {
    matches: fn(&str, &Profile) -> bool,
    render: fn(&Profile) -> String,
}

fn contains_any(question: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| question.contains(kw))
}

static TOPICS: &[Topic] = &[
    Topic {
        matches: |q, _| contains_any(q, &["experience", "years", "work"]),
        render: experience_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["skill", "language", "tech"]),
        render: skills_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["cloud", "azure", "aws", "data"]),
        render: cloud_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["ai", "machine learning", "ml", "llm"]),
        render: ai_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["education", "degree", "university"]),
        render: education_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["contact", "email", "hire"]),
        render: contact_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["project", "portfolio", "built"]),
        render: projects_reply,
    },
    Topic {
        matches: |q, profile| {
            contains_any(q, &["current", "now"])
                || profile
                    .current_experience()
                    .is_some_and(|exp| q.contains(&exp.company.to_lowercase()))
        },
        render: current_role_reply,
    },
    Topic {
        matches: |q, _| contains_any(q, &["hello", "hi", "hey"]),
        render: greeting_reply,
    },
];

/// Produce a canned answer for a question. Total and deterministic: the same
/// question against the same profile always yields the same text.
pub fn fallback_reply(question: &str, profile: &Profile) -> String {
    let lowered = question.to_lowercase();
    for topic in TOPICS {
        if (topic.matches)(&lowered, profile) {
            return (topic.render)(profile);
        }
    }
    default_reply(profile)
}

fn experience_reply(profile: &Profile) -> String {
    let companies: Vec<&str> = profile
        .experience
        .iter()
        .map(|exp| exp.company.as_str())
        .collect();
    match profile.current_experience() {
        Some(current) => format!(
            "I'm currently a {} at {}. My background spans {} roles at {}. {}",
            current.role,
            current.company,
            profile.experience.len(),
            companies.join(", "),
            profile.summary
        ),
        None => format!(
            "My background spans roles at {}. {}",
            companies.join(", "),
            profile.summary
        ),
    }
}

fn skills_reply(profile: &Profile) -> String {
    let highlights: Vec<String> = profile
        .skill_categories
        .iter()
        .take(3)
        .map(|category| {
            let items: Vec<&str> = category
                .items
                .iter()
                .take(4)
                .map(String::as_str)
                .collect();
            format!("{}: {}", category.category, items.join(", "))
        })
        .collect();
    format!(
        "My core skills include {}. Ask about any of them for more detail!",
        highlights.join("; ")
    )
}

fn cloud_reply(profile: &Profile) -> String {
    let platforms = profile
        .skill_categories
        .iter()
        .find(|category| {
            let label = category.category.to_lowercase();
            label.contains("cloud") || label.contains("data")
        })
        .map(|category| category.items.join(", "))
        .unwrap_or_else(|| "cloud and data platforms".to_string());
    format!(
        "Cloud and data engineering is my specialty. I work with {platforms}, building ETL/ELT \
         pipelines, data lakes, and real-time streaming systems."
    )
}

fn ai_reply(profile: &Profile) -> String {
    let ai_projects: Vec<&str> = profile
        .projects
        .iter()
        .filter(|project| {
            project.tags.iter().any(|tag| {
                let tag = tag.to_lowercase();
                tag.contains("llm") || tag.contains("openai") || tag.contains("ml")
            })
        })
        .map(|project| project.name.as_str())
        .collect();
    if ai_projects.is_empty() {
        format!(
            "I work with AI and machine learning as part of my data engineering practice. \
             Check out my projects on {} for details!",
            profile.personal.github
        )
    } else {
        format!(
            "I've worked on several AI/ML projects including {}. I also write about AI and data \
             engineering on Medium!",
            ai_projects.join(", ")
        )
    }
}

fn education_reply(profile: &Profile) -> String {
    let degrees: Vec<String> = profile
        .education
        .iter()
        .map(|edu| format!("{} from {} ({})", edu.degree, edu.institution, edu.period))
        .collect();
    if degrees.is_empty() {
        format!("{} has no education entries on file.", profile.personal.name)
    } else {
        format!("I have a {}.", degrees.join(" and a "))
    }
}

fn contact_reply(profile: &Profile) -> String {
    let availability = if profile.personal.available_for_work {
        " I'm currently open to new opportunities!"
    } else {
        ""
    };
    format!(
        "You can reach me at {} or connect with me on LinkedIn at {}.{}",
        profile.personal.email, profile.personal.linkedin, availability
    )
}

fn projects_reply(profile: &Profile) -> String {
    let featured: Vec<&str> = profile
        .featured_projects()
        .map(|project| project.name.as_str())
        .collect();
    format!(
        "Some of my featured projects include: {}. Check out my GitHub at {}!",
        featured.join(", "),
        profile.personal.github
    )
}

fn current_role_reply(profile: &Profile) -> String {
    match profile.current_experience() {
        Some(current) => format!(
            "I'm currently a {} at {} in {}. {}",
            current.role,
            current.company,
            current.location,
            current.highlights.first().cloned().unwrap_or_default()
        ),
        None => format!(
            "I'm not tied to a single employer right now. Reach me at {} to talk about what's \
             next.",
            profile.personal.email
        ),
    }
}

fn greeting_reply(profile: &Profile) -> String {
    format!(
        "Hello! I'm {}'s AI assistant. I can tell you about his experience, skills, projects, \
         and more. What would you like to know?",
        profile.personal.name
    )
}

fn default_reply(profile: &Profile) -> String {
    format!(
        "I'm {}'s personal assistant! I can answer questions about his experience, skills, \
         projects, education, and more. Feel free to ask me anything and I'll do my best to help!",
        profile.personal.name
    )
}
