//! Command dispatch and section formatters.
//!
//! Every handler is a pure function of the profile and the parsed input;
//! `github` and `open` additionally emit an event for the host to act on.

use once_cell::sync::Lazy;
use std::fmt::Write as _;

use crate::profile::Profile;
use crate::terminal::parser::ParsedCommand;

/// How a command's output should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Success,
    Info,
    Error,
}

/// Formatted output of one dispatched command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub content: String,
    pub kind: OutputKind,
}

impl CommandOutput {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: OutputKind::Success,
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: OutputKind::Info,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            kind: OutputKind::Error,
        }
    }
}

/// Profile sections that can be surfaced as tabs by a host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

/// File-style identity for a section tab, mirroring the sidebar's file tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionItem {
    pub id: &'static str,
    pub name: &'static str,
    pub section: Section,
}

const SECTION_ITEMS: &[(&str, SectionItem)] = &[
    (
        "about",
        SectionItem {
            id: "about",
            name: "about.md",
            section: Section::About,
        },
    ),
    (
        "skills",
        SectionItem {
            id: "skills",
            name: "skills.json",
            section: Section::Skills,
        },
    ),
    (
        "experience",
        SectionItem {
            id: "experience",
            name: "experience.rs",
            section: Section::Experience,
        },
    ),
    (
        "projects",
        SectionItem {
            id: "projects-list",
            name: "projects.rs",
            section: Section::Projects,
        },
    ),
    (
        "contact",
        SectionItem {
            id: "contact",
            name: "contact.sh",
            section: Section::Contact,
        },
    ),
];

/// Side effects a command asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Open a URL in whatever the host considers a browser.
    OpenUrl(String),
    /// Surface a profile section as an open tab.
    OpenTab(SectionItem),
}

/// Result of dispatching one parsed command.
#[derive(Debug, Clone)]
pub struct Execution {
    pub output: CommandOutput,
    pub events: Vec<TerminalEvent>,
}

impl Execution {
    fn output(output: CommandOutput) -> Self {
        Self {
            output,
            events: Vec::new(),
        }
    }
}

/// Metadata describing a terminal command, in display order.
#[derive(Clone, Copy, Debug)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// All recognized commands, in the order `help` lists them.
pub static COMMANDS: Lazy<Vec<CommandInfo>> = Lazy::new(|| {
    vec![
        CommandInfo {
            name: "help",
            description: "Show this help message",
        },
        CommandInfo {
            name: "about",
            description: "Display bio and introduction",
        },
        CommandInfo {
            name: "skills",
            description: "Show technical skills (--list for detailed view)",
        },
        CommandInfo {
            name: "experience",
            description: "Show work experience",
        },
        CommandInfo {
            name: "projects",
            description: "List projects (--filter <tag> to filter)",
        },
        CommandInfo {
            name: "contact",
            description: "Show contact information",
        },
        CommandInfo {
            name: "github",
            description: "Show GitHub profile link",
        },
        CommandInfo {
            name: "education",
            description: "Show education background",
        },
        CommandInfo {
            name: "publications",
            description: "Show published articles",
        },
        CommandInfo {
            name: "awards",
            description: "Show awards and recognition",
        },
        CommandInfo {
            name: "certifications",
            description: "Show certifications",
        },
        CommandInfo {
            name: "open",
            description: "Open a section as a tab (--section <name>)",
        },
        CommandInfo {
            name: "clear",
            description: "Clear terminal",
        },
    ]
});

/// Complete a partial command name if exactly one command starts with it
/// (case-insensitive). Anything else leaves the input alone.
pub fn complete(partial: &str) -> Option<&'static str> {
    if partial.is_empty() {
        return None;
    }
    let query = partial.to_lowercase();
    let mut matches = COMMANDS.iter().filter(|info| info.name.starts_with(&query));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.name),
        _ => None,
    }
}

/// Dispatch a parsed command against the profile.
///
/// `clear` never reaches this table; the session intercepts it before
/// dispatch.
pub fn execute(profile: &Profile, parsed: &ParsedCommand) -> Execution {
    match parsed.command.as_str() {
        "help" => Execution::output(help_output()),
        "about" => Execution::output(about_output(profile)),
        "skills" => Execution::output(skills_output(profile, parsed.has_flag("list"))),
        "experience" => Execution::output(experience_output(profile)),
        "projects" => Execution::output(projects_output(profile, parsed.flag_text("filter"))),
        "contact" => Execution::output(contact_output(profile)),
        "github" => Execution {
            output: github_output(profile),
            events: vec![TerminalEvent::OpenUrl(profile.personal.github.clone())],
        },
        "education" => Execution::output(education_output(profile)),
        "publications" => Execution::output(publications_output(profile)),
        "awards" => Execution::output(awards_output(profile)),
        "certifications" => Execution::output(certifications_output(profile)),
        "open" => open_section(parsed),
        other => Execution::output(CommandOutput::error(format!(
            "Command not found: {other}. Type 'help' for available commands."
        ))),
    }
}

fn help_output() -> CommandOutput {
    let mut content = String::from("Available commands:\n");
    for info in COMMANDS.iter() {
        let _ = writeln!(content, "  {:<17} {}", info.name, info.description);
    }
    content.push_str(
        "\nNavigation:\n  \u{2191}/\u{2193}               Navigate command history\n  Tab       \
                 Auto-complete commands",
    );
    CommandOutput::info(content)
}

fn about_output(profile: &Profile) -> CommandOutput {
    let personal = &profile.personal;
    CommandOutput::success(format!(
        "\n\u{1F44B} Hi, I'm {}!\n\n{}\n\n\u{1F4CD} Location: {}\n\u{1F4E7} Email: {}\n\u{1F517} \
         LinkedIn: {}\n\u{1F419} GitHub: {}\n\nType 'skills' to see my technical skills\nType \
         'experience' to view my work history\nType 'projects' to see what I've built",
        personal.name,
        profile.summary,
        personal.location,
        personal.email,
        personal.linkedin,
        personal.github,
    ))
}

fn skills_output(profile: &Profile, list: bool) -> CommandOutput {
    if list {
        let mut content = String::from("\n\u{1F4CA} Technical Skills\n");
        for category in &profile.skill_categories {
            let _ = write!(
                content,
                "\n{}:\n  {}",
                category.category,
                category.items.join(", ")
            );
        }
        return CommandOutput::success(content);
    }

    // Summary view: first 4 categories, 3 items each.
    let summary = profile
        .skill_categories
        .iter()
        .take(4)
        .map(|category| {
            let items: Vec<&str> = category
                .items
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            format!("{}: {}...", category.category, items.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");

    CommandOutput::success(format!(
        "\n\u{1F4CA} Skills Overview\n\n{summary}\n\nUse 'skills --list' for detailed view with \
         all categories"
    ))
}

fn experience_output(profile: &Profile) -> CommandOutput {
    let mut content = String::from("\n\u{1F4BC} Work Experience\n");
    for exp in &profile.experience {
        let marker = if exp.current { " (Current)" } else { "" };
        let _ = write!(
            content,
            "\n\u{250C}\u{2500} {}{}\n\u{2502}  {}\n\u{2502}  {} | {}\n\u{2502}\n\u{2502}  \
             Highlights:\n",
            exp.company, marker, exp.role, exp.location, exp.period,
        );
        for highlight in exp.highlights.iter().take(3) {
            let truncated: String = highlight.chars().take(80).collect();
            let ellipsis = if highlight.chars().count() > 80 {
                "..."
            } else {
                ""
            };
            let _ = writeln!(content, "\u{2502}  \u{2022} {truncated}{ellipsis}");
        }
        let _ = write!(
            content,
            "\u{2502}\n\u{2502}  Tech: {}\n\u{2514}{}",
            exp.technologies.join(", "),
            "\u{2500}".repeat(40),
        );
    }
    CommandOutput::success(content)
}

fn projects_output(profile: &Profile, filter: Option<&str>) -> CommandOutput {
    let selected: Vec<_> = match filter {
        Some(tag) => {
            let needle = tag.to_lowercase();
            profile
                .projects
                .iter()
                .filter(|p| p.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
                .collect()
        }
        None => profile.projects.iter().collect(),
    };

    if selected.is_empty() {
        return CommandOutput::error(format!(
            "No projects found matching filter: {}",
            filter.unwrap_or_default()
        ));
    }

    let mut content = String::from("\n\u{1F680} Projects\n");
    for project in selected {
        let _ = write!(
            content,
            "\n\u{1F4C1} {}\n   {}\n   Tags: {}\n",
            project.name,
            project.description,
            project.tags.join(", ")
        );
        if let Some(github) = &project.github {
            let _ = writeln!(content, "   GitHub: {github}");
        }
        if let Some(website) = &project.website {
            let _ = writeln!(content, "   Website: {website}");
        }
    }
    content.push_str("\nUse 'projects --filter <tag>' to filter (e.g., 'projects --filter ai')");
    CommandOutput::success(content)
}

fn contact_output(profile: &Profile) -> CommandOutput {
    let personal = &profile.personal;
    let mut content = format!(
        "\n\u{1F4EC} Contact Information\n\n\u{1F4E7} Email: {}\n\u{1F4F1} Phone: {}\n\u{1F4BC} \
         LinkedIn: {}\n\u{1F419} GitHub: {}\n\u{1F4CD} Location: {}",
        personal.email, personal.phone, personal.linkedin, personal.github, personal.location,
    );
    if personal.available_for_work {
        content.push_str("\n\n\u{1F7E2} Currently open to new opportunities!");
    }
    CommandOutput::success(content)
}

fn github_output(profile: &Profile) -> CommandOutput {
    let mut content = format!(
        "\n\u{1F419} GitHub Profile\n\nURL: {}\n\nFeatured Repositories:\n",
        profile.personal.github
    );
    for project in profile.projects.iter().filter(|p| p.github.is_some()) {
        if let Some(github) = &project.github {
            let _ = writeln!(content, "  \u{2022} {}: {}", project.name, github);
        }
    }
    content.push_str("\nOpening GitHub profile...");
    CommandOutput::info(content)
}

fn education_output(profile: &Profile) -> CommandOutput {
    let mut content = String::from("\n\u{1F4DA} Education\n");
    for edu in &profile.education {
        let _ = write!(
            content,
            "\n\u{1F393} {}\n   {}, {}\n   {}\n",
            edu.degree, edu.institution, edu.location, edu.period
        );
    }
    CommandOutput::success(content)
}

fn publications_output(profile: &Profile) -> CommandOutput {
    let mut content = String::from("\n\u{1F4F0} Publications\n");
    for publication in &profile.publications {
        let _ = write!(
            content,
            "\n\u{1F4DD} {}\n   Type: {}\n   URL: {}\n",
            publication.title, publication.kind, publication.url
        );
    }
    CommandOutput::success(content)
}

fn awards_output(profile: &Profile) -> CommandOutput {
    let mut content = String::from("\n\u{1F3C5} Awards & Recognition\n");
    for award in &profile.awards {
        let _ = write!(content, "\n\u{1F3C6} {}\n   {}\n", award.company, award.description);
    }
    CommandOutput::success(content)
}

fn certifications_output(profile: &Profile) -> CommandOutput {
    let mut content = String::from("\n\u{1F396}\u{FE0F} Certifications\n");
    for certification in &profile.certifications {
        let _ = write!(content, "\n  \u{1F4DC} {}", certification.name);
    }
    CommandOutput::success(content)
}

fn open_section(parsed: &ParsedCommand) -> Execution {
    let section = parsed.flag_text("section").unwrap_or("about");
    match SECTION_ITEMS
        .iter()
        .find(|(name, _)| *name == section)
        .map(|(_, item)| *item)
    {
        Some(item) => Execution {
            output: CommandOutput::info(format!("Opening {section}...")),
            events: vec![TerminalEvent::OpenTab(item)],
        },
        None => Execution::output(CommandOutput::error(format!("Unknown section: {section}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::parser::parse;

    fn run(input: &str) -> Execution {
        let profile = Profile::builtin();
        let parsed = parse(input).unwrap();
        execute(&profile, &parsed)
    }

    #[test]
    fn help_is_always_info() {
        let execution = run("help");
        assert_eq!(execution.output.kind, OutputKind::Info);
        for info in COMMANDS.iter() {
            assert!(execution.output.content.contains(info.name));
        }
    }

    #[test]
    fn unknown_command_is_an_error() {
        let execution = run("frobnicate");
        assert_eq!(execution.output.kind, OutputKind::Error);
        assert!(execution.output.content.contains("Command not found: frobnicate"));
    }

    #[test]
    fn skills_summary_truncates_categories_and_items() {
        let profile = Profile::builtin();
        let execution = run("skills");
        assert_eq!(execution.output.kind, OutputKind::Success);
        for category in profile.skill_categories.iter().take(4) {
            assert!(execution.output.content.contains(&category.category));
        }
        for category in profile.skill_categories.iter().skip(4) {
            assert!(!execution.output.content.contains(&category.category));
        }
        assert!(execution.output.content.contains("..."));
    }

    #[test]
    fn skills_list_shows_everything() {
        let profile = Profile::builtin();
        let execution = run("skills --list");
        for category in &profile.skill_categories {
            assert!(execution.output.content.contains(&category.category));
            for item in &category.items {
                assert!(execution.output.content.contains(item));
            }
        }
    }

    #[test]
    fn experience_truncates_long_highlights() {
        let execution = run("experience");
        assert_eq!(execution.output.kind, OutputKind::Success);
        for line in execution.output.content.lines() {
            if let Some(highlight) = line.split("\u{2022} ").nth(1) {
                assert!(highlight.chars().count() <= 83, "highlight too long: {highlight}");
            }
        }
    }

    #[test]
    fn projects_filter_matches_tags_case_insensitively() {
        let execution = run("projects --filter PYTHON");
        assert_eq!(execution.output.kind, OutputKind::Success);
        assert!(execution.output.content.contains("AI-Powered Data Analyst Agent"));
        assert!(!execution.output.content.contains("COVID-19 Tracker"));
    }

    #[test]
    fn projects_filter_with_no_match_is_an_error() {
        let execution = run("projects --filter zzzznotfound");
        assert_eq!(execution.output.kind, OutputKind::Error);
        assert!(execution.output.content.contains("zzzznotfound"));
    }

    #[test]
    fn github_emits_open_url_event() {
        let execution = run("github");
        assert_eq!(execution.output.kind, OutputKind::Info);
        assert_eq!(
            execution.events,
            vec![TerminalEvent::OpenUrl(
                Profile::builtin().personal.github.clone()
            )]
        );
    }

    #[test]
    fn open_known_section_emits_tab_event() {
        let execution = run("open --section skills");
        assert_eq!(execution.output.kind, OutputKind::Info);
        match execution.events.as_slice() {
            [TerminalEvent::OpenTab(item)] => {
                assert_eq!(item.id, "skills");
                assert_eq!(item.section, Section::Skills);
            }
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn open_defaults_to_about() {
        let execution = run("open");
        match execution.events.as_slice() {
            [TerminalEvent::OpenTab(item)] => assert_eq!(item.section, Section::About),
            other => panic!("unexpected events: {other:?}"),
        }
    }

    #[test]
    fn open_unknown_section_is_an_error() {
        let execution = run("open --section blog");
        assert_eq!(execution.output.kind, OutputKind::Error);
        assert!(execution.output.content.contains("blog"));
        assert!(execution.events.is_empty());
    }

    #[test]
    fn complete_requires_a_unique_prefix() {
        assert_eq!(complete("ab"), Some("about"));
        assert_eq!(complete("EXP"), Some("experience"));
        assert_eq!(complete(""), None);
        assert_eq!(complete("c"), None); // contact, certifications, clear
        assert_eq!(complete("xyz"), None);
    }
}
