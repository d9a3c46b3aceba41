//! End-to-end checks of the terminal interpreter through the session API.

use std::sync::Arc;

use folio_core::profile::Profile;
use folio_core::terminal::{parse, FlagValue, LineKind, TerminalEvent, TerminalSession};

fn session() -> TerminalSession {
    TerminalSession::new(Arc::new(Profile::builtin()))
}

#[test]
fn parse_contract_examples() {
    let parsed = parse("projects --filter ai").unwrap();
    assert_eq!(parsed.command, "projects");
    assert!(parsed.args.is_empty());
    assert_eq!(parsed.flag_text("filter"), Some("ai"));

    let parsed = parse("foo -x --bar").unwrap();
    assert_eq!(parsed.command, "foo");
    assert!(parsed.args.is_empty());
    assert_eq!(parsed.flags.get("bar"), Some(&FlagValue::Switch));
    assert_eq!(parsed.flags.len(), 1);
}

#[test]
fn full_command_tour_renders_without_errors() {
    let mut session = session();
    for command in [
        "help",
        "about",
        "skills",
        "skills --list",
        "experience",
        "projects",
        "projects --filter python",
        "contact",
        "github",
        "education",
        "publications",
        "awards",
        "certifications",
        "open --section projects",
    ] {
        session.submit(command);
        let last = session.lines().last().unwrap();
        assert_ne!(last.kind, LineKind::Error, "command failed: {command}");
    }
}

#[test]
fn scrollback_interleaves_input_and_output_in_order() {
    let mut session = session();
    session.submit("about");
    session.submit("bogus");
    let kinds: Vec<LineKind> = session.lines().iter().map(|line| line.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::System,
            LineKind::Input,
            LineKind::Output,
            LineKind::Input,
            LineKind::Error,
        ]
    );
    // Line ids stay unique and increasing.
    let ids: Vec<u64> = session.lines().iter().map(|line| line.id).collect();
    let mut sorted = ids.clone();
    sorted.dedup();
    assert_eq!(ids, sorted);
}

#[test]
fn history_recall_round_trip() {
    let mut session = session();
    for cmd in ["a", "b", "c"] {
        session.submit(cmd);
    }
    assert_eq!(session.recall_previous().as_deref(), Some("c"));
    assert_eq!(session.recall_previous().as_deref(), Some("b"));
    assert_eq!(session.recall_previous().as_deref(), Some("a"));
    assert_eq!(session.recall_previous().as_deref(), Some("a"));
    assert_eq!(session.recall_next().as_deref(), Some("b"));
    assert_eq!(session.recall_next().as_deref(), Some("c"));
    assert_eq!(session.recall_next().as_deref(), Some(""));
    assert_eq!(session.recall_next(), None);
}

#[test]
fn tab_completion_through_the_session() {
    let session = session();
    assert_eq!(session.complete("pub"), Some("publications"));
    // "p" is ambiguous between projects and publications.
    assert_eq!(session.complete("p"), None);
}

#[test]
fn open_tab_event_carries_the_section_identity() {
    let mut session = session();
    let events = session.submit("open --section contact");
    match events.as_slice() {
        [TerminalEvent::OpenTab(item)] => {
            assert_eq!(item.id, "contact");
            assert_eq!(item.name, "contact.sh");
        }
        other => panic!("unexpected events: {other:?}"),
    }
}
