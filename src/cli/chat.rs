//! Chat REPL and the one-shot `ask` command.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use folio_core::chat::backend::HttpCompletionBackend;
use folio_core::chat::{ChatMode, ChatRole, ChatSession};
use folio_core::config::constants::chat as chat_constants;
use folio_core::config::FolioConfig;
use folio_core::profile::Profile;
use folio_core::utils::ansi::{AnsiRenderer, MessageStyle};

fn new_session(config: &FolioConfig, profile: Arc<Profile>) -> ChatSession {
    let backend = HttpCompletionBackend::new(config.chat.endpoint.clone());
    ChatSession::new(profile, Box::new(backend))
}

/// Run the interactive chat loop until EOF or an exit command.
pub async fn run(config: &FolioConfig, profile: Arc<Profile>, renderer: &mut AnsiRenderer) -> Result<()> {
    let mut session = new_session(config, profile);

    if let Some(greeting) = session.transcript().first() {
        renderer.line(MessageStyle::Assistant, &greeting.content)?;
    }
    renderer.line(MessageStyle::System, "\nSuggested questions:")?;
    for question in chat_constants::SUGGESTED_QUESTIONS {
        renderer.line(MessageStyle::System, &format!("  \u{2022} {question}"))?;
    }
    renderer.line(MessageStyle::System, "\nType 'exit' to quit\n")?;

    let stdin = io::stdin();
    loop {
        render_status(&session, renderer)?;
        renderer.inline(MessageStyle::Prompt, "you> ")?;
        io::stdout().flush().ok();

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let question = input.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "exit" | "quit") {
            break;
        }

        for message in session.submit(question).await {
            if message.role == ChatRole::Assistant {
                renderer.line(MessageStyle::Assistant, &message.content)?;
            }
        }
    }

    Ok(())
}

/// Ask a single question and print the reply.
pub async fn ask(config: &FolioConfig, profile: Arc<Profile>, question: &str) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("No question provided. Use: folio ask \"Your question here\"");
    }

    let mut renderer = AnsiRenderer::stdout();
    let mut session = new_session(config, profile);
    for message in session.submit(question).await {
        if message.role == ChatRole::Assistant {
            renderer.line(MessageStyle::Assistant, &message.content)?;
        }
    }
    Ok(())
}

fn render_status(session: &ChatSession, renderer: &mut AnsiRenderer) -> Result<()> {
    match session.mode() {
        ChatMode::Live => renderer.line(
            MessageStyle::System,
            &format!(
                "AI responses: {}/{}",
                session.backend_turns(),
                chat_constants::MAX_BACKEND_TURNS
            ),
        ),
        ChatMode::Fallback => {
            renderer.line(MessageStyle::System, "Using fallback mode (AI limit reached)")
        }
    }
}
