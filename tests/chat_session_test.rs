//! Session-level tests for the chat quota state machine.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use folio_core::chat::backend::{BackendError, CompletionBackend, WireMessage};
use folio_core::chat::fallback::fallback_reply;
use folio_core::chat::{ChatMode, ChatRole, ChatSession};
use folio_core::config::constants::chat;
use folio_core::profile::Profile;

/// Backend double: pops scripted results and counts calls.
struct ScriptedBackend {
    calls: AtomicUsize,
    script: Mutex<Vec<Result<String, BackendError>>>,
    last_request: Mutex<Vec<WireMessage>>,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<String, BackendError>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script),
            last_request: Mutex::new(Vec::new()),
        })
    }

    fn always_ok() -> Arc<Self> {
        let script = (0..chat::MAX_BACKEND_TURNS + 3)
            .map(|n| Ok(format!("reply {n}")))
            .collect();
        Self::new(script)
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, messages: &[WireMessage]) -> Result<String, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = messages.to_vec();
        self.script
            .lock()
            .unwrap()
            .remove(0)
    }
}

/// Orphan-rule workaround: a local newtype lets the shared `Arc` double be
/// boxed as a `CompletionBackend` while the test keeps its own handle.
struct SharedBackend(Arc<ScriptedBackend>);

#[async_trait]
impl CompletionBackend for SharedBackend {
    async fn complete(&self, messages: &[WireMessage]) -> Result<String, BackendError> {
        self.0.complete(messages).await
    }
}

fn session_with(backend: Arc<ScriptedBackend>) -> ChatSession {
    ChatSession::new(Arc::new(Profile::builtin()), Box::new(SharedBackend(backend)))
}

#[tokio::test]
async fn transcript_starts_with_the_greeting() {
    let session = session_with(ScriptedBackend::always_ok());
    let transcript = session.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].role, ChatRole::Assistant);
    assert_eq!(transcript[0].content, chat::GREETING);
}

#[tokio::test]
async fn backend_request_is_system_prompt_plus_transcript() {
    let backend = ScriptedBackend::always_ok();
    let mut session = session_with(backend.clone());
    session.submit("Tell me about yourself").await;

    let request = backend.last_request.lock().unwrap().clone();
    // system prompt, greeting, user turn
    assert_eq!(request.len(), 3);
    assert_eq!(request[0].role, "system");
    assert!(request[0].content.contains("## Experience"));
    assert_eq!(request[1].role, "assistant");
    assert_eq!(request[2].role, "user");
    assert_eq!(request[2].content, "Tell me about yourself");
}

#[tokio::test]
async fn quota_notice_arrives_exactly_on_the_fifth_backend_turn() {
    let backend = ScriptedBackend::always_ok();
    let mut session = session_with(backend.clone());

    for turn in 1..chat::MAX_BACKEND_TURNS {
        let new = session.submit(&format!("question {turn}")).await;
        assert_eq!(new.len(), 2, "turn {turn}: user echo + one reply");
        assert_eq!(session.mode(), ChatMode::Live);
    }

    let new = session.submit("question 5").await;
    assert_eq!(new.len(), 3, "user echo + reply + quota notice");
    assert_eq!(new[2].content, chat::QUOTA_NOTICE);
    assert_eq!(session.backend_turns(), chat::MAX_BACKEND_TURNS);
    assert_eq!(session.mode(), ChatMode::Fallback);
    assert_eq!(backend.calls(), chat::MAX_BACKEND_TURNS as usize);
}

#[tokio::test]
async fn sixth_turn_never_reaches_the_backend() {
    let backend = ScriptedBackend::always_ok();
    let mut session = session_with(backend.clone());
    for turn in 0..chat::MAX_BACKEND_TURNS {
        session.submit(&format!("question {turn}")).await;
    }
    assert_eq!(backend.calls(), chat::MAX_BACKEND_TURNS as usize);

    let profile = Profile::builtin();
    let new = session.submit("What's your experience?").await;
    assert_eq!(backend.calls(), chat::MAX_BACKEND_TURNS as usize);
    assert_eq!(new.len(), 2);
    assert_eq!(new[1].content, fallback_reply("What's your experience?", &profile));

    // Quota notice shows up only once, no matter how long the session runs.
    session.submit("and your skills?").await;
    let notices = session
        .transcript()
        .iter()
        .filter(|msg| msg.content == chat::QUOTA_NOTICE)
        .count();
    assert_eq!(notices, 1);
}

#[tokio::test]
async fn backend_failure_does_not_consume_quota() {
    let backend = ScriptedBackend::new(vec![
        Ok("reply 1".to_string()),
        Ok("reply 2".to_string()),
        Err(BackendError::Status(502)),
        Ok("reply 3".to_string()),
    ]);
    let mut session = session_with(backend.clone());

    session.submit("one").await;
    session.submit("two").await;
    assert_eq!(session.backend_turns(), 2);

    // Turn 3 fails: apologetic reply, counter unchanged, still Live.
    let new = session.submit("three").await;
    assert_eq!(new.len(), 2);
    assert_eq!(new[1].content, chat::CONNECTION_TROUBLE);
    assert_eq!(session.backend_turns(), 2);
    assert_eq!(session.mode(), ChatMode::Live);

    // The retry counts as the 3rd backend-served turn, not the 4th.
    session.submit("three again").await;
    assert_eq!(session.backend_turns(), 3);
}

#[tokio::test]
async fn empty_input_appends_nothing() {
    let backend = ScriptedBackend::always_ok();
    let mut session = session_with(backend.clone());
    let new = session.submit("   ").await;
    assert!(new.is_empty());
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn malformed_response_is_just_another_failure() {
    let backend = ScriptedBackend::new(vec![Err(BackendError::MalformedResponse)]);
    let mut session = session_with(backend);
    let new = session.submit("hello?").await;
    assert_eq!(new[1].content, chat::CONNECTION_TROUBLE);
    assert_eq!(session.backend_turns(), 0);
}
