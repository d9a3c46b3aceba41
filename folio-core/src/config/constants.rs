//! Fixed strings and limits, centralized so handlers and the CLI never
//! hardcode them.

/// External service defaults. Both can be overridden by `folio.toml` or
/// environment variables (see [`crate::config::FolioConfig`]).
pub mod endpoints {
    pub const DEFAULT_CHAT_ENDPOINT: &str =
        "https://mfzpal29hf.execute-api.us-east-2.amazonaws.com/default/personal-assistant-chatgpt";
    pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
}

/// Environment variable names recognized by the config loader.
pub mod env_vars {
    pub const CHAT_ENDPOINT: &str = "FOLIO_CHAT_ENDPOINT";
    pub const FORM_ENDPOINT: &str = "FOLIO_FORM_ENDPOINT";
    pub const FORM_ACCESS_KEY: &str = "FOLIO_FORM_ACCESS_KEY";
}

/// Chat session limits and fixed assistant texts.
pub mod chat {
    /// Backend-served turns allowed per session before the controller
    /// switches to the local knowledge base.
    pub const MAX_BACKEND_TURNS: u32 = 5;

    pub const GREETING: &str = "Hi! I'm Raju's personal AI assistant. Ask me any questions, and \
        you'll get very realistic answers as possible that you would get from Raju himself. What \
        would you like to know?";

    /// Appended once, right after the final backend-served reply.
    pub const QUOTA_NOTICE: &str = "You've reached the limit of 5 AI-powered responses. I'll \
        continue answering your questions using my built-in knowledge base. For the best \
        experience, please start a new session for AI-powered answers.";

    /// Shown when the backend call fails; the turn does not count against
    /// the quota.
    pub const CONNECTION_TROUBLE: &str =
        "I'm having trouble connecting right now. Please try again in a moment!";

    pub const SUGGESTED_QUESTIONS: &[&str] = &[
        "What's your experience?",
        "Tell me about your skills",
        "What projects have you built?",
        "Are you available for hire?",
    ];
}

/// Terminal prompt and seed text.
pub mod terminal {
    pub const PROMPT: &str = "visitor@portfolio:~$";

    pub const WELCOME: &str =
        "Welcome to Raju's Portfolio Terminal! Type 'help' for available commands.";
}

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "folio.toml";
