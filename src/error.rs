use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    // Failure kinds raised by the scheduling pipeline. Once raised they are
    // never re-wrapped by a later stage.
    #[error("Could not read the calendar: {source}")]
    #[diagnostic(code(slotbotti::calendar_read))]
    CalendarRead {
        #[source]
        source: Box<Error>,
    },

    #[error("LLM call failed (is Ollama running with the '{model}' model pulled?): {source}")]
    #[diagnostic(code(slotbotti::model_invocation))]
    ModelInvocation {
        model: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    #[diagnostic(code(slotbotti::validation))]
    Validation(String),

    #[error("The calendar rejected the event (check the proposed start/end times): {source}")]
    #[diagnostic(code(slotbotti::calendar_write))]
    CalendarWrite {
        #[source]
        source: Box<Error>,
    },

    #[error("Discord API error: {0}")]
    #[diagnostic(code(slotbotti::discord_api))]
    DiscordApi(#[from] serenity::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(slotbotti::environment))]
    Environment(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(slotbotti::google_calendar))]
    GoogleCalendar(String),

    #[error("Ollama API error: {0}")]
    #[diagnostic(code(slotbotti::ollama))]
    Ollama(String),

    #[error(transparent)]
    #[diagnostic(code(slotbotti::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(slotbotti::other))]
    Other(String),
}

impl Error {
    /// True for the four failure kinds owned by the scheduling pipeline.
    pub fn is_pipeline_failure(&self) -> bool {
        matches!(
            self,
            Error::CalendarRead { .. }
                | Error::ModelInvocation { .. }
                | Error::Validation(_)
                | Error::CalendarWrite { .. }
        )
    }
}

/// Type alias for Result with our Error type
pub type BotResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}

/// Helper to create Ollama errors
pub fn ollama_error(message: &str) -> Error {
    Error::Ollama(message.to_string())
}

/// Helper to create other errors
#[allow(dead_code)]
pub fn other_error(message: &str) -> Error {
    Error::Other(message.to_string())
}
