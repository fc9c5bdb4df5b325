use crate::error::BotResult;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

// Export components
pub mod google_calendar;
pub mod ollama;

// Re-export the production gateway implementations
pub use google_calendar::CalendarHandle;
pub use ollama::OllamaClient;

use google_calendar::models::{CalendarEvent, CreatedEvent, NewEvent};
use ollama::models::ModelProposal;

/// Calendar side of the scheduling pipeline. The production implementation
/// talks to Google Calendar; tests substitute a stub.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// List events in the window, ordered by start time
    async fn list_events(
        &self,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
    ) -> BotResult<Vec<CalendarEvent>>;

    /// Create an event on the calendar
    async fn insert_event(&self, event: NewEvent) -> BotResult<CreatedEvent>;
}

/// Model side of the scheduling pipeline. One synchronous generate call;
/// the gateway owns coercing the raw reply into a structured proposal.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> BotResult<ModelProposal>;
}
