use super::actor::{CalendarActor, CalendarActorHandle};
use super::models::{CalendarEvent, CreatedEvent, NewEvent};
use crate::components::CalendarGateway;
use crate::config::Config;
use crate::error::BotResult;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handle for interacting with the Google Calendar actor
#[derive(Clone)]
pub struct CalendarHandle {
    actor_handle: CalendarActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl CalendarHandle {
    /// Create a new CalendarHandle and spawn the actor
    pub async fn new(config: Arc<RwLock<Config>>) -> BotResult<Self> {
        let (mut actor, handle) = CalendarActor::new(config).await?;

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Ok(Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        })
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BotResult<()> {
        self.actor_handle.shutdown().await
    }
}

#[async_trait]
impl CalendarGateway for CalendarHandle {
    async fn list_events(
        &self,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
    ) -> BotResult<Vec<CalendarEvent>> {
        self.actor_handle.list_events(window_start, window_end).await
    }

    async fn insert_event(&self, event: NewEvent) -> BotResult<CreatedEvent> {
        self.actor_handle.insert_event(event).await
    }
}
