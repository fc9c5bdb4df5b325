use super::models::{CalendarEvent, CreatedEvent, NewEvent};
use super::token::TokenManager;
use crate::config::Config;
use crate::error::{google_calendar_error, BotResult};
use chrono::{DateTime, FixedOffset};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::info;
use url::Url;

const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// The Google Calendar actor that processes messages
pub struct CalendarActor {
    config: Arc<RwLock<Config>>,
    token_manager: TokenManager,
    client: Client,
    command_rx: mpsc::Receiver<CalendarCommand>,
}

/// Commands that can be sent to the Google Calendar actor
pub enum CalendarCommand {
    ListEvents {
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
        respond_to: mpsc::Sender<BotResult<Vec<CalendarEvent>>>,
    },
    InsertEvent {
        event: NewEvent,
        respond_to: mpsc::Sender<BotResult<CreatedEvent>>,
    },
    Shutdown,
}

/// Handle for communicating with the Google Calendar actor
#[derive(Clone)]
pub struct CalendarActorHandle {
    command_tx: mpsc::Sender<CalendarCommand>,
}

impl CalendarActorHandle {
    /// List events in the window
    pub async fn list_events(
        &self,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
    ) -> BotResult<Vec<CalendarEvent>> {
        let (respond_to, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarCommand::ListEvents {
                window_start,
                window_end,
                respond_to,
            })
            .await
            .map_err(|e| google_calendar_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| google_calendar_error("Response channel closed"))?
    }

    /// Create an event on the calendar
    pub async fn insert_event(&self, event: NewEvent) -> BotResult<CreatedEvent> {
        let (respond_to, mut response_rx) = mpsc::channel(1);
        self.command_tx
            .send(CalendarCommand::InsertEvent { event, respond_to })
            .await
            .map_err(|e| google_calendar_error(&format!("Actor mailbox error: {}", e)))?;

        response_rx
            .recv()
            .await
            .ok_or_else(|| google_calendar_error("Response channel closed"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> BotResult<()> {
        let _ = self.command_tx.send(CalendarCommand::Shutdown).await;
        Ok(())
    }
}

impl CalendarActor {
    /// Create a new actor and return its handle
    pub async fn new(config: Arc<RwLock<Config>>) -> BotResult<(Self, CalendarActorHandle)> {
        let (command_tx, command_rx) = mpsc::channel(32);
        let token_manager = TokenManager::new(Arc::clone(&config)).await?;

        let actor = Self {
            config,
            token_manager,
            client: Client::new(),
            command_rx,
        };

        let handle = CalendarActorHandle { command_tx };

        Ok((actor, handle))
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Google Calendar actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                CalendarCommand::ListEvents {
                    window_start,
                    window_end,
                    respond_to,
                } => {
                    let result = self.list_events(window_start, window_end).await;
                    let _ = respond_to.send(result).await;
                }
                CalendarCommand::InsertEvent { event, respond_to } => {
                    let result = self.insert_event(event).await;
                    let _ = respond_to.send(result).await;
                }
                CalendarCommand::Shutdown => {
                    info!("Google Calendar actor shutting down");
                    break;
                }
            }
        }

        info!("Google Calendar actor shut down");
    }

    /// List events in the window, ordered by start time
    async fn list_events(
        &self,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
    ) -> BotResult<Vec<CalendarEvent>> {
        let calendar_id = {
            let config_read = self.config.read().await;
            config_read.google_calendar_id.clone()
        };

        let access_token = self.token_manager.access_token().await?;

        let url_str = format!("{}/calendars/{}/events", CALENDAR_API_BASE, calendar_id);
        let mut url = Url::parse(&url_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.query_pairs_mut()
            .append_pair("timeMin", &window_start.to_rfc3339())
            .append_pair("timeMax", &window_end.to_rfc3339())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        let response_data: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))?;

        let events = response_data
            .get("items")
            .and_then(|i| i.as_array())
            .map(|items| items.iter().map(CalendarEvent::from_api_item).collect())
            .unwrap_or_default();

        Ok(events)
    }

    /// Create an event on the calendar
    async fn insert_event(&self, event: NewEvent) -> BotResult<CreatedEvent> {
        let calendar_id = {
            let config_read = self.config.read().await;
            config_read.google_calendar_id.clone()
        };

        let access_token = self.token_manager.access_token().await?;

        let url = format!("{}/calendars/{}/events", CALENDAR_API_BASE, calendar_id);
        let body = json!({
            "summary": event.summary,
            "description": event.description,
            "start": { "dateTime": event.start, "timeZone": event.time_zone },
            "end": { "dateTime": event.end, "timeZone": event.time_zone },
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .json(&body)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to create event: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to create event: HTTP {} - {}",
                status, error_body
            )));
        }

        let created: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse create response: {}", e)))?;

        Ok(CreatedEvent {
            id: created
                .get("id")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            html_link: created
                .get("htmlLink")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        })
    }
}
