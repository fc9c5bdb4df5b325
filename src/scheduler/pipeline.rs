use crate::components::google_calendar::models::NewEvent;
use crate::components::{CalendarGateway, ModelGateway};
use crate::config::Config;
use crate::error::{BotResult, Error};
use crate::scheduler::prompt;
use crate::scheduler::validate::validate;
use chrono::{Duration, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use tracing::info;

/// Fixed description prefix for events created by the assistant
pub const EVENT_DESCRIPTION_PREFIX: &str = "Scheduled by Slotbotti";

/// Event length in minutes when the task gives no explicit times
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Days of existing events the scheduler considers by default
pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 7;

/// One scheduling attempt: the task text plus its window parameters.
/// Nothing outlives the pipeline run.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    pub task: String,
    pub fallback_minutes: i64,
    pub lookahead_days: i64,
}

impl SchedulingRequest {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            fallback_minutes: DEFAULT_DURATION_MINUTES,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
        }
    }
}

/// Read-only configuration captured when the pipeline is built
#[derive(Debug, Clone)]
pub struct SchedulerSettings {
    pub timezone: Tz,
    pub time_zone_name: String,
    pub model: String,
}

impl SchedulerSettings {
    pub fn from_config(config: &Config) -> BotResult<Self> {
        let timezone: Tz = config
            .timezone
            .parse()
            .map_err(|_| Error::Environment(format!("Invalid timezone: {}", config.timezone)))?;

        Ok(Self {
            timezone,
            time_zone_name: config.timezone.clone(),
            model: config.ollama_model.clone(),
        })
    }
}

/// Result of a successful pipeline run, ready for display
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub reasoning: Option<String>,
    pub html_link: String,
}

/// The fetch → prompt → model → validate → create sequence that turns a
/// task description into a calendar event
pub struct SchedulingPipeline {
    calendar: Arc<dyn CalendarGateway>,
    model: Arc<dyn ModelGateway>,
    settings: SchedulerSettings,
}

impl SchedulingPipeline {
    pub fn new(
        calendar: Arc<dyn CalendarGateway>,
        model: Arc<dyn ModelGateway>,
        settings: SchedulerSettings,
    ) -> Self {
        Self {
            calendar,
            model,
            settings,
        }
    }

    /// Find a free slot for the task and create the calendar event. Every
    /// external call is attempted exactly once; callers wanting retry
    /// semantics wrap the whole call.
    pub async fn schedule(&self, request: SchedulingRequest) -> BotResult<ScheduledTask> {
        let now = Utc::now().with_timezone(&self.settings.timezone).fixed_offset();
        let window_end = now + Duration::days(request.lookahead_days);

        let events = self
            .calendar
            .list_events(now, window_end)
            .await
            .map_err(|e| Error::CalendarRead {
                source: Box::new(e),
            })?;

        let schedule_text = prompt::render_schedule(&events);
        let system_prompt = prompt::system_prompt(request.fallback_minutes);
        let user_prompt =
            prompt::user_prompt(&now, request.lookahead_days, &schedule_text, &request.task);

        let proposal = self
            .model
            .generate(&system_prompt, &user_prompt)
            .await
            .map_err(|e| Error::ModelInvocation {
                model: self.settings.model.clone(),
                source: Box::new(e),
            })?;

        // Validation failures propagate unchanged; nothing is retried or
        // corrected on the model's behalf.
        let proposal = validate(&proposal)?;

        let description = match &proposal.reasoning {
            Some(reasoning) => format!("{}\nReasoning: {}", EVENT_DESCRIPTION_PREFIX, reasoning),
            None => EVENT_DESCRIPTION_PREFIX.to_string(),
        };

        let created = self
            .calendar
            .insert_event(NewEvent {
                summary: proposal.summary.clone(),
                description,
                start: proposal.start.clone(),
                end: proposal.end.clone(),
                time_zone: self.settings.time_zone_name.clone(),
            })
            .await
            .map_err(|e| {
                if e.is_pipeline_failure() {
                    e
                } else {
                    Error::CalendarWrite {
                        source: Box::new(e),
                    }
                }
            })?;

        info!(
            summary = %proposal.summary,
            start = %proposal.start,
            end = %proposal.end,
            "event created"
        );

        Ok(ScheduledTask {
            summary: proposal.summary,
            start: proposal.start,
            end: proposal.end,
            reasoning: proposal.reasoning,
            html_link: created.html_link.unwrap_or_else(|| "N/A".to_string()),
        })
    }
}
