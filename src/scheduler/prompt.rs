use crate::components::google_calendar::models::CalendarEvent;
use chrono::{DateTime, FixedOffset};

/// Placeholder line used when the calendar has no upcoming events
pub const EMPTY_SCHEDULE_PLACEHOLDER: &str = "(no events scheduled)";

/// Fixed system instruction describing the assistant's role and output contract
pub fn system_prompt(fallback_minutes: i64) -> String {
    format!(
        "You are a scheduling assistant. Given the user's current calendar and a new \
         task to schedule, find the best available time slot.\n\n\
         Rules:\n\
         - If the task mentions exact times or a duration, use them\n\
         - Otherwise, default to a {fallback_minutes}-minute event\n\
         - Schedule during reasonable hours (9:00-18:00)\n\
         - Never overlap with existing events\n\
         - Prefer the earliest available slot\n\
         - Use ISO-8601 datetime format (YYYY-MM-DDTHH:MM:SS) without a timezone suffix\n\n\
         Respond ONLY with valid JSON in this exact format:\n\
         {{\"summary\": \"task name\", \"start\": \"YYYY-MM-DDTHH:MM:SS\", \
         \"end\": \"YYYY-MM-DDTHH:MM:SS\", \"reasoning\": \"one-sentence explanation\"}}"
    )
}

/// Render the existing schedule one event per line for the model
pub fn render_schedule(events: &[CalendarEvent]) -> String {
    if events.is_empty() {
        return EMPTY_SCHEDULE_PLACEHOLDER.to_string();
    }

    events
        .iter()
        .map(|e| format!("{}: {} → {}", e.title, e.start, e.end))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-call prompt segment: current time, lookahead window, the schedule
/// and the task itself
pub fn user_prompt(
    now: &DateTime<FixedOffset>,
    lookahead_days: i64,
    schedule: &str,
    task: &str,
) -> String {
    format!(
        "Current date/time: {}\n\n\
         My schedule for the next {} days:\n{}\n\n\
         Please schedule this task: {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        lookahead_days,
        schedule,
        task,
    )
}
