use serde_json::json;
use slotbotti::components::google_calendar::models::CalendarEvent;
use slotbotti::config::Config;
use slotbotti::scheduler::prompt::{render_schedule, EMPTY_SCHEDULE_PLACEHOLDER};

fn test_config() -> Config {
    Config {
        discord_token: String::new(),
        google_client_id: String::new(),
        google_client_secret: String::new(),
        google_calendar_id: "primary".to_string(),
        allowed_user_ids: vec![123456789],
        timezone: "UTC".to_string(),
        ollama_url: "http://localhost:11434".to_string(),
        ollama_model: "test-model".to_string(),
        default_duration_minutes: 60,
        lookahead_days: 7,
        redis_url: "redis://127.0.0.1:6379".to_string(),
        activity: "Testing".to_string(),
    }
}

/// Smoke test to verify that a config can be constructed and queried
#[test]
fn test_config_fields() {
    let config = test_config();
    assert_eq!(config.google_calendar_id, "primary");
    assert_eq!(config.default_duration_minutes, 60);
    assert_eq!(config.lookahead_days, 7);
    assert!(config.is_user_allowed(123456789));
    assert!(!config.is_user_allowed(42));
}

#[test]
fn timed_api_event_keeps_its_datetimes() {
    let item = json!({
        "summary": "Team standup",
        "description": "Daily sync",
        "start": { "dateTime": "2026-02-09T09:00:00-05:00" },
        "end": { "dateTime": "2026-02-09T09:30:00-05:00" },
    });

    let event = CalendarEvent::from_api_item(&item);
    assert_eq!(event.title, "Team standup");
    assert_eq!(event.start, "2026-02-09T09:00:00-05:00");
    assert_eq!(event.end, "2026-02-09T09:30:00-05:00");
    assert_eq!(event.description, "Daily sync");
}

#[test]
fn all_day_api_event_is_normalized_to_datetime_form() {
    let item = json!({
        "summary": "Conference",
        "start": { "date": "2026-02-10" },
        "end": { "date": "2026-02-11" },
    });

    let event = CalendarEvent::from_api_item(&item);
    assert_eq!(event.start, "2026-02-10T00:00:00");
    assert_eq!(event.end, "2026-02-11T00:00:00");
    assert_eq!(event.description, "");
}

#[test]
fn untitled_api_event_gets_placeholder_title() {
    let item = json!({
        "start": { "dateTime": "2026-02-09T09:00:00Z" },
        "end": { "dateTime": "2026-02-09T10:00:00Z" },
    });

    let event = CalendarEvent::from_api_item(&item);
    assert_eq!(event.title, "(untitled)");
}

#[test]
fn schedule_rendering_matches_event_order() {
    let events = vec![
        CalendarEvent {
            title: "A".to_string(),
            start: "2026-02-09T09:00:00".to_string(),
            end: "2026-02-09T10:00:00".to_string(),
            description: String::new(),
        },
        CalendarEvent {
            title: "B".to_string(),
            start: "2026-02-09T11:00:00".to_string(),
            end: "2026-02-09T12:00:00".to_string(),
            description: String::new(),
        },
    ];

    assert_eq!(
        render_schedule(&events),
        "A: 2026-02-09T09:00:00 → 2026-02-09T10:00:00\nB: 2026-02-09T11:00:00 → 2026-02-09T12:00:00"
    );
}

#[test]
fn empty_schedule_renders_placeholder() {
    assert_eq!(render_schedule(&[]), EMPTY_SCHEDULE_PLACEHOLDER);
}
