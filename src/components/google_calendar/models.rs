use serde_json::Value;

/// Calendar entry as the scheduling pipeline sees it
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, Default, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub description: String,
}

impl CalendarEvent {
    /// Build from a Google Calendar API event resource. All-day entries only
    /// carry a date; they are normalized to date-time form.
    pub fn from_api_item(item: &Value) -> Self {
        Self {
            title: item
                .get("summary")
                .and_then(|s| s.as_str())
                .unwrap_or("(untitled)")
                .to_string(),
            start: event_time(item.get("start")),
            end: event_time(item.get("end")),
            description: item
                .get("description")
                .and_then(|s| s.as_str())
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn event_time(field: Option<&Value>) -> String {
    let Some(field) = field else {
        return String::new();
    };
    if let Some(date_time) = field.get("dateTime").and_then(|v| v.as_str()) {
        return date_time.to_string();
    }
    if let Some(date) = field.get("date").and_then(|v| v.as_str()) {
        return format!("{}T00:00:00", date);
    }
    String::new()
}

/// Input for creating an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub summary: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub time_zone: String,
}

/// Identifier and link the service assigns to a freshly created event
#[derive(Debug, Clone, Default)]
pub struct CreatedEvent {
    pub id: Option<String>,
    pub html_link: Option<String>,
}
