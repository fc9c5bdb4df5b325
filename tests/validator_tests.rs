use slotbotti::components::ollama::models::ModelProposal;
use slotbotti::error::Error;
use slotbotti::scheduler::validate::validate;

fn proposal(
    summary: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    reasoning: Option<&str>,
) -> ModelProposal {
    ModelProposal {
        summary: summary.map(str::to_string),
        start: start.map(str::to_string),
        end: end.map(str::to_string),
        reasoning: reasoning.map(str::to_string),
    }
}

fn validation_message(proposal: &ModelProposal) -> String {
    match validate(proposal) {
        Err(Error::Validation(message)) => message,
        Err(other) => panic!("expected a validation failure, got: {:?}", other),
        Ok(valid) => panic!("expected a validation failure, got: {:?}", valid),
    }
}

#[test]
fn complete_proposal_passes() {
    let input = proposal(
        Some("Write docs"),
        Some("2026-02-10T14:00:00"),
        Some("2026-02-10T15:00:00"),
        Some("afternoon free"),
    );

    let valid = validate(&input).unwrap();
    assert_eq!(valid.summary, "Write docs");
    assert_eq!(valid.start, "2026-02-10T14:00:00");
    assert_eq!(valid.end, "2026-02-10T15:00:00");
    assert_eq!(valid.reasoning.as_deref(), Some("afternoon free"));
}

#[test]
fn reasoning_is_optional() {
    let input = proposal(
        Some("Write docs"),
        Some("2026-02-10T14:00:00"),
        Some("2026-02-10T15:00:00"),
        None,
    );

    let valid = validate(&input).unwrap();
    assert_eq!(valid.reasoning, None);
}

#[test]
fn offset_datetimes_are_accepted() {
    let input = proposal(
        Some("Standup"),
        Some("2026-02-10T09:00:00-05:00"),
        Some("2026-02-10T09:30:00-05:00"),
        None,
    );

    assert!(validate(&input).is_ok());
}

#[test]
fn missing_fields_are_named_sorted() {
    let message = validation_message(&proposal(None, None, None, None));
    assert!(
        message.contains("end, start, summary"),
        "missing fields should be alphabetically sorted, got: {}",
        message
    );
}

#[test]
fn missing_start_and_end_named_without_summary() {
    let message = validation_message(&proposal(Some("No times"), None, None, None));
    assert!(message.contains("end, start"), "got: {}", message);
    assert!(!message.contains("summary"), "got: {}", message);
}

#[test]
fn invalid_start_names_field_and_echoes_value() {
    let message = validation_message(&proposal(
        Some("Write docs"),
        Some("not-a-date"),
        Some("2026-02-10T15:00:00"),
        None,
    ));
    assert!(message.contains("'start'"), "got: {}", message);
    assert!(message.contains("not-a-date"), "got: {}", message);
}

#[test]
fn invalid_end_names_field_and_echoes_value() {
    let message = validation_message(&proposal(
        Some("Write docs"),
        Some("2026-02-10T14:00:00"),
        Some("soonish"),
        None,
    ));
    assert!(message.contains("'end'"), "got: {}", message);
    assert!(message.contains("soonish"), "got: {}", message);
}

#[test]
fn equal_start_and_end_is_rejected_with_both_values() {
    let message = validation_message(&proposal(
        Some("Write docs"),
        Some("2026-02-10T14:00:00"),
        Some("2026-02-10T14:00:00"),
        None,
    ));
    assert!(message.contains("2026-02-10T14:00:00"), "got: {}", message);
}

#[test]
fn reversed_start_and_end_is_rejected_with_both_values() {
    let message = validation_message(&proposal(
        Some("Write docs"),
        Some("2026-02-10T15:00:00"),
        Some("2026-02-10T14:00:00"),
        None,
    ));
    assert!(message.contains("2026-02-10T15:00:00"), "got: {}", message);
    assert!(message.contains("2026-02-10T14:00:00"), "got: {}", message);
}

#[test]
fn validation_is_idempotent() {
    let good = proposal(
        Some("Write docs"),
        Some("2026-02-10T14:00:00"),
        Some("2026-02-10T15:00:00"),
        Some("afternoon free"),
    );
    assert_eq!(validate(&good).unwrap(), validate(&good).unwrap());

    let bad = proposal(Some("No times"), None, None, None);
    assert_eq!(validation_message(&bad), validation_message(&bad));
}

#[test]
fn extra_fields_are_ignored_at_deserialization() {
    let raw = r#"{
        "summary": "Write docs",
        "start": "2026-02-10T14:00:00",
        "end": "2026-02-10T15:00:00",
        "reasoning": "afternoon free",
        "confidence": 0.9,
        "slot_quality": "good"
    }"#;

    let parsed: ModelProposal = serde_json::from_str(raw).unwrap();
    assert!(validate(&parsed).is_ok());
}
