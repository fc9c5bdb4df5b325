use crate::components::ollama::models::ModelProposal;
use crate::error::{BotResult, Error};
use chrono::{DateTime, NaiveDateTime};

/// A model proposal that passed validation. Event creation consumes this
/// type, so unvalidated output never reaches the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProposal {
    pub summary: String,
    pub start: String,
    pub end: String,
    pub reasoning: Option<String>,
}

/// Check the model's structured output against the required-field and
/// time-ordering contract. Working hours and overlaps are instructions to
/// the model, not invariants enforced here.
pub fn validate(proposal: &ModelProposal) -> BotResult<ValidProposal> {
    let mut missing: Vec<&str> = Vec::new();
    if proposal.summary.is_none() {
        missing.push("summary");
    }
    if proposal.start.is_none() {
        missing.push("start");
    }
    if proposal.end.is_none() {
        missing.push("end");
    }
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(Error::Validation(format!(
            "Model response missing required field(s): {}",
            missing.join(", ")
        )));
    }

    let (Some(summary), Some(start), Some(end)) = (
        proposal.summary.clone(),
        proposal.start.clone(),
        proposal.end.clone(),
    ) else {
        // ruled out by the missing-field check above
        return Err(Error::Validation(
            "Model response missing required field(s)".to_string(),
        ));
    };

    let start_dt = parse_datetime(&start).ok_or_else(|| {
        Error::Validation(format!(
            "Model returned an invalid datetime for 'start': {:?}",
            start
        ))
    })?;
    let end_dt = parse_datetime(&end).ok_or_else(|| {
        Error::Validation(format!(
            "Model returned an invalid datetime for 'end': {:?}",
            end
        ))
    })?;

    if end_dt <= start_dt {
        return Err(Error::Validation(format!(
            "Model returned an end time ({}) that is not after the start time ({})",
            end, start
        )));
    }

    Ok(ValidProposal {
        summary,
        start,
        end,
        reasoning: proposal.reasoning.clone(),
    })
}

/// ISO-8601 date-time, with or without an offset suffix
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local())
}
