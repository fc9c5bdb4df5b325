use crate::commands::{create_success_embed, CommandResult, Context};
use crate::error::Error;
use crate::scheduler::SchedulingRequest;
use tracing::warn;

/// Only user IDs on the configured allowlist may trigger scheduling.
/// Authorization is a front-end concern, not a pipeline one.
async fn is_allowed(ctx: Context<'_>) -> Result<bool, Error> {
    let user_id = ctx.author().id.get();
    let allowed = {
        let config_read = ctx.data().config.read().await;
        config_read.is_user_allowed(user_id)
    };

    if !allowed {
        warn!(user_id, "blocked scheduling request from unauthorised user");
    }

    Ok(allowed)
}

/// Find a free slot for a task and put it on the calendar
#[poise::command(slash_command, prefix_command, check = "is_allowed")]
pub async fn schedule(
    ctx: Context<'_>,
    #[rest]
    #[description = "What to schedule, in plain words"]
    task: String,
) -> CommandResult {
    let task = task.trim().to_string();
    if task.is_empty() {
        ctx.say("Tell me what to schedule.").await?;
        return Ok(());
    }

    ctx.say("On it — let me check your calendar…").await?;

    let request = {
        let config_read = ctx.data().config.read().await;
        SchedulingRequest {
            task: task.clone(),
            fallback_minutes: config_read.default_duration_minutes,
            lookahead_days: config_read.lookahead_days,
        }
    };

    match ctx.data().pipeline.schedule(request).await {
        Ok(scheduled) => {
            let details = format!(
                "**Start:** {}\n**End:** {}\n**Reason:** {}\n**Link:** {}",
                scheduled.start,
                scheduled.end,
                scheduled.reasoning.as_deref().unwrap_or("N/A"),
                scheduled.html_link,
            );
            ctx.send(
                poise::CreateReply::default().embed(create_success_embed(
                    &format!("{} scheduled!", scheduled.summary),
                    &details,
                )),
            )
            .await?;
        }
        Err(e) => {
            // Render the failure's message; a bad model reply or a busy
            // calendar must not take down the channel session.
            warn!(error = %e, "scheduling failed");
            ctx.say(format!("⚠️ Couldn't schedule that: {}", e)).await?;
        }
    }

    Ok(())
}
