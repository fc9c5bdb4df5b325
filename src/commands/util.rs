use crate::commands::{create_success_embed, CommandResult, Context};

/// Simple ping command to check if the bot is responsive
#[poise::command(slash_command, prefix_command)]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    ctx.send(
        poise::CreateReply::default()
            .embed(create_success_embed("Ping", "Pong! The bot is alive.")),
    )
    .await?;
    Ok(())
}
