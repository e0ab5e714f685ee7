use crate::discord::{Context, Error};

const DISCORD_MESSAGE_LIMIT: usize = 2000;

/// Describe the bot and list its commands.
#[poise::command(slash_command)]
pub async fn info(ctx: Context<'_>) -> Result<(), Error> {
    let path = &ctx.data().config.readme_path;
    let readme = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {}", path, e))?;

    ctx.send(
        poise::CreateReply::default()
            .content(truncate_message(&readme, DISCORD_MESSAGE_LIMIT))
            .ephemeral(true),
    )
    .await?;

    Ok(())
}

/// Cut `text` to at most `limit` characters, marking the cut with an ellipsis.
fn truncate_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut out: String = text.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}
