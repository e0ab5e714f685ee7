use crate::core::config::{LinkResource, LINKS_PER_ROW};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Links to the platforms and resources used for training.
#[poise::command(slash_command, guild_only)]
pub async fn links(ctx: Context<'_>) -> Result<(), Error> {
    // Any role at all marks a verified member
    let has_role = ctx
        .author_member()
        .await
        .map(|member| !member.roles.is_empty())
        .unwrap_or(false);

    if !has_role {
        ctx.send(
            poise::CreateReply::default()
                .content("😕 You don't have permission to view this section.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    }

    let links = &ctx.data().config.links;
    if links.is_empty() {
        ctx.say("No links have been configured.").await?;
        return Ok(());
    }

    ctx.send(
        poise::CreateReply::default()
            .content("Links to the platforms and resources we use 🤓")
            .components(link_rows(links)),
    )
    .await?;

    Ok(())
}

fn link_button(link: &LinkResource) -> serenity::CreateButton {
    let button = serenity::CreateButton::new_link(&link.url).label(&link.label);
    match &link.emoji {
        Some(emoji) => button.emoji(serenity::ReactionType::Unicode(emoji.clone())),
        None => button,
    }
}

fn link_rows(links: &[LinkResource]) -> Vec<serenity::CreateActionRow> {
    chunk_links(links)
        .into_iter()
        .map(|row| serenity::CreateActionRow::Buttons(row.iter().map(link_button).collect()))
        .collect()
}

fn chunk_links(links: &[LinkResource]) -> Vec<&[LinkResource]> {
    links.chunks(LINKS_PER_ROW).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str) -> LinkResource {
        LinkResource {
            label: label.to_string(),
            emoji: Some("📚".to_string()),
            url: format!("https://example.org/{}", label),
        }
    }

    #[test]
    fn test_seven_links_make_three_rows() {
        let links: Vec<LinkResource> = (0..7).map(|i| link(&format!("l{}", i))).collect();
        let rows = chunk_links(&links);
        let sizes: Vec<usize> = rows.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_eq!(rows[2][0].label, "l6");
        assert_eq!(link_rows(&links).len(), 3);
    }

    #[test]
    fn test_no_links_make_no_rows() {
        assert!(chunk_links(&[]).is_empty());
    }
}
