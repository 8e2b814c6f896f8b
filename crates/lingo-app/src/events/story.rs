use lingo_core::ClientError;
use lingo_core::locale::t;
use lingo_types::AppEvent;

use super::Context;

/// Story from every saved entry
pub async fn handle_story(ctx: &Context) -> anyhow::Result<()> {
    let settings = ctx.state.settings().await;
    let words = ctx.state.notebook.read().await.entries().to_vec();

    match ctx
        .client
        .generate_story(&words, settings.native_lang, settings.target_lang)
        .await
    {
        Ok(story) => ctx.app_to_ui_tx.send(AppEvent::ShowStory(story)).await?,
        Err(ClientError::InvalidInput(_)) => {
            let lang = settings.native_lang;
            ctx.status(format!("{} {}", t(lang, "noSavedWords"), t(lang, "goFindSome")))
                .await?;
        }
        Err(e) => {
            tracing::warn!("Story failed: {}", e);
            ctx.status(format!("Story failed: {e}")).await?;
        }
    }

    Ok(())
}
