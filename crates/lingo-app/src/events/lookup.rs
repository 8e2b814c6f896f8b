use lingo_core::locale::{failure_message, t};
use lingo_types::AppEvent;

use super::Context;

/// Start a lookup in the background; the event loop stays free for input
pub async fn handle_text_input(ctx: &Context, text: String) -> anyhow::Result<()> {
    let seq = ctx.state.begin_lookup().await;
    let settings = ctx.state.settings().await;
    ctx.status(t(settings.native_lang, "consulting")).await?;

    let ctx = ctx.clone();
    tokio::spawn(async move {
        if let Err(e) = run_lookup(&ctx, seq, &text).await {
            tracing::error!("Lookup #{} could not be delivered: {:#}", seq, e);
        }
    });

    Ok(())
}

/// Search, then publish the outcome tagged with `seq`
pub async fn run_lookup(ctx: &Context, seq: u64, text: &str) -> anyhow::Result<()> {
    let settings = ctx.state.settings().await;
    let with_image = ctx.state.config.read().await.ui.generate_images;

    let result = ctx
        .client
        .search_word(text, settings.native_lang, settings.target_lang, with_image)
        .await;

    match result {
        Ok(entry) => {
            if !ctx.state.finish_lookup(seq, entry.clone()).await {
                tracing::debug!("Lookup #{} superseded, not making it current", seq);
            }
            ctx.app_to_ui_tx
                .send(AppEvent::ShowEntry { seq, entry })
                .await?;
        }
        Err(e) => {
            tracing::warn!("Lookup #{} failed: {}", seq, e);
            let message = failure_message(settings.native_lang, &e);
            ctx.app_to_ui_tx
                .send(AppEvent::LookupFailed { seq, message })
                .await?;
        }
    }

    Ok(())
}
