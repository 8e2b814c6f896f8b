use lingo_core::locale::t;
use lingo_types::AppEvent;

use super::Context;

pub async fn handle_scan(ctx: &Context, image: String) -> anyhow::Result<()> {
    let settings = ctx.state.settings().await;
    ctx.status(t(settings.native_lang, "analyzingImage")).await?;

    match ctx
        .client
        .scan_and_translate_image(&image, settings.native_lang, settings.target_lang)
        .await
    {
        Ok(results) => {
            tracing::info!("Scan found {} regions", results.len());
            ctx.app_to_ui_tx.send(AppEvent::ShowScan(results)).await?;
        }
        Err(e) => {
            tracing::warn!("Scan failed: {}", e);
            ctx.status(format!("Scan failed: {e}")).await?;
        }
    }

    Ok(())
}
