use super::Context;

/// Read `text` aloud, or the current term when `text` is empty
pub async fn handle_speak(ctx: &Context, text: String) -> anyhow::Result<()> {
    let text = if text.trim().is_empty() {
        match ctx.state.current.read().await.as_ref() {
            Some(entry) => entry.term.clone(),
            None => {
                ctx.status("Nothing to speak yet").await?;
                return Ok(());
            }
        }
    } else {
        text
    };

    let client = ctx.client.clone();
    let sink = ctx.sink.clone();
    tokio::spawn(async move {
        client.speak_text(&text, sink.as_ref()).await;
    });

    Ok(())
}
