use lingo_types::{AppEvent, ChatTurn};

use super::Context;

/// One exchange with the coach about the entry on screen
pub async fn handle_chat(ctx: &Context, message: String) -> anyhow::Result<()> {
    let target = ctx.state.settings().await.target_lang;
    let context_word = ctx
        .state
        .current
        .read()
        .await
        .as_ref()
        .map(|entry| entry.term.clone())
        .unwrap_or_default();
    let history = ctx.state.chat_history.read().await.clone();

    match ctx
        .client
        .chat_with_ai(&history, &message, &context_word, target)
        .await
    {
        Ok(reply) => {
            {
                let mut history = ctx.state.chat_history.write().await;
                history.push(ChatTurn::user(message));
                history.push(ChatTurn::model(reply.clone()));
            }
            ctx.app_to_ui_tx.send(AppEvent::ShowReply(reply)).await?;
        }
        Err(e) => {
            tracing::warn!("Chat failed: {}", e);
            ctx.status(format!("Chat failed: {e}")).await?;
        }
    }

    Ok(())
}
