use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_backend::GenerativeBackend;
use lingo_core::{AudioSink, LingoClient};
use lingo_types::AppEvent;

use crate::state::AppState;

pub mod chat;
pub mod lookup;
pub mod notebook;
pub mod scan;
pub mod settings;
pub mod speak;
pub mod story;

use chat::handle_chat;
use lookup::handle_text_input;
use notebook::{handle_list_saved, handle_remove_saved, handle_save_current};
use scan::handle_scan;
use settings::handle_config_update;
use speak::handle_speak;
use story::handle_story;

/// Client as wired up by the binary
pub type Client = LingoClient<Arc<dyn GenerativeBackend>>;

/// Everything an event handler may need
#[derive(Clone)]
pub struct Context {
    pub state: Arc<AppState>,
    pub client: Arc<Client>,
    pub sink: Arc<dyn AudioSink>,
    pub app_to_ui_tx: AsyncSender<AppEvent>,
}

impl Context {
    pub async fn status(&self, message: impl Into<String>) -> anyhow::Result<()> {
        self.app_to_ui_tx
            .send(AppEvent::Status(message.into()))
            .await?;
        Ok(())
    }
}

/// App's main loop
pub async fn event_loop(
    ctx: Context,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, AppEvent::Quit) {
            tracing::info!("[EVENT_LOOP] Quit requested");
            ctx.app_to_ui_tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        if let Err(e) = handle_events(&ctx, event).await {
            tracing::error!("[EVENT_LOOP] Handler failed: {:#}", e);
        }
    }
}

async fn handle_events(ctx: &Context, event: AppEvent) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigUpdate { field, value } => {
            handle_config_update(ctx, &field, &value).await?;
        }
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: {} chars", text.len());
            handle_text_input(ctx, text).await?;
        }
        AppEvent::ScanImage(image) => {
            handle_scan(ctx, image).await?;
        }
        AppEvent::TellStory => {
            handle_story(ctx).await?;
        }
        AppEvent::Chat(message) => {
            handle_chat(ctx, message).await?;
        }
        AppEvent::Speak(text) => {
            handle_speak(ctx, text).await?;
        }
        AppEvent::SaveCurrent => {
            handle_save_current(ctx).await?;
        }
        AppEvent::RemoveSaved(id) => {
            handle_remove_saved(ctx, &id).await?;
        }
        AppEvent::ListSaved => {
            handle_list_saved(ctx).await?;
        }
        AppEvent::Help => {
            ctx.app_to_ui_tx.send(AppEvent::Help).await?;
        }
        AppEvent::ShowEntry { .. }
        | AppEvent::LookupFailed { .. }
        | AppEvent::ShowScan(_)
        | AppEvent::ShowStory(_)
        | AppEvent::ShowReply(_)
        | AppEvent::ShowNotebook(_)
        | AppEvent::Status(_)
        | AppEvent::Quit => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
