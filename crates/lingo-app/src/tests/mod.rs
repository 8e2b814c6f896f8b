//! Event handling against a scripted backend and an in-memory store

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncReceiver;
use lingo_backend::GenerativeBackend;
use lingo_backend::testing::ScriptedBackend;
use lingo_config::backend::ModelConfig;
use lingo_config::{Config, KeyValueStore, MemoryStore};
use lingo_core::{AudioSink, LingoClient};
use lingo_types::AppEvent;
use tokio::time::timeout;

use crate::events::Context;
use crate::state::AppState;


pub(crate) const LOOKUP_REPLY: &str = r#"{
    "term": "no worries",
    "nativeDefinition": "没关系",
    "variants": [
        {
            "expression": "No worries!",
            "scenario": "Daily",
            "posture": "Friendly",
            "pragmaticNote": "轻松地回应道谢"
        }
    ],
    "usageNote": "澳式英语里尤其常见。",
    "synonyms": ["it's fine"]
}"#;

/// Records clips instead of playing them
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub clips: std::sync::Mutex<Vec<String>>,
}

#[async_trait]
impl AudioSink for RecordingSink {
    async fn play(&self, base64_audio: &str) -> anyhow::Result<()> {
        self.clips.lock().unwrap().push(base64_audio.to_string());
        Ok(())
    }
}

pub(crate) struct Harness {
    pub backend: Arc<ScriptedBackend>,
    pub sink: Arc<RecordingSink>,
    pub store: Arc<dyn KeyValueStore>,
    pub ctx: Context,
    pub ui_rx: AsyncReceiver<AppEvent>,
}

pub(crate) fn harness() -> Harness {
    let backend = Arc::new(ScriptedBackend::new());
    let shared: Arc<dyn GenerativeBackend> = backend.clone();
    let client = LingoClient::new(shared, ModelConfig::default(), "Kore");

    let mut config = Config::default();
    config.ui.generate_images = false;

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let state = Arc::new(AppState::new(config, store.clone()));
    let sink = Arc::new(RecordingSink::default());
    let (ui_tx, ui_rx) = kanal::unbounded_async();

    let ctx = Context {
        state,
        client: Arc::new(client),
        sink: sink.clone(),
        app_to_ui_tx: ui_tx,
    };

    Harness {
        backend,
        sink,
        store,
        ctx,
        ui_rx,
    }
}

/// Next UI event, failing the test after two seconds
pub(crate) async fn next_ui(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for UI event")
        .expect("UI channel closed")
}
