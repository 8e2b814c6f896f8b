use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use lingo_config::{Config, KeyValueStore, Notebook, Settings};
use lingo_types::{ChatTurn, WordEntry};
use tokio::sync::RwLock;

/// Numbers lookups so that only the newest one gets displayed
#[derive(Default)]
pub struct LookupSequence {
    latest: AtomicU64,
}

impl LookupSequence {
    /// Issue the number for a new lookup, superseding all earlier ones
    pub fn next(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == seq
    }
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub store: Arc<dyn KeyValueStore>,
    pub settings: RwLock<Settings>,
    pub notebook: RwLock<Notebook>,
    /// Entry on screen, the subject of save/speak/chat
    pub current: RwLock<Option<WordEntry>>,
    pub chat_history: RwLock<Vec<ChatTurn>>,
    pub lookups: LookupSequence,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let settings = Settings::load(store.as_ref());
        let notebook = Notebook::load(store.as_ref()).unwrap_or_else(|e| {
            tracing::warn!("Failed to load notebook, starting empty: {}", e);
            Notebook::default()
        });

        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            settings: RwLock::new(settings),
            notebook: RwLock::new(notebook),
            current: RwLock::new(None),
            chat_history: RwLock::new(Vec::new()),
            lookups: LookupSequence::default(),
        }
    }

    pub async fn settings(&self) -> Settings {
        *self.settings.read().await
    }

    /// Apply `change` and write the result through to the store
    pub async fn update_settings<F>(&self, change: F) -> anyhow::Result<Settings>
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        change(&mut settings);
        settings.save(self.store.as_ref())?;
        Ok(*settings)
    }

    /// Issue a lookup number and clear the entry on screen until it resolves
    pub async fn begin_lookup(&self) -> u64 {
        let mut current = self.current.write().await;
        let seq = self.lookups.next();
        *current = None;
        seq
    }

    /// Make `entry` the one on screen if lookup `seq` is still the newest.
    /// A new subject starts a new conversation.
    pub async fn finish_lookup(&self, seq: u64, entry: WordEntry) -> bool {
        let mut current = self.current.write().await;
        if !self.lookups.is_current(seq) {
            return false;
        }
        *current = Some(entry);
        self.chat_history.write().await.clear();
        true
    }
}
