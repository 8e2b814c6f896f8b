use crate::types::{ScanResult, Story, WordEntry};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigUpdate {
        field: String,
        value: String,
    },
    /// Free text typed by the user, looked up as a word, phrase or intent
    TextInput(String),
    ShowEntry {
        seq: u64,
        entry: WordEntry,
    },
    LookupFailed {
        seq: u64,
        message: String,
    },
    /// Base64 image, optionally carrying a data URI header
    ScanImage(String),
    ShowScan(Vec<ScanResult>),
    TellStory,
    ShowStory(Story),
    Chat(String),
    ShowReply(String),
    Speak(String),
    SaveCurrent,
    RemoveSaved(String),
    ListSaved,
    ShowNotebook(Vec<WordEntry>),
    Status(String),
    Help,
    Quit,
}
