pub mod events;
pub mod language;
pub mod types;

pub use events::AppEvent;
pub use language::{Language, UnknownLanguage};
pub use types::{
    ChatTurn, Posture, PragmaticVariant, ScanResult, Scenario, Story, WordEntry, WordPayload,
};
