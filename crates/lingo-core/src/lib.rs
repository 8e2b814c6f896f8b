pub mod audio;
pub mod badge;
pub mod chat;
pub mod client;
pub mod error;
pub mod locale;
pub mod prompts;
pub mod schemas;

#[cfg(test)]
mod tests;

pub use audio::AudioSink;
pub use chat::ChatSession;
pub use client::LingoClient;
pub use error::ClientError;
