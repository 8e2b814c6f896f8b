use std::sync::Mutex;

use lingo_backend::{BackendError, GenerateResponse, Modality, Part};
use lingo_types::{ChatTurn, Language, ScanResult, Story, WordEntry};
use pretty_assertions::assert_eq;

use super::{LOOKUP_REPLY, client};
use crate::client::parse_word_payload;
use crate::{AudioSink, ClientError};

fn saved(term: &str) -> WordEntry {
    let mut payload = parse_word_payload(LOOKUP_REPLY).unwrap();
    payload.term = term.to_string();
    WordEntry::new(payload, None)
}

#[derive(Default)]
struct RecordingSink {
    played: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait::async_trait]
impl AudioSink for RecordingSink {
    async fn play(&self, base64_audio: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no output device");
        }
        self.played.lock().unwrap().push(base64_audio.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_image_never_fails() {
    let (backend, client) = client();
    backend.push_error(BackendError::ApiError {
        status: 500,
        message: "boom".to_string(),
    });

    assert_eq!(client.generate_word_image("cat").await, None);
}

#[tokio::test]
async fn test_image_without_inline_data() {
    let (backend, client) = client();
    backend.push_text("I can only describe a cat.");

    assert_eq!(client.generate_word_image("cat").await, None);
}

#[tokio::test]
async fn test_image_picks_first_inline_part() {
    let (backend, client) = client();
    backend.push_response(GenerateResponse::from_parts(vec![
        Part::text("Here is your picture"),
        Part::inline("image/png", "FIRST"),
        Part::inline("image/png", "SECOND"),
    ]));

    let image = client.generate_word_image("cat").await.unwrap();
    assert!(image.starts_with("data:image/png;base64,"));
    assert_eq!(image, "data:image/png;base64,FIRST");
}

#[tokio::test]
async fn test_scan_strips_header_and_parses() {
    let (backend, client) = client();
    backend.push_text(r#"[{"original":"出口","phonetic":"chūkǒu","translation":"Exit"}]"#);

    let results = client
        .scan_and_translate_image(
            "data:image/webp;base64,UklGRg==",
            Language::English,
            Language::ChineseSimplified,
        )
        .await
        .unwrap();

    assert_eq!(
        results,
        vec![ScanResult {
            original: "出口".to_string(),
            phonetic: "chūkǒu".to_string(),
            translation: "Exit".to_string(),
        }]
    );

    let request = &backend.requests()[0];
    assert_eq!(request.model, "gemini-2.5-flash");
    let parts = &request.contents[0].parts;
    let image = parts[0].inline_data.as_ref().unwrap();
    assert_eq!(image.mime_type, "image/jpeg");
    assert_eq!(image.data, "UklGRg==");
    assert_eq!(parts[1].text.as_deref(), Some("Analyze text in image. Target: English."));
}

#[tokio::test]
async fn test_scan_empty_payload_still_calls_backend() {
    let (backend, client) = client();
    backend.push_response(GenerateResponse::default());

    let results = client
        .scan_and_translate_image("  ", Language::English, Language::Japanese)
        .await
        .unwrap();

    assert!(results.is_empty());
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_scan_errors_propagate() {
    let (backend, client) = client();
    backend.push_error(BackendError::ApiError {
        status: 404,
        message: "not found".to_string(),
    });

    let result = client
        .scan_and_translate_image("AAAA", Language::English, Language::Japanese)
        .await;

    assert!(matches!(result, Err(ClientError::Backend(_))));
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_story_joins_terms() {
    let (backend, client) = client();
    backend.push_text(r#"{"story":"Un gato...","translation":"A cat..."}"#);

    let words = [saved("gato"), saved("sombrero")];
    let story = client
        .generate_story(&words, Language::English, Language::Spanish)
        .await
        .unwrap();

    assert_eq!(story.story.as_deref(), Some("Un gato..."));
    assert_eq!(story.translation.as_deref(), Some("A cat..."));
    assert_eq!(
        backend.requests()[0].prompt_text(),
        "Funny story in Spanish using: gato, sombrero. Translate: English."
    );
}

#[tokio::test]
async fn test_story_missing_fields_are_absent() {
    let (backend, client) = client();
    backend
        .push_text(r#"{"story":"Once upon a time"}"#)
        .push_response(GenerateResponse::default());

    let words = [saved("cat")];
    let story = client
        .generate_story(&words, Language::English, Language::French)
        .await
        .unwrap();
    assert_eq!(story.translation, None);

    let story = client
        .generate_story(&words, Language::English, Language::French)
        .await
        .unwrap();
    assert_eq!(story, Story::default());
}

#[tokio::test]
async fn test_story_requires_words() {
    let (backend, client) = client();

    let result = client
        .generate_story(&[], Language::English, Language::French)
        .await;

    assert!(matches!(result, Err(ClientError::InvalidInput(_))));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_chat_passes_history_and_roles_verbatim() {
    let (backend, client) = client();
    backend.push_text("Use 'no cap' with friends only.");

    let history = [
        ChatTurn::user("What does 'cap' mean?"),
        ChatTurn::new("assistant", "It means a lie."),
    ];
    let reply = client
        .chat_with_ai(&history, "Can I say it at work?", "no cap", Language::English)
        .await
        .unwrap();
    assert_eq!(reply, "Use 'no cap' with friends only.");

    let request = &backend.requests()[0];
    assert_eq!(
        request.system_instruction.as_deref(),
        Some("Expert language tutor for English. Focus on slang and culture.")
    );
    let roles: Vec<_> = request
        .contents
        .iter()
        .map(|c| c.role.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(roles, ["user", "assistant", "user"]);
    assert_eq!(
        request.contents[2].parts[0].text.as_deref(),
        Some("Can I say it at work?")
    );
}

#[tokio::test]
async fn test_chat_session_accumulates_turns() {
    let (backend, client) = client();
    backend.push_text("first").push_text("second");

    let mut session = client.start_chat(&[], Language::Korean);
    assert_eq!(session.send_message("hi").await.unwrap(), "first");
    assert_eq!(session.send_message("again").await.unwrap(), "second");

    assert_eq!(session.history().len(), 4);
    assert_eq!(backend.requests()[1].contents.len(), 3);
}

#[tokio::test]
async fn test_chat_failure_keeps_history_unchanged() {
    let (backend, client) = client();
    backend.push_error(BackendError::RateLimitExceeded);

    let mut session = client.start_chat(&[ChatTurn::user("hi")], Language::Korean);
    assert!(session.send_message("again").await.is_err());
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn test_speech_plays_audio() {
    let (backend, client) = client();
    backend.push_inline("audio/L16;codec=pcm;rate=24000", "UklGRg==");
    let sink = RecordingSink::default();

    client.speak_text("Break a leg!", &sink).await;

    assert_eq!(*sink.played.lock().unwrap(), vec!["UklGRg==".to_string()]);
    let request = &backend.requests()[0];
    assert_eq!(request.model, "gemini-2.5-flash-preview-tts");
    assert_eq!(request.config.response_modalities, Some(vec![Modality::Audio]));
    assert!(request.contents[0].role.is_none());
}

#[tokio::test]
async fn test_speech_failures_are_swallowed() {
    let (backend, client) = client();
    backend
        .push_error(BackendError::AuthenticationError)
        .push_inline("audio/L16", "AAAA")
        .push_text("no audio here");

    let sink = RecordingSink {
        fail: true,
        ..Default::default()
    };
    client.speak_text("one", &sink).await;
    client.speak_text("two", &sink).await;
    client.speak_text("three", &sink).await;

    assert!(sink.played.lock().unwrap().is_empty());
    assert_eq!(backend.call_count(), 3);
}
