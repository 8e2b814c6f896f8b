use lingo_backend::{
    Content, GenerateRequest, GenerationConfig, GenerativeBackend, Part,
};
use lingo_config::backend::{BackendConfig, ModelConfig};
use lingo_types::{ChatTurn, Language, ScanResult, Story, WordEntry, WordPayload};

use crate::audio::AudioSink;
use crate::chat::ChatSession;
use crate::error::ClientError;
use crate::{prompts, schemas};

const IMAGE_HEADERS: [&str; 4] = [
    "data:image/png;base64,",
    "data:image/jpeg;base64,",
    "data:image/jpg;base64,",
    "data:image/webp;base64,",
];

/// Drop a png/jpeg/jpg/webp data URI header, if any
pub fn strip_data_uri(image: &str) -> &str {
    IMAGE_HEADERS
        .iter()
        .find_map(|header| image.strip_prefix(*header))
        .unwrap_or(image)
}

/// Remove a Markdown code fence some models wrap JSON in
fn json_body(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Parse and validate a lookup reply
pub fn parse_word_payload(text: &str) -> Result<WordPayload, ClientError> {
    let payload: WordPayload = serde_json::from_str(json_body(text))?;

    if payload.term.trim().is_empty() {
        return Err(ClientError::Invalid("lookup reply has no term".to_string()));
    }

    if payload.variants.is_empty() {
        return Err(ClientError::Invalid(
            "lookup reply has no variants".to_string(),
        ));
    }

    Ok(payload)
}

/// Client for every request the app makes to the generative service
pub struct LingoClient<B> {
    backend: B,
    models: ModelConfig,
    voice: String,
}

impl<B: GenerativeBackend> LingoClient<B> {
    pub fn new(backend: B, models: ModelConfig, voice: impl Into<String>) -> Self {
        Self {
            backend,
            models,
            voice: voice.into(),
        }
    }

    pub fn from_config(backend: B, config: &BackendConfig) -> Self {
        Self::new(backend, config.models.clone(), config.voice.clone())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn models(&self) -> &ModelConfig {
        &self.models
    }

    /// Look up a word, phrase or intent.
    ///
    /// When the primary model is reported missing the same prompt is sent
    /// once to the fallback model, without the strict schema.
    pub async fn lookup_word(
        &self,
        input: &str,
        native: Language,
        target: Language,
    ) -> Result<WordPayload, ClientError> {
        if input.trim().is_empty() {
            return Err(ClientError::InvalidInput("nothing to look up".to_string()));
        }

        tracing::info!("Looking up '{}' ({} -> {})", input, native, target);
        let prompt = prompts::lookup(input, native, target);

        let request = GenerateRequest::prompt(self.models.lookup.clone(), prompt.clone())
            .with_config(GenerationConfig::json_schema(schemas::word_entry()));

        let text = match self.backend.generate(request).await {
            Ok(response) => response.text().ok_or(ClientError::EmptyResponse)?,
            Err(e) if e.is_not_found() => {
                tracing::warn!(
                    "Model {} unavailable ({}), retrying with {}",
                    self.models.lookup,
                    e,
                    self.models.lookup_fallback
                );

                let request =
                    GenerateRequest::prompt(self.models.lookup_fallback.clone(), prompt)
                        .with_config(GenerationConfig::json());
                let response = self.backend.generate(request).await?;
                response.text().unwrap_or_else(|| "{}".to_string())
            }
            Err(e) => {
                tracing::error!("Lookup failed: {}", e);
                return Err(e.into());
            }
        };

        parse_word_payload(&text)
    }

    /// Illustration for `term` as a PNG data URI; failures yield `None`
    pub async fn generate_word_image(&self, term: &str) -> Option<String> {
        let request = GenerateRequest::prompt(self.models.image.clone(), prompts::illustration(term));

        match self.backend.generate(request).await {
            Ok(response) => {
                let image = response
                    .first_inline_data()
                    .map(|blob| format!("data:image/png;base64,{}", blob.data));
                if image.is_none() {
                    tracing::debug!("No image returned for '{}'", term);
                }
                image
            }
            Err(e) => {
                tracing::warn!("Image generation failed for '{}': {}", term, e);
                None
            }
        }
    }

    /// Lookup followed by an illustration, stamped into a new entry
    pub async fn search_word(
        &self,
        input: &str,
        native: Language,
        target: Language,
        with_image: bool,
    ) -> Result<WordEntry, ClientError> {
        let payload = self.lookup_word(input, native, target).await?;

        let image_url = if with_image {
            self.generate_word_image(&payload.term).await
        } else {
            None
        };

        Ok(WordEntry::new(payload, image_url))
    }

    /// Detect and translate text regions of an image into `native`.
    ///
    /// `target` is accepted for symmetry with the other operations; the
    /// instruction only names the translation language.
    pub async fn scan_and_translate_image(
        &self,
        base64_image: &str,
        native: Language,
        target: Language,
    ) -> Result<Vec<ScanResult>, ClientError> {
        tracing::info!("Scanning image ({} -> {})", target, native);
        let data = strip_data_uri(base64_image);

        let contents = vec![Content::user(vec![
            Part::inline("image/jpeg", data),
            Part::text(prompts::scan(native)),
        ])];
        let request = GenerateRequest::new(self.models.scan.clone(), contents)
            .with_config(GenerationConfig::json_schema(schemas::scan_results()));

        let response = self.backend.generate(request).await?;
        match response.text() {
            Some(text) => Ok(serde_json::from_str(json_body(&text))?),
            None => Ok(vec![]),
        }
    }

    /// Short humorous story in `target` using every saved term
    pub async fn generate_story(
        &self,
        words: &[WordEntry],
        native: Language,
        target: Language,
    ) -> Result<Story, ClientError> {
        if words.is_empty() {
            return Err(ClientError::InvalidInput(
                "a story needs at least one word".to_string(),
            ));
        }

        let word_list = words
            .iter()
            .map(|w| w.term.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!("Generating story from {} words", words.len());

        let request = GenerateRequest::prompt(
            self.models.story.clone(),
            prompts::story(&word_list, native, target),
        )
        .with_config(GenerationConfig::json_schema(schemas::story()));

        let response = self.backend.generate(request).await?;
        match response.text() {
            Some(text) => Ok(serde_json::from_str(json_body(&text))?),
            None => Ok(Story::default()),
        }
    }

    /// New tutoring session seeded with `history`
    pub fn start_chat(&self, history: &[ChatTurn], target: Language) -> ChatSession<'_, B> {
        ChatSession::new(
            &self.backend,
            self.models.chat.clone(),
            prompts::tutor(target),
            history,
        )
    }

    /// One tutoring exchange on top of `history`.
    ///
    /// `context_word` is carried along but not yet part of the instruction.
    pub async fn chat_with_ai(
        &self,
        history: &[ChatTurn],
        message: &str,
        context_word: &str,
        target: Language,
    ) -> Result<String, ClientError> {
        tracing::debug!(
            "Chat turn with {} prior turns (context '{}')",
            history.len(),
            context_word
        );
        let mut session = self.start_chat(history, target);
        session.send_message(message).await
    }

    /// Synthesize `text` and hand the audio to `sink`; failures are only logged
    pub async fn speak_text(&self, text: &str, sink: &dyn AudioSink) {
        let request = GenerateRequest::new(
            self.models.speech.clone(),
            vec![Content {
                role: None,
                parts: vec![Part::text(text)],
            }],
        )
        .with_config(GenerationConfig::audio(self.voice.clone()));

        match self.backend.generate(request).await {
            Ok(response) => match response.leading_inline_data() {
                Some(audio) => {
                    if let Err(e) = sink.play(&audio.data).await {
                        tracing::error!("TTS playback error: {:#}", e);
                    }
                }
                None => tracing::debug!("TTS reply carried no audio"),
            },
            Err(e) => tracing::error!("TTS error: {}", e),
        }
    }
}
