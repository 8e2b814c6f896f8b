use serde::{Deserialize, Serialize};

/// Take the first token of a backend label, up to a space or slash
fn clean_label(raw: &str) -> &str {
    raw.trim().split([' ', '/']).next().unwrap_or_default()
}

/// Social context a variant is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scenario {
    Academic,
    Formal,
    Social,
    Meme,
    Daily,
}

impl Scenario {
    pub const ALL: [Scenario; 5] = [
        Scenario::Academic,
        Scenario::Formal,
        Scenario::Social,
        Scenario::Meme,
        Scenario::Daily,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Academic => "Academic",
            Scenario::Formal => "Formal",
            Scenario::Social => "Social",
            Scenario::Meme => "Meme",
            Scenario::Daily => "Daily",
        }
    }

    /// Exact (case-insensitive) match on the first token of `raw`
    pub fn parse(raw: &str) -> Option<Self> {
        let token = clean_label(raw);
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(token))
    }

    /// Coerce whatever the backend sent; unknown labels fall back to `Daily`
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Scenario::Daily)
    }
}

impl From<String> for Scenario {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<Scenario> for String {
    fn from(scenario: Scenario) -> Self {
        scenario.as_str().to_string()
    }
}

/// Interpersonal tone of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Posture {
    Neutral,
    Friendly,
    Ironic,
    Reserved,
    Direct,
    Confident,
}

impl Posture {
    pub const ALL: [Posture; 6] = [
        Posture::Neutral,
        Posture::Friendly,
        Posture::Ironic,
        Posture::Reserved,
        Posture::Direct,
        Posture::Confident,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Posture::Neutral => "Neutral",
            Posture::Friendly => "Friendly",
            Posture::Ironic => "Ironic",
            Posture::Reserved => "Reserved",
            Posture::Direct => "Direct",
            Posture::Confident => "Confident",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let token = clean_label(raw);
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(token))
    }

    /// Unknown labels fall back to `Neutral`
    pub fn from_label(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Posture::Neutral)
    }
}

impl From<String> for Posture {
    fn from(raw: String) -> Self {
        Self::from_label(&raw)
    }
}

impl From<Posture> for String {
    fn from(posture: Posture) -> Self {
        posture.as_str().to_string()
    }
}

/// One contextual rendering of a concept
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawVariant")]
pub struct PragmaticVariant {
    pub expression: String,
    pub scenario: Scenario,
    pub posture: Posture,
    /// Social subtext, written in the native language
    pub pragmatic_note: String,
    /// The scenario label mentioned memes anywhere, e.g. "Daily/Meme"
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub meme: bool,
}

/// Variant as sent by the backend, labels still free text
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawVariant {
    expression: String,
    scenario: String,
    posture: String,
    pragmatic_note: String,
    #[serde(default)]
    meme: bool,
}

impl From<RawVariant> for PragmaticVariant {
    fn from(raw: RawVariant) -> Self {
        let scenario = Scenario::from_label(&raw.scenario);
        Self {
            expression: raw.expression,
            meme: raw.meme
                || scenario == Scenario::Meme
                || raw.scenario.to_lowercase().contains("meme"),
            scenario,
            posture: Posture::from_label(&raw.posture),
            pragmatic_note: raw.pragmatic_note,
        }
    }
}

impl PragmaticVariant {
    pub fn new(
        expression: impl Into<String>,
        scenario: Scenario,
        posture: Posture,
        pragmatic_note: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            scenario,
            posture,
            pragmatic_note: pragmatic_note.into(),
            meme: scenario == Scenario::Meme,
        }
    }

    pub fn is_meme(&self) -> bool {
        self.meme || self.scenario == Scenario::Meme
    }
}

/// Lookup reply as produced by the backend, before it becomes a `WordEntry`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPayload {
    pub term: String,
    pub native_definition: String,
    /// Backend order, never re-sorted
    pub variants: Vec<PragmaticVariant>,
    pub usage_note: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A completed lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub id: String,
    pub term: String,
    pub native_definition: String,
    pub variants: Vec<PragmaticVariant>,
    pub usage_note: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl WordEntry {
    /// Stamp a payload with a fresh id and the current time
    pub fn new(payload: WordPayload, image_url: Option<String>) -> Self {
        Self::with_identity(
            payload,
            image_url,
            uuid::Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp_millis(),
        )
    }

    pub fn with_identity(
        payload: WordPayload,
        image_url: Option<String>,
        id: String,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            term: payload.term,
            native_definition: payload.native_definition,
            variants: payload.variants,
            usage_note: payload.usage_note,
            synonyms: payload.synonyms,
            image_url,
            created_at,
        }
    }

    /// True when any variant is internet slang
    pub fn is_meme(&self) -> bool {
        self.variants.iter().any(PragmaticVariant::is_meme)
    }
}

/// One text region detected in a scanned image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResult {
    pub original: String,
    pub phonetic: String,
    pub translation: String,
}

/// Short story built from saved words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(default)]
    pub story: Option<String>,
    #[serde(default)]
    pub translation: Option<String>,
}

/// One prior conversation turn; `role` is passed to the backend verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new("model", text)
    }
}
