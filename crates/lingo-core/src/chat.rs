use lingo_backend::{Content, GenerateRequest, GenerativeBackend, Part};
use lingo_types::ChatTurn;

use crate::error::ClientError;

/// Conversation that remembers every exchanged turn
pub struct ChatSession<'a, B: ?Sized> {
    backend: &'a B,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl<'a, B: GenerativeBackend + ?Sized> ChatSession<'a, B> {
    /// Seed a session with prior turns; roles go to the backend verbatim
    pub fn new(
        backend: &'a B,
        model: impl Into<String>,
        system_instruction: impl Into<String>,
        history: &[ChatTurn],
    ) -> Self {
        Self {
            backend,
            model: model.into(),
            system_instruction: system_instruction.into(),
            history: history
                .iter()
                .map(|turn| Content::new(turn.role.clone(), vec![Part::text(turn.text.clone())]))
                .collect(),
        }
    }

    /// Send one user message; an absent reply reads as empty text
    pub async fn send_message(&mut self, message: &str) -> Result<String, ClientError> {
        let user = Content::user_text(message);

        let mut contents = self.history.clone();
        contents.push(user.clone());

        let request = GenerateRequest::new(self.model.clone(), contents)
            .with_system(self.system_instruction.clone());
        let response = self.backend.generate(request).await?;
        let reply = response.text().unwrap_or_default();

        self.history.push(user);
        self.history
            .push(Content::new("model", vec![Part::text(reply.clone())]));

        Ok(reply)
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }
}
