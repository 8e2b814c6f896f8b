/// Playback collaborator for synthesized speech
#[async_trait::async_trait]
pub trait AudioSink: Send + Sync {
    /// Decode and play a base64 audio payload
    async fn play(&self, base64_audio: &str) -> anyhow::Result<()>;
}
