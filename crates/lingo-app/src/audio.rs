//! Speech output. The backend returns raw 16-bit little-endian mono PCM at
//! 24 kHz, base64 encoded.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use lingo_config::audio::AudioConfig;
use lingo_core::AudioSink;

pub const SAMPLE_RATE: u32 = 24_000;
pub const CHANNELS: u16 = 1;
pub const BITS_PER_SAMPLE: u16 = 16;

pub fn decode_pcm(base64_audio: &str) -> anyhow::Result<Vec<u8>> {
    STANDARD
        .decode(base64_audio.trim())
        .context("speech payload is not valid base64")
}

/// RIFF chunk size and data chunk size for `pcm_len` bytes of samples
fn chunk_sizes(pcm_len: usize) -> anyhow::Result<(u32, u32)> {
    let data_len = u32::try_from(pcm_len).context("speech clip too large for WAV")?;
    let riff_len = data_len
        .checked_add(36)
        .context("speech clip too large for WAV")?;
    Ok((riff_len, data_len))
}

/// Prefix raw PCM with a canonical 44-byte RIFF header
pub fn wav_bytes(pcm: &[u8]) -> anyhow::Result<Vec<u8>> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let (riff_len, data_len) = chunk_sizes(pcm.len())?;

    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&riff_len.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);
    Ok(wav)
}

/// Writes every clip as a numbered WAV file
pub struct WavFileSink {
    dir: PathBuf,
    counter: AtomicU32,
}

impl WavFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: AtomicU32::new(0),
        }
    }

    fn next_path(&self) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!("speech-{stamp}-{n}.wav"))
    }
}

#[async_trait]
impl AudioSink for WavFileSink {
    async fn play(&self, base64_audio: &str) -> anyhow::Result<()> {
        let pcm = decode_pcm(base64_audio)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("creating {}", self.dir.display()))?;

        let wav = wav_bytes(&pcm)?;
        let path = self.next_path();
        tokio::fs::write(&path, wav)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        tracing::info!("Speech saved to {}", path.display());
        Ok(())
    }
}

/// Discards audio when speech output is turned off
pub struct MutedSink;

#[async_trait]
impl AudioSink for MutedSink {
    async fn play(&self, _base64_audio: &str) -> anyhow::Result<()> {
        tracing::debug!("Audio disabled, dropping clip");
        Ok(())
    }
}

#[cfg(feature = "playback")]
pub struct RodioSink;

#[cfg(feature = "playback")]
#[async_trait]
impl AudioSink for RodioSink {
    async fn play(&self, base64_audio: &str) -> anyhow::Result<()> {
        let pcm = decode_pcm(base64_audio)?;
        let samples: Vec<i16> = pcm
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]))
            .collect();

        // OutputStream is not Send, keep it on one blocking thread
        tokio::task::spawn_blocking(move || -> anyhow::Result<()> {
            let (_stream, handle) = rodio::OutputStream::try_default()?;
            let sink = rodio::Sink::try_new(&handle)?;
            sink.append(rodio::buffer::SamplesBuffer::new(
                CHANNELS,
                SAMPLE_RATE,
                samples,
            ));
            sink.sleep_until_end();
            Ok(())
        })
        .await?
    }
}

#[cfg(feature = "playback")]
fn device_sink() -> Option<Arc<dyn AudioSink>> {
    Some(Arc::new(RodioSink))
}

#[cfg(not(feature = "playback"))]
fn device_sink() -> Option<Arc<dyn AudioSink>> {
    None
}

fn default_output_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("LingoPop")
        .join("speech")
}

/// Pick the sink for the current configuration
pub fn sink_for(config: &AudioConfig) -> Arc<dyn AudioSink> {
    if !config.enabled {
        return Arc::new(MutedSink);
    }

    if config.output_dir.is_none()
        && let Some(sink) = device_sink()
    {
        return sink;
    }

    let dir = config
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_output_dir);
    Arc::new(WavFileSink::new(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header() {
        let wav = wav_bytes(&[1, 0, 2, 0]).unwrap();

        assert_eq!(wav.len(), 48);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32::from_le_bytes(wav[4..8].try_into().unwrap()), 40);
        assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 24_000);
        assert_eq!(u32::from_le_bytes(wav[28..32].try_into().unwrap()), 48_000);
        assert_eq!(u32::from_le_bytes(wav[40..44].try_into().unwrap()), 4);
        assert_eq!(&wav[44..], &[1, 0, 2, 0]);
    }

    #[test]
    fn test_oversized_pcm_is_rejected() {
        assert_eq!(chunk_sizes(4).unwrap(), (40, 4));
        assert!(chunk_sizes(u32::MAX as usize - 36).is_ok());
        assert!(chunk_sizes(u32::MAX as usize).is_err());
        assert!(chunk_sizes(usize::MAX).is_err());
    }

    #[tokio::test]
    async fn test_wav_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = WavFileSink::new(dir.path());

        sink.play(&STANDARD.encode([0u8, 0, 255, 127])).await.unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let bytes = std::fs::read(files[0].as_ref().unwrap().path()).unwrap();
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[tokio::test]
    async fn test_invalid_base64_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = WavFileSink::new(dir.path());

        assert!(sink.play("not base64!").await.is_err());
    }
}
