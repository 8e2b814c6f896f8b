use std::io::Write;
use std::path::Path;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use kanal::AsyncSender;
use lingo_types::AppEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::command::{Command, parse_line};
use crate::events::settings::{HAS_ONBOARDED, NATIVE_LANG, TARGET_LANG};

/// Image file as base64 with a data URI header
pub async fn read_image(path: &Path) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    let mime = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("webp") => "image/webp",
        _ => "image/jpeg",
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

pub async fn command_to_event(command: Command) -> anyhow::Result<AppEvent> {
    let event = match command {
        Command::Lookup(text) => AppEvent::TextInput(text),
        Command::Scan(path) => AppEvent::ScanImage(read_image(&path).await?),
        Command::Story => AppEvent::TellStory,
        Command::Chat(message) => AppEvent::Chat(message),
        Command::Speak(text) => AppEvent::Speak(text.unwrap_or_default()),
        Command::Save => AppEvent::SaveCurrent,
        Command::Saved => AppEvent::ListSaved,
        Command::Remove(id) => AppEvent::RemoveSaved(id),
        Command::Native(lang) => AppEvent::ConfigUpdate {
            field: NATIVE_LANG.to_string(),
            value: lang,
        },
        Command::Target(lang) => AppEvent::ConfigUpdate {
            field: TARGET_LANG.to_string(),
            value: lang,
        },
        Command::Reset => AppEvent::ConfigUpdate {
            field: HAS_ONBOARDED.to_string(),
            value: "false".to_string(),
        },
        Command::Help => AppEvent::Help,
        Command::Quit => AppEvent::Quit,
    };
    Ok(event)
}

fn prompt(interactive: bool) {
    if interactive {
        print!("> ");
        let _ = std::io::stdout().flush();
    }
}

/// Turn input lines into app events until EOF, `/quit` or cancellation
pub async fn watch_lines<R>(
    reader: R,
    interactive: bool,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        prompt(interactive);
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                return Ok(());
            }
        };

        let Some(line) = line else {
            tracing::debug!("Input closed");
            event_tx.send(AppEvent::Quit).await?;
            return Ok(());
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        let quit = command == Command::Quit;
        match command_to_event(command).await {
            Ok(event) => event_tx.send(event).await?,
            Err(e) => eprintln!("{e:#}"),
        }
        if quit {
            return Ok(());
        }
    }
}

/// Watcher for terminal input
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    tracing::info!("Reading input from stdin (interactive: {})", interactive);

    watch_lines(BufReader::new(tokio::io::stdin()), interactive, cancel, event_tx).await
}
