//! Terminal presentation of results. Formatting is pure; `ui_loop` only prints.

use std::fmt::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;
use lingo_core::badge::{posture_badge, scenario_badge};
use lingo_core::locale::t;
use lingo_types::{AppEvent, Language, PragmaticVariant, ScanResult, Story, WordEntry};

use crate::command::HELP;
use crate::state::AppState;

fn variant_badges(variant: &PragmaticVariant, lang: Language) -> String {
    [
        scenario_badge(variant.scenario.as_str(), lang),
        posture_badge(variant.posture.as_str(), lang),
    ]
    .into_iter()
    .flatten()
    .map(|b| format!("[{}]", b.label))
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn format_entry(entry: &WordEntry, lang: Language) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", entry.term);
    let _ = writeln!(out, "  {}", entry.native_definition);
    if let Some(image) = &entry.image_url {
        let _ = writeln!(out, "  ({} {} KB)", t(lang, "aiMagic"), image.len() / 1024);
    }

    let _ = writeln!(out, "\n{}", t(lang, "variations"));
    for (i, variant) in entry.variants.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}  {}",
            i + 1,
            variant.expression,
            variant_badges(variant, lang)
        );
        if !variant.pragmatic_note.is_empty() {
            let _ = writeln!(
                out,
                "     {}: {}",
                t(lang, "cultural_logic"),
                variant.pragmatic_note
            );
        }
    }

    if !entry.usage_note.trim().is_empty() {
        let tip_header = if entry.is_meme() {
            t(lang, "internetMemeWarning")
        } else {
            t(lang, "lingoTip")
        };
        let _ = writeln!(out, "\n{}\n  {}", tip_header, entry.usage_note);
    }

    if !entry.synonyms.is_empty() {
        let _ = writeln!(out, "\n  ~ {}", entry.synonyms.join(", "));
    }
    let _ = write!(out, "\n  id: {}", entry.id);

    out
}

pub fn format_scan(results: &[ScanResult], lang: Language) -> String {
    if results.is_empty() {
        return t(lang, "noTextFound").to_string();
    }

    let mut out = format!("{}\n", t(lang, "scanTitle"));
    for result in results {
        if result.phonetic.is_empty() {
            let _ = writeln!(out, "  {}", result.original);
        } else {
            let _ = writeln!(out, "  {} ({})", result.original, result.phonetic);
        }
        let _ = writeln!(out, "    -> {}", result.translation);
    }
    out.trim_end().to_string()
}

pub fn format_story(story: &Story, lang: Language) -> String {
    let mut out = format!("{}\n", t(lang, "storyMode"));
    if let Some(text) = &story.story {
        let _ = writeln!(out, "\n{text}");
    }
    if let Some(translation) = &story.translation {
        let _ = writeln!(out, "\n{translation}");
    }
    out.trim_end().to_string()
}

pub fn format_notebook(entries: &[WordEntry], lang: Language) -> String {
    if entries.is_empty() {
        return format!("{} {}", t(lang, "noSavedWords"), t(lang, "goFindSome"));
    }

    let mut out = format!("{} ({})\n", t(lang, "savedWords"), entries.len());
    for entry in entries {
        let _ = writeln!(
            out,
            "  {}  {} - {}",
            entry.id, entry.term, entry.native_definition
        );
    }
    out.trim_end().to_string()
}

/// Text for one UI event, or `None` when nothing should be shown
pub async fn render_event(state: &AppState, event: &AppEvent) -> Option<String> {
    let lang = state.settings().await.native_lang;

    match event {
        AppEvent::ShowEntry { seq, entry } => {
            if !state.lookups.is_current(*seq) {
                tracing::debug!("Discarding stale lookup #{}", seq);
                return None;
            }
            Some(format_entry(entry, lang))
        }
        AppEvent::LookupFailed { seq, message } => {
            if !state.lookups.is_current(*seq) {
                tracing::debug!("Discarding stale lookup failure #{}", seq);
                return None;
            }
            Some(message.clone())
        }
        AppEvent::ShowScan(results) => Some(format_scan(results, lang)),
        AppEvent::ShowStory(story) => Some(format_story(story, lang)),
        AppEvent::ShowReply(reply) => Some(format!("{}: {}", t(lang, "chatTitle"), reply)),
        AppEvent::ShowNotebook(entries) => Some(format_notebook(entries, lang)),
        AppEvent::Status(status) => Some(status.clone()),
        AppEvent::Help => Some(HELP.to_string()),
        _ => None,
    }
}

/// Prints whatever the event loop sends until told to quit
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let event = app_to_ui_rx.recv().await?;
        if matches!(event, AppEvent::Quit) {
            tracing::debug!("UI loop stopping");
            return Ok(());
        }

        if let Some(text) = render_event(&state, &event).await {
            println!("{text}\n");
        }
    }
}
