use lingo_core::locale::t;
use lingo_types::Language;

use super::Context;

pub const NATIVE_LANG: &str = "native_lang";
pub const TARGET_LANG: &str = "target_lang";
pub const HAS_ONBOARDED: &str = "has_onboarded";

fn parse_language(value: &str) -> Result<Language, String> {
    value.parse::<Language>().map_err(|e| {
        let names = Language::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{e}. Choose one of: {names}")
    })
}

/// Apply a settings change and persist it
pub async fn handle_config_update(ctx: &Context, field: &str, value: &str) -> anyhow::Result<()> {
    let settings = match field {
        NATIVE_LANG | TARGET_LANG => {
            let lang = match parse_language(value) {
                Ok(lang) => lang,
                Err(message) => return ctx.status(message).await,
            };
            ctx.state
                .update_settings(|s| {
                    if field == NATIVE_LANG {
                        s.native_lang = lang;
                    } else {
                        s.target_lang = lang;
                    }
                    s.has_onboarded = true;
                })
                .await?
        }
        HAS_ONBOARDED => {
            let Ok(flag) = value.parse::<bool>() else {
                return ctx.status(format!("Expected true or false, got '{value}'")).await;
            };
            ctx.state.update_settings(|s| s.has_onboarded = flag).await?
        }
        other => {
            tracing::warn!("Ignoring update of unknown setting '{}'", other);
            return Ok(());
        }
    };

    tracing::info!(
        "Settings: {} -> {} (onboarded: {})",
        settings.native_lang,
        settings.target_lang,
        settings.has_onboarded
    );
    let lang = settings.native_lang;
    ctx.status(format!(
        "{}: {} | {}: {}",
        t(lang, "iSpeak"),
        settings.native_lang,
        t(lang, "iWantToLearn"),
        settings.target_lang
    ))
    .await
}
