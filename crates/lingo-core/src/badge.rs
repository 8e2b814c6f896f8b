use lingo_types::Language;

use crate::locale::LocaleTable;

/// Display form of a scenario or posture label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// First token of the raw label
    pub token: String,
    /// Localized text, or `token` when no translation exists
    pub label: String,
}

fn badge(prefix: &str, raw: &str, locale: &LocaleTable, lang: Language) -> Option<Badge> {
    let token = raw.split([' ', '/']).next().filter(|t| !t.is_empty())?;
    let key = format!("{}_{}", prefix, token.to_lowercase());
    let label = locale.get(lang, &key);
    let label = if label == key { token } else { label };

    Some(Badge {
        token: token.to_string(),
        label: label.to_string(),
    })
}

/// Badge for a scenario label, tolerating trailing text after the first token
pub fn scenario_badge(raw: &str, lang: Language) -> Option<Badge> {
    badge("scenario", raw, LocaleTable::builtin(), lang)
}

pub fn posture_badge(raw: &str, lang: Language) -> Option<Badge> {
    badge("posture", raw, LocaleTable::builtin(), lang)
}
