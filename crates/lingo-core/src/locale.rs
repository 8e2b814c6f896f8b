//! UI label strings per native language.
//!
//! Lookup order: requested language, English, Chinese (Simplified), then the
//! key itself. Languages without a table of their own read from English first.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

use lingo_types::Language;

type Table = HashMap<&'static str, &'static str>;

const EN: [(&str, &str); 39] = [
    ("discover", "Authentic Expressions"),
    ("searchPlaceholder", "What's on your mind? Type a concept or word..."),
    ("myNotebook", "Notebook"),
    ("noSavedWords", "Nothing saved yet."),
    ("goFindSome", "Go find some!"),
    ("storyMode", "Story Mode"),
    ("studyMode", "Flashcards"),
    ("aiMagic", "AI Magic"),
    ("savedWords", "Saved Records"),
    ("askAi", "Deep Dive with Coach"),
    ("chatTitle", "Discuss"),
    ("chatPlaceholder", "Ask the coach anything..."),
    ("lingoTip", "Coach's Pro Tips"),
    ("variations", "Situational 'How-to'?"),
    ("iSpeak", "My Native Language"),
    ("iWantToLearn", "I want to learn"),
    ("letsGo", "Start Exploring"),
    ("consulting", "Analyzing cultural nuances..."),
    ("startTyping", "Describe an intent or word to see authentic options"),
    ("search", "Search"),
    ("notebook", "Memory"),
    ("scan", "Scan"),
    ("scanTitle", "Visual Scan"),
    ("analyzingImage", "Analyzing..."),
    ("noTextFound", "No text detected."),
    ("internetMemeWarning", "Internet Meme Risk Warning"),
    ("oops", "Oops, something went wrong"),
    ("scenario_academic", "Academic"),
    ("scenario_formal", "Formal"),
    ("scenario_social", "Social"),
    ("scenario_meme", "Meme"),
    ("scenario_daily", "Daily"),
    ("posture_neutral", "Neutral"),
    ("posture_friendly", "Friendly"),
    ("posture_ironic", "Ironic"),
    ("posture_reserved", "Reserved"),
    ("posture_direct", "Direct"),
    ("posture_confident", "Confident"),
    ("cultural_logic", "CULTURAL LOGIC"),
];

const ZH: [(&str, &str); 39] = [
    ("discover", "地道表达"),
    ("searchPlaceholder", "想表达什么？输入意思或词汇..."),
    ("myNotebook", "生词本"),
    ("noSavedWords", "还没有保存。"),
    ("goFindSome", "去搜一些！"),
    ("storyMode", "故事模式"),
    ("studyMode", "复习闪卡"),
    ("aiMagic", "AI 魔法"),
    ("savedWords", "已存记录"),
    ("askAi", "深入追问教练"),
    ("chatTitle", "探讨"),
    ("chatPlaceholder", "输入你的问题..."),
    ("lingoTip", "教练私房话"),
    ("variations", "看场合，怎么说？"),
    ("iSpeak", "我的母语"),
    ("iWantToLearn", "我想学"),
    ("letsGo", "开启探索"),
    ("consulting", "正在解析地道潜台词..."),
    ("startTyping", "输入你想表达的意思，看看地道方案"),
    ("search", "搜索"),
    ("notebook", "记忆"),
    ("scan", "扫描"),
    ("scanTitle", "视觉翻译"),
    ("analyzingImage", "识别中..."),
    ("noTextFound", "未识别到文字。"),
    ("internetMemeWarning", "互联网冲浪风险提示"),
    ("oops", "哎呀，出了点问题"),
    ("scenario_academic", "学术"),
    ("scenario_formal", "正式"),
    ("scenario_social", "社交"),
    ("scenario_meme", "梗/俚语"),
    ("scenario_daily", "日常"),
    ("posture_neutral", "中性"),
    ("posture_friendly", "亲切"),
    ("posture_ironic", "阴阳怪气"),
    ("posture_reserved", "委婉"),
    ("posture_direct", "直白"),
    ("posture_confident", "自信"),
    ("cultural_logic", "文化逻辑"),
];

static BUILTIN: LazyLock<LocaleTable> = LazyLock::new(|| {
    LocaleTable::new()
        .with_entries(Language::English, EN)
        .with_entries(Language::ChineseSimplified, ZH)
});

#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    tables: HashMap<Language, Table>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables shipped with the app (English and Chinese)
    pub fn builtin() -> &'static LocaleTable {
        &BUILTIN
    }

    pub fn with_entries<I>(mut self, lang: Language, entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        self.tables.entry(lang).or_default().extend(entries);
        self
    }

    pub fn get<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        let english = self.tables.get(&Language::English);
        let chinese = self.tables.get(&Language::ChineseSimplified);
        let requested = self.tables.get(&lang).or(english);

        [requested, english, chinese]
            .into_iter()
            .flatten()
            .find_map(|table| table.get(key).copied())
            .unwrap_or(key)
    }
}

/// Builtin label for `key` in `lang`
pub fn t(lang: Language, key: &str) -> &str {
    LocaleTable::builtin().get(lang, key)
}

/// User-facing failure line: localized prefix plus the raw error text
pub fn failure_message(lang: Language, error: &dyn Display) -> String {
    format!("{}: {}", t(lang, "oops"), error)
}
