//! Client behavior against a scripted backend

use std::sync::Arc;

use lingo_backend::testing::ScriptedBackend;
use lingo_config::backend::ModelConfig;

use crate::LingoClient;

mod operation_tests;

pub(crate) const LOOKUP_REPLY: &str = r#"{
    "term": "break a leg",
    "nativeDefinition": "祝你好运",
    "variants": [
        {
            "expression": "Break a leg!",
            "scenario": "Social",
            "posture": "Friendly",
            "pragmaticNote": "演出前的祝福"
        },
        {
            "expression": "You've got this.",
            "scenario": "Daily",
            "posture": "Confident",
            "pragmaticNote": "更普遍的鼓励"
        }
    ],
    "usageNote": "不要在医院里说。"
}"#;

pub(crate) fn client() -> (Arc<ScriptedBackend>, LingoClient<Arc<ScriptedBackend>>) {
    let backend = Arc::new(ScriptedBackend::new());
    let client = LingoClient::new(backend.clone(), ModelConfig::default(), "Kore");
    (backend, client)
}
