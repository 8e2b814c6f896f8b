use lingo_backend::Schema;

use crate::prompts::{posture_labels, scenario_labels};

/// Lookup reply: `synonyms` is the only optional field
pub fn word_entry() -> Schema {
    let variant = Schema::object()
        .property("expression", Schema::string())
        .property(
            "scenario",
            Schema::string().describe(format!("Strictly one of: {}", scenario_labels())),
        )
        .property(
            "posture",
            Schema::string().describe(format!("Strictly one of: {}", posture_labels())),
        )
        .property("pragmaticNote", Schema::string())
        .required(["expression", "scenario", "posture", "pragmaticNote"]);

    Schema::object()
        .property("term", Schema::string())
        .property("nativeDefinition", Schema::string())
        .property("variants", Schema::array(variant))
        .property("usageNote", Schema::string())
        .property("synonyms", Schema::array(Schema::string()))
        .required(["term", "nativeDefinition", "variants", "usageNote"])
}

pub fn scan_results() -> Schema {
    Schema::array(
        Schema::object()
            .property("original", Schema::string())
            .property("phonetic", Schema::string())
            .property("translation", Schema::string()),
    )
}

pub fn story() -> Schema {
    Schema::object()
        .property("story", Schema::string())
        .property("translation", Schema::string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_required_fields() {
        let schema = serde_json::to_value(word_entry()).unwrap();

        assert_eq!(
            schema["required"],
            serde_json::json!(["term", "nativeDefinition", "variants", "usageNote"])
        );
        assert_eq!(
            schema["properties"]["variants"]["items"]["required"],
            serde_json::json!(["expression", "scenario", "posture", "pragmaticNote"])
        );
        assert_eq!(
            schema["properties"]["variants"]["items"]["properties"]["posture"]["description"],
            "Strictly one of: Neutral, Friendly, Ironic, Reserved, Direct, Confident"
        );
    }

    #[test]
    fn test_scan_schema_is_array_of_objects() {
        let schema = serde_json::to_value(scan_results()).unwrap();
        assert_eq!(schema["type"], "ARRAY");
        assert_eq!(schema["items"]["type"], "OBJECT");
        assert!(schema["items"].get("required").is_none());
    }
}
