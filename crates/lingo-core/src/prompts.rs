use lingo_types::{Language, Posture, Scenario};

fn labels<const N: usize>(values: [&'static str; N]) -> String {
    values.join(", ")
}

pub fn scenario_labels() -> String {
    labels(Scenario::ALL.map(|s| s.as_str()))
}

pub fn posture_labels() -> String {
    labels(Posture::ALL.map(|p| p.as_str()))
}

/// Lookup instructions; the reply shape is enforced separately by the schema
pub fn lookup(input: &str, native: Language, target: Language) -> String {
    format!(
        r#"You are a world-class sociolinguist and a "cool" language coach.
Analyze the input: "{input}".
The user's native language is "{native}" and they are learning "{target}".

The input could be a single word, a phrase, or a description of an INTENT.

CRITICAL RULES:
1. "scenario" MUST be EXACTLY ONE OF: {scenarios}. DO NOT add explanations here.
2. "posture" MUST be EXACTLY ONE OF: {postures}. DO NOT add explanations here.
3. "pragmaticNote" (Cultural Logic) is MANDATORY. Explain the hidden social vibration in {native}. Why choose THIS expression?
4. "usageNote" is your "Coach's Private Talk". Write it in {native}.

Output JSON format:
{{
  "term": "The most appropriate primary term in {target}",
  "nativeDefinition": "Concise summary in {native}",
  "variants": [
    {{
      "expression": "Full phrase in {target}",
      "scenario": "Meme",
      "posture": "Confident",
      "pragmaticNote": "Explain the cultural vibe in {native}"
    }}
  ],
  "usageNote": "Detailed tip in {native}",
  "synonyms": ["concept1", "concept2"]
}}"#,
        scenarios = scenario_labels(),
        postures = posture_labels(),
    )
}

pub fn illustration(term: &str) -> String {
    format!("High-quality, vibrant vector art illustration related to: {term}")
}

pub fn scan(native: Language) -> String {
    format!("Analyze text in image. Target: {native}.")
}

pub fn story(word_list: &str, native: Language, target: Language) -> String {
    format!("Funny story in {target} using: {word_list}. Translate: {native}.")
}

pub fn tutor(target: Language) -> String {
    format!("Expert language tutor for {target}. Focus on slang and culture.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_prompt_mentions_rules_and_languages() {
        let prompt = lookup("break a leg", Language::ChineseSimplified, Language::English);

        assert!(prompt.contains(r#"Analyze the input: "break a leg""#));
        assert!(prompt.contains("EXACTLY ONE OF: Academic, Formal, Social, Meme, Daily."));
        assert!(
            prompt.contains("EXACTLY ONE OF: Neutral, Friendly, Ironic, Reserved, Direct, Confident.")
        );
        assert!(prompt.contains("Write it in Chinese (Simplified)."));
        assert!(prompt.contains("primary term in English"));
    }

    #[test]
    fn test_short_prompts() {
        assert_eq!(
            illustration("umbrella"),
            "High-quality, vibrant vector art illustration related to: umbrella"
        );
        assert_eq!(scan(Language::French), "Analyze text in image. Target: French.");
        assert_eq!(
            story("cat, hat", Language::English, Language::Spanish),
            "Funny story in Spanish using: cat, hat. Translate: English."
        );
        assert_eq!(
            tutor(Language::Japanese),
            "Expert language tutor for Japanese. Focus on slang and culture."
        );
    }
}
