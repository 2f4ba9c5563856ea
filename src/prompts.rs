//! Instruction prompts sent to the text-generation service.

use crate::schema::FieldDef;

/// Persona and ground rules for every generation call.
pub const SYSTEM_PROMPT: &str = "\
You are Reg Assist, a concise, friendly English-speaking registration assistant for a brokerage.
- Guide the user through KYC/registration step-by-step.
- Be short, clear, neutral. Ask for missing/invalid fields if needed.
- If the user asks for help, explain ONLY the CURRENT field in simple words.
- NEVER invent values. NEVER submit without explicit user confirmation.
- When all required fields are collected, produce a short human summary (not JSON).
Language: English.";

/// Build the prompt asking for an explanation of the current field.
pub fn explain_prompt(field: &FieldDef, user_question: Option<&str>) -> String {
    format!(
        "Explain to the user the CURRENT form field and how to fill it correctly. \
         Be brief and practical.\n\
         Field question: {}\n\
         Hint: {}\n\
         Regex format: {}\n\
         User question: {}",
        field.prompt,
        field.help,
        field.pattern_str().unwrap_or(""),
        user_question.unwrap_or(""),
    )
}

/// Build the prompt asking for a human-readable summary of the collected
/// answers. `data` is the answer set serialized as compact JSON.
pub fn summary_prompt(data: &str) -> String {
    format!(
        "Create a short, clear human summary of the registration answers for final \
         user confirmation. Do not add any new data; rephrase only.\n\
         Data: {data}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDef;

    fn passport_field() -> FieldDef {
        FieldDef::new("passport_number", "Passport number (no spaces):")
            .with_help("Found on the photo page. Letters and digits only.")
            .with_pattern(r"^[A-Za-z0-9]{6,20}$")
            .unwrap()
    }

    #[test]
    fn explain_prompt_includes_field_metadata() {
        let prompt = explain_prompt(&passport_field(), None);
        assert!(prompt.contains("Passport number (no spaces):"));
        assert!(prompt.contains("Found on the photo page."));
        assert!(prompt.contains(r"^[A-Za-z0-9]{6,20}$"));
        assert!(prompt.contains("CURRENT form field"));
    }

    #[test]
    fn explain_prompt_includes_user_question() {
        let prompt = explain_prompt(&passport_field(), Some("where do I find it?"));
        assert!(prompt.contains("User question: where do I find it?"));
    }

    #[test]
    fn explain_prompt_without_pattern() {
        let field = FieldDef::new("notes", "Any notes?").optional();
        let prompt = explain_prompt(&field, None);
        assert!(prompt.contains("Regex format: \n"));
    }

    #[test]
    fn summary_prompt_forbids_fabrication() {
        let prompt = summary_prompt(r#"{"first_name":"Brien"}"#);
        assert!(prompt.contains("Do not add any new data"));
        assert!(prompt.contains(r#"{"first_name":"Brien"}"#));
    }

    #[test]
    fn system_prompt_ground_rules() {
        assert!(SYSTEM_PROMPT.contains("NEVER invent values"));
        assert!(SYSTEM_PROMPT.contains("explicit user confirmation"));
    }
}
