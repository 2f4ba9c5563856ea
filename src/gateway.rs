//! Text-generation gateway — `explain` and `summarize`, best-effort.
//!
//! The gateway is the failure boundary for the external service: every
//! provider error is logged and converted into a visible placeholder string,
//! so the controller never handles generation failures.

use std::sync::Arc;

use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::prompts;
use crate::schema::FieldDef;
use crate::session::AnswerSet;

pub struct LlmGateway {
    provider: Arc<dyn LlmProvider>,
}

impl LlmGateway {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Explain the current field in plain words. Always returns a string.
    pub async fn explain(&self, field: &FieldDef, user_question: Option<&str>) -> String {
        self.generate(prompts::explain_prompt(field, user_question))
            .await
    }

    /// Rephrase the collected answers for final confirmation. Always returns
    /// a string.
    pub async fn summarize(&self, answers: &AnswerSet) -> String {
        let data = serde_json::to_string(answers).unwrap_or_else(|_| "{}".to_string());
        self.generate(prompts::summary_prompt(&data)).await
    }

    /// One completion attempt; errors become inline placeholder text.
    async fn generate(&self, instruction: String) -> String {
        let request = CompletionRequest::new(vec![
            ChatMessage::system(prompts::SYSTEM_PROMPT),
            ChatMessage::user(instruction),
        ])
        .with_temperature(0.0);

        match self.provider.complete(request).await {
            Ok(response) => response.content,
            Err(e) => {
                tracing::warn!(model = %self.provider.model_name(), error = %e, "Generation call failed");
                format!("(LLM error: {e})")
            }
        }
    }
}
