//! Field collection controller — the state machine driving one session.

use crate::gateway::LlmGateway;
use crate::schema::Schema;
use crate::session::state::{AnswerSet, Exchange, SessionPhase, SessionState};
use crate::validate;

/// Final confirmation question, shown after the summary.
pub const CONFIRM_PROMPT: &str = "Confirm and produce JSON for backend (yes/no)?";

const REQUIRED_MSG: &str = "This field is required. Enter a value or type 'help'.";
const FORMAT_MSG: &str = "Invalid format. Try again or type 'help'.";

/// What happened in response to one line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Turn {
    /// The user asked for help; display the explanation and repeat the field.
    Explanation(String),
    /// The input was rejected; display the message and repeat the field.
    Invalid(String),
    /// The input was accepted and the session moved to the next field.
    Advanced,
    /// The last field was accepted; display the summary, then confirm.
    Summary(String),
    /// Confirmed — the final record.
    Completed(AnswerSet),
    /// Quit, declined confirmation, or already cancelled.
    Cancelled,
}

/// Walks the schema in order, running the read/validate/help/quit loop per
/// field and the confirm-or-cancel terminal phase.
///
/// The controller owns the session state exclusively and performs no I/O;
/// callers feed it one trimmed line at a time and render the returned `Turn`.
pub struct Controller {
    schema: Schema,
    gateway: LlmGateway,
    state: SessionState,
}

impl Controller {
    pub fn new(schema: Schema, gateway: LlmGateway) -> Self {
        Self {
            schema,
            gateway,
            state: SessionState::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    /// Conversation log of accepted prompt→answer pairs.
    pub fn transcript(&self) -> &[Exchange] {
        &self.state.transcript
    }

    /// The question to display for the current phase, if input is expected.
    pub fn prompt(&self) -> Option<&str> {
        match self.state.phase {
            SessionPhase::Prompting(idx) => {
                self.schema.fields().get(idx).map(|f| f.prompt.as_str())
            }
            SessionPhase::AwaitingConfirmation => Some(CONFIRM_PROMPT),
            SessionPhase::Completed | SessionPhase::Cancelled => None,
        }
    }

    /// Process one line of user input.
    ///
    /// Input is trimmed; `help` and `quit` are recognized case-insensitively
    /// at every field. In a terminal phase the terminal result is returned
    /// again without reading anything.
    pub async fn handle_line(&mut self, line: &str) -> Turn {
        let input = line.trim();

        match self.state.phase {
            SessionPhase::Prompting(idx) => self.handle_field_input(idx, input).await,
            SessionPhase::AwaitingConfirmation => {
                if input.eq_ignore_ascii_case("yes") {
                    self.state.phase = SessionPhase::Completed;
                    tracing::info!(fields = self.state.answers.len(), "Session confirmed");
                    Turn::Completed(self.state.answers.clone())
                } else {
                    self.state.phase = SessionPhase::Cancelled;
                    tracing::info!("Confirmation declined");
                    Turn::Cancelled
                }
            }
            SessionPhase::Completed => Turn::Completed(self.state.answers.clone()),
            SessionPhase::Cancelled => Turn::Cancelled,
        }
    }

    async fn handle_field_input(&mut self, idx: usize, input: &str) -> Turn {
        let field = &self.schema.fields()[idx];

        if input.eq_ignore_ascii_case("quit") {
            self.state.phase = SessionPhase::Cancelled;
            tracing::info!(field = %field.key, "Session cancelled by user");
            return Turn::Cancelled;
        }

        if input.eq_ignore_ascii_case("help") {
            // Stays on the field; answers and transcript are untouched.
            let explanation = self.gateway.explain(field, None).await;
            return Turn::Explanation(explanation);
        }

        if field.required && input.is_empty() {
            return Turn::Invalid(REQUIRED_MSG.to_string());
        }

        // The validator is only consulted for non-empty input; empty input on
        // an optional field is accepted as-is.
        if !input.is_empty() && !validate::accepts(input, field.pattern()) {
            return Turn::Invalid(FORMAT_MSG.to_string());
        }

        let key = field.key.clone();
        let field_prompt = field.prompt.clone();

        if !input.is_empty() {
            self.state.answers.insert(key, input);
        }
        self.state.transcript.push(Exchange {
            prompt: field_prompt,
            answer: input.to_string(),
        });

        if idx + 1 < self.schema.len() {
            self.state.phase = SessionPhase::Prompting(idx + 1);
            Turn::Advanced
        } else {
            self.state.phase = SessionPhase::AwaitingConfirmation;
            let summary = self.gateway.summarize(&self.state.answers).await;
            Turn::Summary(summary)
        }
    }
}
