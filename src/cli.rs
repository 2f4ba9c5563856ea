//! Interactive line loop — drives a controller over stdin/stdout.
//!
//! Prompts, validation messages, explanations, and the summary go to stderr;
//! only the confirmed final record is written to stdout, so output can be
//! piped cleanly.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::error::Result;
use crate::session::{AnswerSet, Controller, Turn};

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Confirmed; the accepted answers form the final record.
    Completed(AnswerSet),
    /// Quit, declined confirmation, or end of input.
    Cancelled,
}

/// Run one session against stdin.
pub async fn run_stdin(controller: &mut Controller) -> Result<SessionOutcome> {
    let reader = BufReader::new(tokio::io::stdin());
    run_session(controller, reader).await
}

/// Run one session, reading lines from `reader` until a terminal state.
///
/// End of input before a terminal state counts as cancellation.
pub async fn run_session<R>(controller: &mut Controller, reader: R) -> Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let Some(prompt) = controller.prompt() else {
            // Terminal phase with no prompt; nothing left to read.
            return Ok(SessionOutcome::Cancelled);
        };
        eprint!("{prompt} ");

        let Some(line) = lines.next_line().await? else {
            tracing::debug!("End of input; cancelling session");
            eprintln!();
            eprintln!("Cancelled. Nothing was saved.");
            return Ok(SessionOutcome::Cancelled);
        };

        match controller.handle_line(&line).await {
            Turn::Explanation(text) => {
                eprintln!("\n{text}\n");
            }
            Turn::Invalid(message) => {
                eprintln!("❌ {message}");
            }
            Turn::Advanced => {}
            Turn::Summary(summary) => {
                eprintln!("\n🧾 Summary of your answers:");
                eprintln!("{summary}\n");
            }
            Turn::Completed(record) => {
                return Ok(SessionOutcome::Completed(record));
            }
            Turn::Cancelled => {
                eprintln!("Cancelled. Nothing was saved.");
                return Ok(SessionOutcome::Cancelled);
            }
        }
    }
}
