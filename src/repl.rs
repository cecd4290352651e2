//! Interactive chat loop.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::config::ChatConfig;
use crate::llm::{Completion, CompletionError, CompletionProvider, CompletionRequest};

/// Ask for a single completion using the configured model and parameters.
pub async fn ask(
    provider: &dyn CompletionProvider,
    chat: &ChatConfig,
    prompt: &str,
) -> Result<Completion, CompletionError> {
    let request = CompletionRequest::new(
        prompt,
        chat.model.as_str(),
        chat.temperature,
        chat.max_output_tokens,
    )?;
    provider.complete(&request).await
}

/// Run the interactive loop until `exit` or end of input.
///
/// Every completion failure is printed and the loop continues; only an
/// I/O error on stdin ends the process abnormally.
pub async fn run(provider: &dyn CompletionProvider, chat: &ChatConfig) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Chatting with {}. Type 'exit' to quit.", chat.model);

    loop {
        print!("\nyou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // EOF
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") {
            break;
        }

        debug!(chars = input.len(), "read prompt");
        match ask(provider, chat, input).await {
            Ok(completion) => println!("{}: {}", chat.model, completion.text),
            Err(err) => println!("error: {err}"),
        }
    }

    println!("Bye.");
    Ok(())
}
