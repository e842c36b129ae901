// src/cli/client.rs
// Interactive client: one line per turn against a running relay

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use serde_json::json;

pub async fn run(url: &str) -> Result<()> {
    let endpoint = format!("{}/chat", url.trim_end_matches('/'));
    let http = reqwest::Client::new();
    let mut editor = DefaultEditor::new()?;

    println!("pricel chat (type 'exit' or 'quit' to leave)");

    loop {
        match editor.readline("You: ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if matches!(trimmed.to_lowercase().as_str(), "exit" | "quit") {
                    break;
                }

                editor.add_history_entry(&line)?;

                // Per-turn failures are reported inline; the loop keeps going
                match send_turn(&http, &endpoint, trimmed).await {
                    Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}

/// One turn. The default selectors are sent explicitly, and the body is
/// decoded whatever the status: `{"detail": ...}` errors print like any
/// other response.
async fn send_turn(
    http: &reqwest::Client,
    endpoint: &str,
    text: &str,
) -> Result<serde_json::Value> {
    let payload = json!({
        "text": text,
        "construct": "pricel",
        "response_format": "short",
    });

    let body = http
        .post(endpoint)
        .json(&payload)
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    Ok(body)
}
