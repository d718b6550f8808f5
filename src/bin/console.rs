//! Line-oriented chat client against a running palaver server.
//!
//! Usage: console [BASE_URL]

use anyhow::Result;
use palaver::client::{ChatView, HttpTransport, SubmitError, ViewEvent, ViewOptions};
use std::io::Write as _;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "palaver=info".into()),
        )
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string());

    let transport = Arc::new(HttpTransport::new(&base_url));
    let mut view = ChatView::with_options(
        transport,
        ViewOptions {
            trim_content: true,
            reveal_interval: Some(Duration::from_millis(20)),
        },
    );

    println!("palaver console — chatting via {base_url}");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match view.submit(&line) {
            Ok(()) => {}
            Err(error) => {
                if !matches!(error, SubmitError::Busy) {
                    println!("{error}");
                }
                continue;
            }
        }

        let before = view.messages().len();
        while view.awaiting_reply() {
            let Some(event) = view.next_event().await else {
                break;
            };
            if let ViewEvent::RevealTick(ch) = &event {
                print!("{ch}");
                std::io::stdout().flush()?;
            }
            view.apply(event);
        }

        // A committed reply was already printed by the reveal stream; a
        // failed or empty exchange prints nothing, same as the pages.
        if view.messages().len() > before {
            println!();
        }
    }

    Ok(())
}
