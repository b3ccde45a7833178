use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use rag_console::{AppConfig, HttpAnswerService, QueryForm};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    let service = HttpAnswerService::new(config.service_endpoint);
    let mut form = QueryForm::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt();
    while let Ok(Some(line)) = lines.next_line().await {
        form.update_query(line);
        form.submit(&service).await;

        if form.error().is_empty() {
            println!("Answer: {}", form.answer());
        } else {
            println!("Error: {}", form.error());
        }

        println!();
        prompt();
    }
}

fn prompt() {
    print!("Question: ");
    io::stdout().flush().ok();
}
