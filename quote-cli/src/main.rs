//! Quote CLI
//!
//! Fetches one quote from the quote server and saves it to a text file.
//! Any failure is fatal: it is logged and the process exits with status 1.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quote_client::{DEFAULT_SERVER_URL, QuoteClient};

#[derive(Parser)]
#[command(name = "fetch-quote")]
#[command(author, version, about = "Save the current dollar quote to a file", long_about = None)]
struct Cli {
    /// Quote endpoint of the server
    #[arg(long, env = "QUOTE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server_url: String,

    /// File that receives the quote (overwritten on each run)
    #[arg(long, env = "QUOTE_OUTPUT_PATH", default_value = "cotation.txt")]
    output: PathBuf,

    /// Deadline for the whole request, in milliseconds
    #[arg(long, env = "QUOTE_TIMEOUT_MS", default_value_t = 300)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client =
        QuoteClient::new(&cli.server_url).with_timeout(Duration::from_millis(cli.timeout_ms));

    let quote = client
        .fetch_and_save(&cli.output)
        .await
        .with_context(|| format!("Failed to save quote from {}", cli.server_url))?;

    tracing::info!(bid = %quote, "Quote saved in file: {}", cli.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["fetch-quote"]).unwrap();

        assert_eq!(cli.server_url, "http://localhost:8080/cotacao");
        assert_eq!(cli.output, PathBuf::from("cotation.txt"));
        assert_eq!(cli.timeout_ms, 300);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "fetch-quote",
            "--server-url",
            "http://quotes.internal:8080/cotacao",
            "--output",
            "/tmp/dolar.txt",
            "--timeout-ms",
            "1000",
        ])
        .unwrap();

        assert_eq!(cli.server_url, "http://quotes.internal:8080/cotacao");
        assert_eq!(cli.output, PathBuf::from("/tmp/dolar.txt"));
        assert_eq!(cli.timeout_ms, 1000);
    }

    #[tokio::test]
    async fn test_run_fails_when_server_is_down() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            server_url: "http://127.0.0.1:9/cotacao".into(),
            output: dir.path().join("cotation.txt"),
            timeout_ms: 300,
        };
        let output = cli.output.clone();

        assert!(run(cli).await.is_err());
        assert!(!output.exists());
    }
}
