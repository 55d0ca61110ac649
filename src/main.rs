use anyhow::Context;
use seams::{AppBuilder, SeamsError, Settings};
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

const USAGE: &str = "usage: seams process-user <user-id> | seams generate-report <admin-email>";

// No exit has been requested yet
const NO_EXIT: i32 = i32::MIN;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, argument) = match args.as_slice() {
        [command, argument] => (command.as_str(), argument.as_str()),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let settings = Settings::load().context("Failed to load settings")?;
    let deps = AppBuilder::new()
        .with_settings(settings)
        .with_production_deps()?
        .build()?;

    match command {
        "process-user" => {
            let requested_exit = Arc::new(AtomicI32::new(NO_EXIT));
            let exit_slot = requested_exit.clone();
            let processor = deps
                .processor
                .with_on_process(|| tracing::debug!("Processing user"))
                .with_on_exit(move |code| exit_slot.store(code, Ordering::SeqCst));

            match processor.process_user(argument).await {
                Ok(()) => Ok(()),
                Err(SeamsError::BannedUser) => {
                    let code = requested_exit.load(Ordering::SeqCst);
                    tracing::error!("Halting: banned user {}", argument);
                    std::process::exit(if code == NO_EXIT { 1 } else { code });
                }
                Err(e) => Err(e).with_context(|| format!("Failed to process user {}", argument)),
            }
        }
        "generate-report" => deps
            .reports
            .generate_report(argument)
            .await
            .with_context(|| format!("Failed to generate report for {}", argument)),
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }
}
