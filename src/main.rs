use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use storeroute::prelude::*;

#[tokio::main]
async fn main() {
    // Diagnostics to stderr; stdout stays a clean data channel
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    CliApp::new("storeroute").run(run_routing_pipeline).await;
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<(String, String), AppError> {
    match args.len() {
        2 => Ok((args[1].clone(), "dead-letter.jsonl".to_string())),
        3 => Ok((args[1].clone(), args[2].clone())),
        _ => Err(AppError::InvalidArguments(
            "Usage: storeroute <transactions.jsonl> [dead-letter.jsonl]".to_string(),
        )),
    }
}

/// Main application logic: route the input stream, valid records to stdout,
/// dead-lettered records to the dead-letter file
async fn run_routing_pipeline(writers: Writers) -> Result<(), AppError> {
    let (input_path, dead_letter_path) = parse_args(std::env::args().collect())?;

    let tx_stream = JsonTransactionStream::from_file(&input_path).await?;

    let (valid_sender, valid_receiver) = mpsc::unbounded_channel();
    let (dead_letter_sender, dead_letter_receiver) = mpsc::unbounded_channel();

    let dead_letter_file = tokio::fs::File::create(&dead_letter_path).await?;
    let dead_letter_writer = tokio::io::BufWriter::new(dead_letter_file);

    // Output drains run while the session routes; they finish once the
    // router (and with it the senders) is dropped.
    let valid_task = tokio::spawn(drain_to_writer(valid_receiver, writers.stdout));
    let dead_letter_task = tokio::spawn(drain_to_writer(dead_letter_receiver, dead_letter_writer));

    let router = Router::new(valid_sender, dead_letter_sender).with_tap(LogTap);
    let mut session = RoutingSession::new(router, SkipErrors);
    session.route_stream(tx_stream).await;
    drop(session);

    valid_task.await??;
    dead_letter_task.await??;

    Ok(())
}
