use std::future::Future;

use super::error::AppError;

/// Buffered writers handed to the application body
///
/// Stdout is the valid-records data channel; diagnostics go to stderr via
/// tracing so the two never mix.
pub struct Writers {
    pub stdout: tokio::io::BufWriter<tokio::io::Stdout>,
}

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
///
/// On a signal, only records already delivered to an output are guaranteed
/// flushed; in-flight records are dropped with the pipeline.
pub struct CliApp {
    _name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            _name: name.to_string(),
        }
    }

    /// Run the application body, racing it against signal reception
    ///
    /// This function never returns; it calls `std::process::exit` with the
    /// appropriate code.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(Writers) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writers = Writers {
            stdout: tokio::io::BufWriter::new(tokio::io::stdout()),
        };

        tokio::select! {
            result = main_fn(writers) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            code = Self::wait_for_signal() => {
                std::process::exit(code);
            }
        }
    }

    #[cfg(unix)]
    async fn wait_for_signal() -> i32 {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to install SIGTERM handler: {}", e);
                return 1;
            }
        };
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Failed to install SIGHUP handler: {}", e);
                return 1;
            }
        };

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("Received Ctrl+C");
                130
            }
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129
            }
        }
    }

    #[cfg(not(unix))]
    async fn wait_for_signal() -> i32 {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to install Ctrl+C handler: {}", e);
            return 1;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_new() {
        let app = CliApp::new("test-app");
        assert_eq!(app._name, "test-app");
    }
}
