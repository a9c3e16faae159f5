use std::process::ExitCode;

use clap::Parser;
use tokio::sync::oneshot;

use jella::config::{Cli, Config};
use jella::error::exit_code_for;
use jella::server::Server;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = Config::from_cli(&cli);

    let server = match Server::bind(&cfg).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(exit_code_for(&e));
        }
    };

    tokio::select! {
        _ = server.serve() => {}

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }

        _ = stdin_closed(cfg.stop_on_stdin_eof) => {
            tracing::info!("Standard input closed, shutting down");
        }
    }

    ExitCode::SUCCESS
}

/// Completes once standard input hits end of file; never when disabled.
///
/// The read runs on a plain thread so a pending read cannot hold up
/// runtime shutdown.
async fn stdin_closed(enabled: bool) {
    if !enabled {
        return std::future::pending().await;
    }

    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        let _ = std::io::copy(&mut std::io::stdin().lock(), &mut std::io::sink());
        let _ = tx.send(());
    });

    let _ = rx.await;
}
