//! gridengine - snapshot Grid Engine hosts, queues and jobs.

mod report;

use clap::Parser;
use gridengine_cli::{Args, OutputFormat};
use gridengine_state::{snapshot_from_documents, take_snapshot, Snapshot};
use miette::{IntoDiagnostic, Result, WrapErr};

/// Run qhost/qstat, or decode captured documents when replaying.
async fn load_snapshot(args: &Args) -> Result<Snapshot> {
    if let Some((qhost_path, qstat_path)) = args.replay_documents() {
        let qhost_xml = std::fs::read_to_string(qhost_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", qhost_path))?;
        let qstat_xml = std::fs::read_to_string(qstat_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", qstat_path))?;
        return snapshot_from_documents(&qhost_xml, &qstat_xml, &args.host).into_diagnostic();
    }

    take_snapshot(&args.snapshot_config(), &args.host)
        .await
        .into_diagnostic()
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    // Nothing is printed for a failed snapshot, not even partial data.
    let snapshot = match load_snapshot(&args).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("failed to get gridengine data: {:?}", e);
            std::process::exit(1);
        }
    };

    let output = match args.format {
        OutputFormat::Text => report::render_text(&snapshot),
        OutputFormat::Json => report::render_json(&snapshot).into_diagnostic()?,
    };
    println!("{}", output.trim_end());

    Ok(())
}
