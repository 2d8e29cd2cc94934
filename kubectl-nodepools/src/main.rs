use std::io::Write as _;
use std::process::ExitCode;

use clap::Parser as _;
use k8s_nodepools as nodepools;
use k8s_nodepools_kubeapi::KubeApi;

use cli::Cli;
use cli::Command;
use error::Error;

mod cli;
mod error;
mod kubeconfig;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(&cli.log_level) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let result = tokio::select! {
        result = run(&cli) => result,
        () = shutdown_signal() => Err(Error::Interrupted),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "Command failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let options = cli.render_options()?;

    let config = kubeconfig::resolve(cli.kubeconfig.as_deref(), cli.context.as_deref()).await?;
    let kubeapi = KubeApi::from_config(config)?;
    let nodes = kubeapi.node_records().await?;

    let text = match &cli.command {
        Command::List => {
            let report = nodepools::aggregate(&nodes, &cli.label);
            tracing::debug!(
                nodes = nodes.len(),
                pools = report.len(),
                label = %cli.label,
                "Aggregated node pools"
            );
            render::pools(&report, &options)?
        }
        Command::Nodes { name } => {
            let members = nodepools::filter_by_pool(&nodes, &cli.label, name);
            tracing::debug!(
                nodes = nodes.len(),
                members = members.len(),
                pool = %name,
                label = %cli.label,
                "Filtered node pool"
            );
            render::nodes(&members, &options)?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Completes on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(?err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::SignalKind;
        use tokio::signal::unix::signal;

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(?err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::debug!("Received Ctrl-C"),
        () = terminate => tracing::debug!("Received SIGTERM"),
    }
}

fn init_tracing(log_level: &str) -> Result<(), Error> {
    use tracing_subscriber::EnvFilter;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
