// src/main.rs — chemviz entry point

use clap::Parser;
use std::path::Path;
use std::sync::Arc;

use chemviz::api::HttpGateway;
use chemviz::auth::session::SessionController;
use chemviz::auth::CredentialStore;
use chemviz::cli::console::ConsolePresenter;
use chemviz::cli::{account, dashboard as dashboard_cmd, Cli, Commands};
use chemviz::core::{Dashboard, Presenter};
use chemviz::infra::config::Config;
use chemviz::infra::{logger, paths};

#[tokio::main]
async fn main() {
    // Respects RUST_LOG
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = if let Some(ref path) = cli.config {
        Config::load_from(Path::new(path))?
    } else {
        Config::load()?
    };
    paths::ensure_dirs()?;

    let store = Arc::new(CredentialStore::open_default());
    let mut session = SessionController::new(Arc::clone(&store));
    session.resolve();

    let gateway = Arc::new(HttpGateway::new(&config, Arc::clone(&store))?);

    match cli.command {
        Commands::Login { username, password } => {
            account::run_login(gateway.as_ref(), &mut session, &username, password).await
        }
        Commands::Register {
            username,
            email,
            password,
        } => account::run_register(gateway.as_ref(), &username, &email, password).await,
        Commands::Logout => account::run_logout(&mut session),
        Commands::Status => account::run_status(&session),

        // Session gates whether the dashboard is mounted at all.
        command => {
            if !session.is_authenticated() {
                anyhow::bail!("Not logged in. Run `chemviz login <username>` first.");
            }

            let presenter: Arc<dyn Presenter> =
                Arc::new(ConsolePresenter::new(config.download_dir()));
            let dashboard = Dashboard::new(Arc::clone(&gateway), presenter);

            match command {
                Commands::Upload { file } => {
                    dashboard_cmd::run_upload(Arc::clone(&gateway), &dashboard, &file).await
                }
                Commands::Dashboard { select } => {
                    dashboard_cmd::run_dashboard(&dashboard, select).await
                }
                Commands::Report => dashboard_cmd::run_report(&dashboard).await,
                _ => unreachable!("account commands handled above"),
            }
        }
    }
}
