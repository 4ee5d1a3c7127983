//! Core application

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::api::ApiServer;
use crate::core::banner;
use crate::core::cli::{self, CliConfig, Commands, SystemCommands};
use crate::core::config::AppConfig;
use crate::core::constants::{APP_NAME_LOWER, ENV_LOG};
use crate::core::shutdown::ShutdownService;
use crate::core::storage::AppStorage;
use crate::data::DirectoryService;
use crate::domain::seed_directory;

pub struct CoreApp {
    pub shutdown: ShutdownService,
    pub config: AppConfig,
    pub storage: AppStorage,
    pub database: Arc<DirectoryService>,
}

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();

        let (cli_config, command) = cli::parse();
        Self::init_logging(cli_config.debug);

        tracing::debug!("Application starting");
        tracing::trace!(command = ?command, "Parsed command");

        match command {
            Some(Commands::System {
                command: system_cmd,
            }) => Self::handle_system_command(system_cmd),
            Some(Commands::Seed) => {
                let app = Self::init(&cli_config).await?;
                app.run_seed().await
            }
            Some(Commands::Start) | None => {
                let app = Self::init(&cli_config).await?;
                Self::start_server(app).await
            }
        }
    }

    async fn init(cli: &CliConfig) -> Result<Self> {
        let config = AppConfig::load(cli)?;
        if config.debug {
            tracing::warn!("Debug mode enabled");
        }

        let storage = AppStorage::init().await?;
        let database = Arc::new(
            DirectoryService::init(&storage)
                .await
                .context("Failed to open employee database")?,
        );
        let shutdown = ShutdownService::new(database.clone());

        Ok(Self {
            shutdown,
            config,
            storage,
            database,
        })
    }

    /// `staffdir seed`: load synthetic data and exit
    async fn run_seed(self) -> Result<()> {
        let repo = self.database.repository();
        let result = seed_directory(repo.as_ref(), self.config.seed.employees).await;
        self.database.close().await;

        let report = result.context("Failed to seed database")?;
        println!(
            "{} ({} employees, {} presets)",
            report.message, report.employees, report.presets
        );
        Ok(())
    }

    fn handle_system_command(cmd: SystemCommands) -> Result<()> {
        match cmd {
            SystemCommands::Prune { yes } => Self::prune_data(yes),
        }
    }

    fn prune_data(skip_confirm: bool) -> Result<()> {
        let data_dir = AppStorage::resolve_data_dir();

        if !data_dir.exists() {
            println!(
                "Nothing to prune. Data directory does not exist: {}",
                data_dir.display()
            );
            return Ok(());
        }

        let data_dir = data_dir.canonicalize().unwrap_or(data_dir);

        println!("This will permanently delete the local data directory:");
        println!("  {}", data_dir.display());
        println!();
        println!("Make sure the server is not running.");

        if !skip_confirm {
            print!("\nContinue? [y/N] ");
            std::io::Write::flush(&mut std::io::stdout())?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;

            if !matches!(input.trim().to_lowercase().as_str(), "y" | "yes") {
                println!("Aborted.");
                return Ok(());
            }
        }

        std::fs::remove_dir_all(&data_dir)
            .with_context(|| format!("Failed to delete data directory: {}", data_dir.display()))?;
        println!("Pruned: {}", data_dir.display());
        Ok(())
    }

    fn init_logging(debug: bool) {
        let default_filter = if debug {
            format!("info,{}=debug", APP_NAME_LOWER)
        } else {
            format!("info,{}=info", APP_NAME_LOWER)
        };

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .init();
    }

    async fn start_server(app: Self) -> Result<()> {
        // Install signal handlers FIRST (before any blocking calls)
        app.shutdown.install_signal_handlers();

        if app.config.seed.on_start {
            let repo = app.database.repository();
            let report = seed_directory(repo.as_ref(), app.config.seed.employees)
                .await
                .context("Failed to seed database on start")?;
            tracing::debug!(message = %report.message, "Seed on start");
        }

        app.start_background_tasks().await;

        let employees = app
            .database
            .repository()
            .count_employees()
            .await
            .context("Failed to read employee count")?;

        banner::print_banner(
            &app.config.server.host,
            app.config.server.port,
            &app.config.server.cors_origins,
            &app.storage.data_dir().display().to_string(),
            employees,
        );

        let server = ApiServer::new(app);
        let app = server.start().await?;
        app.shutdown.shutdown().await;

        Ok(())
    }

    pub async fn start_background_tasks(&self) {
        self.shutdown
            .register(
                self.database
                    .start_checkpoint_task(self.shutdown.subscribe()),
            )
            .await;

        tracing::debug!("Background tasks started");
    }
}
