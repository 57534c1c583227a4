use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use prefpane::notify::LogNotifier;
use prefpane::panel::{OptionsForm, SettingsController};
use prefpane::probe::{StatusProbe, TROUBLESHOOTING_URL};
use prefpane::settings::{Settings, SettingsStore, TomlFileStore};
use prefpane::widget::MemoryWidgets;

#[derive(Parser)]
#[command(name = "prefpane")]
#[command(about = "Settings panel engine with a backend health probe")]
#[command(version)]
struct Cli {
    /// Path to the settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Print the current settings
    Show,

    /// Run the load pipeline against in-memory widgets and dump the result
    Preview,

    /// Check the configured backend's /status endpoint
    Probe {
        /// Override the stored host
        #[arg(long)]
        host: Option<String>,

        /// Override the stored token
        #[arg(long)]
        token: Option<String>,

        /// Deadline in milliseconds
        #[arg(long, default_value_t = 1000)]
        timeout_ms: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let store = TomlFileStore::new(cli.settings.unwrap_or_else(TomlFileStore::default_path));

    match cli.command {
        Commands::Init { force } => init_command(&store, force).await,
        Commands::Show => show_command(&store).await,
        Commands::Preview => preview_command(store).await,
        Commands::Probe {
            host,
            token,
            timeout_ms,
        } => probe_command(&store, host, token, timeout_ms).await,
    }
}

async fn init_command(store: &TomlFileStore, force: bool) -> Result<()> {
    if store.path().exists() && !force {
        anyhow::bail!(
            "settings file already exists: {} (use --force to overwrite)",
            store.path().display()
        );
    }
    store.save(&Settings::default()).await?;
    println!("Created {}", store.path().display());
    Ok(())
}

async fn show_command(store: &TomlFileStore) -> Result<()> {
    let settings = store.load().await?;
    print!("{}", toml::to_string_pretty(&settings)?);
    Ok(())
}

/// Drive the full load transition against an in-memory widget host and show
/// what every widget ends up holding.
async fn preview_command(store: TomlFileStore) -> Result<()> {
    let widgets = MemoryWidgets::with_ids(OptionsForm::new().widget_ids());
    let mut controller = SettingsController::new(store, widgets, Arc::new(LogNotifier))?;
    controller.open().await;

    let widgets = controller.surface().widgets();
    for id in controller.form().widget_ids() {
        let Some(state) = widgets.state(id) else {
            continue;
        };
        match &state.markup {
            Some(markup) => println!(
                "{id}: {:?} ({} rendered lines)",
                state.text,
                markup.lines().count()
            ),
            None => println!("{id}: text={:?} checked={}", state.text, state.checked),
        }
    }
    Ok(())
}

async fn probe_command(
    store: &TomlFileStore,
    host: Option<String>,
    token: Option<String>,
    timeout_ms: u64,
) -> Result<()> {
    let settings = store.load().await?;
    let host = host.unwrap_or(settings.host);
    let token = token.unwrap_or(settings.token);

    let probe = StatusProbe::with_timeout(Duration::from_millis(timeout_ms))?;
    match probe.check(&host, &token).await {
        Ok(body) => {
            println!("Success! {body}");
            Ok(())
        }
        Err(err) => anyhow::bail!("{err}. See {TROUBLESHOOTING_URL}"),
    }
}
