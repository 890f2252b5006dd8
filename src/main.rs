//! gomod-browser: browse a Go module's direct dependencies and star their
//! GitHub repositories from the terminal.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use gomod_browser::{
    config::{load_or_default, AppConfig, Validatable},
    modcache::{populate_sizes, ModCache},
    parsers::GoModParser,
    stars::{resolve_token, GitHubClient, GitHubClientConfig, InMemoryStarProvider, StarProvider},
    tui::{run_tui, set_theme, App, Theme},
    Dependency,
};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gomod-browser")]
#[command(version)]
#[command(about = "Browse Go module dependencies and star their GitHub repositories", long_about = None)]
#[command(after_help = "KEYS:
    ↑/k ↓/j          move
    PgUp/←/h PgDn/→/l  page
    Home End/G       first / last
    g                open the GitHub repository
    p                open the pkg.go.dev page
    s                star / unstar the selected repository
    S                star all unstarred repositories
    q Ctrl+C         quit

EXAMPLES:
    # Browse ./go.mod
    gomod-browser

    # Browse another module without touching GitHub
    gomod-browser --manifest ../service/go.mod --offline")]
struct Cli {
    /// Path to the go.mod file (default: ./go.mod)
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log file (default: <cache dir>/gomod-browser/gomod-browser.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keep stars in memory instead of calling GitHub
    #[arg(long)]
    offline: bool,

    /// Skip the module cache size lookup
    #[arg(long)]
    no_size: bool,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    api_base: Option<String>,

    /// GitHub token (falls back to GH_TOKEN, then `gh auth token`)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "gomod-browser", &mut io::stdout());
        return Ok(());
    }

    let log_path = init_logging(cli.verbose, cli.log_file.clone());
    tracing::info!("gomod-browser {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &log_path {
        tracing::debug!("logging to {}", path.display());
    }

    let config = load_config(&cli)?;
    set_theme(Theme::from_name(&config.tui.theme));

    let parser = match &cli.manifest {
        Some(path) => GoModParser::new(path),
        None => GoModParser::for_current_dir().context("failed to locate go.mod")?,
    };
    let mut records = parser
        .parse()
        .with_context(|| format!("failed to read {}", parser.path().display()))?;

    if records.is_empty() {
        println!("No direct dependencies found in go.mod file.");
        return Ok(());
    }
    tracing::info!("{} direct dependencies in {}", records.len(), parser.path().display());

    if config.size.enabled {
        let cache = config
            .size
            .mod_cache_dir
            .clone()
            .map(ModCache::new)
            .or_else(ModCache::discover);
        match cache {
            Some(cache) => {
                let found = populate_sizes(&mut records, &cache);
                tracing::info!("{} of {} modules found in {}", found, records.len(), cache.root().display());
            }
            None => tracing::warn!("No module cache found; sizes unknown"),
        }
    }

    if cli.offline {
        tracing::info!("offline mode, stars kept in memory");
        return browse(records, InMemoryStarProvider::new(), &config);
    }

    let Some(token) = resolve_token(cli.token.clone()) else {
        bail!("no GitHub token found; set GITHUB_TOKEN, run `gh auth login`, or use --offline");
    };
    let client = GitHubClient::new(GitHubClientConfig {
        api_base: config.github.api_base.clone(),
        timeout: config.github.timeout(),
        ..GitHubClientConfig::with_token(token)
    })
    .context("failed to create GitHub client")?;

    browse(records, client, &config)
}

/// Load the config file and layer the command-line flags over it.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let (mut config, source) = load_or_default(cli.config.as_deref());
    if let Some(path) = source {
        tracing::info!("loaded config from {}", path.display());
    }

    if let Some(api_base) = &cli.api_base {
        config.github.api_base.clone_from(api_base);
    }
    if cli.no_size {
        config.size.enabled = false;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

fn browse<P: StarProvider>(mut records: Vec<Dependency>, provider: P, config: &AppConfig) -> Result<()> {
    provider
        .refresh_starred_status(&mut records)
        .with_context(|| format!("failed to check star status via {}", provider.name()))?;

    let mut app = App::new(records, provider).with_sizes(config.size.enabled);
    run_tui(&mut app, config.tui.tick_rate_ms).context("terminal UI failed")?;
    Ok(())
}

/// Send logs to a file, since the TUI owns the terminal. Falls back to
/// discarding them when the file cannot be opened.
fn init_logging(verbose: bool, log_file: Option<PathBuf>) -> Option<PathBuf> {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    let path = log_file.or_else(|| {
        dirs::cache_dir().map(|dir| dir.join("gomod-browser").join("gomod-browser.log"))
    });
    let file = path.as_ref().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(path).ok()
    });

    let (writer, path) = match file {
        Some(file) => (BoxMakeWriter::new(Mutex::new(file)), path),
        None => (BoxMakeWriter::new(io::sink), None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();

    path
}
