use anyhow::Result;
use clap::Parser;
use esbrowse::{
    BrowserOptions, ElasticGateway, GatewayConfig, InteractiveBrowser,
    config::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL},
    gateway::DEFAULT_PAGE_SIZE,
    interactive_ratatui::constants::{QUERY_EXAMPLES, QUERY_SYNTAX_HELP},
    logging,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "esbrowse",
    version,
    about = "Interactive terminal browser for Elasticsearch indices and documents",
    long_about = None
)]
struct Cli {
    /// Elasticsearch base URL
    #[arg(long, env = "ELASTICSEARCH_URL", default_value = DEFAULT_URL)]
    url: String,

    /// API key sent as `Authorization: ApiKey <key>`; overrides basic auth
    #[arg(long, env = "ELASTICSEARCH_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Basic auth username
    #[arg(long, env = "ELASTICSEARCH_USERNAME")]
    username: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ELASTICSEARCH_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Documents fetched per query page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE as i64, allow_negative_numbers = true)]
    page_size: i64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show query syntax help
    #[arg(long)]
    help_query: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.help_query {
        print_query_help();
        return Ok(());
    }

    logging::init_tracing(cli.log_file.as_deref())?;

    let config = GatewayConfig::resolve(
        Some(&cli.url),
        cli.api_key.as_deref(),
        cli.username.as_deref(),
        cli.password.as_deref(),
        cli.timeout_secs,
    );
    let gateway = match ElasticGateway::new(&config) {
        Ok(gateway) => gateway,
        Err(e) => {
            eprintln!("cannot init elasticsearch client: {e}");
            std::process::exit(1);
        }
    };
    info!(url = %gateway.base_url(), "connecting");

    let options = BrowserOptions::new(cli.page_size, cli.timeout_secs);
    let mut browser = InteractiveBrowser::new(Arc::new(gateway), options)?;
    browser.run()
}

fn print_query_help() {
    println!("{QUERY_SYNTAX_HELP}");
    println!();
    println!("{QUERY_EXAMPLES}");
    println!();
    println!("Fields are matched with `field:value`; combine terms with AND, OR and NOT.");
}
