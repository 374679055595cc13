use clap::Parser;
use dnslookup_domain::CliOverrides;
use tokio::io::BufReader;
use tracing::info;

mod bootstrap;
mod di;
mod shell;

#[derive(Parser)]
#[command(name = "dnslookup")]
#[command(version)]
#[command(about = "Interactive iterative DNS lookup starting from a root server")]
struct Cli {
    /// Root server to start every lookup at (IP address or host name)
    #[arg(value_name = "ROOT_SERVER")]
    root_server: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Destination port for queries
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Per-attempt receive timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root_server.clone(),
        port: cli.port,
        query_timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnslookup v{}", env!("CARGO_PKG_VERSION"));

    let root_server = bootstrap::resolve_server_address(&config.resolver.root_server).await?;
    println!("Root DNS server is: {}", root_server);

    let services = di::LookupServices::new(&config, root_server).await?;
    let mut shell = shell::Shell::new(services);

    shell
        .run(
            BufReader::new(tokio::io::stdin()),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
        )
        .await?;

    Ok(())
}
