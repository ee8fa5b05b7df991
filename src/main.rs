use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use user_directory::config::Config;
use user_directory::server;

/// Bearer-protected user directory service.
#[derive(Parser)]
#[command(name = "user-directory")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Start with an empty store instead of the demo users
    #[arg(long)]
    no_seed: bool,
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if cli.no_seed {
        config.seed_users = false;
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}
