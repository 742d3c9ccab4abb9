use clap::{Parser, Subcommand};
use geokit_core::{redact_key, Geocoder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "geokit")]
#[command(about = "Geocode addresses and coordinates with MapQuest Nominatim")]
struct Cli {
    /// Override the provider base URL (must end with a slash).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the request URL, with the API key redacted, instead of sending it.
    #[arg(long, global = true)]
    show_url: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a free-text address to coordinates.
    Forward { address: String },
    /// Resolve coordinates to a structured address.
    Reverse {
        #[arg(allow_hyphen_values = true)]
        lat: f64,
        #[arg(allow_hyphen_values = true)]
        lng: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = geokit_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if cli.base_url.is_some() {
        config.mapquest_base_url = cli.base_url;
    }
    tracing::debug!(?config, "loaded configuration");

    let geocoder = geokit_mapquest::geocoder_from_config(&config)?;

    match cli.command {
        Commands::Forward { address } => {
            if cli.show_url {
                println!("{}", redact_key(&geocoder.geocode_url(&address)));
                return Ok(());
            }
            match geocoder.geocode(&address).await? {
                Some(location) => println!("{}", serde_json::to_string_pretty(&location)?),
                None => println!("no match"),
            }
        }
        Commands::Reverse { lat, lng } => {
            if cli.show_url {
                println!("{}", redact_key(&geocoder.reverse_geocode_url(lat, lng)));
                return Ok(());
            }
            match geocoder.reverse_geocode(lat, lng).await? {
                Some(address) => println!("{}", serde_json::to_string_pretty(&address)?),
                None => println!("no match"),
            }
        }
    }

    Ok(())
}
