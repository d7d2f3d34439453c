use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use movie_compare_lib::{
    build_movie_service,
    modules::movie::commands::{self, CommandError},
    shared::{utils::init_logger, AppConfig},
};

/// Cheapest-price movie comparison across CinemaWorld and FilmWorld
#[derive(Parser)]
#[command(name = "movie-compare")]
#[command(about = "Compare movie prices across CinemaWorld and FilmWorld", long_about = None)]
struct Cli {
    /// Access token forwarded to both providers as x-access-token
    #[arg(long, global = true, env = "MOVIES_ACCESS_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every title with both providers' prices
    Movies {
        /// Skip the cache and fetch from the providers
        #[arg(long)]
        refresh: bool,
    },

    /// Compare one CinemaWorld movie against one FilmWorld movie
    Compare {
        #[arg(long = "cinemaworld")]
        cinema_world_id: Option<String>,

        #[arg(long = "filmworld")]
        film_world_id: Option<String>,
    },

    /// Check the service is up
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    init_logger(&config.log_level);

    let cli = Cli::parse();

    let (service, _cleanup_task) =
        build_movie_service(&config).context("Failed to initialise movie service")?;
    let token = cli.token.as_deref();

    let output: Result<serde_json::Result<String>, CommandError> = match cli.command {
        Commands::Movies { refresh } => commands::get_movies(&service, token, refresh)
            .await
            .map(|movies| serde_json::to_string_pretty(&movies)),
        Commands::Compare {
            cinema_world_id,
            film_world_id,
        } => commands::compare_movie(
            &service,
            token,
            cinema_world_id.as_deref(),
            film_world_id.as_deref(),
        )
        .await
        .map(|comparison| serde_json::to_string_pretty(&comparison)),
        Commands::Health => Ok(Ok(commands::health_check().to_string())),
    };

    match output {
        Ok(json) => println!("{}", json?),
        Err(error) => {
            eprintln!("{}", serde_json::to_string_pretty(&error)?);
            std::process::exit(1);
        }
    }

    Ok(())
}
