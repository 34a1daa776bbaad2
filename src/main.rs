use clap::{Parser, Subcommand};
use eyre::{eyre, Result, WrapErr};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
};

use base::{
    database::open_database,
    setting::{generate_default, load, Settings},
    CLI_NAME,
};
use booking::{api, seed};

#[derive(Parser)]
#[command(name = CLI_NAME, author, version, about, long_about = None)]
#[command(next_line_help = true)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(short, long, name = "ADDRESS", default_value_t = String::from("127.0.0.1:5000"))]
    listen_address: String,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Prints the default configuration
    DefaultConfig,
    /// Loads the sample venues, artists and shows into an empty store
    Seed,
    Serve,
}

async fn connect(config: Option<PathBuf>) -> Result<DatabaseConnection> {
    let settings = load(config)?;
    let db = open_database(&settings).await?;
    migration::Migrator::up(&db, None)
        .await
        .wrap_err("Could not apply migrations")?;
    Ok(db)
}

#[tokio::main]
async fn main() -> Result<()> {
    // logging
    color_eyre::install()?;
    let tracing_builder = tracing_subscriber::registry().with(
        fmt::layer()
            .with_file(true)
            .with_line_number(true),
    );
    if std::env::var(base::BOOKING_LOGLEVEL).is_ok() {
        tracing_builder.with(EnvFilter::from_env(base::BOOKING_LOGLEVEL))
    } else {
        tracing_builder.with(EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }
    .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::DefaultConfig => {
            let default = generate_default(Settings::default())?;
            let str = toml::to_string(&default)?;
            println!("{}", str);
            Ok(())
        }
        Command::Seed => {
            let db = connect(cli.config).await?;
            match seed::populate(&db).await? {
                Some(seeded) => println!(
                    "Loaded {} venues, {} artists and {} shows",
                    seeded.venues.len(),
                    seeded.artists.len(),
                    seeded.shows.len()
                ),
                None => println!("The store already holds data, nothing to do"),
            }
            Ok(())
        }
        Command::Serve => {
            let db = connect(cli.config).await?;
            let addr: SocketAddr = cli
                .listen_address
                .parse()
                .wrap_err(eyre!("Invalid listen address"))?;
            tracing::info! {%addr, "Listening"};
            axum::Server::bind(&addr)
                .serve(api::router(db).into_make_service())
                .await
                .wrap_err("Server error")?;
            Ok(())
        }
    }
}
