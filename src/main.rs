use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::client::PortfolioClient;
use folio::config::Config;
use folio::render;
use folio::shell;
use folio::view::Controller;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse a personal portfolio served by the portfolio API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session with skill filtering and search (default)
    Browse,
    /// Print the full profile once
    Profile,
    /// List projects, optionally filtered by skill name
    Projects {
        #[arg(short, long)]
        skill: Option<String>,
    },
    /// Search projects and skills
    Search {
        /// Free-text query
        query: String,
    },
    /// List the profile's top skills
    Skills {
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Check backend liveness
    Health,
}

/// Initialize tracing on stderr; stdout carries the rendered view.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env().context("Invalid configuration")?;
    tracing::debug!(api_url = %config.api_url(), "Using backend");
    let client = PortfolioClient::new(&config);

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            let mut controller = Controller::new(client);
            let input = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();
            shell::run(&mut controller, input, &mut out).await?;
        }
        Commands::Profile => {
            let profile = client.get_profile().await?;
            print!("{}", render::render_header(&profile));
            println!();
            print!("{}", render::render_skills(&profile.skills, None));
            println!();
            print!("{}", render::render_projects(&profile.projects));
            println!();
            print!("{}", render::render_work(&profile.work));
            println!();
            print!("{}", render::render_education(&profile.education));
        }
        Commands::Projects { skill } => {
            let response = client.get_projects(skill.as_deref()).await?;
            print!("{}", render::render_projects(&response.projects));
        }
        Commands::Search { query } => {
            let response = client.search(&query).await?;
            println!("Results for \"{}\"", response.query);
            print!("{}", render::render_skills(&response.results.skills, None));
            print!("{}", render::render_projects(&response.results.projects));
        }
        Commands::Skills { limit } => {
            let response = client.get_top_skills(limit).await?;
            for skill in &response.skills {
                println!("{}", skill.name);
            }
        }
        Commands::Health => {
            let health = client.health_check().await?;
            println!("{}: {}", health.status, health.message);
        }
    }

    Ok(())
}
