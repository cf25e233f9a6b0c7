use std::time::Duration;

use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use weathernow_core::{
    Config, LookupError, OpenMeteoClient, SearchSession, SearchState, load_default_cities,
    lookup_city,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathernow", version, about = "Current weather and today's forecast by city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show weather for a single city and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Show the popular-cities panel and exit.
    Cities,

    /// Interactively pick the cities shown on the panel.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let client =
            OpenMeteoClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;

        match self.command {
            Some(Command::Show { city }) => {
                let weather = lookup_city(&client, &city).await?;
                print!("{}", render::city_details(&weather));
            }
            Some(Command::Cities) => {
                let panel = load_default_cities(&client, &config.default_cities).await;
                render::print_panel(&panel);
            }
            Some(Command::Configure) => configure(config)?,
            None => interactive(&client, &config).await?,
        }

        Ok(())
    }
}

/// Prompt loop: the panel is shown while idle; a submitted name runs the
/// lookup workflow; Esc acts as "back" after a result and quits from the
/// panel.
async fn interactive(client: &OpenMeteoClient, config: &Config) -> anyhow::Result<()> {
    println!("Weather Now");
    println!();

    let panel = load_default_cities(client, &config.default_cities).await;
    render::print_panel(&panel);

    let mut session = SearchSession::new();

    loop {
        let prompt = Text::new("Enter city name:").with_help_message("press Esc to go back");

        let input = match prompt.prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                if session.state().is_idle() {
                    break;
                }
                session.reset();
                render::print_panel(&panel);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let generation = match session.submit(&input) {
            Ok(generation) => generation,
            Err(LookupError::InvalidInput) => continue,
            Err(err) => return Err(err.into()),
        };

        println!("Loading...");
        let result = lookup_city(client, &input).await;
        session.finish(generation, result);

        match session.state() {
            SearchState::Success(weather) => {
                println!();
                print!("{}", render::city_details(weather));
                println!();
            }
            SearchState::Error(message) => println!("{message}"),
            SearchState::Idle | SearchState::Loading { .. } => {}
        }
    }

    Ok(())
}

/// Interactive panel configuration, persisted to the platform config dir.
fn configure(mut config: Config) -> anyhow::Result<()> {
    let current = config.default_cities.join(", ");

    let answer = Text::new("Panel cities (comma-separated):")
        .with_initial_value(&current)
        .prompt()?;

    let cities: Vec<String> = answer
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if cities.is_empty() {
        anyhow::bail!("At least one city is required");
    }

    config.default_cities = cities;
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}
