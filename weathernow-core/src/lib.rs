//! Core library for the `weathernow` CLI.
//!
//! This crate defines:
//! - The Open-Meteo geocoding/forecast client and the `WeatherApi` seam
//! - The city lookup workflow and the default-cities panel loader
//! - The search session state machine used by the interactive frontend
//! - Weather-code classification, shared models, and configuration
//!
//! It is used by `weathernow-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod lookup;
pub mod model;
pub mod session;

pub use classify::IconCategory;
pub use client::{OpenMeteoClient, WeatherApi};
pub use config::Config;
pub use error::LookupError;
pub use lookup::{DEFAULT_CITIES, load_default_cities, lookup_city};
pub use model::{CityWeather, Coordinates, CurrentObservation, DailyForecast, DayForecast};
pub use session::{SearchSession, SearchState};
