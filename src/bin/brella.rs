// ABOUTME: Command-line interface for the Brella outfit recommendation engine
// ABOUTME: Fetches weather, runs the rules engine tools, and prints JSON results
//! Command-line entry point for Brella.
//!
//! Usage:
//! ```bash
//! # Recommend an outfit from explicit weather readings
//! cargo run --bin brella -- outfit --temperature 58 --condition "light rain" --activity hiking
//!
//! # Recommend an outfit from live weather for a city
//! cargo run --bin brella -- outfit --city Seattle
//!
//! # Build a slot-based outfit plan
//! cargo run --bin brella -- plan --temperature 45 --rain-chance 60 --activity "morning run"
//!
//! # Check weather safety
//! cargo run --bin brella -- safety --temperature 18 --wind-speed 28
//!
//! # Classify an activity description
//! cargo run --bin brella -- classify "business dinner downtown"
//!
//! # Show current weather for a city
//! cargo run --bin brella -- weather --city Denver
//! ```

use anyhow::{Context, Result};
use brella::config::ServerConfig;
use brella::external::{OpenMeteoClient, WeatherClientConfig, WeatherProvider};
use brella::logging;
use brella::tools::ToolRegistry;
use brella_core::models::WeatherSnapshot;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(
    name = "brella",
    about = "Weather-aware outfit recommendations",
    long_about = "Turn weather conditions and activity context into concrete clothing \
                  recommendations, outfit plans, and safety warnings."
)]
struct BrellaArgs {
    #[command(subcommand)]
    command: BrellaCommand,
}

#[derive(Subcommand)]
enum BrellaCommand {
    /// Recommend a clothing item list for the weather
    Outfit {
        /// City to fetch live weather for (overrides explicit readings)
        #[arg(long)]
        city: Option<String>,

        /// Temperature in Fahrenheit
        #[arg(long)]
        temperature: Option<f64>,

        /// Weather condition description
        #[arg(long)]
        condition: Option<String>,

        /// Style preferences (repeatable)
        #[arg(long = "style")]
        styles: Vec<String>,

        /// Color preferences (repeatable)
        #[arg(long = "color")]
        colors: Vec<String>,

        /// Clothing type hints (repeatable)
        #[arg(long = "clothing")]
        clothing: Vec<String>,

        /// Activity description
        #[arg(long)]
        activity: Option<String>,

        /// Composer variant: wardrobe or layered
        #[arg(long, default_value = "wardrobe")]
        variant: String,
    },

    /// Build a slot-based outfit plan
    Plan {
        /// City to fetch live weather for (overrides explicit readings)
        #[arg(long)]
        city: Option<String>,

        /// Temperature in Fahrenheit
        #[arg(long)]
        temperature: Option<f64>,

        /// Rain probability percentage (0-100)
        #[arg(long, default_value = "0")]
        rain_chance: f64,

        /// Wind speed in mph
        #[arg(long, default_value = "0")]
        wind_speed: f64,

        /// Activity description
        #[arg(long)]
        activity: Option<String>,

        /// Style persona: practical, fashion, kid_friendly
        #[arg(long)]
        persona: Option<String>,

        /// Temperature sensitivity: runs_cold, neutral, runs_hot
        #[arg(long)]
        comfort_profile: Option<String>,
    },

    /// Check weather conditions for safety concerns
    Safety {
        /// City to fetch live weather for (overrides explicit readings)
        #[arg(long)]
        city: Option<String>,

        /// Temperature in Fahrenheit
        #[arg(long)]
        temperature: Option<f64>,

        /// Wind speed in mph
        #[arg(long, default_value = "0")]
        wind_speed: f64,

        /// Rain probability percentage (0-100)
        #[arg(long, default_value = "0")]
        rain_chance: f64,

        /// Weather condition description
        #[arg(long, default_value = "")]
        condition: String,
    },

    /// Classify an activity description into structured context
    Classify {
        /// Free-text activity description
        activity: String,
    },

    /// Show current weather for a city
    Weather {
        /// City name
        #[arg(long)]
        city: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let args = BrellaArgs::parse();
    let registry = ToolRegistry::new();

    let output = run_command(&config, &registry, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

async fn run_command(
    config: &ServerConfig,
    registry: &ToolRegistry,
    command: BrellaCommand,
) -> Result<Value> {
    match command {
        BrellaCommand::Outfit {
            city,
            temperature,
            condition,
            styles,
            colors,
            clothing,
            activity,
            variant,
        } => {
            let (temperature, condition) =
                resolve_readings(config, city, temperature, condition).await?;

            let params = json!({
                "temperature": temperature,
                "condition": condition,
                "style_preferences": styles,
                "color_preferences": colors,
                "clothing_types": clothing,
                "activity": activity,
                "variant": variant,
            });
            Ok(registry.execute("recommend_outfit", &params)?)
        }

        BrellaCommand::Plan {
            city,
            temperature,
            rain_chance,
            wind_speed,
            activity,
            persona,
            comfort_profile,
        } => {
            let (temperature, rain_chance, wind_speed) = match city {
                Some(city) => {
                    let snapshot = fetch_weather(config, &city).await?;
                    (snapshot.temperature, snapshot.rain_chance, snapshot.wind_speed)
                }
                None => (
                    temperature.context("--temperature is required without --city")?,
                    rain_chance,
                    wind_speed,
                ),
            };

            let params = json!({
                "temperature": temperature,
                "rain_chance": rain_chance,
                "wind_speed": wind_speed,
                "activity": activity,
                "persona": persona,
                "comfort_profile": comfort_profile,
            });
            Ok(registry.execute("plan_outfit", &params)?)
        }

        BrellaCommand::Safety {
            city,
            temperature,
            wind_speed,
            rain_chance,
            condition,
        } => {
            let (temperature, wind_speed, rain_chance, condition) = match city {
                Some(city) => {
                    let snapshot = fetch_weather(config, &city).await?;
                    (
                        snapshot.temperature,
                        snapshot.wind_speed,
                        snapshot.rain_chance,
                        snapshot.condition,
                    )
                }
                None => (
                    temperature.context("--temperature is required without --city")?,
                    wind_speed,
                    rain_chance,
                    condition,
                ),
            };

            let params = json!({
                "temperature": temperature,
                "wind_speed": wind_speed,
                "rain_chance": rain_chance,
                "condition": condition,
            });
            Ok(registry.execute("check_safety", &params)?)
        }

        BrellaCommand::Classify { activity } => {
            Ok(registry.execute("classify_activity", &json!({ "activity": activity }))?)
        }

        BrellaCommand::Weather { city } => {
            let city = city.unwrap_or_else(|| config.default_city.clone());
            let client = weather_client(config);
            let forecast = client.forecast(&city).await?;
            Ok(serde_json::to_value(forecast)?)
        }
    }
}

/// Resolve (temperature, condition) from a city fetch or explicit flags.
async fn resolve_readings(
    config: &ServerConfig,
    city: Option<String>,
    temperature: Option<f64>,
    condition: Option<String>,
) -> Result<(f64, String)> {
    match city {
        Some(city) => {
            let snapshot = fetch_weather(config, &city).await?;
            Ok((snapshot.temperature, snapshot.condition))
        }
        None => Ok((
            temperature.context("--temperature is required without --city")?,
            condition.unwrap_or_default(),
        )),
    }
}

async fn fetch_weather(config: &ServerConfig, city: &str) -> Result<WeatherSnapshot> {
    let client = weather_client(config);
    let snapshot = client
        .current_weather(city)
        .await
        .with_context(|| format!("failed to fetch weather for {city}"))?;
    Ok(snapshot)
}

fn weather_client(config: &ServerConfig) -> OpenMeteoClient {
    OpenMeteoClient::new(WeatherClientConfig {
        base_url: config.weather_base_url.clone(),
        cache_ttl_secs: config.cache_ttl_secs,
        timeout_secs: config.http_timeout_secs,
    })
}
