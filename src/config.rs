use crate::error::{env_error, BotResult};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default activity text for the bot
pub const DEFAULT_ACTIVITY: &str = "Järjestelee kalenteria";

/// Model served by the local Ollama instance
pub const DEFAULT_OLLAMA_MODEL: &str = "qwen3-coder:30b-a3b-q4_K_M";

/// Local Ollama API endpoint
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Main configuration structure for the bot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// Google Calendar API client ID
    pub google_client_id: String,
    /// Google Calendar API client secret
    pub google_client_secret: String,
    /// Google Calendar ID to schedule on
    pub google_calendar_id: String,
    /// Discord user IDs allowed to trigger scheduling
    pub allowed_user_ids: Vec<u64>,
    /// Timezone for scheduling
    pub timezone: String,
    /// Base URL of the local Ollama instance
    pub ollama_url: String,
    /// Model the scheduler asks for
    pub ollama_model: String,
    /// Event length in minutes when the task gives no explicit times
    pub default_duration_minutes: i64,
    /// How many days of existing events the scheduler considers
    pub lookahead_days: i64,
    /// Redis connection URL for the Google OAuth token store
    pub redis_url: String,
    /// Bot activity status text
    pub activity: String,
}

impl Config {
    /// Load configuration from environment
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Required environment variables
        let discord_token = env::var("DISCORD_TOKEN").map_err(|_| env_error("DISCORD_TOKEN"))?;
        let google_client_id =
            env::var("GOOGLE_CLIENT_ID").map_err(|_| env_error("GOOGLE_CLIENT_ID"))?;
        let google_client_secret =
            env::var("GOOGLE_CLIENT_SECRET").map_err(|_| env_error("GOOGLE_CLIENT_SECRET"))?;

        // Authorization allowlist, comma-separated Discord user IDs
        let allowed_user_ids = env::var("ALLOWED_USER_IDS")
            .map_err(|_| env_error("ALLOWED_USER_IDS"))?
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse::<u64>()
                    .map_err(|_| env_error("Invalid ALLOWED_USER_IDS format"))
            })
            .collect::<BotResult<Vec<u64>>>()?;

        // Everything else has a sensible default
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").unwrap_or_else(|_| String::from("primary"));
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));
        let ollama_url = env::var("OLLAMA_URL").unwrap_or_else(|_| String::from(DEFAULT_OLLAMA_URL));
        let ollama_model =
            env::var("OLLAMA_MODEL").unwrap_or_else(|_| String::from(DEFAULT_OLLAMA_MODEL));
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| String::from("redis://127.0.0.1:6379"));
        let activity = env::var("BOT_ACTIVITY").unwrap_or_else(|_| String::from(DEFAULT_ACTIVITY));

        let default_duration_minutes = match env::var("DEFAULT_DURATION_MINUTES") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid DEFAULT_DURATION_MINUTES format"))?,
            Err(_) => 60,
        };

        let lookahead_days = match env::var("LOOKAHEAD_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .map_err(|_| env_error("Invalid LOOKAHEAD_DAYS format"))?,
            Err(_) => 7,
        };

        Ok(Config {
            discord_token,
            google_client_id,
            google_client_secret,
            google_calendar_id,
            allowed_user_ids,
            timezone,
            ollama_url,
            ollama_model,
            default_duration_minutes,
            lookahead_days,
            redis_url,
            activity,
        })
    }

    /// Check whether a Discord user may trigger scheduling
    pub fn is_user_allowed(&self, user_id: u64) -> bool {
        self.allowed_user_ids.contains(&user_id)
    }
}
