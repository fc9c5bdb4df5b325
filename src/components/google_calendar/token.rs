use crate::config::Config;
use crate::error::{google_calendar_error, BotResult};
use chrono::Utc;
use redis::{AsyncCommands, Client as RedisClient};
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Manages the Google OAuth token stored in Redis. The interactive consent
/// flow lives outside this process; the stored token is refreshed here when
/// it has expired.
#[derive(Clone)]
pub struct TokenManager {
    config: Arc<RwLock<Config>>,
    redis_key: String,
    client: Client,
    redis: RedisClient,
}

impl TokenManager {
    pub async fn new(config: Arc<RwLock<Config>>) -> BotResult<Self> {
        let redis_url = {
            let config_read = config.read().await;
            config_read.redis_url.clone()
        };
        let redis = RedisClient::open(redis_url.as_str())
            .map_err(|e| google_calendar_error(&format!("Failed to create Redis client: {}", e)))?;

        Ok(Self {
            config,
            redis_key: "google_calendar_token".to_string(),
            client: Client::new(),
            redis,
        })
    }

    /// Current access token, refreshed through the OAuth endpoint if expired
    pub async fn access_token(&self) -> BotResult<String> {
        let mut redis_conn = self
            .redis
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to connect to Redis: {}", e)))?;

        let token_str: Option<String> = redis_conn
            .get(&self.redis_key)
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to read token from Redis: {}", e)))?;

        let Some(token_str) = token_str else {
            return Err(google_calendar_error(
                "No Google OAuth token found in Redis. Provision one before starting the bot.",
            ));
        };

        let token: Value = serde_json::from_str(&token_str)
            .map_err(|e| google_calendar_error(&format!("Failed to parse token JSON: {}", e)))?;

        // Use the stored access token as long as it is still valid
        if let Some(expiry) = token.get("expires_at").and_then(|v| v.as_i64()) {
            if expiry > Utc::now().timestamp() {
                return extract_access_token(&token);
            }
        }

        let refreshed = self.refresh_token(&token).await?;
        extract_access_token(&refreshed)
    }

    /// Refresh an expired token and persist the result back to Redis
    async fn refresh_token(&self, token: &Value) -> BotResult<Value> {
        let refresh_token = token
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| google_calendar_error("No refresh token in token data"))?;

        let (client_id, client_secret) = {
            let config_read = self.config.read().await;
            (
                config_read.google_client_id.clone(),
                config_read.google_client_secret.clone(),
            )
        };

        let params = [
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("refresh_token", refresh_token.to_string()),
            ("grant_type", "refresh_token".to_string()),
        ];

        let response = self
            .client
            .post(TOKEN_ENDPOINT)
            .form(&params)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to refresh token: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to refresh token: HTTP {} - {}",
                status, error_body
            )));
        }

        let new_token: Value = response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse token response: {}", e)))?;

        let access_token = new_token
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| google_calendar_error("Token response missing 'access_token' field"))?;

        // Combine the new access token with the existing refresh token
        let expires_in = new_token
            .get("expires_in")
            .and_then(|v| v.as_i64())
            .unwrap_or(3600);
        let token_json = json!({
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_at": Utc::now().timestamp() + expires_in,
        });

        let mut redis_conn = self
            .redis
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to connect to Redis: {}", e)))?;

        let _: () = redis_conn
            .set(&self.redis_key, token_json.to_string())
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to save token to Redis: {}", e)))?;

        Ok(token_json)
    }
}

fn extract_access_token(token: &Value) -> BotResult<String> {
    token
        .get("access_token")
        .and_then(|t| t.as_str())
        .map(str::to_string)
        .ok_or_else(|| google_calendar_error("Token data missing 'access_token' field"))
}
