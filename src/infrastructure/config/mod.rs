use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub log_format: LogFormat,
    // Storage for flat JSON files (comments, push subscriptions)
    pub data_dir: PathBuf,
    // Public site used in the generated RSS channels
    pub site_name: String,
    pub site_url: String,
    // News aggregation
    pub feed_timeout_ms: u64,
    pub homepage_timeout_secs: u64,
    pub news_cache_ttl_secs: u64,
    // Notifications
    pub firebase: Option<FirebaseCredentials>,
    pub vapid: Option<VapidConfig>,
    // YouTube proxy
    pub youtube_api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Subset of a Google service account key file needed to talk to FCM
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FirebaseCredentials {
    pub project_id: String,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VapidConfig {
    pub public_key: String,
    pub private_key: String,
    pub subject: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "1".to_string())
                .parse()?,
            bcrypt_cost: env::var("BCRYPT_COST")
                .unwrap_or_else(|_| bcrypt::DEFAULT_COST.to_string())
                .parse()?,
            log_format: log_format(
                optional_env("LOG_FORMAT").as_deref(),
                optional_env("ENVIRONMENT").as_deref(),
            ),
            data_dir: PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string())),
            site_name: env::var("SITE_NAME").unwrap_or_else(|_| "Newsdesk".to_string()),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .trim_end_matches('/')
                .to_string(),
            feed_timeout_ms: env::var("FEED_TIMEOUT_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()?,
            homepage_timeout_secs: env::var("HOMEPAGE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "25".to_string())
                .parse()?,
            news_cache_ttl_secs: env::var("NEWS_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            firebase: firebase_from_env()?,
            vapid: vapid_from_env(),
            youtube_api_key: optional_env("YOUTUBE_API_KEY"),
        };

        Ok(config)
    }
}

/// An explicit `LOG_FORMAT` wins; otherwise production logs JSON
fn log_format(requested: Option<&str>, environment: Option<&str>) -> LogFormat {
    match (requested, environment) {
        (Some("json"), _) => LogFormat::Json,
        (Some("pretty"), _) => LogFormat::Pretty,
        (_, Some("production")) => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Firebase credentials come either as a whole service account JSON document
/// or as individual variables. Neither present means FCM is disabled.
fn firebase_from_env() -> Result<Option<FirebaseCredentials>, serde_json::Error> {
    if let Some(raw) = optional_env("FIREBASE_SERVICE_ACCOUNT") {
        return parse_service_account(&raw).map(Some);
    }

    match (
        optional_env("FIREBASE_PROJECT_ID"),
        optional_env("FIREBASE_CLIENT_EMAIL"),
        optional_env("FIREBASE_PRIVATE_KEY"),
    ) {
        (Some(project_id), Some(client_email), Some(private_key)) => {
            Ok(Some(FirebaseCredentials {
                project_id,
                client_email,
                private_key: unescape_private_key(&private_key),
                token_uri: optional_env("FIREBASE_TOKEN_URI").unwrap_or_else(default_token_uri),
            }))
        }
        _ => Ok(None),
    }
}

pub fn parse_service_account(raw: &str) -> Result<FirebaseCredentials, serde_json::Error> {
    let mut credentials: FirebaseCredentials = serde_json::from_str(raw)?;
    credentials.private_key = unescape_private_key(&credentials.private_key);
    Ok(credentials)
}

/// Keys pasted into env files usually carry literal `\n` sequences
fn unescape_private_key(key: &str) -> String {
    key.replace("\\n", "\n")
}

fn vapid_from_env() -> Option<VapidConfig> {
    let public_key = optional_env("VAPID_PUBLIC_KEY")?;
    let private_key = optional_env("VAPID_PRIVATE_KEY")?;
    Some(VapidConfig {
        public_key,
        private_key,
        subject: optional_env("VAPID_SUBJECT")
            .unwrap_or_else(|| "mailto:admin@localhost".to_string()),
    })
}
