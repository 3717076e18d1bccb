use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    /// Route all provider-backed features (identity, restaurant search)
    /// through local synthetic data instead of live calls.
    pub demo_mode: bool,
    pub yelp_client_id: Option<String>,
    pub yelp_client_secret: Option<String>,
    pub app_env: String,
}

impl Config {
    /// Loads the configuration from environment variables, reading `.env`
    /// first if present.
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:lunch_scheduler.db?mode=rwc".to_string());

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            eprintln!("WARNING: JWT_SECRET not set, using default (not secure for production!)");
            "lunch-scheduler-dev-secret".to_string()
        });

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = env::var("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|_| "16".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;

        let demo_mode = env::var("DEMO_MODE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let yelp_client_id = env::var("YELP_CLIENT_ID").ok();
        let yelp_client_secret = env::var("YELP_CLIENT_SECRET").ok();

        if !demo_mode && (yelp_client_id.is_none() || yelp_client_secret.is_none()) {
            eprintln!("WARNING: Yelp credentials not set, restaurant search will fail");
        }

        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            database_url,
            jwt_secret,
            server_host,
            server_port,
            max_connections,
            demo_mode,
            yelp_client_id,
            yelp_client_secret,
            app_env,
        })
    }

    /// Prints the configuration, masking secrets.
    pub fn print_info(&self) {
        println!("   Server Configuration:");
        println!("   Environment: {}", self.app_env);
        println!("   Server Address: {}:{}", self.server_host, self.server_port);
        println!("   Database: {}", Self::mask_url(&self.database_url));
        println!("   Max DB Connections: {}", self.max_connections);
        println!("   Demo Mode: {}", if self.demo_mode { "ON" } else { "off" });
        println!(
            "   Yelp: {}",
            if self.yelp_client_id.is_some() {
                "configured"
            } else {
                "not configured"
            }
        );
    }

    /// Masks credentials embedded in the database URL before logging it.
    fn mask_url(url: &str) -> String {
        if let Some(at_pos) = url.find('@') {
            if let Some(scheme_end) = url.find("://") {
                let scheme = &url[..scheme_end + 3];
                let after_at = &url[at_pos..];
                return format!("{}***{}", scheme, after_at);
            }
        }
        url.to_string()
    }
}
