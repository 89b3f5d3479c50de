use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    /// Raw service-account key document; parsed strictly at startup.
    pub credentials_json: String,

    pub spreadsheet_name: String,
    pub refresh_interval_secs: u64,
    pub recent_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),

            credentials_json: env::var("GOOGLE_CREDENTIALS_JSON")
                .expect("GOOGLE_CREDENTIALS_JSON must be set"),

            spreadsheet_name: env::var("SPREADSHEET_NAME")
                .unwrap_or_else(|_| "Mood Tracker".into()),
            refresh_interval_secs: env::var("REFRESH_INTERVAL_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .expect("REFRESH_INTERVAL_SECS must be a number"),
            recent_limit: env::var("RECENT_LIMIT")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .expect("RECENT_LIMIT must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
