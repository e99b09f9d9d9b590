use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            api_key: env::var("API_KEY").unwrap_or_else(|_| "dev-api-key".to_string()),
        }
    }
}
