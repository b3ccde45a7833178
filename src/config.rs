use std::env;

pub struct AppConfig {
    pub service_endpoint: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let service_endpoint = env::var("SERVICE_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        Self { service_endpoint }
    }
}
