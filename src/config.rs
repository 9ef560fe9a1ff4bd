use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Simulated latency before a placed order is confirmed.
    pub order_submit_delay: Duration,
    /// Simulated latency before a registration redirects to the dashboard.
    pub registration_submit_delay: Duration,
    pub owner_restaurant_id: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            order_submit_delay: Duration::from_millis(1000),
            registration_submit_delay: Duration::from_millis(2000),
            owner_restaurant_id: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let order_submit_delay = millis_from_env("ORDER_SUBMIT_DELAY_MS")?
            .unwrap_or(defaults.order_submit_delay);
        let registration_submit_delay = millis_from_env("REGISTRATION_SUBMIT_DELAY_MS")?
            .unwrap_or(defaults.registration_submit_delay);
        let owner_restaurant_id = match env::var("OWNER_RESTAURANT_ID") {
            Ok(raw) => raw.parse::<i64>()?,
            Err(_) => defaults.owner_restaurant_id,
        };
        Ok(Self {
            host,
            port,
            order_submit_delay,
            registration_submit_delay,
            owner_restaurant_id,
        })
    }
}

fn millis_from_env(key: &str) -> anyhow::Result<Option<Duration>> {
    match env::var(key) {
        Ok(raw) => {
            let ms = raw
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("invalid {key}: {e}"))?;
            Ok(Some(Duration::from_millis(ms)))
        }
        Err(_) => Ok(None),
    }
}
