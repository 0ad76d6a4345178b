use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub enable_logging: bool,
    pub notification_config: NotificationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            enable_logging: true,
            notification_config: NotificationConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Tiempo de vida de un banner en pantalla
    pub timeout_ms: u32,
    /// Banners visibles a la vez; el más antiguo se descarta primero
    pub max_visible: usize,
    /// Intervalo del polling del contador de no leídas
    pub poll_interval_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            max_visible: 5,
            poll_interval_ms: 60_000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = NotificationConfig::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            notification_config: NotificationConfig {
                timeout_ms: option_env!("NOTIFICATION_TIMEOUT_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.timeout_ms),
                max_visible: option_env!("MAX_NOTIFICATIONS")
                    .and_then(|v| v.parse().ok())
                    .filter(|n: &usize| *n > 0)
                    .unwrap_or(defaults.max_visible),
                poll_interval_ms: option_env!("NOTIFICATION_POLL_INTERVAL_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.poll_interval_ms),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults() {
        let cfg = NotificationConfig::default();
        assert_eq!(cfg.timeout_ms, 5000);
        assert_eq!(cfg.max_visible, 5);
        assert_eq!(cfg.poll_interval_ms, 60_000);
    }
}
