use std::env;
use std::fs;
use std::path::Path;

// Claves que lee AppConfig::from_env() vía option_env!
const CONFIG_KEYS: &[&str] = &[
    "API_BASE_URL",
    "ENABLE_LOGGING",
    "NOTIFICATION_TIMEOUT_MS",
    "MAX_NOTIFICATIONS",
    "NOTIFICATION_POLL_INTERVAL_MS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(_) => {
            println!("cargo:warning=No .env file found, using built-in defaults (see .env.example)");
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        // Las variables del entorno real tienen prioridad sobre .env
        if CONFIG_KEYS.contains(&key) && env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
