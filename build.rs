use std::env;
use std::fs;
use std::path::Path;

/// Variables que la app lee con `option_env!`
const VARIABLES_APP: [&str; 4] = ["API_BASE_URL", "ENVIRONMENT", "ENABLE_LOGGING", "LOG_LEVEL"];

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !VARIABLES_APP.contains(&key) {
                        println!("cargo:warning=Variable ignorada en .env: {}", key);
                        continue;
                    }

                    // Las variables del entorno real tienen prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No se encontró .env, usando valores por defecto (ver .env.example)");
    }

    for variable in VARIABLES_APP {
        println!("cargo:rerun-if-env-changed={}", variable);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
