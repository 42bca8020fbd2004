use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub porcentaje_comision_defecto: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Vacío = rutas relativas al mismo origen que sirve las páginas
            backend_url: String::new(),
            enable_logging: true,
            porcentaje_comision_defecto: 0.10,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            porcentaje_comision_defecto: option_env!("PORCENTAJE_COMISION_EJECUTIVO")
                .unwrap_or("0.10")
                .parse()
                .unwrap_or(0.10),
        }
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
    fn defaults_apuntan_al_mismo_origen() {
        let config = AppConfig::default();
        assert!(config.backend_url.is_empty());
        assert!(config.enable_logging);
        assert_eq!(config.porcentaje_comision_defecto, 0.10);
    }

    #[test]
    fn from_env_sin_variables_usa_defaults() {
        // Sin .env presente, option_env! entrega None y caen los defaults
        let config = AppConfig::from_env();
        assert_eq!(config.porcentaje_comision_defecto, 0.10);
    }
}
