use std::env;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::snmp::SessionOptions;

/// Конфигурация сервиса
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Адрес HTTP слушателя
    pub listen: String,
    /// Таймаут одного SNMP обмена (секунды)
    pub timeout_secs: u64,
    /// Количество повторов при отсутствии ответа
    pub retries: u32,
    /// max-repetitions для GETBULK шага обхода
    pub max_repetitions: u32,
    /// Строгий режим: ошибка обхода превращается в 5xx / срывает пакет
    pub strict: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:3000".to_string(),
            timeout_secs: 2,
            retries: 2,
            max_repetitions: 10,
            strict: false,
        }
    }
}

impl ServiceConfig {
    /// Загружает конфигурацию: YAML файл из WALKER_CONFIG (если задан),
    /// затем переменные окружения поверх
    pub fn load() -> Result<Self> {
        let mut config = match env::var("WALKER_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).context(format!(
            "Не удалось прочитать файл: {}",
            path.as_ref().display()
        ))?;
        serde_yml::from_str(&content).context("Не удалось распарсить YAML")
    }

    fn apply_env(&mut self) {
        if let Ok(v) = env::var("LISTEN_ADDR") {
            self.listen = v;
        }
        if let Ok(v) = env::var("SNMP_TIMEOUT") {
            if let Ok(n) = v.parse() {
                self.timeout_secs = n;
            }
        }
        if let Ok(v) = env::var("SNMP_RETRIES") {
            if let Ok(n) = v.parse() {
                self.retries = n;
            }
        }
        if let Ok(v) = env::var("SNMP_MAX_REPETITIONS") {
            if let Ok(n) = v.parse() {
                self.max_repetitions = n;
            }
        }
        if let Ok(v) = env::var("WALK_STRICT") {
            self.strict = v == "1" || v.eq_ignore_ascii_case("true");
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            retries: self.retries,
            // ноль повторений бессмыслен для шага обхода
            max_repetitions: self.max_repetitions.max(1),
        }
    }
}
