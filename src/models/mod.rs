use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::WalkError;

/// Запрос SNMP Walk для одного устройства
#[derive(Debug, Clone, Deserialize)]
pub struct WalkRequest {
    pub ip: String,
    #[serde(default = "default_community")]
    pub community: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_oid")]
    pub oid: String,
    /// Ограничение числа varbind'ов одного обхода (None — без лимита)
    #[serde(default)]
    pub max_items: Option<usize>,
}

fn default_community() -> String {
    "public".to_string()
}

fn default_port() -> u16 {
    161
}

fn default_oid() -> String {
    "1.3.6.1".to_string()
}

/// Описание ошибки для JSON ответа
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
}

impl ErrorBody {
    pub fn from_error(err: &WalkError) -> Self {
        let (status, oid) = match err {
            WalkError::Protocol { status, oid, .. } => (Some(*status), oid.clone()),
            _ => (None, None),
        };
        Self {
            kind: err.kind(),
            message: err.to_string(),
            status,
            oid,
        }
    }
}

/// Итог одного обхода: карта результатов либо описание ошибки.
/// Порядок ключей — порядок обнаружения.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WalkOutcome {
    Ok { results: IndexMap<String, String> },
    Err { error: ErrorBody },
}

impl WalkOutcome {
    pub fn ok(results: IndexMap<String, String>) -> Self {
        Self::Ok { results }
    }

    pub fn from_error(err: &WalkError) -> Self {
        Self::Err {
            error: ErrorBody::from_error(err),
        }
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Self::Ok { .. } => None,
            Self::Err { error } => Some(error),
        }
    }

    pub fn results(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Ok { results } => Some(results),
            Self::Err { .. } => None,
        }
    }
}
