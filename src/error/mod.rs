use thiserror::Error;

/// Классификация ошибок одного обхода.
///
/// Транспортные ошибки — нет пригодного ответа от устройства,
/// протокольные — устройство ответило, но с ненулевым error-status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalkError {
    #[error("транспортная ошибка: {message}")]
    Transport { message: String },

    #[error("ошибка SNMP: {status_name} (статус {status})")]
    Protocol {
        status: u32,
        status_name: &'static str,
        /// OID, на котором устройство сообщило об ошибке (если error-index валиден)
        oid: Option<String>,
    },

    #[error("ошибка декодирования: {message}")]
    Decode { message: String },

    #[error("невалидный запрос: {message}")]
    Validation { message: String },

    #[error("внутренняя ошибка: {message}")]
    Unexpected { message: String },
}

impl WalkError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Машиночитаемый тип ошибки для JSON ответов
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Protocol { .. } => "protocol",
            Self::Decode { .. } => "decode",
            Self::Validation { .. } => "validation",
            Self::Unexpected { .. } => "unexpected",
        }
    }
}
