use std::fmt::Display;
use std::time::Duration;

use crate::error::WalkError;
use crate::snmp::oid;

use super::{StepBinding, StepPdu};

/// Классифицирует итог одного обмена: либо продолжение с varbind'ами,
/// либо протокольная ошибка устройства. Без состояния и побочных эффектов.
pub fn classify_step(step: StepPdu) -> Result<Vec<StepBinding>, WalkError> {
    if step.error_status != 0 {
        // error-index указывает на виновный varbind, нумерация с 1;
        // вне диапазона — OID не определяем
        let oid = (step.error_index as usize)
            .checked_sub(1)
            .and_then(|i| step.bindings.get(i))
            .map(|b| oid::format_oid(&b.oid));

        return Err(WalkError::Protocol {
            status: step.error_status,
            status_name: status_name(step.error_status),
            oid,
        });
    }
    Ok(step.bindings)
}

/// Транспортный сбой: нет пригодного ответа (ошибка сокета, мусорная датаграмма)
pub fn transport_failure(context: &str, err: impl Display) -> WalkError {
    WalkError::transport(format!("{}: {}", context, err))
}

/// Транспортный сбой: таймаут после исчерпания бюджета повторов
pub fn timeout_failure(attempts: u32, timeout: Duration) -> WalkError {
    WalkError::transport(format!(
        "нет ответа после {} попыток (таймаут {:?})",
        attempts, timeout
    ))
}

/// Имена статусов ошибок по RFC 3416
pub fn status_name(status: u32) -> &'static str {
    match status {
        0 => "noError",
        1 => "tooBig",
        2 => "noSuchName",
        3 => "badValue",
        4 => "readOnly",
        5 => "genErr",
        6 => "noAccess",
        7 => "wrongType",
        8 => "wrongLength",
        9 => "wrongEncoding",
        10 => "wrongValue",
        11 => "noCreation",
        12 => "inconsistentValue",
        13 => "resourceUnavailable",
        14 => "commitFailed",
        15 => "undoFailed",
        16 => "authorizationError",
        17 => "notWritable",
        18 => "inconsistentName",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::decode::{DecodedValue, StepValue};

    fn binding(path: &[u64]) -> StepBinding {
        StepBinding {
            oid: path.to_vec(),
            value: StepValue::Value(DecodedValue::Text("x".to_string())),
        }
    }

    #[test]
    fn zero_status_passes_bindings_through() {
        let step = StepPdu {
            error_status: 0,
            error_index: 0,
            bindings: vec![binding(&[1, 3, 6, 1, 1]), binding(&[1, 3, 6, 1, 2])],
        };
        let bindings = classify_step(step).unwrap();
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn nonzero_status_resolves_offending_oid() {
        let step = StepPdu {
            error_status: 2,
            error_index: 1,
            bindings: vec![binding(&[1, 3, 6, 1, 9])],
        };
        let err = classify_step(step).unwrap_err();
        assert_eq!(
            err,
            WalkError::Protocol {
                status: 2,
                status_name: "noSuchName",
                oid: Some("1.3.6.1.9".to_string()),
            }
        );
    }

    #[test]
    fn out_of_range_index_leaves_oid_unset() {
        for index in [0, 7] {
            let step = StepPdu {
                error_status: 5,
                error_index: index,
                bindings: vec![binding(&[1, 3])],
            };
            let err = classify_step(step).unwrap_err();
            assert_eq!(
                err,
                WalkError::Protocol {
                    status: 5,
                    status_name: "genErr",
                    oid: None,
                }
            );
        }
    }

    #[test]
    fn status_names_follow_rfc() {
        assert_eq!(status_name(1), "tooBig");
        assert_eq!(status_name(5), "genErr");
        assert_eq!(status_name(18), "inconsistentName");
        assert_eq!(status_name(999), "unknown");
    }

    #[test]
    fn timeout_failure_is_transport() {
        let err = timeout_failure(3, Duration::from_secs(2));
        assert_eq!(err.kind(), "transport");
    }
}
