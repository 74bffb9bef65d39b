use snmp2::Value;

use crate::error::WalkError;

/// Декодированное значение в канонической текстовой форме.
///
/// Бинарные payload'ы выводятся как hex в нижнем регистре,
/// остальные типы — как обычный текст.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedValue {
    Text(String),
    Binary(Vec<u8>),
}

impl DecodedValue {
    /// Строковое представление для выдачи наружу
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Binary(bytes) => hex::encode(bytes),
        }
    }
}

/// Результат декодирования одного varbind из ответа
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepValue {
    Value(DecodedValue),
    /// endOfMibView и прочие исключения v2c — сигнал конца поддерева
    EndOfView,
}

/// Чистое декодирование, без I/O. Не может упасть на корректных
/// значениях протокола; вложенные структурные типы в varbind — это
/// испорченный payload.
pub fn decode_value(value: &Value<'_>) -> Result<StepValue, WalkError> {
    let decoded = match value {
        Value::Null => DecodedValue::Text(String::new()),
        Value::Boolean(b) => DecodedValue::Text(b.to_string()),
        Value::Integer(n) => DecodedValue::Text(n.to_string()),
        Value::OctetString(bytes) => match std::str::from_utf8(bytes) {
            Ok(s) => DecodedValue::Text(s.to_string()),
            Err(_) => DecodedValue::Binary(bytes.to_vec()),
        },
        Value::ObjectIdentifier(oid) => DecodedValue::Text(oid.to_string()),
        Value::IpAddress([a, b, c, d]) => DecodedValue::Text(format!("{}.{}.{}.{}", a, b, c, d)),
        Value::Counter32(n) => DecodedValue::Text(n.to_string()),
        Value::Unsigned32(n) => DecodedValue::Text(n.to_string()),
        Value::Timeticks(n) => DecodedValue::Text(n.to_string()),
        Value::Counter64(n) => DecodedValue::Text(n.to_string()),
        Value::Opaque(bytes) => DecodedValue::Binary(bytes.to_vec()),
        Value::EndOfMibView | Value::NoSuchObject | Value::NoSuchInstance => {
            return Ok(StepValue::EndOfView);
        }
        other => {
            return Err(WalkError::decode(format!(
                "неподдерживаемый тип значения: {:?}",
                other
            )));
        }
    };
    Ok(StepValue::Value(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snmp::oid;

    fn decoded(value: &Value<'_>) -> DecodedValue {
        match decode_value(value).unwrap() {
            StepValue::Value(v) => v,
            StepValue::EndOfView => panic!("неожиданный конец поддерева"),
        }
    }

    #[test]
    fn utf8_octet_string_stays_text() {
        let value = Value::OctetString(b"device description");
        assert_eq!(
            decoded(&value),
            DecodedValue::Text("device description".to_string())
        );
    }

    #[test]
    fn binary_octet_string_renders_lowercase_hex() {
        let raw = [0xde, 0xad, 0xbe, 0xef, 0xff];
        let value = Value::OctetString(&raw);
        let decoded = decoded(&value);
        assert_eq!(decoded, DecodedValue::Binary(raw.to_vec()));
        assert_eq!(decoded.render(), "deadbeefff");
    }

    #[test]
    fn hex_rendering_roundtrips_to_original_bytes() {
        // Закон обратимости: hex-декодирование восстанавливает байты
        let raw: Vec<u8> = (0..=255u8).collect();
        let value = Value::OctetString(&raw);
        let rendered = decoded(&value).render();
        assert_eq!(rendered.len() % 2, 0);
        assert_eq!(rendered, rendered.to_lowercase());
        assert_eq!(hex::decode(&rendered).unwrap(), raw);
    }

    #[test]
    fn numbers_render_as_decimal_text() {
        assert_eq!(
            decoded(&Value::Integer(123456)),
            DecodedValue::Text("123456".to_string())
        );
        assert_eq!(
            decoded(&Value::Counter32(42)),
            DecodedValue::Text("42".to_string())
        );
        assert_eq!(
            decoded(&Value::Timeticks(123456)),
            DecodedValue::Text("123456".to_string())
        );
        assert_eq!(
            decoded(&Value::Counter64(u64::MAX)),
            DecodedValue::Text(u64::MAX.to_string())
        );
    }

    #[test]
    fn oid_value_renders_as_dotted_path() {
        let wire = oid::to_wire(&[1, 3, 6, 1, 4, 1, 8072, 3, 2, 10]).unwrap();
        let value = Value::ObjectIdentifier(wire);
        assert_eq!(
            decoded(&value),
            DecodedValue::Text("1.3.6.1.4.1.8072.3.2.10".to_string())
        );
    }

    #[test]
    fn ip_address_renders_dotted_quad() {
        assert_eq!(
            decoded(&Value::IpAddress([10, 0, 0, 5])),
            DecodedValue::Text("10.0.0.5".to_string())
        );
    }

    #[test]
    fn end_of_mib_view_is_end_marker() {
        assert_eq!(
            decode_value(&Value::EndOfMibView).unwrap(),
            StepValue::EndOfView
        );
    }
}
