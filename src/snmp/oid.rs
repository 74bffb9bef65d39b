use snmp2::Oid;

use crate::error::WalkError;

/// Парсит строку вида "1.3.6.1.2.1" в числовой путь.
///
/// OID трактуются как непрозрачные числовые пути, без разрешения имён MIB.
pub fn parse_oid(s: &str) -> Result<Vec<u64>, WalkError> {
    let parts: Result<Vec<u64>, _> = s
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts.map_err(|_| WalkError::validation(format!("Невалидный OID: {}", s)))?;
    if parts.is_empty() {
        return Err(WalkError::validation(format!("Невалидный OID: {}", s)));
    }
    Ok(parts)
}

/// Обратное преобразование пути в точечную запись
pub fn format_oid(path: &[u64]) -> String {
    path.iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

/// Путь → проводной Oid для snmp2
pub fn to_wire(path: &[u64]) -> Result<Oid<'static>, WalkError> {
    let parts: Vec<u64> = path.to_vec();
    Oid::from(&parts).map_err(|e| WalkError::decode(format!("Не удалось создать Oid: {:?}", e)))
}

/// Проводной Oid из ответа → числовой путь
pub fn from_wire(oid: &Oid<'_>) -> Result<Vec<u64>, WalkError> {
    let text = oid.to_string();
    parse_oid(&text).map_err(|_| WalkError::decode(format!("Невалидный OID в ответе: {}", text)))
}
