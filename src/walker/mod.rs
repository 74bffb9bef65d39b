use std::collections::VecDeque;

use indexmap::IndexMap;

use crate::error::WalkError;
use crate::snmp::SnmpSession;
use crate::snmp::oid;

pub mod classify;
pub mod decode;

use decode::{DecodedValue, StepValue};

/// Одна пара OID→значение, выданная обходом
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarBinding {
    pub oid: Vec<u64>,
    pub value: DecodedValue,
}

/// Один varbind из ответа до классификации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepBinding {
    pub oid: Vec<u64>,
    pub value: StepValue,
}

/// Переваренный ответ одного обмена
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPdu {
    pub error_status: u32,
    pub error_index: u32,
    pub bindings: Vec<StepBinding>,
}

/// Обход поддерева: ленивая конечная последовательность varbind'ов.
///
/// Машина состояний: INIT → REQUESTING → {HAVE_VARBIND, TRANSPORT_ERROR,
/// PROTOCOL_ERROR, EXHAUSTED}. Любая ошибка терминальна — курсор никогда
/// не переиспользуется для повторения того же неудачного запроса, иначе
/// агент, стабильно отвечающий ошибкой, зациклит обход.
pub struct TreeWalk<S> {
    session: S,
    root: Vec<u64>,
    cursor: Vec<u64>,
    buffer: VecDeque<StepBinding>,
    max_items: Option<usize>,
    count: usize,
    done: bool,
}

impl<S: SnmpSession> TreeWalk<S> {
    pub fn new(session: S, root: Vec<u64>, max_items: Option<usize>) -> Self {
        Self {
            session,
            cursor: root.clone(),
            root,
            buffer: VecDeque::new(),
            max_items,
            count: 0,
            done: false,
        }
    }

    /// Следующий varbind поддерева, либо None когда обход завершён.
    /// После любой ошибки обход терминален и больше запросов не делает.
    pub async fn next_binding(&mut self) -> Option<Result<VarBinding, WalkError>> {
        loop {
            if self.done {
                return None;
            }

            if let Some(max) = self.max_items {
                if self.count >= max {
                    self.done = true;
                    return None;
                }
            }

            let binding = match self.buffer.pop_front() {
                Some(b) => b,
                None => {
                    let step = match self.session.get_next(&self.cursor).await {
                        Ok(step) => step,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    };

                    let bindings = match classify::classify_step(step) {
                        Ok(b) => b,
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    };

                    if bindings.is_empty() {
                        self.done = true;
                        return None;
                    }

                    self.buffer.extend(bindings);
                    continue;
                }
            };

            let value = match binding.value {
                StepValue::Value(v) => v,
                StepValue::EndOfView => {
                    self.done = true;
                    return None;
                }
            };

            // Вышли за пределы поддерева — обход исчерпан
            if !binding.oid.starts_with(&self.root) {
                self.done = true;
                return None;
            }

            // Защита от агентов, нарушающих порядок: повтор или откат OID
            // означал бы бесконечный обход
            if binding.oid <= self.cursor {
                self.done = true;
                return Some(Err(WalkError::unexpected(format!(
                    "агент вернул OID {} не по возрастанию (после {})",
                    oid::format_oid(&binding.oid),
                    oid::format_oid(&self.cursor)
                ))));
            }

            self.cursor = binding.oid.clone();
            self.count += 1;
            return Some(Ok(VarBinding {
                oid: binding.oid,
                value,
            }));
        }
    }

    /// Собирает весь обход в упорядоченную карту OID → текст.
    /// Порядок вставки равен порядку обнаружения, ключи уникальны.
    pub async fn collect(mut self) -> Result<IndexMap<String, String>, WalkError> {
        let mut results = IndexMap::new();
        while let Some(item) = self.next_binding().await {
            let binding = item?;
            results.insert(oid::format_oid(&binding.oid), binding.value.render());
        }
        Ok(results)
    }
}
