use std::time::Duration;

use snmp2::AsyncSession;
use tokio::time;

use crate::error::WalkError;
use crate::snmp::oid;
use crate::walker::classify;
use crate::walker::decode;
use crate::walker::{StepBinding, StepPdu};

/// Параметры одного обмена с устройством
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub timeout: Duration,
    /// Количество повторов при отсутствии ответа (попыток всего retries + 1)
    pub retries: u32,
    pub max_repetitions: u32,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(2),
            retries: 2,
            max_repetitions: 10,
        }
    }
}

/// Источник шагов обхода. Шов для подмены сессии в тестах.
pub trait SnmpSession {
    /// Один обмен "get next после cursor": varbind'ы и статус ответа
    fn get_next(
        &mut self,
        cursor: &[u64],
    ) -> impl std::future::Future<Output = Result<StepPdu, WalkError>> + Send;
}

/// SNMPv2c сессия поверх UDP. Создаётся заново на каждый обход,
/// никакого глобального состояния.
pub struct UdpSession {
    session: AsyncSession,
    opts: SessionOptions,
}

impl UdpSession {
    pub async fn connect(
        target: &str,
        community: &[u8],
        opts: SessionOptions,
    ) -> Result<Self, WalkError> {
        let session = AsyncSession::new_v2c(target, community, 0)
            .await
            .map_err(|e| classify::transport_failure("Не удалось создать SNMP сессию", e))?;

        Ok(Self { session, opts })
    }
}

impl SnmpSession for UdpSession {
    async fn get_next(&mut self, cursor: &[u64]) -> Result<StepPdu, WalkError> {
        let request_oid = oid::to_wire(cursor)?;
        let mut last_error = None;

        for _attempt in 0..=self.opts.retries {
            let request_oids = [&request_oid];
            let exchange = self
                .session
                .getbulk(&request_oids, 0, self.opts.max_repetitions);

            match time::timeout(self.opts.timeout, exchange).await {
                Ok(Ok(pdu)) => {
                    let error_status = pdu.error_status;
                    let error_index = pdu.error_index;

                    let mut bindings = Vec::new();
                    for (vb_oid, vb_value) in pdu.varbinds {
                        bindings.push(StepBinding {
                            oid: oid::from_wire(&vb_oid)?,
                            value: decode::decode_value(&vb_value)?,
                        });
                    }

                    return Ok(StepPdu {
                        error_status,
                        error_index,
                        bindings,
                    });
                }
                // Мусорный или чужой ответ — повторяем в рамках бюджета
                Ok(Err(e)) => {
                    last_error = Some(classify::transport_failure("SNMP запрос не удался", e));
                }
                Err(_) => {
                    last_error = Some(classify::timeout_failure(
                        self.opts.retries + 1,
                        self.opts.timeout,
                    ));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| WalkError::transport("нет ответа от устройства")))
    }
}
