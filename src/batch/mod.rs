use std::sync::Arc;

use indexmap::IndexMap;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::error::WalkError;
use crate::models::{WalkOutcome, WalkRequest};
use crate::snmp::{UdpSession, oid};
use crate::walker::TreeWalk;

/// Выполняет один обход; любая ошибка упаковывается в итог,
/// наружу ничего не пробрасывается
pub async fn run_single(request: WalkRequest, config: &ServiceConfig) -> WalkOutcome {
    match walk_device(&request, config).await {
        Ok(results) => {
            debug!(ip = %request.ip, oid = %request.oid, count = results.len(), "обход завершён");
            WalkOutcome::ok(results)
        }
        Err(e) => {
            warn!(ip = %request.ip, oid = %request.oid, error = %e, "обход завершился ошибкой");
            WalkOutcome::from_error(&e)
        }
    }
}

async fn walk_device(
    request: &WalkRequest,
    config: &ServiceConfig,
) -> Result<IndexMap<String, String>, WalkError> {
    let root = oid::parse_oid(&request.oid)?;
    let target = format!("{}:{}", request.ip, request.port);

    // Сессия создаётся на каждый обход заново: свой сокет, свой курсор
    let session = UdpSession::connect(
        &target,
        request.community.as_bytes(),
        config.session_options(),
    )
    .await?;

    TreeWalk::new(session, root, request.max_items).collect().await
}

/// Параллельный обход пакета устройств: одна задача на устройство,
/// сбор результатов строго в порядке входного списка. Ошибка одного
/// устройства не прерывает остальные.
pub async fn run_batch(
    requests: Vec<WalkRequest>,
    config: Arc<ServiceConfig>,
) -> Result<Vec<WalkOutcome>, WalkError> {
    if requests.is_empty() {
        return Err(WalkError::validation("список запросов пустой"));
    }

    let handles: Vec<JoinHandle<WalkOutcome>> = requests
        .into_iter()
        .map(|request| {
            let config = Arc::clone(&config);
            tokio::spawn(async move { run_single(request, &config).await })
        })
        .collect();

    // Порядок выдачи определяется порядком входных запросов,
    // а не порядком завершения задач
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(match handle.await {
            Ok(outcome) => outcome,
            Err(_) => {
                WalkOutcome::from_error(&WalkError::unexpected("задача обхода завершилась аварийно"))
            }
        });
    }
    Ok(outcomes)
}
