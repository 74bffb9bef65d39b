use std::sync::Arc;

use crate::config::ServiceConfig;

pub mod health;
pub mod snmp;

pub use health::health;
pub use snmp::{handle_walk, handle_walk_batch};

/// Общее состояние HTTP слоя
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}
