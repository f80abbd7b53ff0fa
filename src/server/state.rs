use crate::cooccurrence::CoOccurrenceIndex;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The index is immutable once built, so handlers share it without a lock.
pub type GuardedIndex = Arc<CoOccurrenceIndex>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub index: GuardedIndex,
    pub hash: String,
}

impl ServerState {
    pub fn new(config: ServerConfig, index: GuardedIndex) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            index,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}
