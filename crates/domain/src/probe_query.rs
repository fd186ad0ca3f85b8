use super::{ProbeConfig, RecordType};
use std::sync::Arc;

/// The question sent on every probe.
///
/// Only `id` changes between probes, and only when the run regenerates ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub recursion_desired: bool,
    pub id: u16,
}

impl ProbeQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            name: name.into(),
            record_type,
            recursion_desired: true,
            id: 0,
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        let mut query = Self::new(config.domain.clone(), config.record_type);
        query.recursion_desired = config.recursion.recursion_desired();
        query
    }

    pub fn set_id(&mut self, id: u16) {
        self.id = id;
    }
}
