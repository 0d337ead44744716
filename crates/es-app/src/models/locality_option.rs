use serde::Serialize;

use es_core::Locality;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalityOption {
    pub id: &'static str,
    pub label: &'static str,
    pub rule_count: usize,
}

impl LocalityOption {
    pub fn new(locality: Locality, rule_count: usize) -> Self {
        Self {
            id: locality.as_str(),
            label: locality.label(),
            rule_count,
        }
    }
}
