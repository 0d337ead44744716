use std::sync::Arc;

use es_core::DisposalRuleTable;

use crate::models::LocalityOption;

/// Localities with a configured rule list, in a stable order.
pub struct ListLocalities {
    rules: Arc<DisposalRuleTable>,
}

impl ListLocalities {
    pub fn new(rules: Arc<DisposalRuleTable>) -> Self {
        Self { rules }
    }

    pub fn execute(&self) -> Vec<LocalityOption> {
        self.rules
            .localities()
            .map(|locality| LocalityOption::new(locality, self.rules.rules_for(locality).len()))
            .collect()
    }
}
