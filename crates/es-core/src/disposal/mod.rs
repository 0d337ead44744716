mod locality;
mod rule;
mod table;

pub use locality::{Locality, ParseLocalityError};
pub use rule::{DisposalInstruction, DisposalRule, DisposalType, ParseDisposalTypeError};
pub use table::{DisposalRuleTable, RuleTableError, FALLBACK_DETAIL};
