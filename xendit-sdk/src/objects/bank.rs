use serde::{Deserialize, Serialize};

/// A bank the account can send disbursements to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailableBank {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub can_disburse: bool,
    #[serde(default)]
    pub can_name_validate: bool,
}
