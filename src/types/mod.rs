mod amount;
mod errors;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Deserialize;

pub use amount::Amount;
pub use errors::AmountError;

/// Opaque account token. Never validated, only carried through to the report.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Self {
        AccountId(value.into())
    }
}

impl From<&str> for AccountId {
    fn from(value: &str) -> Self {
        AccountId::new(value)
    }
}

impl Display for AccountId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
