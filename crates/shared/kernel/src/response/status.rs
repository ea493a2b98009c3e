use serde::{Deserialize, Serialize};
use squadup_structs::FieldType;
use strum_macros::{AsRefStr, Display, EnumString};

/// Outcome of a request as reported in the response envelope.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResultStatus {
    #[default]
    Success,
    Fail,
}

impl ResultStatus {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl FieldType for ResultStatus {
    fn is_zero(&self) -> bool {
        self.is_success()
    }
}
