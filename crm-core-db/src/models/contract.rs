use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::models::identifiable::Identifiable;

/// Label used when a contract has no usable title.
pub const UNTITLED_CONTRACT_LABEL: &str = "Sans titre";

/// Status given to contracts created without one.
pub const DEFAULT_CONTRACT_STATUS: &str = "actif";

/// # Documentation
/// A contract signed with a client.
/// - `start_date` is the chronological signal used to rank contracts by recency.
/// - `title` may be absent; see [`ContractModel::display_title`].
/// - Deleting the owning client deletes its contracts.
/// - Text capacities are in bytes, 4 per character of the column limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractModel {
    pub id: i64,

    /// VARCHAR(255)
    pub title: Option<HeaplessString<1020>>,

    /// Contract value, stored as NUMERIC(12, 2)
    pub amount: Decimal,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    /// VARCHAR(50)
    pub status: HeaplessString<200>,

    /// Reference to the owning client
    pub client_id: i64,
}

impl ContractModel {
    /// Title for display, or [`UNTITLED_CONTRACT_LABEL`] when the column is NULL.
    /// A stored title is returned as is.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED_CONTRACT_LABEL)
    }

    /// Start of the contract as an instant (midnight UTC of `start_date`).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.start_date.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

impl Identifiable for ContractModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
