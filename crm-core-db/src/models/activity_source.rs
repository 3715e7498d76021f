use chrono::{DateTime, Utc};
use crm_core_api::domain::{ActivityRecord, ActivityType};

use super::client::ClientModel;
use super::contract::ContractModel;

/// A raw row feeding the recent activity feed, tagged by the table it came from.
#[derive(Debug, Clone)]
pub enum ActivitySource {
    Client(ClientModel),
    Contract(ContractModel),
}

impl ActivitySource {
    pub fn activity_type(&self) -> ActivityType {
        match self {
            ActivitySource::Client(_) => ActivityType::Client,
            ActivitySource::Contract(_) => ActivityType::Contract,
        }
    }

    /// Normalize into the common feed shape.
    ///
    /// Clients carry no creation time, so they are stamped with `now`.
    /// Contracts keep their `start_date`.
    pub fn into_record(self, now: DateTime<Utc>) -> ActivityRecord {
        match self {
            ActivitySource::Client(client) => ActivityRecord {
                activity_type: ActivityType::Client,
                description: format!("Nouveau client : {}", client.name),
                timestamp: now,
                source_id: client.id,
            },
            ActivitySource::Contract(contract) => ActivityRecord {
                activity_type: ActivityType::Contract,
                description: format!("Contrat : {}", contract.display_title()),
                timestamp: contract.started_at(),
                source_id: contract.id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use heapless::String as HeaplessString;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_client_record_is_stamped_with_now() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let client = ClientModel {
            id: 7,
            name: HeaplessString::from_str("Acme").unwrap(),
            email: None,
            phone: None,
        };

        let source = ActivitySource::Client(client);
        assert_eq!(source.activity_type(), ActivityType::Client);

        let record = source.into_record(now);
        assert_eq!(record.activity_type, ActivityType::Client);
        assert_eq!(record.description, "Nouveau client : Acme");
        assert_eq!(record.timestamp, now);
        assert_eq!(record.source_id, 7);
    }

    #[test]
    fn test_contract_record_keeps_start_date() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let contract = ContractModel {
            id: 3,
            title: None,
            amount: Decimal::new(99, 0),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            status: HeaplessString::from_str("actif").unwrap(),
            client_id: 7,
        };

        let record = ActivitySource::Contract(contract).into_record(now);
        assert_eq!(record.activity_type, ActivityType::Contract);
        assert_eq!(record.description, "Contrat : Sans titre");
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(record.source_id, 3);
    }
}
