use chrono::NaiveDate;
use crm_core_db::models::contract::{ContractModel, DEFAULT_CONTRACT_STATUS};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;

pub fn create_test_contract(client_id: i64, title: Option<&str>, start_date: NaiveDate) -> ContractModel {
    ContractModel {
        id: 0,
        title: title.map(|t| HeaplessString::try_from(t).unwrap()),
        amount: Decimal::new(50_000, 2),
        start_date,
        end_date: None,
        status: HeaplessString::try_from(DEFAULT_CONTRACT_STATUS).unwrap(),
        client_id,
    }
}
