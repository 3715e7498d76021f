use crm_core_db::models::client::ClientModel;
use heapless::String as HeaplessString;

pub fn create_test_client(name: &str) -> ClientModel {
    ClientModel {
        id: 0,
        name: HeaplessString::try_from(name).unwrap(),
        email: None,
        phone: None,
    }
}

pub fn create_test_client_with_contact(name: &str, email: &str, phone: &str) -> ClientModel {
    ClientModel {
        id: 0,
        name: HeaplessString::try_from(name).unwrap(),
        email: Some(HeaplessString::try_from(email).unwrap()),
        phone: Some(HeaplessString::try_from(phone).unwrap()),
    }
}
