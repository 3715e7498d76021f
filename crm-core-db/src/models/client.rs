use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A customer of the business.
/// - The table has no creation timestamp; the `id` sequence is the only recency signal.
/// - `id` is assigned by the database on insert (0 until created).
/// - Text capacities are in bytes, sized for the column's character limit at up to
///   4 UTF-8 bytes per character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientModel {
    pub id: i64,

    /// VARCHAR(100)
    pub name: HeaplessString<400>,

    /// VARCHAR(255)
    pub email: Option<HeaplessString<1020>>,

    /// VARCHAR(50)
    pub phone: Option<HeaplessString<200>>,
}

impl Identifiable for ClientModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_name_holds_full_column_width_of_accented_chars() {
        let name = "é".repeat(100);
        let client = ClientModel {
            id: 1,
            name: HeaplessString::from_str(&name).unwrap(),
            email: None,
            phone: None,
        };
        assert_eq!(client.name.chars().count(), 100);

        let widest = "😀".repeat(100);
        assert!(HeaplessString::<400>::from_str(&widest).is_ok());
    }
}
