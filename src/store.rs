// 🗄️ Receipt Store - Process-lifetime storage
// Nothing survives a restart; receipts are never updated or removed

use crate::receipt::Receipt;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// Storage owned by the surrounding service
pub trait ReceiptStore: Send + Sync {
    /// Store a receipt and hand back its id
    fn append(&self, receipt: Receipt) -> Uuid;

    fn find_by_id(&self, id: &Uuid) -> Option<Receipt>;

    fn count(&self) -> usize;
}

/// Shared in-memory list, insertion order preserved.
/// Cloning shares the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<Vec<Receipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn append(&self, receipt: Receipt) -> Uuid {
        let id = receipt.id;
        let mut receipts = self.receipts.write().unwrap_or_else(PoisonError::into_inner);
        receipts.push(receipt);
        id
    }

    fn find_by_id(&self, id: &Uuid) -> Option<Receipt> {
        let receipts = self.receipts.read().unwrap_or_else(PoisonError::into_inner);
        receipts.iter().find(|r| &r.id == id).cloned()
    }

    fn count(&self) -> usize {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Cents;
    use crate::validation::{Item, ValidatedReceipt};
    use chrono::NaiveDate;
    use std::thread;

    fn create_test_receipt() -> Receipt {
        let validated = ValidatedReceipt {
            retailer: "Target".to_string(),
            purchased_at: NaiveDate::from_ymd_opt(2022, 1, 1)
                .unwrap()
                .and_hms_opt(13, 1, 0)
                .unwrap(),
            items: vec![Item {
                short_description: "Pepsi 12PK".to_string(),
                price: Cents(125),
            }],
            total: Cents(125),
        };

        Receipt::new(validated, Uuid::new_v4())
    }

    #[test]
    fn test_append_and_find() {
        let store = InMemoryReceiptStore::new();
        let receipt = create_test_receipt();

        let id = store.append(receipt.clone());

        assert_eq!(id, receipt.id);
        assert_eq!(store.find_by_id(&id), Some(receipt));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_find_unknown_id() {
        let store = InMemoryReceiptStore::new();
        store.append(create_test_receipt());

        assert_eq!(store.find_by_id(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_clones_share_storage() {
        let store = InMemoryReceiptStore::new();
        let handle = store.clone();

        let id = handle.append(create_test_receipt());

        assert!(store.find_by_id(&id).is_some());
    }

    #[test]
    fn test_concurrent_appends() {
        let store = InMemoryReceiptStore::new();

        let workers: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..25)
                        .map(|_| store.append(create_test_receipt()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<Uuid> = workers
            .into_iter()
            .flat_map(|w| w.join().unwrap())
            .collect();

        assert_eq!(store.count(), 200);
        assert!(ids.iter().all(|id| store.find_by_id(id).is_some()));
    }
}
