//! In-crate fakes for the collaborator ports.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::Utc;

use fulfilment_core::eq_ignore_case;

use crate::ports::{DirectoryError, LocationResolver, StoreError, WarehouseStore};
use crate::warehouse::{Location, Warehouse};

/// Vec-backed store that records write calls and can be told to fail creates.
#[derive(Debug, Default)]
pub struct VecStore {
    records: Mutex<Vec<Warehouse>>,
    creates: AtomicUsize,
    updates: AtomicUsize,
    fail_creates: AtomicBool,
}

impl VecStore {
    pub fn snapshot(&self) -> Vec<Warehouse> {
        self.records.lock().unwrap().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn fail_creates(&self) {
        self.fail_creates.store(true, Ordering::SeqCst);
    }
}

impl WarehouseStore for VecStore {
    fn get_all(&self) -> Result<Vec<Warehouse>, StoreError> {
        Ok(self.snapshot())
    }

    fn create(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("create refused".into()));
        }
        self.records.lock().unwrap().push(warehouse);
        Ok(())
    }

    fn update(&self, warehouse: Warehouse) -> Result<(), StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|w| w.id == warehouse.id) {
            Some(slot) => *slot = warehouse,
            None => records.push(warehouse),
        }
        Ok(())
    }

    fn remove(&self, warehouse: &Warehouse) -> Result<(), StoreError> {
        self.records.lock().unwrap().retain(|w| w.id != warehouse.id);
        Ok(())
    }
}

/// Build a store from `(code, location, capacity, stock, archived)` rows.
pub fn seeded(rows: Vec<(&str, &str, i64, i64, bool)>) -> VecStore {
    let store = VecStore::default();
    let now = Utc::now();
    {
        let mut records = store.records.lock().unwrap();
        for (code, location, capacity, stock, archived) in rows {
            let w = Warehouse::new_active(code.into(), location.into(), capacity, stock, now);
            records.push(if archived { w.archived(now) } else { w });
        }
    }
    store
}

#[derive(Debug, Default)]
pub struct TableDirectory {
    locations: Vec<Location>,
}

impl TableDirectory {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }
}

impl LocationResolver for TableDirectory {
    fn resolve(&self, identifier: &str) -> Result<Option<Location>, DirectoryError> {
        Ok(self
            .locations
            .iter()
            .find(|l| eq_ignore_case(l.identification.as_str(), identifier))
            .cloned())
    }
}
