use super::PlantStore;
use crate::error::{PlantbookError, Result};
use crate::model::{PlantFields, PlantId, PlantRecord};
use chrono::Utc;

/// In-memory plant catalog.
/// Does NOT persist data.
#[derive(Debug)]
pub struct InMemoryStore {
    plants: Vec<PlantRecord>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            plants: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    fn allocate_id(&mut self) -> PlantId {
        let id = PlantId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl PlantStore for InMemoryStore {
    fn create(&mut self, fields: PlantFields) -> Result<PlantRecord> {
        let id = self.allocate_id();
        let record = PlantRecord::new(id, fields, Utc::now());
        self.plants.push(record.clone());
        Ok(record)
    }

    fn update(&mut self, id: PlantId, fields: PlantFields) -> Result<PlantRecord> {
        let record = self
            .plants
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(PlantbookError::PlantNotFound(id))?;
        record.apply(fields);
        Ok(record.clone())
    }

    fn list(&self) -> Result<Vec<PlantRecord>> {
        Ok(self.plants.clone())
    }

    fn find(&self, id: PlantId) -> Result<Option<PlantRecord>> {
        Ok(self.plants.iter().find(|p| p.id == id).cloned())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_plants(mut self, count: usize) -> Self {
            for i in 0..count {
                let fields = PlantFields::new(format!("Test Plant {}", i + 1))
                    .with_notes(format!("Notes for plant {}", i + 1));
                self.store.create(fields).unwrap();
            }
            self
        }

        pub fn with_plant(mut self, name: &str) -> Self {
            self.store.create(PlantFields::new(name)).unwrap();
            self
        }

        pub fn with_photographed_plant(mut self, name: &str, photo: &str) -> Self {
            let fields = PlantFields::new(name).with_photo(photo);
            self.store.create(fields).unwrap();
            self
        }
    }
}
