use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::catalog::IngredientCatalog;
use crate::error::{PlateError, Result};
use crate::models::Plate;

/// Owns the session → plate mapping.
///
/// A single mutex guards the whole map: every operation is a short in-memory
/// mutation and the lock is never held across an await point. Plates live for
/// the process lifetime; there is no eviction.
pub struct PlateStore {
    plates: Mutex<HashMap<String, Plate>>,
}

impl PlateStore {
    pub fn new() -> Self {
        Self {
            plates: Mutex::new(HashMap::new()),
        }
    }

    /// Create a new session with an empty plate and return it.
    pub fn start_session(&self) -> Plate {
        let session_id = Uuid::new_v4().simple().to_string();
        let plate = Plate::new(session_id.clone());
        self.plates
            .lock()
            .expect("plate store lock poisoned")
            .insert(session_id, plate.clone());
        plate
    }

    /// Get the plate for a session, if the session exists.
    pub fn get(&self, session_id: &str) -> Option<Plate> {
        self.plates
            .lock()
            .expect("plate store lock poisoned")
            .get(session_id)
            .cloned()
    }

    /// Set an ingredient's quantity on a session's plate.
    ///
    /// The ingredient must exist in the catalog. An unknown session gets a
    /// fresh plate rather than an error; re-adding an ingredient overwrites
    /// its quantity.
    pub fn add_item(
        &self,
        catalog: &IngredientCatalog,
        session_id: &str,
        ingredient_id: u32,
        quantity_g: u32,
    ) -> Result<Plate> {
        if !catalog.contains(ingredient_id) {
            return Err(PlateError::InvalidIngredient(ingredient_id));
        }

        let mut plates = self.plates.lock().expect("plate store lock poisoned");
        let plate = plates
            .entry(session_id.to_string())
            .or_insert_with(|| Plate::new(session_id));
        plate.set_item(ingredient_id, quantity_g);
        Ok(plate.clone())
    }

    /// Remove an ingredient from a session's plate.
    ///
    /// Never fails: a missing item is a no-op and an unknown session gets a
    /// fresh empty plate.
    pub fn remove_item(&self, session_id: &str, ingredient_id: u32) -> Plate {
        let mut plates = self.plates.lock().expect("plate store lock poisoned");
        let plate = plates
            .entry(session_id.to_string())
            .or_insert_with(|| Plate::new(session_id));
        plate.remove_item(ingredient_id);
        plate.clone()
    }

    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.plates.lock().expect("plate store lock poisoned").len()
    }
}

impl Default for PlateStore {
    fn default() -> Self {
        Self::new()
    }
}
