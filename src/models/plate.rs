use serde::{Deserialize, Serialize};

/// One ingredient entry on a plate.
///
/// A quantity of zero is accepted and simply contributes zero impact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateItem {
    pub ingredient_id: u32,
    pub quantity_g: u32,
}

/// A session's working set of selected ingredients.
///
/// Items keep insertion order and hold at most one entry per ingredient id;
/// re-adding an ingredient overwrites its quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plate {
    pub session_id: String,
    pub items: Vec<PlateItem>,
}

impl Plate {
    /// Create an empty plate for a session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            items: Vec::new(),
        }
    }

    /// Set the quantity for an ingredient, appending if it is not yet on
    /// the plate.
    pub fn set_item(&mut self, ingredient_id: u32, quantity_g: u32) {
        match self
            .items
            .iter_mut()
            .find(|item| item.ingredient_id == ingredient_id)
        {
            Some(item) => item.quantity_g = quantity_g,
            None => self.items.push(PlateItem {
                ingredient_id,
                quantity_g,
            }),
        }
    }

    /// Remove every entry with the given ingredient id.
    pub fn remove_item(&mut self, ingredient_id: u32) {
        self.items.retain(|item| item.ingredient_id != ingredient_id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_item_appends_then_overwrites() {
        let mut plate = Plate::new("s1");
        plate.set_item(1, 100);
        plate.set_item(2, 50);
        plate.set_item(1, 250);

        assert_eq!(plate.len(), 2);
        assert_eq!(plate.items[0].ingredient_id, 1);
        assert_eq!(plate.items[0].quantity_g, 250);
        assert_eq!(plate.items[1].ingredient_id, 2);
    }

    #[test]
    fn test_remove_item_missing_is_noop() {
        let mut plate = Plate::new("s1");
        plate.set_item(1, 100);

        plate.remove_item(99);
        assert_eq!(plate.len(), 1);

        plate.remove_item(1);
        assert!(plate.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut plate = Plate::new("s1");
        for id in [5, 3, 8, 1] {
            plate.set_item(id, 100);
        }
        let order: Vec<u32> = plate.items.iter().map(|i| i.ingredient_id).collect();
        assert_eq!(order, vec![5, 3, 8, 1]);
    }
}
