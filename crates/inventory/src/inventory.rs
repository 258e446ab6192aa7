use serde::{Deserialize, Serialize};
use tracing::debug;

use rentledger_core::{Entity, RentalError, RentalResult};

use crate::equipment::Equipment;

/// The rentable equipment collection.
///
/// Invariant: no two entries share a name. Entries are kept in insertion order
/// and are owned exclusively by the inventory once added; callers read them
/// back through [`Inventory::get`] and [`Inventory::iter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Equipment>", into = "Vec<Equipment>")]
pub struct Inventory {
    equipment: Vec<Equipment>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pre-populated inventory.
    ///
    /// Availability flags are kept exactly as given. Fails with
    /// [`RentalError::AlreadyExists`] if two entries share a name.
    pub fn with_equipment(entries: impl IntoIterator<Item = Equipment>) -> RentalResult<Self> {
        let mut inventory = Self::new();
        for entry in entries {
            if inventory.contains(entry.id()) {
                debug!(name = %entry.name, "duplicate equipment in seed");
                return Err(RentalError::AlreadyExists);
            }
            inventory.equipment.push(entry);
        }
        Ok(inventory)
    }

    /// Add new equipment; it is always stored as available.
    pub fn add_equipment(&mut self, mut equipment: Equipment) -> RentalResult<()> {
        if self.contains(equipment.id()) {
            debug!(name = %equipment.name, "equipment already exists");
            return Err(RentalError::AlreadyExists);
        }

        equipment.available = true;
        debug!(name = %equipment.name, rental_cost = equipment.rental_cost, "equipment added");
        self.equipment.push(equipment);
        Ok(())
    }

    /// Remove the equipment called `name`.
    pub fn remove_equipment(&mut self, name: &str) -> RentalResult<()> {
        let before = self.equipment.len();
        self.equipment.retain(|e| !e.is(name));

        if self.equipment.len() == before {
            debug!(name, "cannot remove unknown equipment");
            return Err(RentalError::NotExists);
        }
        debug!(name, "equipment removed");
        Ok(())
    }

    /// Overwrite the per-day cost of the equipment called `name`.
    pub fn update_rental_cost(&mut self, name: &str, new_cost: i64) -> RentalResult<()> {
        let mut matched = false;
        for equipment in self.equipment.iter_mut().filter(|e| e.is(name)) {
            equipment.rental_cost = new_cost;
            matched = true;
        }

        if !matched {
            debug!(name, "cannot update cost of unknown equipment");
            return Err(RentalError::NotExists);
        }
        debug!(name, rental_cost = new_cost, "rental cost updated");
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.equipment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.is(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.equipment.iter()
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }
}

impl TryFrom<Vec<Equipment>> for Inventory {
    type Error = RentalError;

    fn try_from(entries: Vec<Equipment>) -> Result<Self, Self::Error> {
        Self::with_equipment(entries)
    }
}

impl From<Inventory> for Vec<Equipment> {
    fn from(inventory: Inventory) -> Self {
        inventory.equipment
    }
}
