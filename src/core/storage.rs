use std::collections::HashMap;
use crate::core::Body;

/// Registry of bodies keyed by id, iterated in registration order.
///
/// Bodies live in a dense vector so every pass over the registry visits them in
/// the same order; a side table maps ids to vector slots.
#[derive(Default)]
pub struct BodyStorage {
    items: Vec<Box<dyn Body>>,
    index: HashMap<String, usize>,
}

impl BodyStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Inserts a body under its own id.
    ///
    /// If the id is already present the old body is replaced in place (it keeps
    /// its slot in the iteration order) and returned.
    pub fn insert(&mut self, body: Box<dyn Body>) -> Option<Box<dyn Body>> {
        match self.index.get(body.id()) {
            Some(&slot) => Some(std::mem::replace(&mut self.items[slot], body)),
            None => {
                self.index.insert(body.id().to_owned(), self.items.len());
                self.items.push(body);
                None
            }
        }
    }

    /// Removes a body by id, preserving the order of the remaining bodies
    pub fn remove(&mut self, id: &str) -> Option<Box<dyn Body>> {
        let slot = self.index.remove(id)?;
        let body = self.items.remove(slot);

        for other in self.index.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }

        Some(body)
    }

    /// Gets a reference to a body by id
    pub fn get(&self, id: &str) -> Option<&dyn Body> {
        self.index.get(id).map(|&slot| self.items[slot].as_ref())
    }

    /// Gets a mutable reference to a body by id
    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Body + 'static)> {
        match self.index.get(id) {
            Some(&slot) => Some(self.items[slot].as_mut()),
            None => None,
        }
    }

    /// Gets a mutable body by its position in the iteration order
    pub fn get_index_mut(&mut self, slot: usize) -> Option<&mut (dyn Body + 'static)> {
        self.items.get_mut(slot).map(|body| body.as_mut())
    }

    /// Returns whether a body with this id is stored
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the number of bodies
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every body
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Returns the ids of all bodies in iteration order
    pub fn ids(&self) -> Vec<String> {
        self.items.iter().map(|body| body.id().to_owned()).collect()
    }

    /// Iterates over all bodies in order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Body> + '_ {
        self.items.iter().map(|body| body.as_ref())
    }

    /// Iterates mutably over all bodies in order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Body + 'static)> + '_ {
        self.items.iter_mut().map(|body| body.as_mut())
    }
}
