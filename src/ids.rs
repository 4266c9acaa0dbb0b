use crate::error::{MaterialError, Result};
use std::collections::BTreeSet;

/// Hands out unique material ids.
///
/// Auto-assigned ids come from a monotonically increasing counter that skips
/// anything already reserved, so ids supplied by the caller and ids handed
/// out by [`IdRegistry::allocate`] never collide while both are live.
/// A registry is confined to one model build; share it by `&mut`.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    next_id: u32,
    used_ids: BTreeSet<u32>,
}

impl Default for IdRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl IdRegistry {
    pub fn new() -> Self {
        IdRegistry {
            next_id: 1,
            used_ids: BTreeSet::new(),
        }
    }

    /// Allocate the next free id.
    pub fn allocate(&mut self) -> u32 {
        while self.used_ids.contains(&self.next_id) {
            self.next_id += 1;
        }
        let id = self.next_id;
        self.used_ids.insert(id);
        self.next_id += 1;
        log::debug!("allocated material id {}", id);
        id
    }

    /// Claim a caller-supplied id.
    pub fn reserve(&mut self, id: u32) -> Result<()> {
        if id == 0 {
            return Err(MaterialError::InvalidId);
        }
        if !self.used_ids.insert(id) {
            return Err(MaterialError::DuplicateId(id));
        }
        Ok(())
    }

    /// Return an id to the pool. Releasing an unknown id is a no-op.
    pub fn release(&mut self, id: u32) {
        self.used_ids.remove(&id);
    }

    pub fn is_used(&self, id: u32) -> bool {
        self.used_ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.used_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_is_sequential() {
        let mut reg = IdRegistry::new();
        assert_eq!(reg.allocate(), 1);
        assert_eq!(reg.allocate(), 2);
        assert_eq!(reg.allocate(), 3);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_allocate_skips_reserved() {
        let mut reg = IdRegistry::new();
        reg.reserve(2).unwrap();
        reg.reserve(3).unwrap();
        assert_eq!(reg.allocate(), 1);
        assert_eq!(reg.allocate(), 4);
    }

    #[test]
    fn test_reserve_duplicate_fails() {
        let mut reg = IdRegistry::new();
        let id = reg.allocate();
        assert!(matches!(reg.reserve(id), Err(MaterialError::DuplicateId(1))));
        assert!(matches!(reg.reserve(0), Err(MaterialError::InvalidId)));
    }

    #[test]
    fn test_release_frees_id_for_reserve() {
        let mut reg = IdRegistry::new();
        let id = reg.allocate();
        reg.release(id);
        assert!(!reg.is_used(id));
        reg.reserve(id).unwrap();
        assert!(reg.is_used(id));
        // The counter itself never goes backwards
        assert_eq!(reg.allocate(), 2);
    }
}
