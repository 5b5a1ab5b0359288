use crate::prelude::{DeckError, DeckResult};

/// One-way disclosure flags, one per testimonial slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Marks a slot as revealed. `Ok(true)` on the first reveal, `Ok(false)`
    /// when the slot was already revealed.
    pub fn reveal(&mut self, index: usize) -> DeckResult<bool> {
        let len = self.revealed.len();
        let slot = self
            .revealed
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })?;
        if *slot {
            return Ok(false);
        }
        *slot = true;
        Ok(true)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|flag| **flag).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|flag| *flag)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}
