//! Scratch buffer with fallible allocation.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// A zero-initialized byte buffer whose allocation failure is reported as an
/// [`Error`] instead of aborting the process.
#[derive(Debug, Default)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Allocates a zeroed buffer of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the memory cannot be reserved.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailed { capacity })?;
        data.resize(capacity, 0);
        Ok(Self { data })
    }

    /// Returns the buffer's size in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Buffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
