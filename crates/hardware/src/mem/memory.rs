//! Flat word-addressed memory.

use crate::common::error::PipelineFault;

/// Fixed-capacity store of 32-bit words, addressed by word index.
///
/// Created once at simulator start, pre-loaded with the assembled program, and
/// mutated only through a [`MemoryAccessUnit`](crate::mem::MemoryAccessUnit).
#[derive(Debug)]
pub struct Memory {
    words: Vec<u32>,
}

impl Memory {
    /// Creates a zeroed memory of `words` 32-bit words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Creates a memory holding an assembled program image.
    ///
    /// The image's length is the memory's capacity; the loader has already
    /// zero-filled it past the program.
    pub fn from_image(image: Vec<u32>) -> Self {
        Self { words: image }
    }

    /// Capacity in words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the memory holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads the word at `addr`.
    ///
    /// # Errors
    ///
    /// `AddressOutOfRange` when `addr` is past the last word.
    pub fn word(&self, addr: u32) -> Result<u32, PipelineFault> {
        self.words
            .get(addr as usize)
            .copied()
            .ok_or(PipelineFault::AddressOutOfRange {
                addr,
                words: self.words.len(),
            })
    }

    /// Overwrites the word at `addr`.
    ///
    /// # Errors
    ///
    /// `AddressOutOfRange` when `addr` is past the last word.
    pub fn set_word(&mut self, addr: u32, value: u32) -> Result<(), PipelineFault> {
        let words = self.words.len();
        match self.words.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PipelineFault::AddressOutOfRange { addr, words }),
        }
    }
}
