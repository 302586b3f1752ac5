//! Sparse reference memory.
//!
//! This module implements a word-granular memory backed by a hash map. It provides:
//! 1. **Storage:** Only words that were loaded or written exist; everything else is unmapped.
//! 2. **Faults:** Reads touching an unmapped word fail with `OutOfBounds`.
//! 3. **Stores:** Writes create missing words zero-filled, then merge the written bytes.
//!
//! `Memory` implements both collaborator traits so a single instance can
//! serve instruction fetch and data access.

use std::collections::HashMap;

use crate::common::Trap;
use crate::config::MemoryConfig;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::{AlignmentPolicy, DataMemory, InstructionMemory};

/// Mask clearing the byte offset within a word.
const WORD_MASK: u32 = !0b11;

/// Sparse, little-endian, word-keyed memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Memory {
    words: HashMap<u32, u32>,
    alignment: AlignmentPolicy,
}

impl Memory {
    /// Creates an empty memory with the given alignment policy.
    pub fn new(alignment: AlignmentPolicy) -> Self {
        Self {
            words: HashMap::new(),
            alignment,
        }
    }

    /// Creates an empty memory configured from `config`.
    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.alignment)
    }

    /// Creates a naturally aligned memory holding `words` from `base` upward.
    ///
    /// # Examples
    ///
    /// ```
    /// use rktcpu_core::Memory;
    /// use rktcpu_core::soc::traits::InstructionMemory;
    ///
    /// let mut mem = Memory::from_words(0x100, &[0x0000_0013]);
    /// assert_eq!(mem.fetch(0x100), Ok(0x0000_0013));
    /// assert!(mem.fetch(0x104).is_err());
    /// ```
    pub fn from_words(base: u32, words: &[u32]) -> Self {
        let mut mem = Self::default();
        mem.load_words(base, words);
        mem
    }

    /// Writes consecutive words starting at `base` (rounded down to a word boundary).
    pub fn load_words(&mut self, base: u32, words: &[u32]) {
        let mut addr = base & WORD_MASK;
        for &word in words {
            let _ = self.words.insert(addr, word);
            addr = addr.wrapping_add(4);
        }
    }

    /// Returns the stored word containing `addr`, if mapped.
    pub fn word(&self, addr: u32) -> Option<u32> {
        self.words.get(&(addr & WORD_MASK)).copied()
    }

    /// Number of mapped words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is mapped.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn read_byte(&self, addr: u32) -> Result<u8, Trap> {
        let word = self.word(addr).ok_or(Trap::OutOfBounds(addr))?;
        Ok((word >> ((addr & 0b11) * 8)) as u8)
    }

    fn write_byte(&mut self, addr: u32, byte: u8) {
        let shift = (addr & 0b11) * 8;
        let word = self.words.entry(addr & WORD_MASK).or_insert(0);
        *word = (*word & !(0xFF << shift)) | (u32::from(byte) << shift);
    }
}

impl InstructionMemory for Memory {
    fn fetch(&mut self, pc: u32) -> Result<u32, Trap> {
        if pc & 0b11 != 0 {
            return Err(Trap::MisalignedAccess(pc));
        }
        self.word(pc).ok_or(Trap::OutOfBounds(pc))
    }
}

impl DataMemory for Memory {
    fn alignment(&self) -> AlignmentPolicy {
        self.alignment
    }

    fn load(&mut self, addr: u32, width: MemWidth) -> Result<u32, Trap> {
        let mut value = 0;
        for i in 0..width.bytes() {
            let byte = self.read_byte(addr.wrapping_add(i))?;
            value |= u32::from(byte) << (i * 8);
        }
        Ok(value)
    }

    fn store(&mut self, addr: u32, width: MemWidth, value: u32) -> Result<(), Trap> {
        for i in 0..width.bytes() {
            self.write_byte(addr.wrapping_add(i), (value >> (i * 8)) as u8);
        }
        Ok(())
    }
}
