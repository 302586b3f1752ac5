//! Split instruction/data interconnect.
//!
//! Routes instruction fetches to one memory collaborator and loads/stores to
//! another, giving the core a Harvard-style view of two independent memories.

use crate::common::Trap;
use crate::core::pipeline::signals::MemWidth;
use crate::soc::traits::{AlignmentPolicy, DataMemory, InstructionMemory};

/// Bus pairing an instruction memory with a data memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bus<I, D> {
    /// Serves `fetch`.
    pub imem: I,
    /// Serves `load` and `store`.
    pub dmem: D,
}

impl<I, D> Bus<I, D> {
    /// Creates a bus over the two collaborators.
    pub const fn new(imem: I, dmem: D) -> Self {
        Self { imem, dmem }
    }
}

impl<I: InstructionMemory, D> InstructionMemory for Bus<I, D> {
    fn fetch(&mut self, pc: u32) -> Result<u32, Trap> {
        self.imem.fetch(pc)
    }
}

impl<I, D: DataMemory> DataMemory for Bus<I, D> {
    fn alignment(&self) -> AlignmentPolicy {
        self.dmem.alignment()
    }

    fn load(&mut self, addr: u32, width: MemWidth) -> Result<u32, Trap> {
        self.dmem.load(addr, width)
    }

    fn store(&mut self, addr: u32, width: MemWidth, value: u32) -> Result<(), Trap> {
        self.dmem.store(addr, width, value)
    }
}
