//! Synthetic program generation
//!
//! A program is a fixed-length sequence of decoded instructions used purely
//! as a CPU-workload stand-in. Instructions are never executed; only the
//! cost of producing them matters, so programs are discarded immediately
//! after creation.

use crate::rng::Xorshift64;

/// Low 48 bits of a raw value, holding the operand.
const OPERAND_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// One decoded instruction.
///
/// Layout of the raw 64-bit value: low 8 bits are the opcode, the next 48
/// bits are the operand, the top 8 bits are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub operand: u64,
}

impl Instruction {
    /// Decode a raw 64-bit value into an instruction.
    #[inline(always)]
    pub fn decode(raw: u64) -> Self {
        Self {
            opcode: (raw & 0xFF) as u8,
            operand: (raw >> 8) & OPERAND_MASK,
        }
    }
}

/// An ordered, fixed-length sequence of instructions.
pub type Program = Vec<Instruction>;

/// Program generator session owning its generator state.
///
/// The state is threaded through every generation step and is never shared:
/// each worker constructs exactly one session and drives it to completion.
pub struct ProgramGenerator {
    rng: Xorshift64,
    program_length: usize,
}

impl ProgramGenerator {
    /// Create a session seeded with the given initial state.
    pub fn new(seed: u64, program_length: usize) -> Self {
        Self {
            rng: Xorshift64::new(seed),
            program_length,
        }
    }

    /// Materialize the next program.
    ///
    /// Invokes the generator exactly `program_length` times and collects
    /// each decoded instruction in order.
    pub fn next_program(&mut self) -> Program {
        let mut code = Vec::with_capacity(self.program_length);
        for _ in 0..self.program_length {
            code.push(Instruction::decode(self.rng.next_u64()));
        }
        code
    }

    /// Length of every program this session produces.
    pub fn program_length(&self) -> usize {
        self.program_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Worked example from the layout doc: raw 0x0123456789ABCDEF decodes
    /// to opcode 0xEF and operand 0x0123456789AB.
    #[test]
    fn test_decode_worked_example() {
        let instr = Instruction::decode(0x0123_4567_89AB_CDEF);

        assert_eq!(instr.opcode, 0xEF);
        assert_eq!(instr.operand, 0x0123_4567_89AB);
    }

    /// The top 8 bits of the raw value never reach the operand.
    #[test]
    fn test_decode_discards_high_byte() {
        let instr = Instruction::decode(0xFF00_0000_0000_0001);

        assert_eq!(instr.opcode, 0x01);
        assert_eq!(instr.operand, 0);
    }

    /// Every program has exactly the configured length, whatever the seed.
    #[test]
    fn test_program_length_invariant() {
        for seed in [0u64, 1, 42, u64::MAX] {
            let mut generator = ProgramGenerator::new(seed, 512);
            assert_eq!(generator.next_program().len(), 512);
            assert_eq!(generator.next_program().len(), 512);
        }

        let mut small = ProgramGenerator::new(7, 4);
        assert_eq!(small.next_program().len(), 4);
    }

    /// Two sessions with the same seed produce identical programs.
    #[test]
    fn test_deterministic_generation() {
        let mut a = ProgramGenerator::new(99, 32);
        let mut b = ProgramGenerator::new(99, 32);

        for _ in 0..4 {
            assert_eq!(a.next_program(), b.next_program());
        }
    }

    /// Consecutive programs from one session differ: the state advances
    /// across program boundaries instead of restarting.
    #[test]
    fn test_state_threads_across_programs() {
        let mut generator = ProgramGenerator::new(1234, 16);

        let first = generator.next_program();
        let second = generator.next_program();

        assert_ne!(first, second);
    }
}
