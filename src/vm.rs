//! The three-register, eight-instruction machine from the chronospatial computer.
//!
//! A program is a flat list of numbers read in (opcode, operand) pairs. There is
//! no halt instruction: the machine stops once the instruction pointer can no
//! longer fetch a whole pair.

use itertools::Itertools;
use strum::{Display, FromRepr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VmError {
    #[error("invalid opcode {opcode} at {ip}")]
    InvalidOpcode {opcode: u64, ip: usize},
    #[error("invalid combo operand {operand} at {ip}")]
    InvalidComboOperand {operand: u64, ip: usize},
    #[error("jump target {0} does not fit an instruction pointer")]
    InvalidJump(u64),
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),
    #[error("no seed makes the program print itself")]
    NoQuineSeed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {pub a: u64, pub b: u64, pub c: u64}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, FromRepr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Opcode {Adv, Bxl, Bst, Jnz, Bxc, Out, Bdv, Cdv}

impl Opcode {
    pub fn decode(opcode: u64) -> Option<Opcode> {
        u8::try_from(opcode).ok().and_then(Opcode::from_repr)
    }

    /// Whether the operand is read as a combo operand rather than a literal.
    pub fn takes_combo(self) -> bool {
        !matches!(self, Opcode::Bxl | Opcode::Jnz | Opcode::Bxc)
    }
}

/// `a >> by`, where shifting out every bit gives 0 instead of overflowing.
fn shr(a: u64, by: u64) -> u64 {
    u32::try_from(by).ok().and_then(|by| a.checked_shr(by)).unwrap_or(0)
}

#[derive(Clone, Debug)]
pub struct Machine<'p> {
    program: &'p [u64],
    registers: Registers,
    ip: usize,
    output: Vec<u64>,
    steps: u64,
    step_limit: Option<u64>,
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p [u64], registers: Registers) -> Self {
        Self {program, registers, ip: 0, output: vec![], steps: 0, step_limit: None}
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn registers(&self) -> Registers {self.registers}
    pub fn ip(&self) -> usize {self.ip}
    pub fn output(&self) -> &[u64] {&self.output}

    pub fn is_halted(&self) -> bool {
        self.ip + 1 >= self.program.len()
    }

    fn combo(&self, operand: u64) -> Result<u64, VmError> {
        match operand {
            0 ..= 3 => Ok(operand),
            4 => Ok(self.registers.a),
            5 => Ok(self.registers.b),
            6 => Ok(self.registers.c),
            _ => Err(VmError::InvalidComboOperand {operand, ip: self.ip}),
        }
    }

    /// Executes one instruction. Does nothing once halted.
    pub fn step(&mut self) -> Result<(), VmError> {
        if self.is_halted() {return Ok(())}
        if let Some(limit) = self.step_limit {
            if self.steps >= limit {return Err(VmError::StepLimitExceeded(limit))}
        }
        self.steps += 1;

        let (opcode, operand) = (self.program[self.ip], self.program[self.ip + 1]);
        let op = Opcode::decode(opcode).ok_or(VmError::InvalidOpcode {opcode, ip: self.ip})?;
        match op {
            Opcode::Adv => self.registers.a = shr(self.registers.a, self.combo(operand)?),
            Opcode::Bxl => self.registers.b ^= operand,
            Opcode::Bst => self.registers.b = self.combo(operand)? % 8,
            Opcode::Jnz => if self.registers.a != 0 {
                self.ip = usize::try_from(operand).map_err(|_| VmError::InvalidJump(operand))?;
                return Ok(());
            },
            Opcode::Bxc => self.registers.b ^= self.registers.c,
            Opcode::Out => {
                let value = self.combo(operand)? % 8;
                self.output.push(value);
            }
            Opcode::Bdv => self.registers.b = shr(self.registers.a, self.combo(operand)?),
            Opcode::Cdv => self.registers.c = shr(self.registers.a, self.combo(operand)?),
        }
        self.ip += 2;
        Ok(())
    }

    pub fn run(&mut self) -> Result<&[u64], VmError> {
        while !self.is_halted() {
            self.step()?;
        }
        Ok(&self.output)
    }

    pub fn into_output(self) -> Vec<u64> {
        self.output
    }
}

/// Runs `program` with A set to `seed` and B, C cleared.
pub fn run(program: &[u64], seed: u64) -> Result<Vec<u64>, VmError> {
    let mut machine = Machine::new(program, Registers {a: seed, ..Registers::default()});
    machine.run()?;
    Ok(machine.into_output())
}

/// Instruction budget for a single candidate during the seed search.
const SEARCH_STEP_LIMIT: u64 = 1 << 20;

/// Smallest seed for which the program prints its own source.
///
/// Each output digit only depends on the bits of A that are still left when it is
/// printed, so the last digit is determined by the top three bits of the seed, the
/// one before it by the top six, and so on. The seed is built up three bits at a
/// time from the end of the program; candidates are tried in ascending order and a
/// prefix without any extension is abandoned.
pub fn find_quine_seed(program: &[u64]) -> Result<u64, VmError> {
    fn extend(program: &[u64], prefix: u64, matched: usize) -> Result<Option<u64>, VmError> {
        if matched == program.len() {return Ok(Some(prefix))}
        let Some(base) = prefix.checked_mul(8) else {return Ok(None)};
        let suffix = &program[program.len() - matched - 1 ..];
        for candidate in base ..= base | 7 {
            let mut machine = Machine::new(program, Registers {a: candidate, ..Registers::default()})
                .with_step_limit(SEARCH_STEP_LIMIT);
            if machine.run()? == suffix {
                if let Some(seed) = extend(program, candidate, matched + 1)? {return Ok(Some(seed))}
            }
        }
        Ok(None)
    }

    extend(program, 0, 0)?.ok_or(VmError::NoQuineSeed)
}

pub fn format_output(output: &[u64]) -> String {
    output.iter().join(",")
}

/// One line per instruction, for logging.
pub fn disassemble(program: &[u64]) -> String {
    program.chunks(2).enumerate().map(|(i, pair)| {
        let ip = 2 * i;
        match (Opcode::decode(pair[0]), pair.get(1)) {
            (Some(op), Some(operand)) if op.takes_combo() => match operand {
                4 => format!("{:3}: {} a", ip, op),
                5 => format!("{:3}: {} b", ip, op),
                6 => format!("{:3}: {} c", ip, op),
                _ => format!("{:3}: {} {}", ip, op, operand),
            },
            (Some(op), Some(operand)) => format!("{:3}: {} #{}", ip, op, operand),
            _ => format!("{:3}: .data {}", ip, pair.iter().join(",")),
        }
    }).join("\n")
}
