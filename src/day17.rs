use crate::input::{numbers, parse_num};
use crate::vm::{self, Machine, Registers};
use anyhow::{ensure, Context, Result};
use log::debug;

fn register(input: &str, name: char) -> Result<u64> {
    let prefix = format!("Register {}:", name);
    let line = input.lines().find_map(|line| line.trim().strip_prefix(&prefix))
        .with_context(|| format!("no register {}", name))?;
    parse_num(line)
}

fn parse(input: &str) -> Result<(Registers, Vec<u64>)> {
    let registers = Registers {a: register(input, 'A')?, b: register(input, 'B')?, c: register(input, 'C')?};
    let program = input.lines().find_map(|line| line.trim().strip_prefix("Program:")).context("no program")?;
    let program = numbers::<u64>(program)?;
    ensure!(program.iter().all(|&word| word < 8), "program words must be 3-bit");
    Ok((registers, program))
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (registers, program) = parse(input)?;
    debug!("program:\n{}", vm::disassemble(&program));
    if part == 1 {
        let mut machine = Machine::new(&program, registers);
        machine.run()?;
        debug!("halted at {} with {:?}", machine.ip(), machine.registers());
        Ok(vm::format_output(machine.output()))
    } else {
        let seed = vm::find_quine_seed(&program)?;
        debug!("seed {:o} in octal", seed);
        ensure!(vm::run(&program, seed)? == program, "seed {} does not reproduce the program", seed);
        Ok(seed.to_string())
    }
}
