//! Networks of AND/OR/XOR gates over named one-bit wires.
//!
//! A wire is either an input with a fixed value or the output of exactly one gate.
//! Values are worked out on demand and cached, so each gate fires at most once per
//! [`Evaluator`].

use itertools::Itertools;
use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CircuitError {
    #[error("line {line}: cannot parse {text:?}")]
    Malformed {line: usize, text: String},
    #[error("line {line}: unknown gate operator {op:?}")]
    UnknownOperator {line: usize, op: String},
    #[error("wire {0} is declared more than once")]
    Redeclared(String),
    #[error("wire {0} is neither an input nor driven by a gate")]
    UndeclaredWire(String),
    #[error("wire {0} depends on its own value")]
    Cycle(String),
    #[error("wire {0} does not name a bit of a 64-bit number")]
    BitOutOfRange(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Op {And, Or, Xor}

impl Op {
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Op::And => lhs & rhs,
            Op::Or => lhs | rhs,
            Op::Xor => lhs ^ rhs,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gate {
    pub lhs: String,
    pub op: Op,
    pub rhs: String,
}

impl Gate {
    fn reads(&self, wire: &str) -> bool {
        self.lhs == wire || self.rhs == wire
    }
}

#[derive(Clone, Debug, Default)]
pub struct Circuit {
    inputs: FxHashMap<String, bool>,
    gates: FxHashMap<String, Gate>,
}

/// The bit position encoded in a wire name such as `z07`.
fn bit_index(wire: &str) -> Option<u32> {
    wire.get(1 ..)?.parse().ok()
}

/// An `x`/`y` input above bit 0. Bit 0 has no carry in, so its gates follow other rules.
fn is_operand_bus(wire: &str) -> bool {
    wire.starts_with(['x', 'y']) && bit_index(wire) != Some(0)
}

impl Circuit {
    /// Reads `name: 0|1` lines, a blank line, then `a OP b -> out` lines.
    pub fn parse(text: &str) -> Result<Self, CircuitError> {
        let mut circuit = Circuit::default();
        let mut lines = text.trim().lines().map(str::trim).enumerate();
        for (i, line) in lines.by_ref().take_while(|(_, line)| !line.is_empty()) {
            let malformed = || CircuitError::Malformed {line: i + 1, text: line.to_owned()};
            let (wire, value) = line.split_once(": ").ok_or_else(malformed)?;
            let value = match value {"0" => false, "1" => true, _ => return Err(malformed())};
            circuit.add_input(wire, value)?;
        }
        for (i, line) in lines {
            let [lhs, op, rhs, "->", out] = line.split_whitespace().collect::<Vec<_>>()[..] else {
                return Err(CircuitError::Malformed {line: i + 1, text: line.to_owned()})
            };
            let op = op.parse::<Op>()
                .map_err(|_| CircuitError::UnknownOperator {line: i + 1, op: op.to_owned()})?;
            circuit.add_gate(out, Gate {lhs: lhs.to_owned(), op, rhs: rhs.to_owned()})?;
        }
        Ok(circuit)
    }

    pub fn add_input(&mut self, wire: &str, value: bool) -> Result<(), CircuitError> {
        if self.is_declared(wire) {return Err(CircuitError::Redeclared(wire.to_owned()))}
        self.inputs.insert(wire.to_owned(), value);
        Ok(())
    }

    pub fn add_gate(&mut self, out: &str, gate: Gate) -> Result<(), CircuitError> {
        if self.is_declared(out) {return Err(CircuitError::Redeclared(out.to_owned()))}
        self.gates.insert(out.to_owned(), gate);
        Ok(())
    }

    fn is_declared(&self, wire: &str) -> bool {
        self.inputs.contains_key(wire) || self.gates.contains_key(wire)
    }

    pub fn gate_count(&self) -> usize {self.gates.len()}
    pub fn input_count(&self) -> usize {self.inputs.len()}

    pub fn wires(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().chain(self.gates.keys()).map(String::as_str)
    }

    /// The number spelled by the wires `<prefix>00`, `<prefix>01`, ..., lowest bit first.
    pub fn output(&self, prefix: char) -> Result<u64, CircuitError> {
        let mut evaluator = Evaluator::new(self);
        let mut value = 0;
        for wire in self.wires().filter(|wire| wire.starts_with(prefix)) {
            let bit = bit_index(wire).filter(|&bit| bit < u64::BITS)
                .ok_or_else(|| CircuitError::BitOutOfRange(wire.to_owned()))?;
            value |= u64::from(evaluator.resolve(wire)?) << bit;
        }
        trace!("{} gates fired for {}", evaluator.gates_evaluated(), prefix);
        Ok(value)
    }

    /// Wires that look miswired when the circuit is read as a ripple-carry adder of
    /// `x` and `y` into `z`. Sorted by name.
    ///
    /// This is a structural lint, not a proof: it checks each gate against the
    /// shape a textbook adder would give it.
    /// - only XOR gates drive `z` wires, except the final carry out (highest `z`);
    /// - an XOR with no `x`/`y` operand above bit 0 must drive a `z` wire;
    /// - `x XOR y` (above bit 0) must feed another XOR;
    /// - `x AND y` (above bit 0) must feed an OR.
    pub fn suspicious_wires(&self) -> Vec<&str> {
        let last_z = self.gates.keys().filter(|wire| wire.starts_with('z')).max();
        let feeds = |wire: &str, op: Op| self.gates.values().any(|gate| gate.op == op && gate.reads(wire));

        self.gates.iter().filter(|&(out, gate)| {
            let to_z = out.starts_with('z');
            let half_adder = is_operand_bus(&gate.lhs) && is_operand_bus(&gate.rhs);
            let internal = !is_operand_bus(&gate.lhs) && !is_operand_bus(&gate.rhs);

            let bad_sum_driver = to_z && gate.op != Op::Xor && Some(out) != last_z;
            let stray_sum = gate.op == Op::Xor && internal && !to_z;
            let lost_half_sum = half_adder && gate.op == Op::Xor && !feeds(out.as_str(), Op::Xor);
            let lost_half_carry = half_adder && gate.op == Op::And && !feeds(out.as_str(), Op::Or);
            bad_sum_driver || stray_sum || lost_half_sum || lost_half_carry
        }).map(|(out, _)| out.as_str()).sorted().collect()
    }
}

/// Lazily resolves wire values, memoizing gate outputs.
pub struct Evaluator<'c> {
    circuit: &'c Circuit,
    cache: FxHashMap<&'c str, bool>,
    pending: FxHashSet<&'c str>,
    gates_evaluated: usize,
}

impl<'c> Evaluator<'c> {
    pub fn new(circuit: &'c Circuit) -> Self {
        Self {circuit, cache: FxHashMap::default(), pending: FxHashSet::default(), gates_evaluated: 0}
    }

    pub fn resolve(&mut self, wire: &str) -> Result<bool, CircuitError> {
        let circuit = self.circuit;
        if let Some(&value) = circuit.inputs.get(wire) {return Ok(value)}
        let Some((out, gate)) = circuit.gates.get_key_value(wire) else {
            return Err(CircuitError::UndeclaredWire(wire.to_owned()))
        };
        if let Some(&value) = self.cache.get(out.as_str()) {return Ok(value)}

        if !self.pending.insert(out.as_str()) {return Err(CircuitError::Cycle(out.clone()))}
        let operands = self.resolve(&gate.lhs).and_then(|lhs| Ok((lhs, self.resolve(&gate.rhs)?)));
        self.pending.remove(out.as_str());
        let (lhs, rhs) = operands?;

        let value = gate.op.apply(lhs, rhs);
        self.gates_evaluated += 1;
        self.cache.insert(out.as_str(), value);
        Ok(value)
    }

    /// How many gates have fired so far.
    pub fn gates_evaluated(&self) -> usize {
        self.gates_evaluated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SMALL: &str = "\
x00: 1
x01: 1
x02: 1
y00: 0
y01: 1
y02: 0

x00 AND y00 -> z00
x01 XOR y01 -> z01
x02 OR y02 -> z02";

    /// Two-bit ripple-carry adder.
    const ADDER: &str = "\
x00: 1
x01: 1
y00: 1
y01: 0

x00 XOR y00 -> z00
x00 AND y00 -> c00
x01 XOR y01 -> s01
x01 AND y01 -> a01
s01 XOR c00 -> z01
s01 AND c00 -> b01
a01 OR b01 -> z02";

    #[test]
    fn small_example() {
        let circuit = Circuit::parse(SMALL).unwrap();
        assert_eq!(circuit.output('z').unwrap(), 4);
        assert_eq!(circuit.output('x').unwrap(), 7);
    }

    #[test]
    fn single_gate() {
        let xor = Circuit::parse("x: 1\ny: 0\n\nx XOR y -> z").unwrap();
        assert!(Evaluator::new(&xor).resolve("z").unwrap());
        let and = Circuit::parse("x: 1\ny: 0\n\nx AND y -> z").unwrap();
        assert!(!Evaluator::new(&and).resolve("z").unwrap());
    }

    #[test]
    fn adder_adds() {
        let circuit = Circuit::parse(ADDER).unwrap();
        assert_eq!(circuit.output('z').unwrap(), 3 + 1);
        assert!(circuit.suspicious_wires().is_empty());
    }

    #[test]
    fn swapped_outputs_are_flagged() {
        let swapped = ADDER.replace("-> z01", "-> tmp").replace("-> b01", "-> z01")
            .replace("-> tmp", "-> b01");
        let circuit = Circuit::parse(&swapped).unwrap();
        assert_eq!(circuit.suspicious_wires(), vec!["b01", "z01"]);
    }

    #[test]
    fn swapped_low_bit_is_flagged() {
        let swapped = ADDER.replace("-> z00", "-> tmp").replace("-> c00", "-> z00")
            .replace("-> tmp", "-> c00");
        let circuit = Circuit::parse(&swapped).unwrap();
        assert_eq!(circuit.suspicious_wires(), vec!["c00", "z00"]);
    }

    #[test]
    fn failed_resolution_leaves_no_stale_state() {
        let dangling = Circuit::parse("x: 1\n\nx OR w -> z\nz AND x -> v").unwrap();
        let mut evaluator = Evaluator::new(&dangling);
        for wire in ["z", "z", "v"] {
            assert_eq!(evaluator.resolve(wire), Err(CircuitError::UndeclaredWire("w".into())));
        }
    }

    #[test]
    fn resolving_twice_does_not_refire() {
        let circuit = Circuit::parse(ADDER).unwrap();
        let mut evaluator = Evaluator::new(&circuit);
        let first = evaluator.resolve("z02").unwrap();
        let fired = evaluator.gates_evaluated();
        assert_eq!(evaluator.resolve("z02").unwrap(), first);
        assert_eq!(evaluator.resolve("a01").unwrap(), false);
        assert_eq!(evaluator.gates_evaluated(), fired);
    }

    #[test]
    fn malformed_circuits_fail() {
        assert_eq!(
            Circuit::parse("x: 1\ny: 0\n\nx NAND y -> z").unwrap_err(),
            CircuitError::UnknownOperator {line: 4, op: "NAND".into()},
        );
        assert!(matches!(Circuit::parse("x: 2"), Err(CircuitError::Malformed {line: 1, ..})));
        assert!(matches!(Circuit::parse("x: 1\n\nx AND y z"), Err(CircuitError::Malformed {line: 3, ..})));
        assert_eq!(
            Circuit::parse("x: 1\nx: 0").unwrap_err(),
            CircuitError::Redeclared("x".into()),
        );

        let dangling = Circuit::parse("x: 1\n\nx OR w -> z").unwrap();
        assert_eq!(Evaluator::new(&dangling).resolve("z"), Err(CircuitError::UndeclaredWire("w".into())));

        let looped = Circuit::parse("x: 1\n\nx AND b -> a\nx AND a -> b").unwrap();
        assert!(matches!(Evaluator::new(&looped).resolve("a"), Err(CircuitError::Cycle(_))));
    }

    proptest! {
        #[test]
        fn memoized_values_are_stable(
            inputs in prop::collection::vec(any::<bool>(), 2 ..= 8),
            gates in prop::collection::vec((any::<usize>(), 0 .. 3usize, any::<usize>()), 1 .. 40),
        ) {
            let mut circuit = Circuit::default();
            let mut names = vec![];
            for (i, &value) in inputs.iter().enumerate() {
                let name = format!("i{}", i);
                circuit.add_input(&name, value).unwrap();
                names.push(name);
            }
            for (i, &(lhs, op, rhs)) in gates.iter().enumerate() {
                let gate = Gate {
                    lhs: names[lhs % names.len()].clone(),
                    op: [Op::And, Op::Or, Op::Xor][op],
                    rhs: names[rhs % names.len()].clone(),
                };
                let name = format!("g{}", i);
                circuit.add_gate(&name, gate).unwrap();
                names.push(name);
            }

            let mut evaluator = Evaluator::new(&circuit);
            let first = names.iter().map(|name| evaluator.resolve(name).unwrap()).collect::<Vec<_>>();
            let fired = evaluator.gates_evaluated();
            prop_assert_eq!(fired, gates.len());
            let second = names.iter().map(|name| evaluator.resolve(name).unwrap()).collect::<Vec<_>>();
            prop_assert_eq!(first, second);
            prop_assert_eq!(evaluator.gates_evaluated(), fired);
        }
    }
}
