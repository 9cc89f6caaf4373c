use crate::circuit::Circuit;
use anyhow::Result;
use log::{debug, warn};

pub fn solve(part: u8, input: &str) -> Result<String> {
    let circuit = Circuit::parse(input)?;
    debug!("{} inputs, {} gates", circuit.input_count(), circuit.gate_count());
    if part == 1 {return Ok(circuit.output('z')?.to_string())}

    let suspicious = circuit.suspicious_wires();
    if suspicious.len() != 8 {
        warn!("expected four swapped pairs, found {} suspicious wires", suspicious.len());
    }
    Ok(suspicious.join(","))
}
