use anyhow::{Context, Result};
use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

type Network<'a> = FxHashMap<&'a str, FxHashSet<&'a str>>;

fn parse(input: &str) -> Result<Network<'_>> {
    let mut network = Network::default();
    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').with_context(|| format!("bad connection {:?}", line))?;
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }
    Ok(network)
}

fn triangles_with_t(network: &Network) -> usize {
    let mut count = 0;
    for (&a, links) in network {
        for &b in links.iter().filter(|&&b| b > a) {
            for &c in links.intersection(&network[b]).filter(|&&c| c > b) {
                if [a, b, c].iter().any(|name| name.starts_with('t')) {count += 1}
            }
        }
    }
    count
}

/// Bron–Kerbosch with pivoting.
fn largest_clique<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: FxHashSet<&'a str>,
    mut excluded: FxHashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if candidates.is_empty() && excluded.is_empty() {
        if clique.len() > best.len() {best.clone_from(clique)}
        return;
    }
    let Some(&pivot) = candidates.union(&excluded).max_by_key(|&&v| network[v].len()) else {return};
    let others = candidates.difference(&network[pivot]).copied().collect::<Vec<_>>();
    for v in others {
        clique.push(v);
        let links = &network[v];
        largest_clique(
            network,
            clique,
            candidates.intersection(links).copied().collect(),
            excluded.intersection(links).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let network = parse(input)?;
    if part == 1 {return Ok(triangles_with_t(&network).to_string())}
    let mut best = vec![];
    largest_clique(&network, &mut vec![], network.keys().copied().collect(), FxHashSet::default(), &mut best);
    debug!("largest clique has {} computers", best.len());
    Ok(best.into_iter().sorted().join(","))
}
