use anyhow::{Context, Result};

#[derive(Clone, Copy, Debug)]
struct Span {start: usize, len: usize}

/// File spans indexed by file id, and the free spans between them.
fn parse(input: &str) -> Result<(Vec<Span>, Vec<Span>)> {
    let (mut files, mut free) = (vec![], vec![]);
    let mut start = 0;
    for (i, c) in input.trim().chars().enumerate() {
        let len = c.to_digit(10).with_context(|| format!("{:?} in the disk map is not a digit", c))? as usize;
        if i % 2 == 0 {files.push(Span {start, len})} else {free.push(Span {start, len})}
        start += len;
    }
    Ok((files, free))
}

fn checksum(files: &[Span]) -> usize {
    files.iter().enumerate().map(|(id, file)| (file.start .. file.start + file.len).sum::<usize>() * id).sum()
}

/// Moves single blocks from the end into the leftmost gap.
fn compact_blocks(files: &[Span]) -> usize {
    let mut disk = vec![];
    for (id, file) in files.iter().enumerate() {
        disk.resize(file.start, None);
        disk.extend(std::iter::repeat(Some(id)).take(file.len));
    }
    let (mut left, mut right) = (0, disk.len());
    loop {
        while left < right && disk[left].is_some() {left += 1}
        while left < right && disk[right - 1].is_none() {right -= 1}
        if left + 1 >= right {break}
        disk.swap(left, right - 1);
    }
    disk.iter().enumerate().map(|(pos, id)| pos * id.unwrap_or(0)).sum()
}

/// Moves each file once, highest id first, into the leftmost gap that fits it.
fn compact_files(mut files: Vec<Span>, mut free: Vec<Span>) -> usize {
    for file in files.iter_mut().rev() {
        let gap = free.iter_mut().take_while(|gap| gap.start < file.start).find(|gap| gap.len >= file.len);
        if let Some(gap) = gap {
            file.start = gap.start;
            gap.start += file.len;
            gap.len -= file.len;
        }
    }
    checksum(&files)
}

pub fn solve(part: u8, input: &str) -> Result<String> {
    let (files, free) = parse(input)?;
    Ok(if part == 1 {compact_blocks(&files)} else {compact_files(files, free)}.to_string())
}
