use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::time::Instant;

mod circuit;
mod grid;
mod input;
mod vm;

mod day01;
mod day02;
mod day03;
mod day04;
mod day05;
mod day06;
mod day07;
mod day08;
mod day09;
mod day10;
mod day11;
mod day12;
mod day13;
mod day14;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day22;
mod day23;
mod day24;
mod day25;

type Solver = fn(u8, &str) -> Result<String>;

const DAYS: [Solver; 25] = [
    day01::solve, day02::solve, day03::solve, day04::solve, day05::solve, day06::solve,
    day07::solve, day08::solve, day09::solve, day10::solve, day11::solve, day12::solve,
    day13::solve, day14::solve, day15::solve, day16::solve, day17::solve, day18::solve,
    day19::solve, day20::solve, day21::solve, day22::solve, day23::solve, day24::solve,
    day25::solve,
];

/// Solves one day of Advent of Code 2024 and prints the answers.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Part to solve, both if omitted
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Use example input `day{DAY}test{TEST}.in` instead of `day{DAY}.in`
    #[arg(short, long)]
    test: Option<u32>,

    /// Directory holding the input files
    #[arg(short, long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Log more; repeat for even more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let path = input::input_path(&args.input_dir, args.day, args.test);
    info!("reading {}", path.display());
    let input = input::read_input(&path)?;

    let solve = DAYS[usize::from(args.day) - 1];
    let parts = match args.part {Some(part) => part ..= part, None => 1 ..= 2};
    for part in parts {
        let time = Instant::now();
        println!("{}", solve(part, &input)?);
        info!("day {} part {}: {} seconds elapsed", args.day, part, time.elapsed().as_secs_f32());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("cannot set up logging: {}", e);
    }

    if let Err(e) = run(&args) {
        error!("day {}: {:#}", args.day, e);
        std::process::exit(1);
    }
}
