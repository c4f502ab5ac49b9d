use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use cnfkit::cnf::cnf::Problem;
use cnfkit::cnf::dimacs::{ParseOptions, parse_dimacs_reader_with, write_dimacs};
use cnfkit::render::{rendered, seq};

#[derive(Debug, Parser)]
#[command(name = "cnfkit")]
#[command(about = "Read, normalize and inspect DIMACS CNF files")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    Stats {
        path: String,
        #[command(flatten)]
        input: InputArgs,
    },
    Normalize {
        path: String,
        #[command(flatten)]
        input: InputArgs,
        /// Output file, stdout when omitted.
        #[arg(long)]
        emit: Option<String>,
    },
    Show {
        path: String,
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Fail when the problem line disagrees with the clauses.
    #[arg(long)]
    strict: bool,
    #[arg(long, default_value_t = 'c')]
    comment: char,
    /// Read past a `%` line instead of stopping there.
    #[arg(long)]
    no_percent_stop: bool,
}

impl InputArgs {
    fn options(&self) -> ParseOptions {
        ParseOptions {
            comment_marker: self.comment,
            stop_at_percent: !self.no_percent_stop,
            strict: self.strict,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Stats { path, input } => stats_cmd(&path, &input)?,
        Cmd::Normalize { path, input, emit } => normalize_cmd(&path, &input, emit.as_deref())?,
        Cmd::Show { path, input, limit } => show_cmd(&path, &input, limit)?,
    }
    Ok(())
}

fn load_problem(path: &str, input: &InputArgs) -> Result<Problem> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    parse_dimacs_reader_with(BufReader::new(file), &input.options())
        .with_context(|| format!("failed to parse {}", path))
}

fn stats_cmd(path: &str, input: &InputArgs) -> Result<()> {
    let problem = load_problem(path, input)?;
    let longest = problem.clauses.iter().map(Vec::len).max().unwrap_or(0);
    println!(
        "var_count={} clauses={} literals={} longest_clause={}",
        problem.var_count,
        problem.num_clauses(),
        problem.num_literals(),
        longest
    );
    Ok(())
}

fn normalize_cmd(path: &str, input: &InputArgs, emit: Option<&str>) -> Result<()> {
    let problem = load_problem(path, input)?;
    match emit {
        Some(out) => {
            let file = File::create(out).with_context(|| format!("failed to create {}", out))?;
            let mut w = BufWriter::new(file);
            write_dimacs(&mut w, &problem.clauses)?;
            w.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            write_dimacs(&mut w, &problem.clauses)?;
            w.flush()?;
        }
    }
    Ok(())
}

fn show_cmd(path: &str, input: &InputArgs, limit: usize) -> Result<()> {
    let problem = load_problem(path, input)?;
    println!("var_count={} clauses={}", problem.var_count, problem.num_clauses());
    for (idx, clause) in problem.clauses.iter().take(limit).enumerate() {
        println!("{}", rendered(&(idx, clause)));
    }
    if problem.num_clauses() > limit {
        let rest = problem.clauses[limit..].iter().map(Vec::len);
        println!("... {} more, sizes {}", problem.num_clauses() - limit, rendered(&seq(rest)));
    }
    Ok(())
}
