use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::targets;

use super::cnf::{Clause, Literal, MAX_VAR_ID, Problem, Variable, var, var_count_for};

/// Upper bound on how much the declared clause count may preallocate.
const CAPACITY_HINT_CAP: usize = 1 << 16;

#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("failed to read dimacs input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid problem line '{text}', expected: p cnf N M")]
    InvalidHeader { line: usize, text: String },
    #[error("line {line}: duplicate problem line")]
    DuplicateHeader { line: usize },
    #[error("line {line}: input is not valid UTF-8")]
    InvalidUtf8 { line: usize },
    #[error("line {line}: invalid literal '{token}'")]
    InvalidToken { line: usize, token: String },
    #[error("line {line}: literal {value} is out of range")]
    LiteralOutOfRange { line: usize, value: i64 },
    #[error("unterminated clause at end of input ({pending} literals without trailing 0)")]
    UnterminatedClause { pending: usize },
    #[error("header declares {declared} clauses, found {found}")]
    ClauseCountMismatch { declared: usize, found: usize },
    #[error("header declares {declared} variables, but variable {found} is referenced")]
    VariableCountMismatch { declared: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Lines whose first non-blank character is this are skipped.
    pub comment_marker: char,
    /// Stop reading clauses at a line starting with `%` (SATLIB trailer).
    pub stop_at_percent: bool,
    /// Reject inputs whose header counts disagree with the clause data.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comment_marker: 'c',
            stop_at_percent: true,
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Header {
    vars: usize,
    clauses: usize,
}

/// Positive values map to the positive literal of the variable with that
/// DIMACS index, negative values to its negation.
pub fn lit_from_dimacs(value: i32) -> Literal {
    debug_assert!(value != 0 && value != i32::MIN, "{} is not a dimacs literal", value);
    let var = Variable::new(value.unsigned_abs() - 1);
    Literal::new(var, value < 0)
}

pub fn lit_to_dimacs(lit: Literal) -> i32 {
    let v = (var(lit).get() + 1) as i32;
    if lit.is_negated() { -v } else { v }
}

pub fn parse_dimacs_str(s: &str) -> Result<Problem, DimacsError> {
    parse_dimacs_reader(io::Cursor::new(s.as_bytes()))
}

pub fn parse_dimacs_reader<R: BufRead>(r: R) -> Result<Problem, DimacsError> {
    parse_dimacs_reader_with(r, &ParseOptions::default())
}

pub fn parse_dimacs_reader_with<R: BufRead>(
    r: R,
    opts: &ParseOptions,
) -> Result<Problem, DimacsError> {
    let mut header = None::<Header>;
    let mut clauses = Vec::<Clause>::new();
    let mut clause = Clause::new();
    let mut max_var = None::<Variable>;

    for (idx, line) in r.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => DimacsError::InvalidUtf8 { line: line_no },
            _ => DimacsError::Io(e),
        })?;
        let clean = line.trim_start();

        if clean.starts_with(opts.comment_marker) {
            continue;
        }
        if opts.stop_at_percent && clean.starts_with('%') {
            break;
        }
        if clean.starts_with('p') {
            if header.is_some() {
                return Err(DimacsError::DuplicateHeader { line: line_no });
            }
            let h = parse_header(clean, line_no)?;
            clauses.reserve(h.clauses.min(CAPACITY_HINT_CAP));
            header = Some(h);
            continue;
        }

        for token in clean.split_whitespace() {
            let value = parse_lit_token(token, line_no)?;
            if value == 0 {
                clauses.push(std::mem::take(&mut clause));
                continue;
            }
            let lit = lit_from_dimacs(value);
            max_var = max_var.max(Some(var(lit)));
            clause.push(lit);
        }
    }

    if !clause.is_empty() {
        return Err(DimacsError::UnterminatedClause {
            pending: clause.len(),
        });
    }

    if let Some(h) = header {
        check_header(h, clauses.len(), max_var, opts.strict)?;
    }

    let var_count = max_var.map_or(0, var_count_for);
    log::debug!(
        target: targets::PARSE,
        "parsed {} clauses, var_count {}",
        clauses.len(),
        var_count
    );
    Ok(Problem { clauses, var_count })
}

fn parse_header(line: &str, line_no: usize) -> Result<Header, DimacsError> {
    let invalid = || DimacsError::InvalidHeader {
        line: line_no,
        text: line.trim().to_owned(),
    };
    let parts = line.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 || parts[0] != "p" || parts[1] != "cnf" {
        return Err(invalid());
    }
    let vars = parts[2].parse::<usize>().map_err(|_| invalid())?;
    let clauses = parts[3].parse::<usize>().map_err(|_| invalid())?;
    Ok(Header { vars, clauses })
}

fn parse_lit_token(token: &str, line_no: usize) -> Result<i32, DimacsError> {
    let value = token.parse::<i64>().map_err(|_| DimacsError::InvalidToken {
        line: line_no,
        token: token.to_owned(),
    })?;
    if value.unsigned_abs() > u64::from(MAX_VAR_ID) + 1 {
        return Err(DimacsError::LiteralOutOfRange {
            line: line_no,
            value,
        });
    }
    Ok(value as i32)
}

fn check_header(
    h: Header,
    found_clauses: usize,
    max_var: Option<Variable>,
    strict: bool,
) -> Result<(), DimacsError> {
    let max_index = max_var.map_or(0, |v| v.get() as usize + 1);

    if h.clauses != found_clauses {
        if strict {
            return Err(DimacsError::ClauseCountMismatch {
                declared: h.clauses,
                found: found_clauses,
            });
        }
        log::warn!(
            target: targets::PARSE,
            "header declares {} clauses, found {}",
            h.clauses,
            found_clauses
        );
    }

    if max_index > h.vars {
        if strict {
            return Err(DimacsError::VariableCountMismatch {
                declared: h.vars,
                found: max_index,
            });
        }
        log::warn!(
            target: targets::PARSE,
            "header declares {} variables, but variable {} is referenced",
            h.vars,
            max_index
        );
    }
    Ok(())
}

pub fn to_dimacs<I, C>(clauses: I) -> String
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Literal]>,
{
    // clause lines are buffered so the header can be derived in the same pass
    let mut body = String::new();
    let mut counts = HeaderCounts::default();
    for clause in clauses {
        counts.add(clause.as_ref());
        for &lit in clause.as_ref() {
            body.push_str(&format!("{} ", lit_to_dimacs(lit)));
        }
        body.push_str("0\n");
    }
    let mut out = counts.header();
    out.push_str(&body);
    out
}

/// Streams the clauses to `w`. `clauses` is traversed twice, once for the
/// header and once for the clause lines.
pub fn write_dimacs<W, I, C>(w: &mut W, clauses: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = C> + Clone,
    C: AsRef<[Literal]>,
{
    let mut counts = HeaderCounts::default();
    for clause in clauses.clone() {
        counts.add(clause.as_ref());
    }
    w.write_all(counts.header().as_bytes())?;

    for clause in clauses {
        for &lit in clause.as_ref() {
            write!(w, "{} ", lit_to_dimacs(lit))?;
        }
        w.write_all(b"0\n")?;
    }
    Ok(())
}

#[derive(Debug, Default)]
struct HeaderCounts {
    clauses: usize,
    max_var: Option<Variable>,
}

impl HeaderCounts {
    fn add(&mut self, clause: &[Literal]) {
        self.clauses += 1;
        for &lit in clause {
            self.max_var = self.max_var.max(Some(var(lit)));
        }
    }

    fn header(&self) -> String {
        let num_vars = self.max_var.map_or(0, |v| v.get() as usize + 1);
        log::debug!(
            target: targets::WRITE,
            "writing {} clauses over {} variables",
            self.clauses,
            num_vars
        );
        format!("p cnf {} {}\n", num_vars, self.clauses)
    }
}
