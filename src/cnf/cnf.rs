use std::fmt;

/// Largest internal variable id; its DIMACS index is `i32::MAX`.
pub const MAX_VAR_ID: u32 = i32::MAX as u32 - 1;

/// 0-based variable id. The DIMACS index of a variable is `get() + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Variable(u32);

impl Variable {
    /// Panics when `id` exceeds [`MAX_VAR_ID`]; see [`Variable::try_new`].
    pub fn new(id: u32) -> Self {
        match Self::try_new(id) {
            Some(v) => v,
            None => panic!("variable id {} exceeds {}", id, MAX_VAR_ID),
        }
    }

    pub fn try_new(id: u32) -> Option<Self> {
        (id <= MAX_VAR_ID).then_some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var {}", self.0)
    }
}

/// A variable with a polarity, stored as `2 * var + negated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(u32);

impl Literal {
    pub fn new(var: Variable, negated: bool) -> Self {
        Self((var.get() << 1) | negated as u32)
    }

    pub fn positive(var: Variable) -> Self {
        Self::new(var, false)
    }

    pub fn negative(var: Variable) -> Self {
        Self::new(var, true)
    }

    /// Raw internal encoding, not the DIMACS convention.
    pub fn get(self) -> u32 {
        self.0
    }

    pub fn var(self) -> Variable {
        Variable(self.0 >> 1)
    }

    pub fn is_negated(self) -> bool {
        self.0 & 1 == 1
    }

    /// -1 for a negated literal, 1 otherwise.
    pub fn sign(self) -> i32 {
        if self.is_negated() { -1 } else { 1 }
    }

    pub fn neg(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.sign() < 0 { "¬" } else { "" };
        write!(f, "Lit {}{} ({})", sign, self.var().get(), self.0)
    }
}

pub fn var(lit: Literal) -> Variable {
    lit.var()
}

pub type Clause = Vec<Literal>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problem {
    pub clauses: Vec<Clause>,
    /// Highest DIMACS index referenced plus one, zero when no literal occurs.
    pub var_count: usize,
}

impl Problem {
    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        let var_count = clauses
            .iter()
            .flatten()
            .map(|&lit| var_count_for(lit.var()))
            .max()
            .unwrap_or(0);
        Self { clauses, var_count }
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn num_literals(&self) -> usize {
        self.clauses.iter().map(Vec::len).sum()
    }

    pub fn into_parts(self) -> (Vec<Clause>, usize) {
        (self.clauses, self.var_count)
    }
}

/// Count of variable slots needed so that `var`'s DIMACS index is valid.
pub(crate) fn var_count_for(var: Variable) -> usize {
    var.get() as usize + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_keeps_polarity_and_var() {
        let x = Variable::new(4);
        let pos = Literal::positive(x);
        let neg = Literal::negative(x);
        assert_eq!(pos.get(), 8);
        assert_eq!(neg.get(), 9);
        assert_eq!(var(pos), x);
        assert_eq!(var(neg), x);
        assert_eq!(pos.sign(), 1);
        assert_eq!(neg.sign(), -1);
        assert_eq!(pos.neg(), neg);
        assert_eq!(neg.neg(), pos);
    }

    #[test]
    fn largest_variable_keeps_its_id() {
        let x = Variable::try_new(MAX_VAR_ID).expect("max id is valid");
        let neg = Literal::negative(x);
        assert_eq!(var(neg), x);
        assert!(neg.is_negated());
        assert_eq!(Literal::positive(x).var().get(), MAX_VAR_ID);
    }

    #[test]
    fn ids_past_the_limit_are_rejected() {
        assert_eq!(Variable::try_new(MAX_VAR_ID + 1), None);
        assert_eq!(Variable::try_new(u32::MAX - 1), None);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn new_panics_past_the_limit() {
        let _ = Variable::new(u32::MAX - 1);
    }

    #[test]
    fn display_matches_debug_format() {
        let x = Variable::new(2);
        assert_eq!(x.to_string(), "Var 2");
        assert_eq!(Literal::positive(x).to_string(), "Lit 2 (4)");
        assert_eq!(Literal::negative(x).to_string(), "Lit ¬2 (5)");
    }

    #[test]
    fn var_count_from_clauses() {
        let empty = Problem::from_clauses(vec![]);
        assert_eq!(empty.var_count, 0);

        let only_empty_clause = Problem::from_clauses(vec![vec![]]);
        assert_eq!(only_empty_clause.var_count, 0);
        assert_eq!(only_empty_clause.num_clauses(), 1);

        // DIMACS 3 is var 2, so four slots
        let p = Problem::from_clauses(vec![
            vec![Literal::negative(Variable::new(2))],
            vec![Literal::positive(Variable::new(0)), Literal::positive(Variable::new(1))],
        ]);
        assert_eq!(p.var_count, 4);
        assert_eq!(p.num_literals(), 3);
    }
}
