use proptest::prelude::*;

use cnfkit::cnf::cnf::{Clause, var};
use cnfkit::cnf::dimacs::{lit_from_dimacs, lit_to_dimacs, parse_dimacs_str, to_dimacs};

fn dimacs_lit() -> impl Strategy<Value = i32> {
    prop_oneof![1..=40i32, -40..=-1i32]
}

fn clauses() -> impl Strategy<Value = Vec<Clause>> {
    let clause = prop::collection::vec(dimacs_lit().prop_map(lit_from_dimacs), 0..6);
    prop::collection::vec(clause, 0..12)
}

#[test]
fn literal_roundtrip_small_range() {
    for v in (-1000..=1000).filter(|&v| v != 0) {
        assert_eq!(lit_to_dimacs(lit_from_dimacs(v)), v);
        let l = lit_from_dimacs(v);
        assert_eq!(lit_from_dimacs(lit_to_dimacs(l)), l);
    }
}

proptest! {
    #[test]
    fn literal_roundtrip(v in prop_oneof![1..=i32::MAX, -i32::MAX..=-1]) {
        let l = lit_from_dimacs(v);
        prop_assert_eq!(lit_to_dimacs(l), v);
        prop_assert_eq!(var(l).get() as i64, v.unsigned_abs() as i64 - 1);
        prop_assert_eq!(l.sign() < 0, v < 0);
    }

    #[test]
    fn document_roundtrip(cs in clauses()) {
        let text = to_dimacs(&cs);
        let parsed = match parse_dimacs_str(&text) {
            Ok(p) => p,
            Err(e) => panic!("parse failed: {e}\n{text}"),
        };
        let max_index = cs
            .iter()
            .flatten()
            .map(|&l| lit_to_dimacs(l).unsigned_abs() as usize)
            .max();
        prop_assert_eq!(&parsed.clauses, &cs);
        prop_assert_eq!(parsed.var_count, max_index.map_or(0, |m| m + 1));
        prop_assert_eq!(to_dimacs(&parsed.clauses), text);
    }
}
