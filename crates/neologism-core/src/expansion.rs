//! Combining per-symbol expansions into whole clauses.

/// A sequence of symbols, part of (or all of) a sentence.
pub type Clause = Vec<String>;

/// Every way to pick one alternative per position, concatenated in order.
///
/// `positions[i]` lists the alternative clauses for position `i`. The first
/// position varies fastest in the output. A position with no alternatives
/// contributes nothing and is skipped. With no positions at all the result is
/// a single empty clause.
pub fn all_combinations(positions: &[Vec<Clause>]) -> Vec<Clause> {
    let mut clauses: Vec<Clause> = vec![Vec::new()];

    for alternatives in positions {
        if alternatives.is_empty() {
            continue;
        }

        let mut next = Vec::with_capacity(clauses.len() * alternatives.len());
        for alternative in alternatives {
            for clause in &clauses {
                let mut combined = Vec::with_capacity(clause.len() + alternative.len());
                combined.extend_from_slice(clause);
                combined.extend_from_slice(alternative);
                next.push(combined);
            }
        }
        clauses = next;
    }

    clauses
}
