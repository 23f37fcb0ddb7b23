//! `term`: a generic leaf generator producing one of a handful of
//! commonly-needed small value shapes, for property bodies that need "any
//! value" without committing to a specific type up front.

use crate::choice::{frequency, weighted};
use crate::constant::constant;
use crate::generator::Generator;
use crate::primitive::{boolean, integer_in_range};
use crate::seed::Seed;
use crate::size::Size;
use crate::string::atom;

/// A small closed set of primitive-ish values: an integer, a boolean, a
/// short atom-shaped string, or unit — weighted so integers dominate, since
/// they're the most common "any term" use.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    Integer(i64),
    Boolean(bool),
    Atom(String),
    Unit,
}

pub fn term() -> impl Generator<Item = Term> {
    frequency(vec![
        weighted(4, Box::new(integer_in_range(-1000..=1000).map(Term::Integer))),
        weighted(2, Box::new(boolean().map(Term::Boolean))),
        weighted(2, Box::new(atom(6).map(Term::Atom))),
        weighted(1, Box::new(constant(Term::Unit))),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_produces_every_variant_over_many_draws() {
        let gen = term();
        let mut saw_integer = false;
        let mut saw_boolean = false;
        let mut saw_atom = false;
        let mut saw_unit = false;
        for i in 0..500u64 {
            match gen.generate(Seed::new_seed(i), Size::new(5)).into_root() {
                Term::Integer(_) => saw_integer = true,
                Term::Boolean(_) => saw_boolean = true,
                Term::Atom(_) => saw_atom = true,
                Term::Unit => saw_unit = true,
            }
        }
        assert!(saw_integer && saw_boolean && saw_atom && saw_unit);
    }
}
