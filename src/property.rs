//! The `Verify` trait: turning a property body's return value into
//! pass/fail, plus an optional proof value to report alongside a failure.
//!
//! Mirrors `checkito::prove::Prove`: `()` always passes, `bool` passes on
//! `true`, and `Result<T, E>` passes on `Ok` and carries the error's
//! `Display` output as the failure message on `Err`.

use core::fmt;

/// The outcome of evaluating a property body at one generated value.
pub enum Verdict {
    Pass,
    Fail { message: String },
}

/// Implemented for every return type a property body may produce.
pub trait Verify {
    fn verify(self) -> Verdict;
}

impl Verify for () {
    fn verify(self) -> Verdict {
        Verdict::Pass
    }
}

impl Verify for bool {
    fn verify(self) -> Verdict {
        if self {
            Verdict::Pass
        } else {
            Verdict::Fail { message: "property returned false".to_string() }
        }
    }
}

impl<T, E: fmt::Display> Verify for Result<T, E> {
    fn verify(self) -> Verdict {
        match self {
            Ok(_) => Verdict::Pass,
            Err(error) => Verdict::Fail { message: error.to_string() },
        }
    }
}

/// What the property body's input looked like and what name it was bound
/// under, recorded so a failure report can show "for `x = 17`" rather than
/// just the opaque generated value.
#[derive(Clone)]
pub struct Binding {
    pub clause_source: String,
    pub value: String,
}

/// Why a single evaluation of the property at a candidate value counted as
/// a failure.
#[derive(Clone)]
pub enum Cause {
    /// The property body returned a failing [`Verdict`].
    Disproved(String),
    /// The property body panicked; holds the downcast panic message if one
    /// could be recovered.
    Panic(Option<String>),
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Disproved(message) => write!(f, "{message}"),
            Cause::Panic(Some(message)) => write!(f, "panicked: {message}"),
            Cause::Panic(None) => write!(f, "panicked"),
        }
    }
}

/// A captured failure: what went wrong, and the bindings that produced it.
#[derive(Clone)]
pub struct Failure {
    pub exception_kind: &'static str,
    pub cause: Cause,
    pub generated_bindings: Vec<Binding>,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.cause, self.exception_kind)?;
        for binding in &self.generated_bindings {
            writeln!(f, "  {} = {}", binding.clause_source, binding.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_verify_matches_truthiness() {
        assert!(matches!(true.verify(), Verdict::Pass));
        assert!(matches!(false.verify(), Verdict::Fail { .. }));
    }

    #[test]
    fn result_verify_carries_the_error_message() {
        let outcome: Result<(), &str> = Err("boom");
        match outcome.verify() {
            Verdict::Fail { message } => assert_eq!(message, "boom"),
            Verdict::Pass => panic!("expected failure"),
        }
    }

    #[test]
    fn unit_verify_always_passes() {
        assert!(matches!(().verify(), Verdict::Pass));
    }
}
