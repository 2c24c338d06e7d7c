use thiserror::Error;

/// The errors raised while validating the components of a Carneades structure.
///
/// Each variant carries the offending identifier so callers can report it.
/// These errors are raised at construction time and again by [`Caes`](crate::caes::Caes),
/// which re-validates its inputs before any evaluation takes place.
#[derive(Debug, Error, PartialEq)]
pub enum CaesError {
    /// A literal refers to a proposition that was never declared in the language.
    #[error(r#"undeclared proposition "{0}""#)]
    UndeclaredProposition(String),
    /// An argument has a weight outside the unit interval.
    #[error(r#"argument "{id}" has weight {weight}, which is outside [0,1]"#)]
    MalformedArgument {
        /// The label of the offending argument.
        id: String,
        /// Its rejected weight.
        weight: f64,
    },
    /// The audience assumes both a literal and its negation.
    #[error(r#"the audience assumes both "{0}" and its negation"#)]
    InconsistentAssumptions(String),
    /// A threshold parameter lies outside the unit interval.
    #[error(r#"parameter {name} has value {value}, which is outside [0,1]"#)]
    ParameterOutOfRange {
        /// The name of the parameter (alpha, beta or gamma).
        name: &'static str,
        /// Its rejected value.
        value: f64,
    },
}
