//! The Carneades Argument Evaluation Structure (CAES) and its components.
//!
//! A CAES combines a language of propositions, a set of weighted defeasible
//! arguments, an audience (assumptions and weight overrides) and a proof
//! standard assignment.
//! Its two central notions are *applicability* of an argument and
//! *acceptability* of a literal; they are defined by mutual recursion and
//! computed by [`Caes`].

mod arguments;
pub use arguments::{Argument, ArgumentSet, WorkingSet};

mod audience;
pub use audience::Audience;

mod errors;
pub use errors::CaesError;

mod instance;
pub use instance::CaesInstance;

mod language;
pub use language::{Language, Literal, Proposition};

mod proof_standard;
pub use proof_standard::{Parameters, ProofStandard, StandardAssignment};

mod structure;
pub use structure::{Caes, Verdict};
