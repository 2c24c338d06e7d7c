use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The trait for proposition and argument labels.
///
/// Propositions and arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}
