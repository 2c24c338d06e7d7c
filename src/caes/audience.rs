use super::{Argument, CaesError, Literal};
use crate::utils::LabelType;
use anyhow::Result;
use std::collections::{HashMap, HashSet};

/// The audience of a Carneades structure.
///
/// An audience holds a set of assumed literals (acceptable without proof) and a
/// partial mapping from argument label to a weight overriding the intrinsic one.
///
/// An audience may not assume both a literal and its negation; this is checked
/// at construction time.
///
/// # Example
///
/// ```
/// # use carneades::caes::{Audience, Literal};
/// # use std::collections::HashMap;
/// let audience =
///     Audience::new(vec![Literal::pos("kill"), Literal::neg("intent")], HashMap::new()).unwrap();
/// assert!(audience.is_assumed(&Literal::pos("kill")));
/// assert!(!audience.is_assumed(&Literal::pos("intent")));
/// assert!(Audience::new(
///     vec![Literal::pos("kill"), Literal::neg("kill")],
///     HashMap::new()
/// )
/// .is_err());
/// ```
#[derive(Debug)]
pub struct Audience<T>
where
    T: LabelType,
{
    assumptions: HashSet<Literal<T>>,
    weights: HashMap<T, f64>,
}

impl<T> Audience<T>
where
    T: LabelType,
{
    /// Builds an audience from its assumptions and its weight overrides.
    ///
    /// An error carrying the offending identifier is returned if a literal and its
    /// negation are both assumed, or if a weight override is outside the unit interval.
    pub fn new(assumptions: Vec<Literal<T>>, weights: HashMap<T, f64>) -> Result<Self> {
        let mut assumption_set = HashSet::with_capacity(assumptions.len());
        for literal in assumptions {
            if assumption_set.contains(&literal.negated()) {
                return Err(
                    CaesError::InconsistentAssumptions(literal.label().to_string()).into(),
                );
            }
            assumption_set.insert(literal);
        }
        for (label, weight) in weights.iter() {
            if !(0.0..=1.0).contains(weight) {
                return Err(CaesError::MalformedArgument {
                    id: label.to_string(),
                    weight: *weight,
                }
                .into());
            }
        }
        Ok(Audience {
            assumptions: assumption_set,
            weights,
        })
    }

    /// Returns `true` iff the audience assumes the given literal.
    pub fn is_assumed(&self, literal: &Literal<T>) -> bool {
        self.assumptions.contains(literal)
    }

    /// Returns the weight the audience gives to an argument.
    ///
    /// This is the override registered for the argument's label if there is one,
    /// and the argument's intrinsic weight otherwise.
    pub fn weight_of(&self, argument: &Argument<T>) -> f64 {
        self.weights
            .get(argument.label())
            .copied()
            .unwrap_or_else(|| argument.weight())
    }

    /// Returns an iterator to the assumed literals.
    pub fn iter_assumptions(&self) -> impl Iterator<Item = &Literal<T>> + '_ {
        self.assumptions.iter()
    }
}
