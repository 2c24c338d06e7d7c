use super::{CaesError, Literal};
use crate::utils::LabelType;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Display;

/// Handles a single defeasible argument.
///
/// An argument links a set of premise literals and a set of exception literals
/// to exactly one conclusion literal, with a weight in the unit interval.
/// Each argument has a label and an identifier which is unique in an argument set.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    premises: Vec<Literal<T>>,
    exceptions: Vec<Literal<T>>,
    conclusion: Literal<T>,
    weight: f64,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the premise literals of the argument.
    pub fn premises(&self) -> &[Literal<T>] {
        &self.premises
    }

    /// Returns the exception literals of the argument.
    pub fn exceptions(&self) -> &[Literal<T>] {
        &self.exceptions
    }

    /// Returns the conclusion literal of the argument.
    pub fn conclusion(&self) -> &Literal<T> {
        &self.conclusion
    }

    /// Returns the intrinsic weight of the argument.
    ///
    /// The audience may override it; see [`Audience::weight_of`](crate::caes::Audience::weight_of).
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |f: &mut std::fmt::Formatter<'_>, lits: &[Literal<T>]| -> std::fmt::Result {
            for (i, l) in lits.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", l)?;
            }
            Ok(())
        };
        write!(f, "{}: [", self.label)?;
        join(f, &self.premises)?;
        write!(f, "], ~[")?;
        join(f, &self.exceptions)?;
        write!(f, "] => {}", self.conclusion)
    }
}

/// Handles the set of arguments of a Carneades structure.
///
/// The set indexes its arguments by conclusion literal, so that the arguments
/// pro a literal and con a literal (pro its negation) can be enumerated.
///
/// # Example
///
/// ```
/// # use carneades::caes::{ArgumentSet, Literal};
/// let mut arguments = ArgumentSet::default();
/// arguments
///     .new_argument("arg1", vec![Literal::pos("witness1")], vec![], Literal::pos("intent"), 0.3)
///     .unwrap();
/// assert_eq!(1, arguments.len());
/// assert_eq!(1, arguments.arguments_pro(&Literal::pos("intent")).count());
/// assert_eq!(1, arguments.arguments_con(&Literal::neg("intent")).count());
/// ```
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
    pro_index: HashMap<Literal<T>, Vec<usize>>,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        ArgumentSet {
            arguments: Vec::new(),
            label_to_id: HashMap::new(),
            pro_index: HashMap::new(),
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    /// An error is returned if the weight is outside the unit interval or if an
    /// argument with the same label is already defined.
    pub fn new_argument(
        &mut self,
        label: T,
        premises: Vec<Literal<T>>,
        exceptions: Vec<Literal<T>>,
        conclusion: Literal<T>,
        weight: f64,
    ) -> Result<()> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(CaesError::MalformedArgument {
                id: label.to_string(),
                weight,
            }
            .into());
        }
        if self.label_to_id.contains_key(&label) {
            return Err(anyhow!(r#"an argument labelled "{}" is already defined"#, label));
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.pro_index.entry(conclusion.clone()).or_default().push(id);
        self.arguments.push(Argument {
            id,
            label,
            premises,
            exceptions,
            conclusion,
            weight,
        });
        Ok(())
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the argument associated with a label.
    ///
    /// If no such argument is defined, an error is returned.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.arguments[*i])
            .ok_or_else(|| anyhow!("no such argument: {}", label))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }

    /// Returns an iterator to the arguments whose conclusion is the given literal.
    pub fn arguments_pro<'a>(
        &'a self,
        literal: &Literal<T>,
    ) -> impl Iterator<Item = &'a Argument<T>> + 'a {
        self.pro_index
            .get(literal)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |i| &self.arguments[*i])
    }

    /// Returns an iterator to the arguments whose conclusion is the negation of the given literal.
    pub fn arguments_con<'a>(
        &'a self,
        literal: &Literal<T>,
    ) -> impl Iterator<Item = &'a Argument<T>> + 'a {
        self.pro_index
            .get(&literal.negated())
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |i| &self.arguments[*i])
    }
}

/// The subset of the arguments currently in play for an evaluation.
///
/// In single-shot evaluations the working set contains every argument; in
/// dialogue mode it starts empty and grows monotonically, one argument per turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkingSet {
    in_play: Vec<bool>,
    n_in_play: usize,
}

impl WorkingSet {
    /// Builds a working set containing all of the `n` arguments.
    pub fn full(n: usize) -> Self {
        WorkingSet {
            in_play: vec![true; n],
            n_in_play: n,
        }
    }

    /// Builds a working set containing none of the `n` arguments.
    pub fn empty(n: usize) -> Self {
        WorkingSet {
            in_play: vec![false; n],
            n_in_play: 0,
        }
    }

    /// Returns `true` iff the argument with the given id is in play.
    pub fn contains(&self, id: usize) -> bool {
        self.in_play[id]
    }

    /// Puts the argument with the given id in play.
    pub fn add(&mut self, id: usize) {
        if !self.in_play[id] {
            self.in_play[id] = true;
            self.n_in_play += 1;
        }
    }

    /// Returns a copy of this working set with the given argument in play.
    pub fn with(&self, id: usize) -> Self {
        let mut copy = self.clone();
        copy.add(id);
        copy
    }

    /// Returns the number of arguments in play.
    pub fn len(&self) -> usize {
        self.n_in_play
    }

    /// Returns `true` iff no argument is in play.
    pub fn is_empty(&self) -> bool {
        self.n_in_play == 0
    }

    /// Returns an iterator to the ids of the arguments in play, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.in_play
            .iter()
            .enumerate()
            .filter_map(|(i, b)| if *b { Some(i) } else { None })
    }
}
