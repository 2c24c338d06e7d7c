use super::CaesError;
use crate::utils::LabelType;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::fmt::Display;

/// Handles a single proposition.
///
/// Each proposition has a label, a display text and an identifier which is unique
/// in a language. The label must be a [`LabelType`].
///
/// Propositions are built by [`Language`] objects.
/// A proposition itself is always the positive atom; negation lives in [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposition<T: LabelType> {
    id: usize,
    label: T,
    text: String,
}

impl<T> Proposition<T>
where
    T: LabelType,
{
    /// Returns the label of the proposition.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the proposition.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the display text of the proposition.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<T> Display for Proposition<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// A literal: a proposition label tagged with a polarity.
///
/// Negation is a derived logical literal, not a second stored proposition;
/// negating a literal twice yields the original one.
///
/// # Example
///
/// ```
/// # use carneades::caes::Literal;
/// let intent = Literal::pos("intent");
/// let neg = intent.negated();
/// assert!(!neg.is_positive());
/// assert_ne!(intent, neg);
/// assert_eq!(intent, neg.negated());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal<T: LabelType> {
    label: T,
    positive: bool,
}

impl<T> Literal<T>
where
    T: LabelType,
{
    /// Builds the positive literal of a proposition label.
    pub fn pos(label: T) -> Self {
        Literal {
            label,
            positive: true,
        }
    }

    /// Builds the negative literal of a proposition label.
    pub fn neg(label: T) -> Self {
        Literal {
            label,
            positive: false,
        }
    }

    /// Returns the label of the underlying proposition.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns `true` iff the literal is a positive atom.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Returns the literal with the opposite polarity over the same proposition.
    pub fn negated(&self) -> Self {
        Literal {
            label: self.label.clone(),
            positive: !self.positive,
        }
    }
}

impl<T> Display for Literal<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.positive {
            write!(f, "{}", self.label)
        } else {
            write!(f, "-{}", self.label)
        }
    }
}

/// Handles the set of propositions a Carneades structure may talk about.
///
/// # Example
///
/// ```
/// # use carneades::caes::Language;
/// let mut language = Language::default();
/// language.new_proposition("kill", "the accused killed the victim");
/// language.new_proposition("intent", "the accused acted with intent");
/// assert_eq!(2, language.len());
/// assert!(language.contains(&"kill"));
/// assert!(!language.contains(&"murder"));
/// ```
pub struct Language<T>
where
    T: LabelType,
{
    propositions: Vec<Proposition<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Default for Language<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Language {
            propositions: Vec::new(),
            label_to_id: HashMap::new(),
        }
    }
}

impl<T> Language<T>
where
    T: LabelType,
{
    /// Adds a new proposition to this language.
    ///
    /// The id of the new proposition is the previous maximal id plus one.
    /// If a proposition with the same label is already declared, no proposition is added
    /// and the first declaration is the one that is considered.
    pub fn new_proposition(&mut self, label: T, text: &str) {
        self.label_to_id.entry(label.clone()).or_insert_with(|| {
            self.propositions.push(Proposition {
                id: self.propositions.len(),
                label,
                text: text.to_string(),
            });
            self.propositions.len() - 1
        });
    }

    /// Returns the number of propositions in the language.
    pub fn len(&self) -> usize {
        self.propositions.len()
    }

    /// Returns `true` iff the language has no proposition.
    pub fn is_empty(&self) -> bool {
        self.propositions.is_empty()
    }

    /// Returns `true` iff a proposition with the given label is declared.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the proposition associated with a label.
    ///
    /// If no such proposition is declared, an error is returned.
    pub fn get_proposition(&self, label: &T) -> Result<&Proposition<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.propositions[*i])
            .ok_or_else(|| anyhow!("no such proposition: {}", label))
    }

    /// Checks that a literal resolves to a declared proposition.
    ///
    /// On failure, a [`CaesError::UndeclaredProposition`] carrying the offending
    /// label is returned.
    pub fn check_literal(&self, literal: &Literal<T>) -> Result<()> {
        if self.contains(literal.label()) {
            Ok(())
        } else {
            Err(CaesError::UndeclaredProposition(literal.label().to_string()).into())
        }
    }

    /// Returns an iterator to the propositions.
    pub fn iter(&self) -> impl Iterator<Item = &Proposition<T>> + '_ {
        self.propositions.iter()
    }
}
