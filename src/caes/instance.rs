use super::{
    ArgumentSet, Audience, Caes, Language, Literal, Parameters, StandardAssignment, WorkingSet,
};
use crate::utils::LabelType;
use anyhow::{anyhow, Context, Result};

/// A complete Carneades problem instance, as read from an input file.
///
/// An instance bundles the components of a structure with the issues to decide.
/// Building an instance checks the cross-references between the components, so a
/// [`Caes`] can be derived from any instance.
pub struct CaesInstance<T>
where
    T: LabelType,
{
    language: Language<T>,
    arguments: ArgumentSet<T>,
    audience: Audience<T>,
    standards: StandardAssignment<T>,
    params: Parameters,
    issues: Vec<Literal<T>>,
}

impl<T> CaesInstance<T>
where
    T: LabelType,
{
    /// Bundles components into an instance, checking their consistency.
    ///
    /// The checks are the ones made by [`Caes::new`], plus the resolution of each
    /// issue literal. On failure, the error carries the offending identifier.
    pub fn new(
        language: Language<T>,
        arguments: ArgumentSet<T>,
        audience: Audience<T>,
        standards: StandardAssignment<T>,
        params: Parameters,
        issues: Vec<Literal<T>>,
    ) -> Result<Self> {
        Caes::new(&language, &arguments, &audience, &standards, params)
            .context("while checking the structure components")?;
        for issue in &issues {
            language
                .check_literal(issue)
                .with_context(|| format!(r#"while checking the issue "{}""#, issue))?;
        }
        Ok(CaesInstance {
            language,
            arguments,
            audience,
            standards,
            params,
            issues,
        })
    }

    /// Returns the language of the instance.
    pub fn language(&self) -> &Language<T> {
        &self.language
    }

    /// Returns the argument set of the instance.
    pub fn arguments(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Returns the audience of the instance.
    pub fn audience(&self) -> &Audience<T> {
        &self.audience
    }

    /// Returns the proof standard assignment of the instance.
    pub fn standards(&self) -> &StandardAssignment<T> {
        &self.standards
    }

    /// Returns the threshold parameters of the instance.
    pub fn params(&self) -> Parameters {
        self.params
    }

    /// Returns the issues declared by the instance, in declaration order.
    pub fn issues(&self) -> &[Literal<T>] {
        &self.issues
    }

    /// Derives an evaluation structure borrowing the components of this instance.
    pub fn caes(&self) -> Caes<T> {
        // the components were checked at construction time
        match Caes::new(
            &self.language,
            &self.arguments,
            &self.audience,
            &self.standards,
            self.params,
        ) {
            Ok(caes) => caes,
            Err(_) => unreachable!(),
        }
    }

    /// Returns a working set spanning the full argument set of the instance.
    pub fn full_working_set(&self) -> WorkingSet {
        WorkingSet::full(self.arguments.len())
    }

    /// Parses a literal against the language of this instance.
    ///
    /// The expected format is the proposition label, with an optional single `-`
    /// prefix for a negative literal.
    pub fn parse_literal(&self, s: &str) -> Result<Literal<T>>
    where
        T: std::str::FromStr,
    {
        let (label_str, positive) = match s.strip_prefix('-') {
            Some(rest) => (rest, false),
            None => (s, true),
        };
        let label = T::from_str(label_str)
            .map_err(|_| anyhow!(r#"cannot parse proposition label "{}""#, label_str))?;
        let literal = if positive {
            Literal::pos(label)
        } else {
            Literal::neg(label)
        };
        self.language.check_literal(&literal)?;
        Ok(literal)
    }
}
