use super::{
    Argument, ArgumentSet, Audience, Language, Literal, Parameters, ProofStandard,
    StandardAssignment, WorkingSet,
};
use crate::utils::LabelType;
use anyhow::Result;
use log::debug;
use std::collections::{HashMap, HashSet};

/// A Carneades Argument Evaluation Structure.
///
/// A CAES borrows a language, an argument set, an audience and a proof standard
/// assignment from its caller and treats them as immutable.
/// It decides the *applicability* of arguments and the *acceptability* of
/// literals, two notions defined by mutual recursion: an argument is applicable
/// when its premises are assumed or acceptable and none of its exceptions is,
/// and a literal is acceptable when the applicable arguments pro and con it
/// satisfy its proof standard.
///
/// Evaluation is a pure function of its inputs.
/// Cyclic dependencies between literals are cut by treating a literal whose
/// evaluation is already in progress as not yet acceptable, so no argument can
/// support itself.
///
/// # Example
///
/// ```
/// # use carneades::caes::{
/// #     ArgumentSet, Audience, Caes, Language, Literal, Parameters, StandardAssignment,
/// #     WorkingSet,
/// # };
/// # use std::collections::HashMap;
/// let mut language = Language::default();
/// language.new_proposition("wet", "the grass is wet");
/// language.new_proposition("rain", "it rained tonight");
/// let mut arguments = ArgumentSet::default();
/// arguments
///     .new_argument("arg1", vec![Literal::pos("rain")], vec![], Literal::pos("wet"), 0.8)
///     .unwrap();
/// let audience = Audience::new(vec![Literal::pos("rain")], HashMap::new()).unwrap();
/// let standards = StandardAssignment::default();
/// let caes =
///     Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
/// let working = WorkingSet::full(arguments.len());
/// assert!(caes.acceptable(&Literal::pos("wet"), &working));
/// assert!(!caes.acceptable(&Literal::neg("wet"), &working));
/// ```
pub struct Caes<'a, T>
where
    T: LabelType,
{
    language: &'a Language<T>,
    arguments: &'a ArgumentSet<T>,
    audience: &'a Audience<T>,
    standards: &'a StandardAssignment<T>,
    params: Parameters,
}

/// The outcome of a single-shot evaluation of an issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    accepted: bool,
    standard: ProofStandard,
}

impl Verdict {
    /// Returns `true` iff the issue met its proof standard.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns the proof standard the issue was evaluated under.
    pub fn standard(&self) -> ProofStandard {
        self.standard
    }
}

// Bookkeeping local to one top-level evaluation call.
//
// The guard set holds the literals whose evaluation is in progress; revisiting
// one of them cuts the recursion. The memo table caches settled literals; it is
// valid for a single working set only and is never reused across dialogue turns.
struct EvalContext<T>
where
    T: LabelType,
{
    in_progress: HashSet<Literal<T>>,
    memo: HashMap<Literal<T>, bool>,
}

impl<T> EvalContext<T>
where
    T: LabelType,
{
    fn new() -> Self {
        EvalContext {
            in_progress: HashSet::new(),
            memo: HashMap::new(),
        }
    }
}

impl<'a, T> Caes<'a, T>
where
    T: LabelType,
{
    /// Builds a new CAES over caller-owned components.
    ///
    /// The components are re-validated before use: every literal occurring in an
    /// argument, an assumption or a standard assignment must resolve to a declared
    /// proposition, and every argument weight must lie in the unit interval.
    /// On failure, the error carries the offending identifier and no structure is built.
    pub fn new(
        language: &'a Language<T>,
        arguments: &'a ArgumentSet<T>,
        audience: &'a Audience<T>,
        standards: &'a StandardAssignment<T>,
        params: Parameters,
    ) -> Result<Self> {
        for argument in arguments.iter() {
            let weight = argument.weight();
            if !(0.0..=1.0).contains(&weight) {
                return Err(super::CaesError::MalformedArgument {
                    id: argument.label().to_string(),
                    weight,
                }
                .into());
            }
            language.check_literal(argument.conclusion())?;
            for literal in argument.premises().iter().chain(argument.exceptions()) {
                language.check_literal(literal)?;
            }
        }
        for literal in audience.iter_assumptions() {
            language.check_literal(literal)?;
        }
        for (label, _) in standards.iter() {
            language.check_literal(&Literal::pos(label.clone()))?;
        }
        Ok(Caes {
            language,
            arguments,
            audience,
            standards,
            params,
        })
    }

    /// Returns the language of the structure.
    pub fn language(&self) -> &Language<T> {
        self.language
    }

    /// Returns the argument set of the structure.
    pub fn arguments(&self) -> &ArgumentSet<T> {
        self.arguments
    }

    /// Returns the audience of the structure.
    pub fn audience(&self) -> &Audience<T> {
        self.audience
    }

    /// Returns the proof standard assignment of the structure.
    pub fn standards(&self) -> &StandardAssignment<T> {
        self.standards
    }

    /// Returns the threshold parameters of the structure.
    pub fn params(&self) -> Parameters {
        self.params
    }

    /// Checks that a literal resolves to a declared proposition.
    pub fn check_literal(&self, literal: &Literal<T>) -> Result<()> {
        self.language.check_literal(literal)
    }

    /// Decides whether an argument is applicable in the given working set.
    ///
    /// An argument is applicable iff it is in play, every premise is assumed or,
    /// when neither it nor its negation is assumed, acceptable, and no exception
    /// is assumed or, when neither it nor its negation is assumed, acceptable.
    pub fn applicable(&self, argument: &Argument<T>, working: &WorkingSet) -> bool {
        self.applicable_in(argument, working, &mut EvalContext::new())
    }

    /// Decides whether a literal is acceptable in the given working set.
    ///
    /// The literal is acceptable iff the applicable arguments pro and con it
    /// satisfy the proof standard assigned to its underlying proposition.
    pub fn acceptable(&self, literal: &Literal<T>, working: &WorkingSet) -> bool {
        self.acceptable_in(literal, working, &mut EvalContext::new())
    }

    /// Returns the applicable arguments whose conclusion is the given literal.
    pub fn applicable_pro(
        &self,
        literal: &Literal<T>,
        working: &WorkingSet,
    ) -> Vec<&'a Argument<T>> {
        self.arguments
            .arguments_pro(literal)
            .filter(|a| self.applicable(a, working))
            .collect()
    }

    /// Evaluates an issue against the full argument set.
    ///
    /// An error is returned if the issue does not resolve to a declared proposition.
    pub fn evaluate(&self, issue: &Literal<T>) -> Result<Verdict> {
        self.check_literal(issue)?;
        let working = WorkingSet::full(self.arguments.len());
        let standard = self.standards.get(issue.label());
        let accepted = self.acceptable(issue, &working);
        debug!(
            r#"issue "{}" {} the {} standard"#,
            issue,
            if accepted { "meets" } else { "does not meet" },
            standard,
        );
        Ok(Verdict { accepted, standard })
    }

    fn applicable_in(
        &self,
        argument: &Argument<T>,
        working: &WorkingSet,
        ctx: &mut EvalContext<T>,
    ) -> bool {
        if !working.contains(argument.id()) {
            return false;
        }
        let premises_hold = argument.premises().iter().all(|p| {
            self.audience.is_assumed(p)
                || (!self.audience.is_assumed(&p.negated()) && self.acceptable_in(p, working, ctx))
        });
        if !premises_hold {
            debug!(r#"argument "{}" is not applicable: unmet premise"#, argument.label());
            return false;
        }
        let exceptions_excluded = argument.exceptions().iter().all(|e| {
            !self.audience.is_assumed(e)
                && (self.audience.is_assumed(&e.negated()) || !self.acceptable_in(e, working, ctx))
        });
        if !exceptions_excluded {
            debug!(r#"argument "{}" is not applicable: exception holds"#, argument.label());
        }
        exceptions_excluded
    }

    fn acceptable_in(
        &self,
        literal: &Literal<T>,
        working: &WorkingSet,
        ctx: &mut EvalContext<T>,
    ) -> bool {
        if let Some(settled) = ctx.memo.get(literal) {
            return *settled;
        }
        if !ctx.in_progress.insert(literal.clone()) {
            // cyclic dependency: no argument is self-supporting
            debug!(r#"cycle on literal "{}", defaulting to not yet acceptable"#, literal);
            return false;
        }
        let pro = self.applicable_weights(literal, working, ctx);
        let con = self.applicable_weights(&literal.negated(), working, ctx);
        let standard = self.standards.get(literal.label());
        let accepted = standard.satisfied_by(&pro, &con, &self.params);
        ctx.in_progress.remove(literal);
        ctx.memo.insert(literal.clone(), accepted);
        accepted
    }

    fn applicable_weights(
        &self,
        literal: &Literal<T>,
        working: &WorkingSet,
        ctx: &mut EvalContext<T>,
    ) -> Vec<f64> {
        self.arguments
            .arguments_pro(literal)
            .filter(|a| self.applicable_in(a, working, ctx))
            .map(|a| self.audience.weight_of(a))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caes::ProofStandard;
    use std::collections::HashMap;

    struct Components {
        language: Language<String>,
        arguments: ArgumentSet<String>,
        audience: Audience<String>,
        standards: StandardAssignment<String>,
    }

    fn pos(s: &str) -> Literal<String> {
        Literal::pos(s.to_string())
    }

    fn neg(s: &str) -> Literal<String> {
        Literal::neg(s.to_string())
    }

    // the murder example of the reference Carneades papers
    fn murder_components() -> Components {
        let mut language = Language::default();
        for p in [
            "murder",
            "kill",
            "intent",
            "witness1",
            "unreliable1",
            "witness2",
            "unreliable2",
        ] {
            language.new_proposition(p.to_string(), "");
        }
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument(
                "arg1".to_string(),
                vec![pos("kill"), pos("intent")],
                vec![],
                pos("murder"),
                0.8,
            )
            .unwrap();
        arguments
            .new_argument(
                "arg2".to_string(),
                vec![pos("witness1")],
                vec![pos("unreliable1")],
                pos("intent"),
                0.3,
            )
            .unwrap();
        arguments
            .new_argument(
                "arg3".to_string(),
                vec![pos("witness2")],
                vec![pos("unreliable2")],
                neg("intent"),
                0.8,
            )
            .unwrap();
        let audience = Audience::new(
            vec![pos("kill"), pos("witness1"), pos("witness2"), pos("unreliable2")],
            HashMap::new(),
        )
        .unwrap();
        let standards = StandardAssignment::default();
        Components {
            language,
            arguments,
            audience,
            standards,
        }
    }

    #[test]
    fn test_murder_example_applicability() {
        let c = murder_components();
        let caes = Caes::new(
            &c.language,
            &c.arguments,
            &c.audience,
            &c.standards,
            Parameters::default(),
        )
        .unwrap();
        let working = WorkingSet::full(c.arguments.len());
        // witness1 is assumed and unreliable1 is neither assumed nor acceptable
        assert!(caes.applicable(c.arguments.get_argument(&"arg2".to_string()).unwrap(), &working));
        // unreliable2 is assumed, so the counterargument does not apply
        assert!(!caes.applicable(c.arguments.get_argument(&"arg3".to_string()).unwrap(), &working));
        assert!(caes.applicable(c.arguments.get_argument(&"arg1".to_string()).unwrap(), &working));
    }

    #[test]
    fn test_murder_example_acceptability() {
        let mut c = murder_components();
        c.standards
            .set("intent".to_string(), ProofStandard::BeyondReasonableDoubt);
        let caes = Caes::new(
            &c.language,
            &c.arguments,
            &c.audience,
            &c.standards,
            Parameters::default(),
        )
        .unwrap();
        let working = WorkingSet::full(c.arguments.len());
        // a single 0.3 argument does not put intent beyond reasonable doubt
        assert!(!caes.acceptable(&pos("intent"), &working));
        assert!(!caes.acceptable(&neg("intent"), &working));
        assert!(!caes.acceptable(&pos("murder"), &working));
        assert!(!caes.acceptable(&neg("murder"), &working));
    }

    #[test]
    fn test_argument_outside_working_set_is_not_applicable() {
        let c = murder_components();
        let caes = Caes::new(
            &c.language,
            &c.arguments,
            &c.audience,
            &c.standards,
            Parameters::default(),
        )
        .unwrap();
        let working = WorkingSet::empty(c.arguments.len());
        assert!(!caes.applicable(c.arguments.get_argument(&"arg2".to_string()).unwrap(), &working));
        assert!(!caes.acceptable(&pos("intent"), &working));
    }

    #[test]
    fn test_undeclared_proposition_is_fatal() {
        let c = murder_components();
        let mut standards = StandardAssignment::default();
        standards.set("verdict".to_string(), ProofStandard::Preponderance);
        assert!(Caes::new(
            &c.language,
            &c.arguments,
            &c.audience,
            &standards,
            Parameters::default(),
        )
        .is_err());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let c = murder_components();
        let caes = Caes::new(
            &c.language,
            &c.arguments,
            &c.audience,
            &c.standards,
            Parameters::default(),
        )
        .unwrap();
        let first = caes.evaluate(&pos("intent")).unwrap();
        for _ in 0..10 {
            assert_eq!(first, caes.evaluate(&pos("intent")).unwrap());
        }
        assert!(first.accepted());
        assert_eq!(ProofStandard::Scintilla, first.standard());
        assert!(caes.evaluate(&pos("undeclared")).is_err());
    }

    #[test]
    fn test_cycle_terminates_and_defaults_to_rejection() {
        let mut language = Language::default();
        language.new_proposition("p".to_string(), "");
        language.new_proposition("q".to_string(), "");
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument("arg1".to_string(), vec![pos("p")], vec![], pos("q"), 0.5)
            .unwrap();
        arguments
            .new_argument("arg2".to_string(), vec![pos("q")], vec![], pos("p"), 0.5)
            .unwrap();
        let audience = Audience::new(vec![], HashMap::new()).unwrap();
        let standards = StandardAssignment::default();
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let working = WorkingSet::full(arguments.len());
        assert!(!caes.acceptable(&pos("p"), &working));
        assert!(!caes.acceptable(&pos("q"), &working));
    }

    #[test]
    fn test_linked_argument_weight_is_not_a_sum() {
        let mut language = Language::default();
        for p in ["issue", "s1", "s2", "s3", "e1", "e2", "e3"] {
            language.new_proposition(p.to_string(), "");
        }
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument("sub1".to_string(), vec![pos("e1")], vec![], pos("s1"), 0.2)
            .unwrap();
        arguments
            .new_argument("sub2".to_string(), vec![pos("e2")], vec![], pos("s2"), 0.1)
            .unwrap();
        arguments
            .new_argument("sub3".to_string(), vec![pos("e3")], vec![], pos("s3"), 0.1)
            .unwrap();
        arguments
            .new_argument(
                "linked".to_string(),
                vec![pos("s1"), pos("s2"), pos("s3")],
                vec![],
                pos("issue"),
                0.5,
            )
            .unwrap();
        let audience =
            Audience::new(vec![pos("e1"), pos("e2"), pos("e3")], HashMap::new()).unwrap();
        let standards = StandardAssignment::default();
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let working = WorkingSet::full(arguments.len());
        assert!(caes.acceptable(&pos("issue"), &working));
        let weights: Vec<f64> = caes
            .applicable_pro(&pos("issue"), &working)
            .iter()
            .map(|a| c_weight(&caes, a))
            .collect();
        assert_eq!(vec![0.5], weights);
    }

    fn c_weight(caes: &Caes<String>, argument: &Argument<String>) -> f64 {
        caes.audience().weight_of(argument)
    }

    #[test]
    fn test_convergent_arguments_fall_back_on_defeat() {
        let mut language = Language::default();
        for p in ["i", "w1", "w2", "flaw", "evidence"] {
            language.new_proposition(p.to_string(), "");
        }
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument(
                "strong".to_string(),
                vec![pos("w1")],
                vec![pos("flaw")],
                pos("i"),
                0.5,
            )
            .unwrap();
        arguments
            .new_argument("weak".to_string(), vec![pos("w2")], vec![], pos("i"), 0.2)
            .unwrap();
        arguments
            .new_argument(
                "defeater".to_string(),
                vec![pos("evidence")],
                vec![],
                pos("flaw"),
                0.6,
            )
            .unwrap();
        let mut standards = StandardAssignment::default();
        standards.set("i".to_string(), ProofStandard::Preponderance);
        let audience = Audience::new(
            vec![pos("w1"), pos("w2"), pos("evidence")],
            HashMap::new(),
        )
        .unwrap();
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let working = WorkingSet::full(arguments.len());
        // the 0.5 argument is defeated through its exception; the 0.2 one remains
        assert!(!caes.applicable(arguments.get_argument(&"strong".to_string()).unwrap(), &working));
        let weights: Vec<f64> = caes
            .applicable_pro(&pos("i"), &working)
            .iter()
            .map(|a| c_weight(&caes, a))
            .collect();
        assert_eq!(vec![0.2], weights);
        assert!(caes.acceptable(&pos("i"), &working));
    }

    #[test]
    fn test_negation_exclusivity_under_preponderance() {
        let mut language = Language::default();
        for p in ["p", "a", "b"] {
            language.new_proposition(p.to_string(), "");
        }
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument("pro".to_string(), vec![pos("a")], vec![], pos("p"), 0.7)
            .unwrap();
        arguments
            .new_argument("con".to_string(), vec![pos("b")], vec![], neg("p"), 0.7)
            .unwrap();
        let mut standards = StandardAssignment::default();
        standards.set("p".to_string(), ProofStandard::Preponderance);
        let audience = Audience::new(vec![pos("a"), pos("b")], HashMap::new()).unwrap();
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let working = WorkingSet::full(arguments.len());
        assert!(!(caes.acceptable(&pos("p"), &working) && caes.acceptable(&neg("p"), &working)));
    }

    #[test]
    fn test_monotonicity_of_accepted_verdicts() {
        // adding a pro argument at least as strong as the strongest one never
        // flips an accepted verdict, whatever the standard
        for standard in [
            ProofStandard::Scintilla,
            ProofStandard::Preponderance,
            ProofStandard::ClearAndConvincing,
            ProofStandard::BeyondReasonableDoubt,
            ProofStandard::DialecticalValidity,
        ] {
            let mut language = Language::default();
            for p in ["p", "a", "b"] {
                language.new_proposition(p.to_string(), "");
            }
            let audience = Audience::new(vec![pos("a"), pos("b")], HashMap::new()).unwrap();
            let mut standards = StandardAssignment::default();
            standards.set("p".to_string(), standard);
            let mut arguments = ArgumentSet::default();
            arguments
                .new_argument("pro".to_string(), vec![pos("a")], vec![], pos("p"), 0.8)
                .unwrap();
            let before = {
                let caes = Caes::new(
                    &language,
                    &arguments,
                    &audience,
                    &standards,
                    Parameters::default(),
                )
                .unwrap();
                caes.acceptable(&pos("p"), &WorkingSet::full(arguments.len()))
            };
            if !before {
                continue;
            }
            arguments
                .new_argument("reinforcement".to_string(), vec![pos("b")], vec![], pos("p"), 0.9)
                .unwrap();
            let caes = Caes::new(
                &language,
                &arguments,
                &audience,
                &standards,
                Parameters::default(),
            )
            .unwrap();
            assert!(
                caes.acceptable(&pos("p"), &WorkingSet::full(arguments.len())),
                "verdict flipped under {:?}",
                standard
            );
        }
    }
}
