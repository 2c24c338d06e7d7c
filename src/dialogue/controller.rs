use super::{ClosingReason, DialogueOutcome, DialogueState, Party, TurnRecord};
use crate::caes::{Argument, Caes, Literal, WorkingSet};
use crate::utils::LabelType;
use anyhow::Result;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;

/// The error raised when a dialogue does not close within its turn limit.
///
/// The turns played before the limit was hit are kept for diagnosis.
#[derive(Debug, Error)]
#[error(r#"dialogue on issue "{issue}" did not close within {limit} turn(s)"#)]
pub struct NoProgressError<T>
where
    T: LabelType,
{
    issue: Literal<T>,
    limit: usize,
    trace: Vec<TurnRecord<T>>,
}

impl<T> NoProgressError<T>
where
    T: LabelType,
{
    /// Returns the issue the dialogue was about.
    pub fn issue(&self) -> &Literal<T> {
        &self.issue
    }

    /// Returns the turn limit that was hit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the turns played before the limit was hit.
    pub fn trace(&self) -> &[TurnRecord<T>] {
        &self.trace
    }
}

/// Runs dialogues over a Carneades structure.
///
/// A dialogue starts from an empty working set.
/// Each turn, the burden holder plays the argument of greatest audience weight,
/// among those not yet in play, that is applicable once added and relevant to
/// the open question: the proponent supports the issue or the current
/// contention, the opponent supports an exception of a standing proponent
/// argument, rebuts its conclusion, or backs a point it failed to establish on
/// a previous turn.
/// Played arguments are never retracted.
///
/// The burden of production shifts to the other party when the moved argument
/// makes its conclusion acceptable; otherwise the holder keeps it, with the
/// unestablished conclusion as the contention to come back to.
///
/// The dialogue closes when the burden holder has no argument to play, or when
/// every argument is in play; the verdict is then the acceptability of the
/// issue over the final working set.
/// A turn limit bounds pathological exchanges; hitting it raises a
/// [`NoProgressError`] carrying the partial trace.
pub struct Dialogue<'c, T>
where
    T: LabelType,
{
    caes: &'c Caes<'c, T>,
    turn_limit: usize,
}

// a burden holder's move: the argument to play, the sub-issue it concludes and
// the literal it puts in doubt, if any
struct Move<T>
where
    T: LabelType,
{
    arg_id: usize,
    sub_issue: Literal<T>,
    questioned: Option<Literal<T>>,
}

impl<'c, T> Dialogue<'c, T>
where
    T: LabelType + Send + Sync + 'static,
{
    /// Builds a dialogue runner with a turn limit equal to the number of arguments.
    ///
    /// Each turn puts exactly one argument in play, so this limit is never hit.
    pub fn new(caes: &'c Caes<'c, T>) -> Self {
        Dialogue {
            caes,
            turn_limit: caes.arguments().len(),
        }
    }

    /// Builds a dialogue runner with an explicit turn limit.
    pub fn with_turn_limit(caes: &'c Caes<'c, T>, turn_limit: usize) -> Self {
        Dialogue { caes, turn_limit }
    }

    /// Runs a dialogue over an issue until it closes.
    ///
    /// An error is returned if the issue does not resolve to a declared
    /// proposition, or if the turn limit is hit before the dialogue closes; in
    /// the latter case the error downcasts to a [`NoProgressError`].
    pub fn run(&self, issue: &Literal<T>) -> Result<DialogueOutcome<T>> {
        self.caes.check_literal(issue)?;
        let arguments = self.caes.arguments();
        let has_pro = arguments.arguments_pro(issue).next().is_some();
        let has_con = arguments.arguments_con(issue).next().is_some();
        if !has_pro && !has_con {
            debug!(r#"no argument concludes "{}" or its negation; closing at once"#, issue);
            return Ok(DialogueOutcome::new(false, ClosingReason::NoArguments, Vec::new()));
        }
        if has_pro && !self.attackable(issue) {
            debug!(r#"the claim "{}" cannot be questioned; closing at once"#, issue);
            return Ok(DialogueOutcome::new(
                true,
                ClosingReason::SilenceImpliesConsent,
                Vec::new(),
            ));
        }
        let mut state = DialogueState::opening(issue, arguments.len());
        let mut trace = Vec::new();
        loop {
            if state.working().len() == arguments.len() {
                let accepted = self.caes.acceptable(issue, state.working());
                return Ok(DialogueOutcome::new(
                    accepted,
                    ClosingReason::ArgumentsExhausted,
                    trace,
                ));
            }
            if state.turn() >= self.turn_limit {
                return Err(NoProgressError {
                    issue: issue.clone(),
                    limit: self.turn_limit,
                    trace,
                }
                .into());
            }
            let mover = state.burden();
            let candidate = match mover {
                Party::Proponent => self.proponent_move(issue, &state),
                Party::Opponent => self.opponent_move(&state),
            };
            let candidate = match candidate {
                Some(m) => m,
                None => {
                    let accepted = self.caes.acceptable(issue, state.working());
                    return Ok(DialogueOutcome::new(
                        accepted,
                        ClosingReason::BurdenUnmet(mover),
                        trace,
                    ));
                }
            };
            let working = state.working().with(candidate.arg_id);
            let sub_issue_accepted = self.caes.acceptable(&candidate.sub_issue, &working);
            let issue_accepted = self.caes.acceptable(issue, &working);
            let (burden, contention) = if sub_issue_accepted {
                match mover {
                    Party::Proponent => (Party::Opponent, None),
                    Party::Opponent => (Party::Proponent, Some(candidate.sub_issue.negated())),
                }
            } else {
                (mover, Some(candidate.sub_issue.clone()))
            };
            debug!(
                r#"turn {}: {} plays "{}"; sub-issue "{}" is {}, issue "{}" is {}"#,
                state.turn() + 1,
                mover,
                arguments.get_argument_by_id(candidate.arg_id),
                candidate.sub_issue,
                if sub_issue_accepted { "acceptable" } else { "not acceptable" },
                issue,
                if issue_accepted { "acceptable" } else { "not acceptable" },
            );
            trace.push(TurnRecord::new(
                state.turn() + 1,
                mover,
                self.working_labels(&working),
                candidate.sub_issue.clone(),
                sub_issue_accepted,
                issue_accepted,
            ));
            state = state.advanced(
                candidate.arg_id,
                candidate.sub_issue,
                candidate.questioned,
                burden,
                contention,
            );
        }
    }

    // a claim stands unquestioned if nothing concludes its negation, no premise
    // of an argument pro it can be rebutted, and no exception of such an
    // argument can be backed
    fn attackable(&self, issue: &Literal<T>) -> bool {
        let arguments = self.caes.arguments();
        if arguments.arguments_con(issue).next().is_some() {
            return true;
        }
        arguments.arguments_pro(issue).any(|a| {
            a.premises()
                .iter()
                .any(|p| arguments.arguments_con(p).next().is_some())
                || a.exceptions()
                    .iter()
                    .any(|e| arguments.arguments_pro(e).next().is_some())
        })
    }

    // the literals the proponent may support: the issue, the pending contention,
    // and the premises of in-play arguments concluding one of these
    fn support_targets(&self, issue: &Literal<T>, state: &DialogueState<T>) -> HashSet<Literal<T>> {
        let mut targets = HashSet::new();
        targets.insert(issue.clone());
        if let Some(contention) = state.contention() {
            targets.insert(contention.clone());
        }
        loop {
            let mut grown = false;
            for id in state.working().iter() {
                let argument = self.caes.arguments().get_argument_by_id(id);
                if targets.contains(argument.conclusion()) {
                    for premise in argument.premises() {
                        grown |= targets.insert(premise.clone());
                    }
                }
            }
            if !grown {
                return targets;
            }
        }
    }

    fn proponent_move(&self, issue: &Literal<T>, state: &DialogueState<T>) -> Option<Move<T>> {
        let targets = self.support_targets(issue, state);
        let candidates = self
            .caes
            .arguments()
            .iter()
            .filter(|a| !state.working().contains(a.id()))
            .filter(|a| targets.contains(a.conclusion()))
            .filter(|a| self.caes.applicable(a, &state.working().with(a.id())));
        self.best_candidate(candidates).map(|a| Move {
            arg_id: a.id(),
            sub_issue: a.conclusion().clone(),
            questioned: None,
        })
    }

    fn opponent_move(&self, state: &DialogueState<T>) -> Option<Move<T>> {
        let arguments = self.caes.arguments();
        // a point the opponent failed to establish gets another try first
        if let Some(contention) = state.contention() {
            let candidates = arguments
                .arguments_pro(contention)
                .filter(|a| !state.working().contains(a.id()))
                .filter(|a| self.caes.applicable(a, &state.working().with(a.id())));
            if let Some(a) = self.best_candidate(candidates) {
                return Some(Move {
                    arg_id: a.id(),
                    sub_issue: a.conclusion().clone(),
                    questioned: None,
                });
            }
        }
        let standing: Vec<&Argument<T>> = state
            .working()
            .iter()
            .map(|id| arguments.get_argument_by_id(id))
            .filter(|a| state.mover_of(a.id()) == Some(state.burden().other()))
            .filter(|a| self.caes.applicable(a, state.working()))
            .collect();
        // undercutting through an exception comes before rebutting a conclusion
        let mut candidates: Vec<(&Argument<T>, Literal<T>)> = Vec::new();
        for target in &standing {
            for exception in target.exceptions() {
                for a in arguments.arguments_pro(exception) {
                    if !state.working().contains(a.id())
                        && self.caes.applicable(a, &state.working().with(a.id()))
                    {
                        candidates.push((a, target.conclusion().clone()));
                    }
                }
            }
        }
        if candidates.is_empty() {
            for target in &standing {
                for a in arguments.arguments_con(target.conclusion()) {
                    if !state.working().contains(a.id())
                        && self.caes.applicable(a, &state.working().with(a.id()))
                    {
                        candidates.push((a, target.conclusion().clone()));
                    }
                }
            }
        }
        candidates.sort_by(|(a, _), (b, _)| {
            self.caes
                .audience()
                .weight_of(b)
                .total_cmp(&self.caes.audience().weight_of(a))
                .then(a.id().cmp(&b.id()))
        });
        candidates.into_iter().next().map(|(a, attacked)| Move {
            arg_id: a.id(),
            sub_issue: a.conclusion().clone(),
            questioned: Some(attacked),
        })
    }

    fn best_candidate<'b>(
        &self,
        candidates: impl Iterator<Item = &'b Argument<T>>,
    ) -> Option<&'b Argument<T>>
    where
        T: 'b,
    {
        // candidates come in ascending id order, so ties keep the lowest id
        candidates.reduce(|best, a| {
            match self
                .caes
                .audience()
                .weight_of(a)
                .total_cmp(&self.caes.audience().weight_of(best))
            {
                Ordering::Greater => a,
                _ => best,
            }
        })
    }

    fn working_labels(&self, working: &WorkingSet) -> Vec<T> {
        working
            .iter()
            .map(|id| self.caes.arguments().get_argument_by_id(id).label().clone())
            .collect()
    }
}
