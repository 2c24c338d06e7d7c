use crate::caes::{Literal, WorkingSet};
use crate::utils::LabelType;
use std::collections::HashMap;
use strum_macros::Display;

/// The two parties of a dialogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Party {
    /// The party defending the issue.
    Proponent,
    /// The party attacking the issue.
    Opponent,
}

impl Party {
    /// Returns the other party.
    pub fn other(self) -> Self {
        match self {
            Party::Proponent => Party::Opponent,
            Party::Opponent => Party::Proponent,
        }
    }
}

/// The dialogue status of a literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimStatus {
    /// The literal was put forward and not attacked so far.
    Claimed,
    /// The literal was put in doubt by the other party.
    Questioned,
}

/// A snapshot of a dialogue at a turn boundary.
///
/// States are immutable; each turn derives a successor through
/// [`DialogueState::advanced`] instead of mutating in place, so the sequence of
/// states can be reconstructed from the trace.
pub struct DialogueState<T>
where
    T: LabelType,
{
    turn: usize,
    burden: Party,
    working: WorkingSet,
    statuses: HashMap<Literal<T>, ClaimStatus>,
    movers: HashMap<usize, Party>,
    contention: Option<Literal<T>>,
}

impl<T> DialogueState<T>
where
    T: LabelType,
{
    /// Builds the state a dialogue over a questioned issue starts from.
    ///
    /// The burden of production initially lies with the proponent and no argument
    /// is in play.
    pub(crate) fn opening(issue: &Literal<T>, n_arguments: usize) -> Self {
        let mut statuses = HashMap::new();
        statuses.insert(issue.clone(), ClaimStatus::Questioned);
        DialogueState {
            turn: 0,
            burden: Party::Proponent,
            working: WorkingSet::empty(n_arguments),
            statuses,
            movers: HashMap::new(),
            contention: None,
        }
    }

    /// Returns the number of completed turns.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the party holding the burden of production.
    pub fn burden(&self) -> Party {
        self.burden
    }

    /// Returns the working set of the state.
    pub fn working(&self) -> &WorkingSet {
        &self.working
    }

    /// Returns the dialogue status of a literal, if it was ever put forward.
    pub fn status_of(&self, literal: &Literal<T>) -> Option<ClaimStatus> {
        self.statuses.get(literal).copied()
    }

    /// Returns the party which put the given argument in play, if any did.
    pub fn mover_of(&self, arg_id: usize) -> Option<Party> {
        self.movers.get(&arg_id).copied()
    }

    /// Returns the sub-issue the burden holder must still establish, if any.
    pub fn contention(&self) -> Option<&Literal<T>> {
        self.contention.as_ref()
    }

    /// Derives the successor state after a move by the current burden holder.
    ///
    /// The moved argument joins the working set, its conclusion is claimed, the
    /// attacked literal (if any) becomes questioned, and the burden and the
    /// contention are replaced by the given ones.
    pub(crate) fn advanced(
        &self,
        arg_id: usize,
        claimed: Literal<T>,
        questioned: Option<Literal<T>>,
        burden: Party,
        contention: Option<Literal<T>>,
    ) -> Self {
        let mut statuses = self.statuses.clone();
        statuses.entry(claimed).or_insert(ClaimStatus::Claimed);
        if let Some(literal) = questioned {
            statuses.insert(literal, ClaimStatus::Questioned);
        }
        let mut movers = self.movers.clone();
        movers.insert(arg_id, self.burden);
        DialogueState {
            turn: self.turn + 1,
            burden,
            working: self.working.with(arg_id),
            statuses,
            movers,
            contention,
        }
    }
}

/// What a dialogue turn did and how the issue stood afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnRecord<T>
where
    T: LabelType,
{
    turn: usize,
    burden: Party,
    working: Vec<T>,
    sub_issue: Literal<T>,
    sub_issue_accepted: bool,
    issue_accepted: bool,
}

impl<T> TurnRecord<T>
where
    T: LabelType,
{
    pub(crate) fn new(
        turn: usize,
        burden: Party,
        working: Vec<T>,
        sub_issue: Literal<T>,
        sub_issue_accepted: bool,
        issue_accepted: bool,
    ) -> Self {
        TurnRecord {
            turn,
            burden,
            working,
            sub_issue,
            sub_issue_accepted,
            issue_accepted,
        }
    }

    /// Returns the turn index, starting at 1.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the party which moved at this turn.
    pub fn burden(&self) -> Party {
        self.burden
    }

    /// Returns the labels of the arguments in play after the move, in id order.
    pub fn working(&self) -> &[T] {
        &self.working
    }

    /// Returns the sub-issue the move was about.
    pub fn sub_issue(&self) -> &Literal<T> {
        &self.sub_issue
    }

    /// Returns `true` iff the sub-issue was acceptable after the move.
    pub fn sub_issue_accepted(&self) -> bool {
        self.sub_issue_accepted
    }

    /// Returns `true` iff the top issue was acceptable after the move.
    pub fn issue_accepted(&self) -> bool {
        self.issue_accepted
    }
}

/// Why a dialogue closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClosingReason {
    /// No argument concludes the issue or its negation.
    NoArguments,
    /// No argument can attack the issue or the arguments pro it.
    SilenceImpliesConsent,
    /// The burden holder found no argument to play.
    BurdenUnmet(Party),
    /// Every argument was put in play.
    ArgumentsExhausted,
}

impl std::fmt::Display for ClosingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosingReason::NoArguments => {
                write!(f, "no argument concludes the issue or its negation")
            }
            ClosingReason::SilenceImpliesConsent => write!(f, "the claim was not questioned"),
            ClosingReason::BurdenUnmet(party) => {
                write!(f, "the {} failed to meet its burden of production", party)
            }
            ClosingReason::ArgumentsExhausted => write!(f, "every argument was put in play"),
        }
    }
}

/// The result of a closed dialogue.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogueOutcome<T>
where
    T: LabelType,
{
    accepted: bool,
    reason: ClosingReason,
    trace: Vec<TurnRecord<T>>,
}

impl<T> DialogueOutcome<T>
where
    T: LabelType,
{
    pub(crate) fn new(accepted: bool, reason: ClosingReason, trace: Vec<TurnRecord<T>>) -> Self {
        DialogueOutcome {
            accepted,
            reason,
            trace,
        }
    }

    /// Returns `true` iff the issue was acceptable when the dialogue closed.
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    /// Returns why the dialogue closed.
    pub fn reason(&self) -> ClosingReason {
        self.reason
    }

    /// Returns the turn records, in turn order.
    pub fn trace(&self) -> &[TurnRecord<T>] {
        &self.trace
    }
}
