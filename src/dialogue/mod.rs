//! The dialogue protocol.
//!
//! A dialogue evaluates an issue by simulating a proponent/opponent exchange:
//! starting from an empty working set, the party holding the burden of
//! production puts one argument in play per turn until the burden question is
//! settled or no argument is left to play.

mod controller;

pub use controller::{Dialogue, NoProgressError};

mod state;

pub use state::{ClaimStatus, ClosingReason, DialogueOutcome, DialogueState, Party, TurnRecord};
