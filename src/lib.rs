//! Carneades is an implementation of the Carneades model of structured argumentation,
//! in which an audience with assumptions and argument weights decides disputed issues
//! under proof standards ranging from scintilla of evidence to dialectical validity.

#![warn(missing_docs)]

pub mod caes;

pub mod dialogue;

pub mod io;

pub mod utils;
