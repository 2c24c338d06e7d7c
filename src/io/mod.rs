//! Reading problem instances and writing verdicts.

mod caes_reader;

pub use caes_reader::CaesReader;

mod specs;

pub use specs::{InstanceReader, WarningHandler};

mod verdict_writer;

pub use verdict_writer::{write_dialogue_outcome, write_turn_record, write_verdict};
