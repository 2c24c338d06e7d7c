mod app_helper;
pub(crate) use app_helper::AppHelper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

pub(crate) mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod dialogue_command;
pub(crate) use dialogue_command::DialogueCommand;

mod evaluate_command;
pub(crate) use evaluate_command::EvaluateCommand;

mod writable_string;
