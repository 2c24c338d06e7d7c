use super::app_helper::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::Result;
use carneades::io::{write_verdict, CaesReader};
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "evaluate";

pub(crate) struct EvaluateCommand;

impl EvaluateCommand {
    pub(crate) fn new() -> Self {
        EvaluateCommand
    }
}

impl<'a> Command<'a> for EvaluateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Decides the issues of an instance against the full argument set")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::issue_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = CaesReader::default();
        let instance = common::read_file_path(file, &mut reader)?;
        let issues = common::issues_to_decide(&instance, &reader, arg_matches)?;
        let caes = instance.caes();
        let mut stdout = std::io::stdout();
        for issue in &issues {
            let verdict = caes.evaluate(issue)?;
            write_verdict(&mut stdout, issue, &verdict)?;
        }
        Ok(())
    }
}
