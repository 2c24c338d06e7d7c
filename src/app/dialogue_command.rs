use super::app_helper::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::{Context, Result};
use carneades::dialogue::Dialogue;
use carneades::io::{write_dialogue_outcome, CaesReader};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

const CMD_NAME: &str = "dialogue";

const ARG_TURN_LIMIT: &str = "TURN_LIMIT";

pub(crate) struct DialogueCommand;

impl DialogueCommand {
    pub(crate) fn new() -> Self {
        DialogueCommand
    }
}

impl<'a> Command<'a> for DialogueCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Decides the issues of an instance through a proponent/opponent dialogue")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::issue_arg())
            .arg(
                Arg::with_name(ARG_TURN_LIMIT)
                    .long("turn-limit")
                    .empty_values(false)
                    .multiple(false)
                    .help("the maximal number of dialogue turns")
                    .required(false),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = CaesReader::default();
        let instance = common::read_file_path(file, &mut reader)?;
        let issues = common::issues_to_decide(&instance, &reader, arg_matches)?;
        let turn_limit = arg_matches
            .value_of(ARG_TURN_LIMIT)
            .map(|s| {
                s.parse::<usize>()
                    .with_context(|| format!(r#"while parsing the turn limit "{}""#, s))
            })
            .transpose()?;
        let caes = instance.caes();
        let mut stdout = std::io::stdout();
        for issue in &issues {
            let dialogue = match turn_limit {
                Some(limit) => Dialogue::with_turn_limit(&caes, limit),
                None => Dialogue::new(&caes),
            };
            let outcome = dialogue.run(issue)?;
            write_dialogue_outcome(&mut stdout, issue, &outcome)?;
        }
        Ok(())
    }
}
