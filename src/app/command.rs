use anyhow::Result;
use clap::App;
use clap::ArgMatches;

/// The interface of the subcommands exposed by the binary.
///
/// A command declares its own CLI surface as a clap subcommand and runs itself
/// against the matched arguments; the app helper owns the dispatch.
///
/// Command names must be unique within the app.
pub(crate) trait Command<'a> {
    /// Returns the name under which the command is invoked.
    fn name(&self) -> &str;

    /// Returns the clap subcommand declaring the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Runs the command against its matched arguments.
    ///
    /// Returning `Ok(())` makes the app exit with a success status code; an
    /// error makes it log the error chain and exit with a failure one.
    ///
    /// # Arguments
    ///
    /// * `arg_matches` - the matches clap produced for this subcommand
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
