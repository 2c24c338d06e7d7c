use anyhow::{anyhow, Context, Result};
use carneades::{
    caes::{CaesInstance, Literal},
    io::InstanceReader,
    utils::LabelType,
};
use clap::{Arg, ArgMatches};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{BufReader, Read},
    path::PathBuf,
};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the problem instance")
        .required(true)
}

pub(crate) const ARG_ISSUE: &str = "ISSUE";

pub(crate) fn issue_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_ISSUE)
        .short("i")
        .long("issue")
        .empty_values(false)
        .multiple(false)
        .allow_hyphen_values(true)
        .help("the issue to decide, overriding the ones declared by the instance")
        .required(false)
}

pub(crate) fn read_file_path<T>(
    file_path: &str,
    reader: &mut dyn InstanceReader<T>,
) -> Result<CaesInstance<T>>
where
    T: LabelType,
{
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let instance = read_file_path_with(file_path, &|r| reader.read(r))?;
    info!(
        "the instance has {} proposition(s), {} argument(s) and {} issue(s)",
        instance.language().len(),
        instance.arguments().len(),
        instance.issues().len(),
    );
    Ok(instance)
}

pub(crate) fn read_file_path_with<F, R>(file_path: &str, reader: &F) -> Result<R>
where
    F: Fn(&mut dyn Read) -> Result<R>,
{
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    (reader)(&mut file_reader)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

pub(crate) fn issues_to_decide<T>(
    instance: &CaesInstance<T>,
    reader: &dyn InstanceReader<T>,
    arg_matches: &ArgMatches<'_>,
) -> Result<Vec<Literal<T>>>
where
    T: LabelType,
{
    let issues = match arg_matches.value_of(ARG_ISSUE) {
        Some(s) => vec![reader.read_literal_from_str(instance, s)?],
        None => instance.issues().to_vec(),
    };
    if issues.is_empty() {
        return Err(anyhow!(
            "the instance declares no issue and none was given on the command line"
        ));
    }
    Ok(issues)
}
