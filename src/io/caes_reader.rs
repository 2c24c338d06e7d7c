use super::{InstanceReader, WarningHandler};
use crate::caes::{
    ArgumentSet, Audience, CaesInstance, Language, Literal, Parameters, ProofStandard,
    StandardAssignment,
};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

const ID_PATTERN: &str = r"[_[:alpha:]][_[:alpha:]\d]*";
const LIT_PATTERN: &str = r"-?[_[:alpha:]][_[:alpha:]\d]*";
const NUM_PATTERN: &str = r"\d+(?:\.\d+)?";

lazy_static! {
    static ref PROP_LINE: Regex = Regex::new(&format!(
        r#"^prop\(\s*({})\s*(?:,\s*"([^"]*)"\s*)?\)\.$"#,
        ID_PATTERN
    ))
    .unwrap();
    static ref ARG_LINE: Regex = Regex::new(&format!(
        r"^arg\(\s*({})\s*,\s*\[([^\]]*)\]\s*,\s*~\[([^\]]*)\]\s*,\s*({})\s*,\s*({})\s*\)\.$",
        ID_PATTERN, LIT_PATTERN, NUM_PATTERN
    ))
    .unwrap();
    static ref ASSUME_LINE: Regex =
        Regex::new(&format!(r"^assume\(\s*({})\s*\)\.$", LIT_PATTERN)).unwrap();
    static ref WEIGH_LINE: Regex = Regex::new(&format!(
        r"^weigh\(\s*({})\s*,\s*({})\s*\)\.$",
        ID_PATTERN, NUM_PATTERN
    ))
    .unwrap();
    static ref STANDARD_LINE: Regex = Regex::new(&format!(
        r"^standard\(\s*({})\s*,\s*({})\s*\)\.$",
        ID_PATTERN, ID_PATTERN
    ))
    .unwrap();
    static ref PARAM_LINE: Regex = Regex::new(&format!(
        r"^param\(\s*(alpha|beta|gamma)\s*,\s*({})\s*\)\.$",
        NUM_PATTERN
    ))
    .unwrap();
    static ref ISSUE_LINE: Regex =
        Regex::new(&format!(r"^issue\(\s*({})\s*\)\.$", LIT_PATTERN)).unwrap();
    static ref LIT_TOKEN: Regex = Regex::new(&format!(r"^{}$", LIT_PATTERN)).unwrap();
}

fn literal_of(s: &str) -> Literal<String> {
    match s.strip_prefix('-') {
        Some(rest) => Literal::neg(rest.to_string()),
        None => Literal::pos(s.to_string()),
    }
}

fn literal_list(s: &str) -> Result<Vec<Literal<String>>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            if LIT_TOKEN.is_match(t) {
                Ok(literal_of(t))
            } else {
                Err(anyhow!(r#"invalid literal "{}""#, t))
            }
        })
        .collect()
}

/// A reader for the Carneades instance format.
///
/// This object is used to read a [`CaesInstance`] encoded as a sequence of facts, one per line.
/// The [LabelType](crate::utils::LabelType) of the returned instances is [String].
///
/// # Instance format
///
/// The following content declares two propositions, an argument for `wet`
/// weighing 0.8 with a premise and an exception, an assumption, a proof
/// standard, a threshold parameter and the issue to decide.
/// Blank lines and lines starting with `%` are ignored.
///
/// ```text
/// prop(wet, "the grass is wet").
/// prop(rain).
/// prop(sprinkler).
/// arg(a1, [rain], ~[sprinkler], wet, 0.8).
/// assume(rain).
/// standard(wet, preponderance).
/// param(alpha, 0.5).
/// issue(wet).
/// ```
///
/// Propositions must be declared before they are used; the other facts may come
/// in any order.
/// A `weigh(a1, 0.2).` fact overrides the weight of an argument for the audience.
///
/// # Example
///
/// ```
/// # use carneades::caes::CaesInstance;
/// # use carneades::io::{CaesReader, InstanceReader};
/// fn read_instance_from_str(s: &str) -> CaesInstance<String> {
///     let reader = CaesReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid instance")
/// }
/// # read_instance_from_str("prop(murder).");
/// ```
#[derive(Default)]
pub struct CaesReader {
    warning_handlers: Vec<WarningHandler>,
}

impl CaesReader {
    fn warn(&self, line_index: usize, message: String) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line_index, message.clone()));
    }
}

impl InstanceReader<String> for CaesReader {
    fn read(&self, reader: &mut dyn Read) -> Result<CaesInstance<String>> {
        let mut language = Language::default();
        let mut arguments = ArgumentSet::default();
        let mut assumptions = Vec::new();
        let mut seen_assumptions = HashSet::new();
        let mut weights = HashMap::new();
        let mut standards = StandardAssignment::default();
        let mut params: HashMap<&str, f64> = HashMap::new();
        let mut issues = Vec::new();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            let l = l.trim();
            if l.is_empty() || l.starts_with('%') {
                continue;
            }
            if let Some(c) = PROP_LINE.captures(l) {
                let label = c.get(1).unwrap().as_str();
                let text = c.get(2).map(|m| m.as_str()).unwrap_or_default();
                if language.contains(&label.to_string()) {
                    self.warn(1 + i, format!(r#"proposition "{}" is declared twice"#, label));
                }
                language.new_proposition(label.to_string(), text);
                continue;
            }
            if let Some(c) = ARG_LINE.captures(l) {
                let premises = literal_list(c.get(2).unwrap().as_str()).with_context(context)?;
                let exceptions = literal_list(c.get(3).unwrap().as_str()).with_context(context)?;
                let conclusion = literal_of(c.get(4).unwrap().as_str());
                for literal in premises.iter().chain(&exceptions).chain([&conclusion]) {
                    language.check_literal(literal).with_context(context)?;
                }
                let weight = c
                    .get(5)
                    .unwrap()
                    .as_str()
                    .parse::<f64>()
                    .with_context(context)?;
                arguments
                    .new_argument(
                        c.get(1).unwrap().as_str().to_string(),
                        premises,
                        exceptions,
                        conclusion,
                        weight,
                    )
                    .with_context(context)?;
                continue;
            }
            if let Some(c) = ASSUME_LINE.captures(l) {
                let literal = literal_of(c.get(1).unwrap().as_str());
                language.check_literal(&literal).with_context(context)?;
                if seen_assumptions.insert(literal.clone()) {
                    assumptions.push(literal);
                } else {
                    self.warn(1 + i, format!(r#"literal "{}" is assumed twice"#, literal));
                }
                continue;
            }
            if let Some(c) = WEIGH_LINE.captures(l) {
                let label = c.get(1).unwrap().as_str().to_string();
                arguments.get_argument(&label).with_context(context)?;
                let weight = c
                    .get(2)
                    .unwrap()
                    .as_str()
                    .parse::<f64>()
                    .with_context(context)?;
                if weights.insert(label.clone(), weight).is_some() {
                    self.warn(1 + i, format!(r#"argument "{}" is weighed twice"#, label));
                }
                continue;
            }
            if let Some(c) = STANDARD_LINE.captures(l) {
                let label = c.get(1).unwrap().as_str().to_string();
                language
                    .check_literal(&Literal::pos(label.clone()))
                    .with_context(context)?;
                let name = c.get(2).unwrap().as_str();
                let standard = ProofStandard::from_str(name)
                    .map_err(|_| anyhow!(r#"unknown proof standard "{}""#, name))
                    .with_context(context)?;
                if standards.set(label.clone(), standard).is_some() {
                    self.warn(
                        1 + i,
                        format!(r#"the proof standard of "{}" is assigned twice"#, label),
                    );
                }
                continue;
            }
            if let Some(c) = PARAM_LINE.captures(l) {
                let name = c.get(1).unwrap().as_str();
                let value = c
                    .get(2)
                    .unwrap()
                    .as_str()
                    .parse::<f64>()
                    .with_context(context)?;
                let name = match name {
                    "alpha" => "alpha",
                    "beta" => "beta",
                    _ => "gamma",
                };
                if params.insert(name, value).is_some() {
                    self.warn(1 + i, format!(r#"parameter "{}" is set twice"#, name));
                }
                continue;
            }
            if let Some(c) = ISSUE_LINE.captures(l) {
                let literal = literal_of(c.get(1).unwrap().as_str());
                language.check_literal(&literal).with_context(context)?;
                issues.push(literal);
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        let defaults = Parameters::default();
        let params = Parameters::new(
            params.get("alpha").copied().unwrap_or_else(|| defaults.alpha()),
            params.get("beta").copied().unwrap_or_else(|| defaults.beta()),
            params.get("gamma").copied().unwrap_or_else(|| defaults.gamma()),
        )?;
        let audience = Audience::new(assumptions, weights)?;
        CaesInstance::new(language, arguments, audience, standards, params, issues)
    }

    fn read_literal_from_str(
        &self,
        instance: &CaesInstance<String>,
        s: &str,
    ) -> Result<Literal<String>> {
        instance.parse_literal(s.trim())
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
