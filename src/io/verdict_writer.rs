use crate::caes::{Literal, Verdict};
use crate::dialogue::{DialogueOutcome, TurnRecord};
use crate::utils::LabelType;
use anyhow::{Context, Result};
use std::io::Write;

fn status_str(accepted: bool) -> &'static str {
    if accepted {
        "YES"
    } else {
        "NO"
    }
}

/// Writes the verdict of a single-shot evaluation.
///
/// The line gives the issue, the proof standard it was evaluated under and
/// `YES` or `NO`.
pub fn write_verdict<T>(writer: &mut dyn Write, issue: &Literal<T>, verdict: &Verdict) -> Result<()>
where
    T: LabelType,
{
    let context = "while writing a verdict";
    writeln!(
        writer,
        "{} ({}): {}",
        issue,
        verdict.standard(),
        status_str(verdict.accepted())
    )
    .context(context)?;
    writer.flush().context(context)
}

/// Writes a single dialogue turn record.
pub fn write_turn_record<T>(writer: &mut dyn Write, record: &TurnRecord<T>) -> Result<()>
where
    T: LabelType,
{
    let context = "while writing a dialogue turn";
    let working = record
        .working()
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    writeln!(
        writer,
        "turn {} ({}): sub-issue {}: {}; issue: {}; in play: [{}]",
        record.turn(),
        record.burden(),
        record.sub_issue(),
        status_str(record.sub_issue_accepted()),
        status_str(record.issue_accepted()),
        working,
    )
    .context(context)?;
    writer.flush().context(context)
}

/// Writes a full dialogue outcome: one line per turn, the closing reason and
/// the final verdict.
pub fn write_dialogue_outcome<T>(
    writer: &mut dyn Write,
    issue: &Literal<T>,
    outcome: &DialogueOutcome<T>,
) -> Result<()>
where
    T: LabelType,
{
    for record in outcome.trace() {
        write_turn_record(writer, record)?;
    }
    let context = "while writing a dialogue outcome";
    writeln!(writer, "closed: {}", outcome.reason()).context(context)?;
    writeln!(writer, "{}: {}", issue, status_str(outcome.accepted())).context(context)?;
    writer.flush().context(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caes::{
        ArgumentSet, Audience, Caes, Language, Parameters, ProofStandard, StandardAssignment,
    };
    use crate::dialogue::Dialogue;
    use std::collections::HashMap;

    #[test]
    fn test_write_verdict() {
        let mut language = Language::default();
        language.new_proposition("wet", "");
        language.new_proposition("rain", "");
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument("a1", vec![Literal::pos("rain")], vec![], Literal::pos("wet"), 0.8)
            .unwrap();
        let audience = Audience::new(vec![Literal::pos("rain")], HashMap::new()).unwrap();
        let mut standards = StandardAssignment::default();
        standards.set("wet", ProofStandard::Preponderance);
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let verdict = caes.evaluate(&Literal::pos("wet")).unwrap();
        let mut buffer = Vec::new();
        write_verdict(&mut buffer, &Literal::pos("wet"), &verdict).unwrap();
        assert_eq!(
            "wet (preponderance): YES\n",
            String::from_utf8(buffer).unwrap()
        );
    }

    #[test]
    fn test_write_dialogue_outcome() {
        let mut language = Language::default();
        language.new_proposition("wet", "");
        language.new_proposition("rain", "");
        language.new_proposition("dry_under_trees", "");
        let mut arguments = ArgumentSet::default();
        arguments
            .new_argument("a1", vec![Literal::pos("rain")], vec![], Literal::pos("wet"), 0.8)
            .unwrap();
        arguments
            .new_argument(
                "a2",
                vec![Literal::pos("dry_under_trees")],
                vec![],
                Literal::neg("wet"),
                0.4,
            )
            .unwrap();
        let audience = Audience::new(
            vec![Literal::pos("rain"), Literal::pos("dry_under_trees")],
            HashMap::new(),
        )
        .unwrap();
        let standards = StandardAssignment::default();
        let caes =
            Caes::new(&language, &arguments, &audience, &standards, Parameters::default()).unwrap();
        let outcome = Dialogue::new(&caes).run(&Literal::pos("wet")).unwrap();
        let mut buffer = Vec::new();
        write_dialogue_outcome(&mut buffer, &Literal::pos("wet"), &outcome).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            "turn 1 (PROPONENT): sub-issue wet: YES; issue: YES; in play: [a1]",
            lines[0]
        );
        assert_eq!("wet: YES", lines[lines.len() - 1]);
    }
}
