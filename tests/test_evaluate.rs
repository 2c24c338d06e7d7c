use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

const MURDER_INSTANCE: &str = r#"prop(murder, "the accused committed murder").
prop(kill).
prop(malice).
prop(self_defense).
prop(witness).
prop(witness2).
arg(prosecution, [kill, malice], ~[self_defense], murder, 0.8).
arg(defense, [witness], ~[], self_defense, 0.5).
arg(rebuttal, [witness2], ~[], -self_defense, 0.6).
assume(kill).
assume(malice).
assume(witness).
assume(witness2).
standard(murder, beyond_reasonable_doubt).
issue(murder).
"#;

fn evaluate_instance(
    instance: &str,
    issue: Option<&str>,
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.caes")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("evaluate")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off");
    if let Some(i) = issue {
        cmd.arg("-i").arg(i);
    }
    let assert = cmd.assert();
    file.close().unwrap();
    Ok(assert)
}

#[test]
fn test_evaluate_declared_issue() -> Result<(), Box<dyn std::error::Error>> {
    evaluate_instance(MURDER_INSTANCE, None)?
        .success()
        .stdout(predicate::eq("murder (beyond_reasonable_doubt): NO\n"));
    Ok(())
}

#[test]
fn test_evaluate_issue_override() -> Result<(), Box<dyn std::error::Error>> {
    evaluate_instance(MURDER_INSTANCE, Some("self_defense"))?
        .success()
        .stdout(predicate::eq("self_defense (scintilla): YES\n"));
    Ok(())
}

#[test]
fn test_evaluate_negative_issue() -> Result<(), Box<dyn std::error::Error>> {
    evaluate_instance(MURDER_INSTANCE, Some("-self_defense"))?
        .success()
        .stdout(predicate::eq("-self_defense (scintilla): YES\n"));
    Ok(())
}

#[test]
fn test_evaluate_undeclared_issue() -> Result<(), Box<dyn std::error::Error>> {
    evaluate_instance(MURDER_INSTANCE, Some("alibi"))?.failure();
    Ok(())
}

#[test]
fn test_evaluate_without_issue() -> Result<(), Box<dyn std::error::Error>> {
    evaluate_instance("prop(p).\narg(a1, [], ~[], p, 0.5).\n", None)?.failure();
    Ok(())
}

#[test]
fn test_evaluate_standard_override_flips_verdict() -> Result<(), Box<dyn std::error::Error>> {
    let instance = r#"prop(p).
prop(a).
prop(b).
arg(pro, [a], ~[], p, 0.4).
arg(con, [b], ~[], -p, 0.6).
assume(a).
assume(b).
issue(p).
"#;
    evaluate_instance(instance, None)?
        .success()
        .stdout(predicate::eq("p (scintilla): YES\n"));
    let with_standard = format!("{}standard(p, preponderance).\n", instance);
    evaluate_instance(&with_standard, None)?
        .success()
        .stdout(predicate::eq("p (preponderance): NO\n"));
    Ok(())
}
