use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};

fn check_instance(instance: &str) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.caes")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("carneades")?;
    let assert = cmd
        .arg("check")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off")
        .assert();
    file.close().unwrap();
    Ok(assert)
}

#[test]
fn test_check_valid_instance() -> Result<(), Box<dyn std::error::Error>> {
    check_instance(
        r#"prop(wet, "the grass is wet").
prop(rain).
prop(sprinkler).
arg(a1, [rain], ~[sprinkler], wet, 0.8).
assume(rain).
standard(wet, preponderance).
param(alpha, 0.5).
issue(wet).
"#,
    )?
    .success();
    Ok(())
}

#[test]
fn test_check_syntax_error() -> Result<(), Box<dyn std::error::Error>> {
    check_instance("prop(wet)\n")?.failure();
    Ok(())
}

#[test]
fn test_check_undeclared_proposition() -> Result<(), Box<dyn std::error::Error>> {
    check_instance("prop(wet).\narg(a1, [rain], ~[], wet, 0.8).\n")?.failure();
    Ok(())
}

#[test]
fn test_check_weight_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    check_instance("prop(wet).\narg(a1, [], ~[], wet, 1.5).\n")?.failure();
    Ok(())
}

#[test]
fn test_check_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("carneades")?;
    cmd.arg("check")
        .arg("-f")
        .arg("no_such_file.caes")
        .arg("--logging-level")
        .arg("off")
        .assert()
        .failure();
    Ok(())
}
