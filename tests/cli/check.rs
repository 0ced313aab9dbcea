use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_check_up_to_date() -> Result<()> {
    let test = CliTest::with_services()?;
    test.command().args(["app/foo.go", "app/bar.go"]).output()?;

    let output = test
        .command()
        .args(["--check", "app/foo.go", "app/bar.go"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ app/services.go is up to date (3 services)\n"
    );

    Ok(())
}

#[test]
fn test_check_detects_stale_output() -> Result<()> {
    let test = CliTest::with_services()?;
    test.command().args(["app/foo.go", "app/bar.go"]).output()?;

    test.write_file(
        "app/baz.go",
        "package app\n\n// +srgen\ntype Baz interface {\n\tRun()\n}\n",
    )?;

    let output = test
        .command()
        .args(["--check", "app/foo.go", "app/bar.go", "app/baz.go"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "✘ app/services.go is out of date, run srgen to regenerate\n"
    );

    Ok(())
}

#[test]
fn test_check_missing_output_fails_without_writing() -> Result<()> {
    let test = CliTest::with_services()?;

    let output = test
        .command()
        .args(["--check", "app/foo.go", "app/bar.go"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(!test.root().join("app/services.go").exists());

    Ok(())
}
