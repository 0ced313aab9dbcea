use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_generate_writes_next_to_first_input() -> Result<()> {
    let test = CliTest::with_services()?;

    assert_cmd_snapshot!(test.command().args(["app/foo.go", "app/bar.go"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Generated 3 services in app/services.go

    ----- stderr -----
    ");

    let content = test.read_file("app/services.go")?;
    assert!(content.starts_with("// Code generated by srgen. DO NOT EDIT.\n\npackage app\n"));
    assert!(content.contains(
        "type ServiceRegistry struct {\n\tBarService BarService\n\tFooService FooService\n\tZService   ZService\n}\n"
    ));
    assert!(content.contains("import (\n\t\"context\"\n\t\"fmt\"\n\t\"strings\"\n)\n"));
    assert!(!content.contains("\"io\""));
    assert!(!content.contains("Ignored"));
    assert!(content.contains(
        "func (s *FooServiceMock) Do(context.Context, int) error {\n\treturn s.DoRet0\n}\n"
    ));

    Ok(())
}

#[test]
fn test_generate_is_independent_of_argument_order() -> Result<()> {
    let test = CliTest::with_services()?;

    let forward = test.command().args(["--dry-run", "app/foo.go", "app/bar.go"]).output()?;
    let backward = test.command().args(["--dry-run", "app/bar.go", "app/foo.go"]).output()?;

    assert!(forward.status.success());
    assert_eq!(stdout(&forward), stdout(&backward));

    Ok(())
}

#[test]
fn test_dry_run_prints_and_writes_nothing() -> Result<()> {
    let test = CliTest::with_services()?;

    let dry = test.command().args(["--dry-run", "app/foo.go", "app/bar.go"]).output()?;
    assert!(dry.status.success());
    assert!(!test.root().join("app/services.go").exists());

    test.command().args(["app/foo.go", "app/bar.go"]).output()?;
    assert_eq!(stdout(&dry), test.read_file("app/services.go")?);

    Ok(())
}

#[test]
fn test_explicit_output_path() -> Result<()> {
    let test = CliTest::with_services()?;

    let output = test
        .command()
        .args(["-o", "gen/registry.go", "app/foo.go", "app/bar.go"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("in gen/registry.go"));
    assert!(test.root().join("gen/registry.go").exists());
    assert!(!test.root().join("app/services.go").exists());

    Ok(())
}

#[test]
fn test_package_mismatch_fails() -> Result<()> {
    let test = CliTest::with_file("a.go", "package one\n")?;
    test.write_file("b.go", "package two\n")?;

    assert_cmd_snapshot!(test.command().args(["a.go", "b.go"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: multiple packages: one, two (in b.go)
    ");

    assert!(!test.root().join("services.go").exists());

    Ok(())
}

#[test]
fn test_syntax_error_fails_without_writing() -> Result<()> {
    let test = CliTest::with_file("app/bad.go", "package app\n\ntype X interface {\n")?;

    let output = test.command().arg("app/bad.go").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error: syntax error in app/bad.go"));
    assert!(!test.root().join("app/services.go").exists());

    Ok(())
}

#[test]
fn test_unresolved_qualifier_fails() -> Result<()> {
    let test = CliTest::with_file(
        "clock.go",
        r#"package app

// +srgen
type Clock interface {
	Now() time.Time
}
"#,
    )?;

    let output = test.command().arg("clock.go").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Clock.Now references `time` but no import provides it"));

    Ok(())
}

#[test]
fn test_unsupported_type_fails_by_default() -> Result<()> {
    let test = CliTest::with_file(
        "cache.go",
        r#"package app

// +srgen
type Cache interface {
	All() map[string]int
}
"#,
    )?;

    let output = test.command().arg("cache.go").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unsupported type `map[string]int`"));

    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("nope.go").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to read nope.go"));

    Ok(())
}

#[test]
fn test_unwritable_destination_is_internal_error() -> Result<()> {
    let test = CliTest::with_services()?;

    // The parent of the destination is a regular file.
    let output = test
        .command()
        .args(["-o", "app/foo.go/services.go", "app/foo.go", "app/bar.go"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error: "));

    Ok(())
}

#[test]
fn test_no_files_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("<FILES>..."));

    Ok(())
}

#[test]
fn test_verbose_logs_scanned_files() -> Result<()> {
    let test = CliTest::with_services()?;

    let output = test
        .command()
        .args(["-v", "--dry-run", "app/foo.go", "app/bar.go"])
        .output()?;

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("scanned file"), "stderr: {err}");
    assert!(err.contains("no config file found, using defaults"), "stderr: {err}");

    Ok(())
}
