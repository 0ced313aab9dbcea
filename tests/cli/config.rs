use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const MARKED_WITH_SVC: &str = r#"package app

// +svc
type Mailer interface {
	Send(to string, body []byte) error
}

// +srgen
type Other interface {
}
"#;

#[test]
fn test_config_marker_and_output_file() -> Result<()> {
    let test = CliTest::with_file("app/mail.go", MARKED_WITH_SVC)?;
    test.write_file(
        ".srgenrc.json",
        r#"{ "marker": "+svc", "outputFile": "registry_gen.go", "mocks": false }"#,
    )?;

    let output = test.command().arg("app/mail.go").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "✓ Generated 1 service in app/registry_gen.go\n"
    );
    let content = test.read_file("app/registry_gen.go")?;
    assert!(content.contains("\tMailer Mailer\n"));
    assert!(!content.contains("Other"));
    assert!(!content.contains("MailerMock"));

    Ok(())
}

#[test]
fn test_explicit_config_file() -> Result<()> {
    let test = CliTest::with_file("app/mail.go", MARKED_WITH_SVC)?;
    test.write_file("conf/srgen.json", r#"{ "marker": "+svc" }"#)?;

    let output = test
        .command()
        .args(["-c", "conf/srgen.json", "--dry-run", "app/mail.go"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let content = stdout(&output);
    assert!(content.contains("func (s *MailerMock) Send(string, []byte) error {"));
    assert!(!content.contains("Other"));

    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let test = CliTest::with_file("app/mail.go", MARKED_WITH_SVC)?;

    let output = test
        .command()
        .args(["-c", "missing.json", "app/mail.go"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("config file not found: missing.json"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file("app/mail.go", MARKED_WITH_SVC)?;
    test.write_file(".srgenrc.json", r#"{ "outputFile": "services.txt" }"#)?;

    let output = test.command().arg("app/mail.go").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Invalid 'outputFile'"));
    assert!(!test.root().join("app/services.txt").exists());

    Ok(())
}

#[test]
fn test_drop_policy_warns_and_succeeds() -> Result<()> {
    let test = CliTest::with_file(
        "cache.go",
        r#"package app

// +srgen
type Cache interface {
	Set(key string, values map[string]int, ttl int) error
}
"#,
    )?;
    test.write_file(".srgenrc.json", r#"{ "unsupportedTypes": "drop" }"#)?;

    let output = test.command().args(["--dry-run", "cache.go"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("dropping unsupported type `map[string]int` from Cache.Set"));
    assert!(stdout(&output).contains("func (s *CacheMock) Set(string, int) error {"));

    Ok(())
}

#[test]
fn test_gofmt_formatter_unavailable_is_internal_error() -> Result<()> {
    let test = CliTest::with_file("app/mail.go", MARKED_WITH_SVC)?;
    test.write_file(".srgenrc.json", r#"{ "formatter": "gofmt" }"#)?;

    let output = test
        .command()
        .env("PATH", test.root())
        .arg("app/mail.go")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("generator bug"));
    assert!(!test.root().join("app/services.go").exists());

    Ok(())
}
