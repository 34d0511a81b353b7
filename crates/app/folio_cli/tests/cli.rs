use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("folio binary");
    cmd.env_remove("FOLIO_SERVER_URL").env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_prints_package_version() {
    folio()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn static_chat_greets_and_answers() {
    folio()
        .args(["chat", "--static", "--delay-ms", "0"])
        .write_stdin("What skills do you have?\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[bot] Hello! I'm a static version"))
        .stdout(predicate::str::contains("[you] What skills do you have?"))
        .stdout(predicate::str::contains("[bot] My skills include Python"));
}

#[test]
fn whitespace_lines_are_ignored() {
    let assert = folio()
        .args(["chat", "--static", "--delay-ms", "0"])
        .write_stdin("   \n\nhello\n")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("[you]").count(), 1);
    // greeting plus one reply
    assert_eq!(stdout.matches("[bot]").count(), 2);
}

#[test]
fn quit_command_ends_session() {
    let assert = folio()
        .args(["chat", "--static", "--delay-ms", "0"])
        .write_stdin("/quit\nhello\n")
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.contains("[you]"));
}

#[test]
fn unreachable_server_reports_connection_error() {
    folio()
        .args(["chat", "--server", "http://127.0.0.1:9"])
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Sorry, I encountered a connection error. Please check the server.",
        ));
}

#[test]
fn contact_with_bad_email_fails_before_sending() {
    folio()
        .args([
            "contact",
            "--name",
            "Ada",
            "--email",
            "nope",
            "--subject",
            "Hi",
            "--message",
            "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("email must be a valid address"));
}
