use std::process::{Command, Output};

fn pflags() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pflags"))
}

fn run(args: &[&str]) -> Output {
    pflags()
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run pflags")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn parse_ok(args: &[&str]) -> String {
    let mut full = vec!["parse"];
    full.extend_from_slice(args);
    let out = run(&full);
    assert!(
        out.status.success(),
        "pflags parse failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    stdout(&out)
}

#[test]
fn help_works() {
    let out = run(&["--help"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(
        text.contains("parse") && text.contains("get") && text.contains("unparsed"),
        "unexpected help output:\n{text}"
    );
}

#[test]
fn token_round_trips_between_processes() {
    let token = parse_ok(&[
        "----", "--short", "s", "--long", "short", "--type", "string", "--allowed", "foo",
        "--allowed", "bar", "--", "--short", "t", "--long", "type", "--type", "number",
        "--default", "123", "----", "pos1", "--short", "foo", "pos2",
    ]);
    assert!(!token.is_empty());
    assert!(!token.contains(char::is_whitespace), "token is not one word: {token:?}");

    let out = run(&["get", "--name", "short", &token]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "foo");

    let out = run(&["get", "-n", "type", &token]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "123");

    let out = run(&["unparsed", &token]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "pos1\npos2");
}

#[test]
fn repeated_values_print_one_per_line() {
    let token = parse_ok(&[
        "----", "-l", "tag", "-t", "string", "----", "--tag", "a", "--tag=b", "--tag", "c",
    ]);
    let out = run(&["get", "--name", "tag", &token]);
    assert_eq!(stdout(&out), "a\nb\nc");
}

#[test]
fn exit_codes_classify_errors() {
    // Value outside the whitelist.
    let out = run(&[
        "parse", "----", "-s", "s", "-t", "string", "-a", "foo", "----", "-s", "baz",
    ]);
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("INVALID_VALUE"));

    // Missing required flag.
    let out = run(&["parse", "----", "-s", "s", "-t", "string", "-r", "----"]);
    assert_eq!(out.status.code(), Some(2));

    // Unknown flag name in a valid token.
    let token = parse_ok(&["----", "-s", "s", "-t", "bool", "----"]);
    let out = run(&["get", "-n", "missing-name", &token]);
    assert_eq!(out.status.code(), Some(40));

    // Token that is not base64.
    let out = run(&["unparsed", "@@@"]);
    assert_eq!(out.status.code(), Some(99));
}

#[test]
fn help_requests_exit_with_help_status() {
    let out = run(&[
        "parse",
        "--usage",
        "demo {FLAGS}",
        "----",
        "-s",
        "v",
        "-t",
        "bool",
        "-d",
        "Verbose output",
        "----",
        "--help",
    ]);
    assert_eq!(out.status.code(), Some(100));
    let text = stdout(&out);
    assert!(text.starts_with("demo -v"), "unexpected help:\n{text}");
    assert!(text.contains("Verbose output"));

    let out = run(&["parse", "-h"]);
    assert_eq!(out.status.code(), Some(100));
    assert!(stdout(&out).contains("--unrecognized-flags"));

    let out = run(&["get", "--help"]);
    assert_eq!(out.status.code(), Some(100));
    assert!(stdout(&out).contains("--name"));
}

#[test]
fn double_dash_survives_as_non_flag_arg() {
    let token = parse_ok(&["----", "-s", "v", "-t", "bool", "----", "-v", "--", "file"]);
    let out = run(&["unparsed", &token]);
    assert_eq!(stdout(&out), "--\nfile");
}

#[test]
fn leading_double_dash_is_passed_to_the_subcommand() {
    let token = parse_ok(&["----", "-s", "v", "-t", "bool", "----", "-v"]);
    let out = run(&["unparsed", "--", &token]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Only 1 non-flag arg"));
}
