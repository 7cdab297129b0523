use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use serde_json::Value;

const THEME: &str = include_str!("../../convert/tests/fixtures/tokyo-night.jsonc");

fn termtheme(args: &[&str], stdin: &str) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_termtheme"))
		.args(args)
		.env_remove("TERMTHEME_LOG_DIR")
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.unwrap();
	child
		.stdin
		.take()
		.unwrap()
		.write_all(stdin.as_bytes())
		.unwrap();
	child.wait_with_output().unwrap()
}

#[test]
fn convert_file_prints_scheme() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tokyo-night.jsonc");
	std::fs::write(&path, THEME).unwrap();

	let output = termtheme(&["convert", "--name", "Tokyo Night", path.to_str().unwrap()], "");
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let palette: Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(palette["name"], "Tokyo Night");
	assert_eq!(palette["background"], "#16161e");
	assert_eq!(palette["foreground"], "#787c99");
	assert_eq!(palette["brightPurple"], "#bb9af7");
}

#[test]
fn convert_stdin() {
	let output = termtheme(&["convert", "-n", "Piped", "--compact"], THEME);
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout.lines().count(), 1);
	let palette: Value = serde_json::from_str(&stdout).unwrap();
	assert_eq!(palette["name"], "Piped");
}

#[test]
fn convert_failure_exits_non_zero() {
	let theme = THEME.replace("\"#f7768e\"", "\"notacolor\"");
	let output = termtheme(&["convert", "-n", "x", "-"], &theme);

	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(
		stderr.contains(r#"terminal.ansiBrightRed: "notacolor" is not a valid color"#),
		"{stderr}"
	);
}

#[test]
fn syntax_error_exits_non_zero() {
	let output = termtheme(&["convert", "-n", "x"], "{ colors: {");
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}
