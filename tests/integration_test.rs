/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

const EMPTY_CONFIG: &str = "tests/test_data/empty.toml";

/// Dynamically collects test cases from a given directory.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.txt") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_in.txt", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	assert!(!test_cases.is_empty(), "no test cases in {}", dir_path);
	test_cases
}

#[test]
fn test_integration_session() {
	let test_cases = collect_test_cases("session");
	execute("session", test_cases, vec!["-c", EMPTY_CONFIG]);
}

#[test]
fn test_integration_list() {
	let test_cases = collect_test_cases("list");
	execute("list", test_cases, vec!["-c", EMPTY_CONFIG, "--list"]);
}

#[test]
fn test_integration_rate_overrides() {
	let test_cases = collect_test_cases("overrides");
	execute(
		"overrides",
		test_cases,
		vec!["-c", "tests/test_data/overrides/config.toml"],
	);
}

#[test]
fn test_integration_rate_overrides_list() {
	let test_cases = collect_test_cases("overridelist");
	execute(
		"overridelist",
		test_cases,
		vec!["-c", "tests/test_data/overrides/config.toml", "-l"],
	);
}

#[test]
fn test_integration_bad_config_fails() {
	let dir_path = "tests/test_data/badconfig";
	let mut configs: Vec<String> = fs::read_dir(dir_path)
		.expect("Failed to read bad config directory")
		.flatten()
		.map(|e| format!("{}/{}", dir_path, e.file_name().to_string_lossy()))
		.collect();
	configs.sort();
	assert!(!configs.is_empty());

	for config in configs {
		let output = run(vec!["-c", config.as_str()], "USD\nEUR\n1\nn\n");
		assert!(
			!output.status.success(),
			"{} unexpectedly succeeded!",
			config
		);
		assert!(output.stdout.is_empty(), "{} started a session", config);
	}
}

#[test]
fn test_integration_missing_config_fails() {
	let output = run(vec!["-c", "tests/test_data/nonexistent.toml"], "");
	assert!(!output.status.success());
}

fn run(args: Vec<&str>, stdin: &str) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_convr"))
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("Failed to execute process");

	// the process may exit before reading everything, so a broken pipe
	// here is not a failure
	if let Some(mut pipe) = child.stdin.take() {
		let _ = pipe.write_all(stdin.as_bytes());
	}

	child.wait_with_output().expect("Failed to wait on process")
}

fn execute(subfolder: &str, test_cases: Vec<(String, String)>, args: Vec<&str>) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let input = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, input_file
		))
		.expect("Failed to read input file");

		let output = run(args.clone(), &input);

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
