mod test;
use test::prelude::*;

use aro_capz_tests::command::{check_prerequisites, command_exists, run_command, REQUIRED_TOOLS};

#[rstest]
#[case::in_path("sh")]
#[case::absolute_path("/bin/sh")]
fn existing_command_should_be_found(#[case] name: &str) {
    assert_that(&command_exists(name)).is_true();
}

#[rstest]
#[case::unknown("aro-capz-tests-no-such-tool")]
#[case::unknown_path("/nonexistent/bin/tool")]
#[case::empty("")]
fn missing_command_should_not_be_found(#[case] name: &str) {
    assert_that(&command_exists(name)).is_false();
}

#[test]
fn non_executable_file_should_not_be_found() {
    let dir = ManifestDir::new();
    let path = dir.write("not-executable.sh", "#!/bin/sh\n");

    assert_that(&command_exists(&path.to_string_lossy())).is_false();
}

#[test]
fn command_output_should_contain_stdout_and_stderr() {
    let output = run_command("sh", &["-c", "echo 'secret/a created'; echo 'warning' >&2"])
        .expect("Command should succeed");

    assert_that(&output.as_str()).is_equal_to("secret/a created\nwarning\n");
}

#[test]
fn failing_command_should_report_status_and_output() {
    let result = run_command("sh", &["-c", "echo 'error: unable to recognize'; exit 3"]);

    assert_that(&result).fails_containing("unable to recognize");
    assert_that(&result).fails_containing("sh -c");
}

#[test]
fn unknown_program_should_not_be_started() {
    let args: [&str; 0] = [];
    let result = run_command("aro-capz-tests-no-such-tool", &args);

    assert_that(&result).fails_containing("could not be started");
}

#[test]
fn prerequisites_should_list_all_missing_tools() {
    let result = check_prerequisites(&["sh", "aro-capz-missing-one", "aro-capz-missing-two"]);

    assert_that(&result).fails_containing("aro-capz-missing-one, aro-capz-missing-two");
}

#[test]
fn available_prerequisites_should_pass() {
    assert_that(&check_prerequisites(&["sh"])).is_ok();
}

#[test]
fn required_tools_should_include_the_cluster_clients() {
    assert_that(&REQUIRED_TOOLS.contains(&"kubectl")).is_true();
    assert_that(&REQUIRED_TOOLS.contains(&"kind")).is_true();
}
