//! Tests for the interactive menu shell, driven over in-memory streams

use std::io::{Cursor, Write};
use std::path::PathBuf;

use coursecat::shell::Shell;
use coursecat::util::testing;
use tempfile::NamedTempFile;

fn data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write fixture");
    file
}

/// Runs the shell against scripted input, returns everything it wrote.
fn run_shell(data_path: PathBuf, seed_code: Option<String>, input: &str) -> String {
    let mut shell = Shell::new(data_path, ',', seed_code);
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    shell
        .run(&mut reader, &mut output)
        .expect("Shell run failed");
    String::from_utf8(output).expect("Shell output was not UTF-8")
}

const SAMPLE: &str = "CS101,Intro to Computer Science\n\
                      CS201,Data Structures,CS101\n\
                      CS050,Foundations\n";

// ============================================================
// Menu Protocol Tests
// ============================================================

#[test]
fn given_exit_choice_when_running_then_prints_banners_and_stops() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "9\n");

    assert!(out.contains("Welcome to the course planner!"));
    assert!(out.contains("[1] Load course catalog."));
    assert!(out.contains("Thank you for using the course planner!"));
}

#[test]
fn given_invalid_choice_when_running_then_reprompts_with_message() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "7\nbanana\n9\n");

    assert_eq!(out.matches("Invalid entry: Please try again.").count(), 2);
    // Menu is redisplayed after each invalid entry plus the initial display
    assert_eq!(out.matches("[9] Exit.").count(), 3);
}

#[test]
fn given_eof_when_running_then_loop_ends_cleanly() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "");

    assert!(out.contains("Welcome to the course planner!"));
    assert!(!out.contains("Thank you for using the course planner!"));
}

// ============================================================
// Load & List Tests
// ============================================================

#[test]
fn given_loaded_catalog_when_listing_then_courses_print_in_order() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "1\n2\n9\n");

    assert!(out.contains("Success! Loaded 3 course(s)"));
    let list_at = out.find("Course List:").unwrap();
    let listed = &out[list_at..];
    let cs050 = listed.find("CS050 | Foundations").unwrap();
    let cs101 = listed.find("CS101 | Intro to Computer Science").unwrap();
    let cs201 = listed.find("CS201 | Data Structures").unwrap();
    assert!(cs050 < cs101 && cs101 < cs201);
}

#[test]
fn given_unloaded_catalog_when_listing_then_list_is_empty() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "2\n9\n");

    assert!(out.contains("Course List:"));
    assert!(!out.contains("CS101"));
}

#[test]
fn given_missing_file_when_loading_then_failure_message_and_menu_returns() {
    testing::init_test_setup();
    let out = run_shell(PathBuf::from("no/such/file.txt"), None, "1\n9\n");

    assert!(out.contains("Could not load no/such/file.txt"));
    assert!(out.contains("Thank you for using the course planner!"));
}

#[test]
fn given_listing_twice_when_running_then_output_is_repeated_identically() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "1\n2\n2\n9\n");

    assert_eq!(out.matches("CS101 | Intro to Computer Science").count(), 2);
}

// ============================================================
// Lookup Tests
// ============================================================

#[test]
fn given_course_with_prerequisites_when_looking_up_then_they_are_printed() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "1\n3\nCS201\n9\n");

    assert!(out.contains("Which course would you like to know about?"));
    assert!(out.contains("CS201 | Data Structures"));
    assert!(out.contains("Prerequisite(s): CS101"));
}

#[test]
fn given_course_with_multiple_prerequisites_when_looking_up_then_list_is_comma_joined() {
    testing::init_test_setup();
    let file = data_file("CS301,Algorithms,CS201,CS101\n");
    let out = run_shell(file.path().to_path_buf(), None, "1\n3\nCS301\n9\n");

    assert!(out.contains("Prerequisite(s): CS201, CS101"));
}

#[test]
fn given_course_without_prerequisites_when_looking_up_then_prints_none() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "1\n3\nCS050\n9\n");

    assert!(out.contains("CS050 | Foundations"));
    assert!(out.contains("Prerequisite(s): NONE"));
}

#[test]
fn given_uninserted_code_when_looking_up_then_reports_not_found() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "1\n3\nCS999\n9\n");

    assert!(out.contains("CS999 not found."));
}

#[test]
fn given_seeded_code_when_lookup_prompt_left_empty_then_seed_is_used() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(
        file.path().to_path_buf(),
        Some("CS101".to_string()),
        "1\n3\n\n9\n",
    );

    assert!(out.contains("CS101 | Intro to Computer Science"));
}

#[test]
fn given_no_seed_when_lookup_prompt_left_empty_then_reports_missing_code() {
    testing::init_test_setup();
    let file = data_file(SAMPLE);
    let out = run_shell(file.path().to_path_buf(), None, "3\n\n9\n");

    assert!(out.contains("No course code given."));
}
