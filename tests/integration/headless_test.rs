//! Scripted headless runs through the public API.

use paicheco::console::{Console, LineStyle};
use paicheco::persistence::{FileStorage, MemoryStorage};
use paicheco::surface::headless::{HeadlessConfig, HeadlessOutput, HeadlessRunner, OutputFormat};
use tempfile::tempdir;

fn runner(script: &str) -> HeadlessRunner<MemoryStorage> {
    let mut runner = HeadlessRunner::new(
        HeadlessConfig::default(),
        Console::with_defaults(MemoryStorage::new()),
    );
    runner.load_events(script).unwrap();
    runner
}

#[test]
fn test_tab_completion_then_submit() {
    let result = runner("type:he,key:tab,key:enter,assert:contains:available commands").run();

    assert_eq!(result.assertions_passed, 1);
    assert_eq!(result.lines[0].text, "Paicheco: help");
    assert_eq!(result.lines[0].style, LineStyle::Meta);
}

#[test]
fn test_ambiguous_completion_lists_candidates() {
    let script = "type:su,key:tab,assert:state:input_text=su,assert:contains-exact:possible commands:";
    let result = runner(script).run();

    assert_eq!(result.assertions_failed, 0);
    assert_eq!(result.screen, "possible commands:\n  sum\n  sub\n> su\n");
}

#[test]
fn test_error_lines_and_failed_assertion() {
    let result = runner("type:div 1,key:enter,assert:not-contains:usage").run();

    assert_eq!(result.assertions_failed, 1);
    assert_eq!(result.lines[1].style, LineStyle::Error);
    assert_eq!(result.lines[1].text, "usage: div <a> <b>");
}

#[test]
fn test_regex_assertion_on_time() {
    let script = r"type:time,key:enter,assert:matches:current time: \d{2}/\d{2}/\d{4} \d{2}:\d{2}:\d{2}";
    let result = runner(script).run();
    assert_eq!(result.assertions_passed, 1);
}

#[test]
fn test_json_report() {
    let result = runner("type:mult 4 2.5,key:enter,key:up").run();
    let json = HeadlessOutput::new(OutputFormat::Json).format(&result);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["lines"][1]["text"], "4 * 2.5 = 10");
    assert_eq!(parsed["state"]["input_text"], "mult 4 2.5");
    assert_eq!(parsed["state"]["history_len"], 1);
    assert_eq!(parsed["events_executed"], 3);
}

#[test]
fn test_headless_run_persists_to_file_storage() {
    let dir = tempdir().unwrap();
    let console = Console::with_defaults(FileStorage::open(dir.path()).unwrap());
    let mut runner = HeadlessRunner::new(HeadlessConfig::default(), console);
    runner
        .load_events("type:sum 1 1,key:enter,type:bogus,key:enter")
        .unwrap();
    runner.run();

    let reopened = Console::with_defaults(FileStorage::open(dir.path()).unwrap());
    assert_eq!(reopened.history(), ["sum 1 1", "bogus"]);
}
