//! End-to-end console scenarios.

use paicheco::console::{Console, ConsoleEvent, Direction, LineStyle, OutputLine, OutputUpdate};
use paicheco::persistence::MemoryStorage;
use pretty_assertions::assert_eq;

fn console() -> Console<MemoryStorage> {
    Console::with_defaults(MemoryStorage::new())
}

/// Submits `line` and returns the lines it emitted that are still on screen.
fn submit(console: &mut Console<MemoryStorage>, line: &str) -> Vec<OutputLine> {
    console.drain_updates();
    console.handle_event(ConsoleEvent::Submit(line.to_string()));

    let mut emitted = Vec::new();
    for update in console.drain_updates() {
        match update {
            OutputUpdate::Line(line) => emitted.push(line),
            OutputUpdate::Clear => emitted.clear(),
        }
    }
    emitted
}

#[test]
fn test_sum_scenario() {
    let mut console = console();
    assert_eq!(
        submit(&mut console, "sum 5 3"),
        vec![
            OutputLine::meta("Paicheco: sum 5 3"),
            OutputLine::normal("5 + 3 = 8"),
        ]
    );
}

#[test]
fn test_division_by_zero_is_infinity() {
    let mut console = console();
    assert_eq!(
        submit(&mut console, "div 10 0")[1],
        OutputLine::normal("10 / 0 = Infinity")
    );
}

#[test]
fn test_unknown_command_scenario() {
    let mut console = console();
    assert_eq!(
        submit(&mut console, "foo"),
        vec![
            OutputLine::meta("Paicheco: foo"),
            OutputLine::error("command not found, type 'help'"),
        ]
    );
}

#[test]
fn test_usage_error_scenario() {
    let mut console = console();
    assert_eq!(
        submit(&mut console, "sum 5"),
        vec![
            OutputLine::meta("Paicheco: sum 5"),
            OutputLine::error("usage: sum <a> <b>"),
        ]
    );
}

#[test]
fn test_every_submission_echoes_first() {
    let mut console = console();
    for line in ["help", "time", "clear", "sum 1 x", "MULT 2 3", "nope", "div 1"] {
        console.handle_event(ConsoleEvent::Submit(line.to_string()));
        let updates = console.drain_updates();

        assert_eq!(
            updates[0],
            OutputUpdate::Line(OutputLine::meta(format!("Paicheco: {line}")))
        );
        assert!(updates[1..].iter().all(|update| match update {
            OutputUpdate::Line(l) => l.style != LineStyle::Meta,
            OutputUpdate::Clear => true,
        }));
    }
}

#[test]
fn test_history_grows_by_one_per_submission() {
    let mut console = console();
    let inputs = ["help", "   ", "foo", "", "sum 1", "\t", "sum 1 2"];
    let mut expected = 0;
    for input in inputs {
        submit(&mut console, input);
        if !input.trim().is_empty() {
            expected += 1;
        }
        assert_eq!(console.history().len(), expected);
        assert_eq!(console.history_cursor(), expected);
    }
    assert_eq!(console.history(), ["help", "foo", "sum 1", "sum 1 2"]);
}

#[test]
fn test_recall_is_idempotent_at_boundaries() {
    let mut console = console();
    submit(&mut console, "help");

    console.handle_event(ConsoleEvent::Recall(Direction::Previous));
    console.handle_event(ConsoleEvent::Recall(Direction::Previous));
    assert_eq!(console.input(), "help");
    assert_eq!(console.history_cursor(), 0);

    console.handle_event(ConsoleEvent::Recall(Direction::Next));
    console.handle_event(ConsoleEvent::Recall(Direction::Next));
    assert_eq!(console.input(), "");
    assert_eq!(console.history_cursor(), 1);
}

#[test]
fn test_autocomplete_scenarios() {
    let mut console = console();

    console.handle_event(ConsoleEvent::Complete("su".to_string()));
    let listed: Vec<_> = console.output().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(listed, ["possible commands:", "  sum", "  sub"]);
    assert_eq!(console.input(), "");

    console.handle_event(ConsoleEvent::Complete("sum".to_string()));
    assert_eq!(console.input(), "sum");

    console.set_input("zz");
    console.handle_event(ConsoleEvent::Complete("zz".to_string()));
    assert_eq!(console.input(), "zz");
    assert_eq!(console.output().len(), 3);
}

#[test]
fn test_clear_emits_signal_and_keeps_history() {
    let mut console = console();
    submit(&mut console, "sum 2 2");

    console.handle_event(ConsoleEvent::Submit("clear".to_string()));
    assert_eq!(
        console.drain_updates(),
        vec![
            OutputUpdate::Line(OutputLine::meta("Paicheco: clear")),
            OutputUpdate::Clear,
        ]
    );
    assert!(console.output().is_empty());
    assert_eq!(console.history(), ["sum 2 2", "clear"]);
}

#[test]
fn test_clear_after_output_leaves_nothing_on_screen() {
    let mut console = console();
    submit(&mut console, "help");
    submit(&mut console, "sum 1 1");

    assert!(submit(&mut console, "clear").is_empty());
    assert_eq!(
        submit(&mut console, "sub 3 1"),
        vec![
            OutputLine::meta("Paicheco: sub 3 1"),
            OutputLine::normal("3 - 1 = 2"),
        ]
    );
}

#[test]
fn test_doubled_space_operand_is_invalid() {
    let mut console = console();
    assert_eq!(
        submit(&mut console, "sum 5  3"),
        vec![
            OutputLine::meta("Paicheco: sum 5  3"),
            OutputLine::error("use valid numbers"),
        ]
    );
}
