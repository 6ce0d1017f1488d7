//! Command definitions: the registry.
//!
//! One static table drives dispatch, help text and autocomplete. Adding a
//! command means adding a row here; if it needs a new [`CommandKind`], the
//! exhaustive match in the handlers forces a handler to be written too.

/// Arithmetic operation performed by the two-operand commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    /// Returns the operator symbol used in result lines.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Applies the operation with IEEE-754 semantics.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// What a command does; selects the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// List all commands.
    Help,
    /// Clear the output area.
    Clear,
    /// Show the local date and time.
    Time,
    /// Two-operand arithmetic.
    Arithmetic(ArithOp),
}

/// Definition of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    /// Command name, lower-case.
    pub name: &'static str,
    /// Usage line shown in help and in arity errors.
    pub usage: &'static str,
    /// Short description shown in help.
    pub description: &'static str,
    /// Handler selector.
    pub kind: CommandKind,
}

/// All command definitions, in autocomplete and help order.
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "help",
        usage: "help",
        description: "list commands",
        kind: CommandKind::Help,
    },
    CommandDef {
        name: "clear",
        usage: "clear",
        description: "clear the terminal",
        kind: CommandKind::Clear,
    },
    CommandDef {
        name: "time",
        usage: "time",
        description: "show the current date and time",
        kind: CommandKind::Time,
    },
    CommandDef {
        name: "sum",
        usage: "sum <a> <b>",
        description: "add two numbers",
        kind: CommandKind::Arithmetic(ArithOp::Add),
    },
    CommandDef {
        name: "sub",
        usage: "sub <a> <b>",
        description: "subtract two numbers",
        kind: CommandKind::Arithmetic(ArithOp::Subtract),
    },
    CommandDef {
        name: "mult",
        usage: "mult <a> <b>",
        description: "multiply two numbers",
        kind: CommandKind::Arithmetic(ArithOp::Multiply),
    },
    CommandDef {
        name: "div",
        usage: "div <a> <b>",
        description: "divide two numbers",
        kind: CommandKind::Arithmetic(ArithOp::Divide),
    },
];

/// Finds a command definition by name (case-insensitive).
pub fn find_command(name: &str) -> Option<&'static CommandDef> {
    let name_lower = name.to_lowercase();
    COMMANDS.iter().find(|c| c.name == name_lower)
}

/// Returns all command names in registry order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command() {
        assert!(find_command("sum").is_some());
        assert!(find_command("SUM").is_some());
        assert!(find_command("Help").is_some());
        assert!(find_command("soma").is_none());
        assert!(find_command("").is_none());
    }

    #[test]
    fn test_command_names_in_registry_order() {
        let names: Vec<_> = command_names().collect();
        assert_eq!(
            names,
            vec!["help", "clear", "time", "sum", "sub", "mult", "div"]
        );
    }

    #[test]
    fn test_names_are_lowercase_and_unique() {
        let mut names: Vec<_> = command_names().collect();
        assert!(names.iter().all(|n| *n == n.to_lowercase()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }

    #[test]
    fn test_usage_starts_with_name() {
        for cmd in COMMANDS {
            assert!(cmd.usage.starts_with(cmd.name), "{}", cmd.name);
        }
    }

    #[test]
    fn test_arith_ops() {
        assert_eq!(ArithOp::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(ArithOp::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(ArithOp::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(ArithOp::Divide.apply(6.0, 3.0), 2.0);
        assert!(ArithOp::Divide.apply(1.0, 0.0).is_infinite());
        assert!(ArithOp::Divide.apply(0.0, 0.0).is_nan());
        assert_eq!(ArithOp::Multiply.symbol(), '*');
    }
}
