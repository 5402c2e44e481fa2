//! Command recognition and argument extraction.

/// A message that carries the trigger, split into its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Whitespace separated tokens following the trigger.
    pub args: Vec<String>,
}

/// What an invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Trigger without a handle.
    MissingHandle,
    /// Full summary for a player.
    Summary {
        /// Player handle.
        handle: &'a str,
    },
    /// Single operator summary for a player.
    Operator {
        /// Player handle.
        handle: &'a str,
        /// Operator name as typed.
        operator: &'a str,
    },
}

impl CommandInvocation {
    /// Parses `text`, returning `None` unless one of its tokens is `trigger`.
    ///
    /// Arguments are the tokens after the first trigger token.
    pub fn parse(text: &str, trigger: &str) -> Option<Self> {
        let mut tokens = text.split_whitespace();
        tokens.by_ref().find(|token| *token == trigger)?;

        Some(Self {
            args: tokens.map(str::to_string).collect(),
        })
    }

    /// Interprets the arguments. Anything past the operator name is ignored.
    pub fn command(&self) -> Command<'_> {
        match self.args.as_slice() {
            [] => Command::MissingHandle,
            [handle] => Command::Summary {
                handle: handle.as_str(),
            },
            [handle, operator, ..] => Command::Operator {
                handle: handle.as_str(),
                operator: operator.as_str(),
            },
        }
    }
}
