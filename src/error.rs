//! The Error module contains helpful wrappers around the failures a [`CheckpointStack`]
//! can report. No failure ever breaks the stack itself: the chain stays consistent and
//! the caller decides whether the failed operation matters.
//!
//! [`CheckpointStack`]: crate::CheckpointStack

use std::fmt::{Display, Formatter};

use colored::Colorize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrKind {
    /// Popping from, or remembering a point in, a stack without any node
    EmptyStack,
    /// The requested label was never registered
    CheckpointNotFound,
    /// The chain was exhausted without meeting the checkpointed node. This is how a
    /// stale checkpoint shows up
    CheckpointUnreachable,
}

impl ErrKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrKind::EmptyStack => "empty stack",
            ErrKind::CheckpointNotFound => "checkpoint not found",
            ErrKind::CheckpointUnreachable => "checkpoint unreachable",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Error {
    kind: ErrKind,
    msg: Option<String>,
}

impl Error {
    pub fn new(kind: ErrKind) -> Error {
        Error { kind, msg: None }
    }

    pub fn with_msg(self, msg: String) -> Error {
        Error {
            msg: Some(msg),
            ..self
        }
    }

    /// What kind of error the error is
    pub fn kind(&self) -> ErrKind {
        self.kind
    }

    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }

    /// Display the error on stderr
    pub fn emit(&self) {
        let header = "error".black().on_yellow();

        match &self.msg {
            Some(msg) => eprintln!("{}: {}: {}", header, self.kind.as_str(), msg),
            None => eprintln!("{}: {}", header, self.kind.as_str()),
        }
    }

    pub fn exit(&self) -> ! {
        // The exit code depends on the kind of error
        std::process::exit(self.kind as i32 + 1);
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kind.as_str())?;
        if let Some(msg) = &self.msg {
            write!(f, ": {}", msg)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Error returned by [`pop_till`](crate::CheckpointStack::pop_till). Values that were
/// already popped when the failure was discovered are handed back instead of being
/// dropped, so that the caller can decide whether a partial drain is acceptable.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PartialDrain<T> {
    popped: Vec<T>,
    error: Error,
}

impl<T> PartialDrain<T> {
    pub fn new(popped: Vec<T>, error: Error) -> PartialDrain<T> {
        PartialDrain { popped, error }
    }

    /// Values popped before the failure, most recent first
    pub fn popped(&self) -> &[T] {
        &self.popped
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn kind(&self) -> ErrKind {
        self.error.kind()
    }

    pub fn into_parts(self) -> (Vec<T>, Error) {
        (self.popped, self.error)
    }
}

/// Discarding the partially popped values is always allowed
impl<T> From<PartialDrain<T>> for Error {
    fn from(drain: PartialDrain<T>) -> Error {
        drain.error
    }
}

impl<T> Display for PartialDrain<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{} ({} value(s) popped)", self.error, self.popped.len())
    }
}

impl<T: std::fmt::Debug> std::error::Error for PartialDrain<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_display_without_msg() {
        let e = Error::new(ErrKind::EmptyStack);

        assert_eq!(e.to_string(), "empty stack");
        assert!(e.msg().is_none());
    }

    #[test]
    fn t_display_with_msg() {
        let e = Error::new(ErrKind::CheckpointNotFound)
            .with_msg(String::from("remember point `p` not found"));

        assert_eq!(
            e.to_string(),
            "checkpoint not found: remember point `p` not found"
        );
    }

    #[test]
    fn t_partial_drain_into_error() {
        let drain = PartialDrain::new(
            vec![3, 2, 1],
            Error::new(ErrKind::CheckpointUnreachable),
        );

        assert_eq!(drain.popped(), &[3, 2, 1]);
        assert_eq!(drain.kind(), ErrKind::CheckpointUnreachable);

        let e: Error = drain.into();
        assert_eq!(e.kind(), ErrKind::CheckpointUnreachable);
    }

    #[test]
    fn t_question_mark_drops_partial_values() {
        fn inner() -> Result<Vec<u8>, Error> {
            let res: Result<Vec<u8>, PartialDrain<u8>> = Err(PartialDrain::new(
                vec![1],
                Error::new(ErrKind::CheckpointUnreachable),
            ));
            let values = res?;

            Ok(values)
        }

        assert_eq!(inner().unwrap_err().kind(), ErrKind::CheckpointUnreachable);
    }
}
