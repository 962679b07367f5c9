//! Bounded command stack backing both sides of the history.

use super::command::Command;
use super::options::HistoryOptions;
use std::collections::VecDeque;

/// Ordered commands, most recent last.
///
/// Entries are pushed and popped at the tail. When the depth bound is
/// exceeded the oldest entry is dropped from the front.
pub struct CommandStack<T, E> {
    entries: VecDeque<Command<T, E>>,
}

impl<T, E> CommandStack<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Push at the tail, returning the entry evicted from the front if the
    /// bound was exceeded.
    pub(crate) fn push(
        &mut self,
        command: Command<T, E>,
        options: &HistoryOptions,
    ) -> Option<Command<T, E>> {
        self.entries.push_back(command);
        if options.exceeded_by(self.entries.len()) {
            self.entries.pop_front()
        } else {
            None
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Command<T, E>> {
        self.entries.pop_back()
    }

    /// Number of commands held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack holds no commands.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Commands from oldest to most recent.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Command<T, E>> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The most recent command.
    pub fn last(&self) -> Option<&Command<T, E>> {
        self.entries.back()
    }

    /// Diagnostic names from oldest to most recent.
    pub fn names(&self) -> Vec<Option<&str>> {
        self.entries.iter().map(Command::name).collect()
    }

    /// Whether this exact command (by identity) is held.
    pub fn contains(&self, command: &Command<T, E>) -> bool {
        self.entries.contains(command)
    }
}

impl<T, E> Default for CommandStack<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for CommandStack<T, E> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T, E> PartialEq for CommandStack<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T, E> std::fmt::Debug for CommandStack<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
