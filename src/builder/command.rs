//! Builder for constructing commands.

use crate::builder::error::BuildError;
use crate::core::{Callback, Command};
use std::convert::Infallible;
use std::rc::Rc;

/// Builder for constructing commands with a fluent API.
///
/// # Example
///
/// ```
/// use lithe_undo::builder::CommandBuilder;
///
/// let command = CommandBuilder::<i32>::new()
///     .name("reset")
///     .apply(|| 0)
///     .invert(|| 42)
///     .build()
///     .unwrap();
///
/// assert_eq!(command.name(), Some("reset"));
/// ```
pub struct CommandBuilder<T, E = Infallible> {
    name: Option<String>,
    apply: Option<Callback<T, E>>,
    invert: Option<Callback<T, E>>,
}

impl<T: 'static, E: 'static> CommandBuilder<T, E> {
    /// Create a new command builder.
    pub fn new() -> Self {
        Self {
            name: None,
            apply: None,
            invert: None,
        }
    }

    /// Set the diagnostic name (optional).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set an infallible forward callback (required).
    pub fn apply<F>(mut self, f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.apply = Some(Rc::new(move || Ok(f())));
        self
    }

    /// Set a forward callback that can fail (required).
    pub fn try_apply<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<T, E> + 'static,
    {
        self.apply = Some(Rc::new(f));
        self
    }

    /// Set an infallible inverse callback (required).
    pub fn invert<F>(mut self, f: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        self.invert = Some(Rc::new(move || Ok(f())));
        self
    }

    /// Set an inverse callback that can fail (required).
    pub fn try_invert<F>(mut self, f: F) -> Self
    where
        F: Fn() -> Result<T, E> + 'static,
    {
        self.invert = Some(Rc::new(f));
        self
    }

    /// Build the command.
    pub fn build(self) -> Result<Command<T, E>, BuildError> {
        let apply = self.apply.ok_or(BuildError::MissingApply)?;
        let invert = self.invert.ok_or(BuildError::MissingInvert)?;

        Ok(Command::from_callbacks(self.name, apply, invert))
    }
}

impl<T: 'static, E: 'static> Default for CommandBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryState;
    use std::cell::RefCell;

    #[test]
    fn builder_validates_missing_apply() {
        let result = CommandBuilder::<i32>::new().invert(|| 0).build();

        assert!(matches!(result, Err(BuildError::MissingApply)));
    }

    #[test]
    fn builder_validates_missing_invert() {
        let result = CommandBuilder::<i32>::new().apply(|| 1).build();

        assert!(matches!(result, Err(BuildError::MissingInvert)));
    }

    #[test]
    fn name_is_optional() {
        let command = CommandBuilder::<i32>::new()
            .apply(|| 1)
            .invert(|| 0)
            .build()
            .unwrap();

        assert_eq!(command.name(), None);
    }

    #[test]
    fn fallible_callbacks_are_kept() {
        let command = CommandBuilder::<i32, String>::new()
            .name("save")
            .try_apply(|| Err("read-only".to_string()))
            .try_invert(|| Ok(0))
            .build()
            .unwrap();

        assert_eq!(command.apply(), Err("read-only".to_string()));
        assert_eq!(command.invert(), Ok(0));
    }

    #[test]
    fn built_command_drives_history() {
        let text = Rc::new(RefCell::new(String::from("hello")));
        let (push, pop) = (Rc::clone(&text), Rc::clone(&text));

        let append = CommandBuilder::<String>::new()
            .name("append")
            .apply(move || {
                push.borrow_mut().push_str(" world");
                push.borrow().clone()
            })
            .invert(move || {
                let mut value = pop.borrow_mut();
                let len = value.len() - " world".len();
                value.truncate(len);
                value.clone()
            })
            .build()
            .unwrap();

        let history = HistoryState::new(String::from("hello"))
            .execute(append)
            .unwrap();
        assert_eq!(history.current(), "hello world");

        let history = history.undo().unwrap();
        assert_eq!(history.current(), "hello");
    }

    #[test]
    fn build_error_messages_are_descriptive() {
        assert!(BuildError::MissingApply.to_string().contains(".apply"));
        assert!(BuildError::MissingInvert.to_string().contains(".invert"));
    }
}
