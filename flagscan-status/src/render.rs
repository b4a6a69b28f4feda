//! Rendering strategies for [`Status`] chains.

use core::error::Error;
use core::fmt::{self, Write};

use crate::Status;

/// Indentation used for each level of a chain of causes.
pub const DEFAULT_INDENTS: &[&str] = &["", "  ", "    ", "      ", "        "];

/// Defines how a chain of errors is rendered.
///
/// A chain is rendered from the outermost status down to its root cause, one entry per error,
/// entries being separated by a newline. The renderer never writes the separating newline
/// itself.
pub trait Render {
    /// Indentation for each level of the chain. Once exhausted, the last one is reused.
    fn indents(&self) -> &[&str] {
        DEFAULT_INDENTS
    }

    /// Render one status of the chain.
    fn render_status(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: &str,
        status: &Status,
    ) -> fmt::Result;

    /// Render a root cause that is not a [`Status`].
    fn render_foreign(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: &str,
        err: &(dyn Error + 'static),
    ) -> fmt::Result {
        write!(f, "{indent}error] {err}")
    }
}

/// The default strategy: code, description, arguments and creation location.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Render for Plain {
    fn render_status(
        &self,
        f: &mut fmt::Formatter<'_>,
        indent: &str,
        status: &Status,
    ) -> fmt::Result {
        write!(f, "{indent}{}] {} args:[", status.code(), status.description())?;

        for (i, arg) in status.args().iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_str(arg)?;
        }

        let at = status.location();
        write!(f, "]\n{indent}{}:{}:{}", at.file(), at.line(), at.column())
    }
}

/// A status bound to a rendering strategy, ready to be displayed.
pub struct Rendered<'s, R: ?Sized> {
    status: &'s Status,
    render: &'s R,
}

impl<'s, R> Rendered<'s, R>
where
    R: Render + ?Sized,
{
    /// Bind the status to the strategy.
    pub fn new(status: &'s Status, render: &'s R) -> Self {
        Rendered { status, render }
    }

    fn indent(&self, depth: usize) -> &'s str {
        let indents = self.render.indents();
        indents
            .get(depth)
            .or(indents.last())
            .copied()
            .unwrap_or_default()
    }
}

impl<R> fmt::Display for Rendered<'_, R>
where
    R: Render + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current = self.status;
        let mut depth = 0;

        loop {
            if depth > 0 {
                f.write_char('\n')?;
            }

            self.render.render_status(f, self.indent(depth), current)?;
            depth += 1;

            let Some(cause) = current.cause() else {
                return Ok(());
            };

            match cause.downcast_ref::<Status>() {
                Some(next) => current = next,
                None => {
                    f.write_char('\n')?;
                    return self.render.render_foreign(f, self.indent(depth), cause);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use googletest::prelude::*;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct Foreign;

    /// Leave the location out so that the output is stable.
    struct Terse<'i>(&'i [&'i str]);

    impl Render for Terse<'_> {
        fn indents(&self) -> &[&str] {
            self.0
        }

        fn render_status(
            &self,
            f: &mut fmt::Formatter<'_>,
            indent: &str,
            status: &Status,
        ) -> fmt::Result {
            write!(f, "{indent}{}] {}", status.code(), status.description())
        }
    }

    #[test]
    fn it_should_render_a_chain_of_causes() {
        let err = Status::invalid_argument("outer")
            .with_cause(Status::internal("waaat").with_cause(Foreign));

        let text = err.display_with(&Terse(DEFAULT_INDENTS)).to_string();

        assert_that!(
            text.as_str(),
            eq("InvalidArgument] outer\n  Internal] waaat\n    error] disk on fire")
        );
    }

    #[test]
    fn it_should_reuse_the_last_indent() {
        let err = Status::aborted("a")
            .with_cause(Status::aborted("b").with_cause(Status::aborted("c")));

        let text = err.display_with(&Terse(&["", ">"])).to_string();

        assert_that!(text.as_str(), eq("Aborted] a\n>Aborted] b\n>Aborted] c"));
    }

    #[test]
    fn it_should_render_without_indents() {
        let err = Status::unknown("a").with_cause(Foreign);

        let text = err.display_with(&Terse(&[])).to_string();

        assert_that!(text.as_str(), eq("Unknown] a\nerror] disk on fire"));
    }

    #[test]
    fn it_should_render_each_status_with_its_location() {
        let err = Status::data_loss("short read").with_cause(Status::out_of_range("eof"));

        let text = err.to_string();
        let lines: alloc::vec::Vec<&str> = text.lines().collect();

        assert_that!(lines.len(), eq(4));
        assert_that!(lines[0], eq("DataLoss] short read args:[]"));
        assert_that!(lines[1], starts_with(file!()));
        assert_that!(lines[2], eq("  OutOfRange] eof args:[]"));
        assert_that!(lines[3], starts_with(alloc::format!("  {}", file!())));
    }
}
