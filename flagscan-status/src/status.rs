//! An error carrying a [`Code`], a description, its arguments and an optional cause.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::error::Error;
use core::fmt;
use core::panic::Location;

use crate::Code;
use crate::render::{Plain, Render, Rendered};

/// Boxed cause of a [`Status`].
pub type Cause = Box<dyn Error + Send + Sync + 'static>;

/// Defines an error with a classification.
///
/// Every status records the source location of the code that created it. When a status is the
/// cause of another one, both are rendered, the cause being indented below its consequence.
#[derive(Debug)]
pub struct Status {
    code: Code,
    desc: String,
    args: Vec<String>,
    cause: Option<Cause>,
    location: &'static Location<'static>,
}

impl Status {
    /// Create a new status with the given code and description.
    #[track_caller]
    pub fn new(code: Code, desc: impl Into<String>) -> Self {
        Status {
            code,
            desc: desc.into(),
            args: Vec::new(),
            cause: None,
            location: Location::caller(),
        }
    }

    /// Attach the error that caused this one.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Append an argument giving context to the error.
    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// Append many arguments giving context to the error.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.args.extend(args.into_iter().map(|x| x.to_string()));
        self
    }

    /// The classification of the error.
    #[inline(always)]
    pub fn code(&self) -> Code {
        self.code
    }

    /// The human readable description of the error.
    #[inline(always)]
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// The arguments, already rendered.
    #[inline(always)]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The error that caused this one, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Where the error has been created.
    #[inline(always)]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Render the error and its causes with the given strategy.
    pub fn display_with<'s, R>(&'s self, render: &'s R) -> Rendered<'s, R>
    where
        R: Render + ?Sized,
    {
        Rendered::new(self, render)
    }
}

macro_rules! make_status_ctor {
    ($($(#[$meta:meta])* $name:ident => $code:ident),* $(,)?) => {
        impl Status {
            $(
                $(#[$meta])*
                #[track_caller]
                pub fn $name(desc: impl Into<String>) -> Self {
                    Self::new(Code::$code, desc)
                }
            )*
        }
    };
}

make_status_ctor! {
    /// Create a new [`Code::Canceled`] status.
    canceled => Canceled,
    /// Create a new [`Code::Unknown`] status.
    unknown => Unknown,
    /// Create a new [`Code::InvalidArgument`] status.
    invalid_argument => InvalidArgument,
    /// Create a new [`Code::DeadlineExceeded`] status.
    deadline_exceeded => DeadlineExceeded,
    /// Create a new [`Code::NotFound`] status.
    not_found => NotFound,
    /// Create a new [`Code::AlreadyExists`] status.
    already_exists => AlreadyExists,
    /// Create a new [`Code::PermissionDenied`] status.
    permission_denied => PermissionDenied,
    /// Create a new [`Code::ResourceExhausted`] status.
    resource_exhausted => ResourceExhausted,
    /// Create a new [`Code::FailedPrecondition`] status.
    failed_precondition => FailedPrecondition,
    /// Create a new [`Code::Aborted`] status.
    aborted => Aborted,
    /// Create a new [`Code::OutOfRange`] status.
    out_of_range => OutOfRange,
    /// Create a new [`Code::Unimplemented`] status.
    unimplemented => Unimplemented,
    /// Create a new [`Code::Internal`] status.
    internal => Internal,
    /// Create a new [`Code::Unavailable`] status.
    unavailable => Unavailable,
    /// Create a new [`Code::DataLoss`] status.
    data_loss => DataLoss,
    /// Create a new [`Code::Unauthenticated`] status.
    unauthenticated => Unauthenticated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&Plain), f)
    }
}

impl Error for Status {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}] {=str}", self.code, self.desc.as_str())
    }
}

/// Get the code of any error. A missing error is [`Code::Ok`] and an error that is not a
/// [`Status`] is [`Code::Unknown`].
pub fn code_of(err: Option<&(dyn Error + 'static)>) -> Code {
    match err {
        None => Code::Ok,
        Some(err) => err.downcast_ref::<Status>().map_or(Code::Unknown, Status::code),
    }
}

/// Get the cause of an error, only if it is a [`Status`].
pub fn cause_of<'e>(err: &'e (dyn Error + 'static)) -> Option<&'e (dyn Error + 'static)> {
    let status = err.downcast_ref::<Status>()?;
    status.cause().map(|cause| cause as &(dyn Error + 'static))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("the cause of the problem")]
    struct Foreign;

    type Ctor = fn(String) -> Status;

    #[test]
    fn it_should_have_a_constructor_for_every_code() {
        let ctors: [(Code, Ctor); 16] = [
            (Code::Canceled, Status::canceled),
            (Code::Unknown, Status::unknown),
            (Code::InvalidArgument, Status::invalid_argument),
            (Code::DeadlineExceeded, Status::deadline_exceeded),
            (Code::NotFound, Status::not_found),
            (Code::AlreadyExists, Status::already_exists),
            (Code::PermissionDenied, Status::permission_denied),
            (Code::ResourceExhausted, Status::resource_exhausted),
            (Code::FailedPrecondition, Status::failed_precondition),
            (Code::Aborted, Status::aborted),
            (Code::OutOfRange, Status::out_of_range),
            (Code::Unimplemented, Status::unimplemented),
            (Code::Internal, Status::internal),
            (Code::Unavailable, Status::unavailable),
            (Code::DataLoss, Status::data_loss),
            (Code::Unauthenticated, Status::unauthenticated),
        ];

        for (code, ctor) in ctors {
            let err = ctor("oops an error occured".to_string())
                .with_cause(Status::internal("waaat").with_cause(Foreign))
                .with_args([1.0, 0.5]);

            assert_that!(err.code(), eq(code));
            assert_that!(code_of(Some(&err)), eq(code));
            assert_that!(err.args().len(), eq(2));

            let cause = cause_of(&err).and_then(|x| x.downcast_ref::<Status>());
            assert_that!(cause.map(Status::code), eq(Some(Code::Internal)));
        }
    }

    #[test]
    fn it_should_classify_foreign_errors() {
        assert_that!(code_of(None), eq(Code::Ok));
        assert_that!(code_of(Some(&Foreign)), eq(Code::Unknown));
        assert_that!(cause_of(&Foreign).is_none(), eq(true));
    }

    #[test]
    fn it_should_record_the_caller_location() {
        let (err, line) = (Status::not_found("missing"), line!());

        assert_that!(err.location().file(), eq(file!()));
        assert_that!(err.location().line(), eq(line));
    }

    #[test]
    fn it_should_expose_the_cause_as_source() {
        let err = Status::aborted("stopped").with_cause(Foreign);

        let source = err.source().map(|x| x.to_string());
        assert_that!(source.as_deref(), eq(Some("the cause of the problem")));
        assert_that!(Status::aborted("stopped").source().is_none(), eq(true));
    }

    #[test]
    fn it_should_render_with_the_plain_strategy() {
        let (err, line) = (Status::invalid_argument("bad").with_arg("x").with_arg(2), line!());

        let text = err.to_string();
        let mut lines = text.lines();

        assert_that!(lines.next(), eq(Some("InvalidArgument] bad args:[x 2]")));

        let at = lines.next().unwrap_or_default();
        assert_that!(at, starts_with(alloc::format!("{}:{}:", file!(), line)));
        assert_that!(lines.next(), eq(None));
    }
}
