//! A scanner that turns a token sequence into flag specifications.
//!
//! Each token is classified as a flag header followed by a name (e.g. `-v`, `--verbose`), or as
//! a bare token. A flag may carry a value either inline (`--level=3`) or in the next token
//! (`--level 3`), provided that the next token does not start with a hyphen. The terminator
//! `--` stops the scan, leaving the following tokens untouched.

use core::iter::FusedIterator;

use flagscan_status::Code;

use crate::lexer::{cut, split};

/// The token that stops the scanning of flags.
pub const TERMINATOR: &str = "--";

/// Defines the possible errors that may occur during scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error<'a> {
    /// An inline value marker `=` has an empty name on its left or an empty value on its right.
    /// Holds the whole offending token.
    #[error("malformed flag `{0}`")]
    MalformedFlag(&'a str),

    /// Insufficient space for collecting flags.
    #[error("out of scanner memory space")]
    OutOfMemory,
}

impl Error<'_> {
    /// Classification of the error.
    pub fn code(&self) -> Code {
        match self {
            Error::MalformedFlag(_) => Code::InvalidArgument,
            Error::OutOfMemory => Code::ResourceExhausted,
        }
    }
}

#[cfg(feature = "alloc")]
impl From<Error<'_>> for flagscan_status::Status {
    #[track_caller]
    fn from(err: Error<'_>) -> Self {
        use flagscan_status::Status;

        match err {
            Error::MalformedFlag(token) => {
                Status::invalid_argument("malformed flag found").with_arg(token)
            }
            Error::OutOfMemory => Status::resource_exhausted("out of scanner memory space"),
        }
    }
}

/// How the value of a flag has been found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Separator {
    /// No value.
    #[default]
    None,

    /// Value given after `=` in the same token.
    Inline,

    /// Value taken from the next token.
    Next,
}

impl Separator {
    /// The separator as it appears between the flag and its value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Inline => "=",
            Separator::Next => " ",
        }
    }
}

/// Defines one unit found in the token sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Spec<'a> {
    /// The name, without the hyphens.
    pub name: &'a str,

    /// The value, empty if none.
    pub value: &'a str,

    /// The leading hyphens, empty for a bare token.
    pub header: &'a str,

    /// How the value has been found.
    pub separator: Separator,
}

impl<'a> Spec<'a> {
    /// Create a new spec.
    pub const fn new(name: &'a str, value: &'a str, header: &'a str, separator: Separator) -> Self {
        Spec {
            name,
            value,
            header,
            separator,
        }
    }

    /// Evaluate if the spec comes from a flag, i.e. a token with leading hyphens.
    #[inline(always)]
    pub fn is_flag(&self) -> bool {
        !self.header.is_empty()
    }

    /// Evaluate if the spec carries a value.
    #[inline(always)]
    pub fn has_value(&self) -> bool {
        self.separator != Separator::None
    }
}

/// Defines a `Scanner` that streams specs out of a token sequence.
///
/// The scanner stops after the terminator, at the end of the sequence or after the first error.
/// Whatever follows the terminator is left in [`Scanner::remainder`].
#[derive(Clone, Debug)]
pub struct Scanner<'a, S> {
    tokens: &'a [S],
    done: bool,
}

impl<'a, S> Scanner<'a, S>
where
    S: AsRef<str>,
{
    /// Create a new scanner over the given tokens.
    pub fn new(tokens: &'a [S]) -> Self {
        Scanner {
            tokens,
            done: false,
        }
    }

    /// Retrieve the tokens that have not been consumed yet.
    #[inline(always)]
    pub fn remainder(&self) -> &'a [S] {
        self.tokens
    }

    fn next_spec(&mut self) -> Result<Option<Spec<'a>>, Error<'a>> {
        while !self.tokens.is_empty() {
            let (head, tail) = cut(self.tokens);
            self.tokens = tail;

            if head.is_empty() {
                #[cfg(feature = "defmt")]
                defmt::trace!("skipping empty token");
                continue;
            }

            let (header, name) = split(head);

            if header.is_empty() && name == TERMINATOR {
                #[cfg(feature = "defmt")]
                defmt::trace!("terminator found, {} tokens left", self.tokens.len());
                self.done = true;
                return Ok(None);
            }

            // Inline value, split at the first `=`.
            if let Some((name, value)) = name.split_once('=') {
                if name.is_empty() || value.is_empty() {
                    return Err(Error::MalformedFlag(head));
                }

                return Ok(Some(Spec::new(name, value, header, Separator::Inline)));
            }

            // Only flags look ahead. A hyphen means the next token is a flag itself.
            if !header.is_empty() {
                let (peek, rest) = cut(self.tokens);

                if !peek.is_empty() && !peek.starts_with('-') {
                    self.tokens = rest;
                    return Ok(Some(Spec::new(name, peek, header, Separator::Next)));
                }
            }

            return Ok(Some(Spec::new(name, "", header, Separator::None)));
        }

        Ok(None)
    }
}

impl<'a, S> Iterator for Scanner<'a, S>
where
    S: AsRef<str>,
{
    type Item = Result<Spec<'a>, Error<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_spec().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }

        item
    }
}

impl<S> FusedIterator for Scanner<'_, S> where S: AsRef<str> {}

/// Scan the tokens and call `f` for each spec, in order. Returns the tokens left after the
/// terminator, if any.
///
/// The first error stops the scan. An error returned by `f` is given back as is, while a
/// malformed token is converted into `E`. Calls to `f` made before the error are not undone.
pub fn scan<'a, S, E, F>(tokens: &'a [S], mut f: F) -> Result<&'a [S], E>
where
    S: AsRef<str>,
    E: From<Error<'a>>,
    F: FnMut(Spec<'a>) -> Result<(), E>,
{
    let mut scanner = Scanner::new(tokens);

    for spec in scanner.by_ref() {
        f(spec?)?;
    }

    Ok(scanner.remainder())
}
