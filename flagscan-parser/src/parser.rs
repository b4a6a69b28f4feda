//! A store of the specs scanned from a command line.

use heapless::Vec;

use crate::scanner::{Error, Spec, scan};

/// Default capacity of [`ScannedArgs`].
pub const SPEC_COUNT_MAX: usize = 16;

/// Defines the result of a scan. This is a simple store that offers a look-up over the scanned
/// specs, in the order they have been found, along with the tokens left after the terminator.
#[derive(Debug)]
pub struct ScannedArgs<'a, S = &'a str, const SIZE: usize = SPEC_COUNT_MAX> {
    specs: Vec<Spec<'a>, SIZE>,
    remainder: &'a [S],
}

impl<'a, S, const SIZE: usize> ScannedArgs<'a, S, SIZE>
where
    S: AsRef<str>,
{
    /// Try to scan the input tokens. Fails if a token is malformed or if there are more than
    /// `SIZE` specs.
    pub fn try_parse(argv: &'a [S]) -> Result<Self, Error<'a>> {
        let mut specs = Vec::new();

        let remainder = scan(argv, |spec| {
            specs.push(spec).map_err(|_| Error::OutOfMemory)
        })?;

        Ok(ScannedArgs { specs, remainder })
    }

    /// Check if there exists a spec with the given name, flag or bare token.
    #[inline(always)]
    pub fn contains(&self, name: &str) -> bool {
        self.specs.iter().any(|x| x.name == name)
    }

    /// Get the last spec with the given name.
    pub fn get(&self, name: &str) -> Option<Spec<'a>> {
        self.specs.iter().rev().find(|x| x.name == name).copied()
    }

    /// Get all the specs with the given name, in order.
    pub fn get_all<'s>(&'s self, name: &'s str) -> impl Iterator<Item = Spec<'a>> + 's {
        self.specs.iter().filter(move |x| x.name == name).copied()
    }

    /// Get the specs that come from a flag.
    pub fn flags(&self) -> impl Iterator<Item = Spec<'a>> + '_ {
        self.specs.iter().filter(|x| x.is_flag()).copied()
    }

    /// Get the bare tokens found before the terminator.
    pub fn bare(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.specs
            .iter()
            .filter(|x| !x.is_flag() && !x.has_value())
            .map(|x| x.name)
    }

    /// All the specs, in order.
    #[inline(always)]
    pub fn specs(&self) -> &[Spec<'a>] {
        &self.specs
    }

    /// The tokens left after the terminator.
    #[inline(always)]
    pub fn remainder(&self) -> &'a [S] {
        self.remainder
    }
}
