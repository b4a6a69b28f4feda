//! Big endian readers and writers over byte slices.
//!
//! Both keep the first error they meet. Once failed, every following operation does nothing
//! (reads give zero) and the error is handed back by `finish`.

use crate::Status;

/// Defines a big endian reader over a byte slice.
#[derive(Debug)]
pub struct Reader<'a> {
    rest: &'a [u8],
    read_bytes: usize,
    err: Option<Status>,
}

impl<'a> Reader<'a> {
    /// Create a new reader at the start of `src`.
    pub fn new(src: &'a [u8]) -> Self {
        Reader {
            rest: src,
            read_bytes: 0,
            err: None,
        }
    }

    /// Number of bytes read so far.
    #[inline(always)]
    pub fn read_bytes(&self) -> usize {
        self.read_bytes
    }

    /// The bytes not read yet.
    #[inline(always)]
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }

    /// The first error met, if any.
    #[inline(always)]
    pub fn err(&self) -> Option<&Status> {
        self.err.as_ref()
    }

    /// Give back the number of bytes read, or the first error.
    pub fn finish(self) -> Result<usize, Status> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.read_bytes),
        }
    }

    /// Read `n` bytes. Gives an empty slice on error.
    #[track_caller]
    pub fn bytes(&mut self, n: usize) -> &'a [u8] {
        if self.err.is_some() {
            return &[];
        }

        if n > self.rest.len() {
            self.err = Some(
                Status::data_loss("not enough data")
                    .with_arg(format_args!("read: {}", self.rest.len()))
                    .with_arg(format_args!("wanted: {n}")),
            );
            return &[];
        }

        let (head, rest) = self.rest.split_at(n);
        self.rest = rest;
        self.read_bytes += n;
        head
    }

    #[track_caller]
    fn array<const N: usize>(&mut self) -> [u8; N] {
        <[u8; N]>::try_from(self.bytes(N)).unwrap_or([0; N])
    }

    /// Read a byte.
    #[track_caller]
    pub fn byte(&mut self) -> u8 {
        self.array::<1>()[0]
    }

    /// Read an `u16`.
    #[track_caller]
    pub fn u16(&mut self) -> u16 {
        u16::from_be_bytes(self.array())
    }

    /// Read an `u32`.
    #[track_caller]
    pub fn u32(&mut self) -> u32 {
        u32::from_be_bytes(self.array())
    }

    /// Read an `u64`.
    #[track_caller]
    pub fn u64(&mut self) -> u64 {
        u64::from_be_bytes(self.array())
    }

    /// Read an `i64`.
    #[track_caller]
    pub fn i64(&mut self) -> i64 {
        i64::from_be_bytes(self.array())
    }

    /// Read three `u32` at once. Either all of them are read or none.
    #[track_caller]
    pub fn u32x3(&mut self) -> (u32, u32, u32) {
        let b: [u8; 12] = self.array();
        let word = |i: usize| u32::from_be_bytes([b[i], b[i + 1], b[i + 2], b[i + 3]]);

        (word(0), word(4), word(8))
    }
}

/// Defines a big endian writer into a fixed size buffer.
#[derive(Debug)]
pub struct Writer<'a> {
    dest: &'a mut [u8],
    offset: usize,
    err: Option<Status>,
}

impl<'a> Writer<'a> {
    /// Create a new writer at the start of `dest`.
    pub fn new(dest: &'a mut [u8]) -> Self {
        Writer {
            dest,
            offset: 0,
            err: None,
        }
    }

    /// Where the next value will be written.
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        self.dest.get(..self.offset).unwrap_or_default()
    }

    /// The first error met, if any.
    #[inline(always)]
    pub fn err(&self) -> Option<&Status> {
        self.err.as_ref()
    }

    /// Give back the number of bytes written, or the first error.
    pub fn finish(self) -> Result<usize, Status> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.offset),
        }
    }

    #[track_caller]
    fn put(&mut self, op: &'static str, at: usize, bytes: &[u8]) -> bool {
        if self.err.is_some() {
            return false;
        }

        let len = self.dest.len();
        let Some(dest) = at
            .checked_add(bytes.len())
            .and_then(|end| self.dest.get_mut(at..end))
        else {
            self.err = Some(
                Status::out_of_range(op)
                    .with_arg(format_args!("{} bytes at {at} of {len}", bytes.len())),
            );
            return false;
        };

        dest.copy_from_slice(bytes);
        true
    }

    #[track_caller]
    fn append(&mut self, op: &'static str, bytes: &[u8]) {
        if self.put(op, self.offset, bytes) {
            self.offset += bytes.len();
        }
    }

    /// Write a byte.
    #[track_caller]
    pub fn byte(&mut self, v: u8) {
        self.append("byte", &[v]);
    }

    /// Write an `u16`.
    #[track_caller]
    pub fn u16(&mut self, v: u16) {
        self.append("u16", &v.to_be_bytes());
    }

    /// Write an `u32`.
    #[track_caller]
    pub fn u32(&mut self, v: u32) {
        self.append("u32", &v.to_be_bytes());
    }

    /// Write an `u64`.
    #[track_caller]
    pub fn u64(&mut self, v: u64) {
        self.append("u64", &v.to_be_bytes());
    }

    /// Write an `i64`.
    #[track_caller]
    pub fn i64(&mut self, v: i64) {
        self.append("i64", &v.to_be_bytes());
    }

    /// Write raw bytes.
    #[track_caller]
    pub fn bytes(&mut self, bytes: &[u8]) {
        self.append("bytes", bytes);
    }

    /// Overwrite an `u16` at the given offset, e.g. a length known only once the payload has
    /// been written. The write offset does not move.
    #[track_caller]
    pub fn u16_at(&mut self, offset: usize, v: u16) {
        self.put("u16_at", offset, &v.to_be_bytes());
    }
}
