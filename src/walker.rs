use std::borrow::Cow;
use std::fmt;

use ropey::Rope;

use crate::config::{WalkerOptions, ZeroLookbehind};
use crate::error::WalkerError;
use crate::needle::{CharSet, Needle, resolve_codes};
use crate::normalize::normalize_newlines;

/// A read-only text buffer with a movable cursor.
///
/// Lookups (`peek`, `behind`, `at`, `find_next`, ...) return `None` when
/// there is nothing at the requested offset. Commands (`move_by`,
/// `move_to`, `substring`) return a [`WalkerError`] instead and leave the
/// cursor where it was.
///
/// Positions count chars, not bytes.
pub struct StringWalker {
    rope: Rope,
    len: usize,
    cursor: usize,
    zero_lookbehind: ZeroLookbehind,
}

impl StringWalker {
    /// Create a walker over `text` with default options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, &WalkerOptions::default())
    }

    /// Create a walker over `text`, normalizing line endings if asked to.
    pub fn with_options(text: &str, options: &WalkerOptions) -> Self {
        let data = if options.normalize_whitespace {
            normalize_newlines(text, options.newline_mode)
        } else {
            Cow::Borrowed(text)
        };
        let rope = Rope::from_str(&data);
        let len = rope.len_chars();
        tracing::debug!(
            len,
            normalized = matches!(data, Cow::Owned(_)),
            "string walker created"
        );
        Self {
            rope,
            len,
            cursor: 0,
            zero_lookbehind: options.zero_lookbehind,
        }
    }

    /// Create a walker from UTF-8 bytes.
    ///
    /// Invalid sequences decode to U+FFFD.
    pub fn from_bytes(bytes: &[u8], options: &WalkerOptions) -> Self {
        Self::with_options(&String::from_utf8_lossy(bytes), options)
    }

    /// The current cursor position.
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of chars in the text.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the text has no chars.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the cursor is at the end of the text.
    pub const fn is_eof(&self) -> bool {
        self.cursor >= self.len
    }

    /// The code at the cursor.
    pub fn current(&self) -> Option<u32> {
        self.at(self.cursor)
    }

    /// The char at the cursor.
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.cursor)
    }

    /// The code at `pos`, or `None` outside the text.
    pub fn at(&self, pos: usize) -> Option<u32> {
        self.char_at(pos).map(u32::from)
    }

    /// The char at `pos`, or `None` outside the text.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.rope.get_char(pos)
    }

    /// Look `n` chars ahead of the cursor.
    ///
    /// ```
    /// use string_walker::StringWalker;
    ///
    /// let s = StringWalker::new("lorem ipsum");
    /// assert_eq!(s.peek(1), Some(111)); // o
    /// assert_eq!(s.peek(2), Some(114)); // r
    /// assert_eq!(s.peek(99), None);
    /// ```
    pub fn peek(&self, n: usize) -> Option<u32> {
        self.peek_char(n).map(u32::from)
    }

    /// Char form of [`peek`](Self::peek).
    pub fn peek_char(&self, n: usize) -> Option<char> {
        self.char_at(self.cursor.checked_add(n)?)
    }

    /// Look `n` chars behind the cursor.
    ///
    /// With the default [`ZeroLookbehind::AsOne`], `behind(0)` is the same
    /// as `behind(1)`.
    pub fn behind(&self, n: usize) -> Option<u32> {
        self.behind_char(n).map(u32::from)
    }

    /// Char form of [`behind`](Self::behind).
    pub fn behind_char(&self, n: usize) -> Option<char> {
        let n = match (n, self.zero_lookbehind) {
            (0, ZeroLookbehind::AsOne) => 1,
            _ => n,
        };
        self.char_at(self.cursor.checked_sub(n)?)
    }

    /// Step the cursor forward and return the code at the new position.
    ///
    /// At the end of the text nothing moves and `None` is returned. Stepping
    /// onto the end moves the cursor but also returns `None`.
    pub fn advance(&mut self) -> Option<u32> {
        self.advance_char().map(u32::from)
    }

    /// Char form of [`advance`](Self::advance).
    pub fn advance_char(&mut self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.cursor += 1;
        self.current_char()
    }

    /// Position of the next occurrence of `needle` after the cursor.
    ///
    /// The char under the cursor is never examined.
    ///
    /// ```
    /// use string_walker::StringWalker;
    ///
    /// let s = StringWalker::new("lorem ipsum");
    /// assert_eq!(s.find_next(' '), Ok(Some(5)));
    /// assert_eq!(s.find_next("z"), Ok(None));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::InvalidArgument`] if `needle` is not exactly
    /// one character.
    pub fn find_next(&self, needle: impl Needle) -> Result<Option<usize>, WalkerError> {
        let code = match needle.code_unit() {
            Ok(Some(code)) => code,
            Ok(None) => return Err(reject(WalkerError::invalid_argument(""))),
            Err(err) => return Err(reject(err)),
        };
        Ok(self.scan_forward(|c| c == code))
    }

    /// Position of the next char after the cursor matching any of `needles`.
    ///
    /// Empty text needles match nothing.
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::InvalidArgument`] if any needle is longer than
    /// one character.
    pub fn find_next_of<N: Needle>(&self, needles: &[N]) -> Result<Option<usize>, WalkerError> {
        let codes = resolve_codes(needles).map_err(reject)?;
        Ok(self.scan_forward(|c| codes.contains(&c)))
    }

    /// Move the cursor by `steps`, which may be negative.
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::OutOfRange`] if the cursor would land before
    /// the start or past the end. The cursor does not move.
    pub fn move_by(&mut self, steps: isize) -> Result<&mut Self, WalkerError> {
        self.move_to((self.cursor as isize).saturating_add(steps))
    }

    /// Move the cursor to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::OutOfRange`] if `target` is outside
    /// `0..=len()`. The cursor does not move.
    pub fn move_to(&mut self, target: isize) -> Result<&mut Self, WalkerError> {
        let target = self.check_bounds(target)?;
        tracing::trace!(from = self.cursor, to = target, "cursor moved");
        self.cursor = target;
        Ok(self)
    }

    /// Reset the cursor to the start.
    pub fn rewind(&mut self) -> &mut Self {
        self.cursor = 0;
        self
    }

    /// Move forward past every consecutive char in `set`.
    ///
    /// ```
    /// use string_walker::StringWalker;
    ///
    /// let mut s = StringWalker::new("lorem \t\n ipsum");
    /// let space = s.find_next(' ').unwrap().unwrap() as isize;
    /// s.move_to(space).unwrap().consume([' ', '\n', '\t']);
    /// assert_eq!(s.current_char(), Some('i'));
    /// ```
    pub fn consume(&mut self, set: impl CharSet) -> &mut Self {
        self.consume_while(|ch| set.contains_code(u32::from(ch)))
    }

    /// Move forward while `predicate` holds for the char under the cursor.
    pub fn consume_while(&mut self, predicate: impl Fn(char) -> bool) -> &mut Self {
        let run = self
            .rope
            .chars_at(self.cursor)
            .take_while(|ch| predicate(*ch))
            .count();
        if run > 0 {
            tracing::trace!(from = self.cursor, to = self.cursor + run, "consumed run");
        }
        self.cursor += run;
        self
    }

    /// Copy the text in `from..to`. `None` for `to` means the end of the text.
    ///
    /// # Errors
    ///
    /// Returns [`WalkerError::InvalidRange`] if `from > to`, and
    /// [`WalkerError::OutOfRange`] if either bound is outside `0..=len()`.
    pub fn substring(&self, from: isize, to: Option<isize>) -> Result<String, WalkerError> {
        let to = to.unwrap_or(self.len as isize);
        if from > to {
            return Err(reject(WalkerError::InvalidRange { from, to }));
        }
        let start = self.check_bounds(from)?;
        let end = self.check_bounds(to)?;
        Ok(self.rope.slice(start..end).to_string())
    }

    /// Copy the text from the cursor to the end.
    pub fn remaining(&self) -> String {
        self.rope.slice(self.cursor..).to_string()
    }

    // --- Private helpers ---

    fn check_bounds(&self, position: isize) -> Result<usize, WalkerError> {
        usize::try_from(position)
            .ok()
            .filter(|pos| *pos <= self.len)
            .ok_or_else(|| {
                reject(WalkerError::OutOfRange {
                    position,
                    length: self.len,
                })
            })
    }

    fn scan_forward(&self, matches: impl Fn(u32) -> bool) -> Option<usize> {
        let start = self.cursor + 1;
        if start >= self.len {
            return None;
        }
        self.rope
            .chars_at(start)
            .position(|ch| matches(u32::from(ch)))
            .map(|offset| start + offset)
    }
}

fn reject(err: WalkerError) -> WalkerError {
    tracing::debug!(%err, "string walker command rejected");
    err
}

impl From<&str> for StringWalker {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StringWalker {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for StringWalker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringWalker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringWalker")
            .field("text", &format_args!("Rope({} chars)", self.len))
            .field("cursor", &self.cursor)
            .field("zero_lookbehind", &self.zero_lookbehind)
            .finish()
    }
}
