//! Shared line-scanning primitives
//!
//! Every transform in this crate walks its input one line at a time using
//! [`find_next`]. The sentinel return (last index when the delimiter is
//! absent) lets callers treat a buffer without a trailing newline as if its
//! last byte terminated the final line, which is what preserves the
//! presence/absence of the trailing terminator across transforms.

/// Returns the index of the first occurrence of `delim` at or after `start`,
/// or the last index of the buffer when the delimiter is absent.
///
/// Callers must not pass an empty buffer; every public transform returns
/// early on empty input before scanning.
pub(crate) fn find_next(buf: &[u8], start: usize, delim: u8) -> usize {
    debug_assert!(!buf.is_empty());
    for (i, &b) in buf.iter().enumerate().skip(start) {
        if b == delim {
            return i;
        }
    }
    buf.len() - 1
}

/// Whether the buffer, starting at `offset`, begins with `prefix`.
pub(crate) fn has_prefix(buf: &[u8], offset: usize, prefix: &[u8]) -> bool {
    buf.get(offset..).is_some_and(|rest| rest.starts_with(prefix))
}

/// Whether the line starting at `offset` carries `token` as its token prefix,
/// i.e. the token followed by exactly one space.
pub(crate) fn has_token_prefix(buf: &[u8], offset: usize, token: &[u8]) -> bool {
    has_prefix(buf, offset, token) && buf.get(offset + token.len()) == Some(&b' ')
}
