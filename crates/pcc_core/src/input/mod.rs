//! Input views.
//!
//! A parser never owns its input. It receives a borrowed, `Copy` view over
//! the caller's buffer and hands back a narrower view of the same buffer as
//! its remainder. [`Input`] is the small set of slicing operations the
//! primitives need; it is implemented for text (`&str`, items are `char`) and
//! for arbitrary element slices (`&[T]`).
//!
//! # Offsets
//!
//! Offsets and lengths are measured in the view's native unit: bytes for
//! `&str` (always on a char boundary), elements for `&[T]`. Counts passed to
//! [`Input::split_count`] are always in items.
//!
//! # Invariant
//!
//! Every view returned as a remainder is a suffix of the receiver. Nothing
//! here extends a view or moves it backward.

/// A borrowed, immutable window over a symbol sequence.
pub trait Input: Copy {
    /// A single symbol of the sequence.
    type Item: Copy + PartialEq;

    /// Length of the view in its native unit.
    fn input_len(&self) -> usize;

    /// Returns `true` if no symbols remain.
    #[inline]
    fn is_empty_input(&self) -> bool {
        self.input_len() == 0
    }

    /// Split off the first symbol.
    fn split_first_item(&self) -> Option<(Self::Item, Self)>;

    /// Peek at the first symbol without narrowing.
    #[inline]
    fn first_item(&self) -> Option<Self::Item> {
        self.split_first_item().map(|(item, _)| item)
    }

    /// Split at a native offset, clamped to the view's length.
    ///
    /// Text views round an offset inside a character down to that
    /// character's start, so the prefix never holds more than `offset` units.
    fn split_at_offset(&self, offset: usize) -> (Self, Self);

    /// Split off the longest (possibly empty) prefix whose symbols all
    /// satisfy `pred`.
    fn split_while<P>(&self, pred: P) -> (Self, Self)
    where
        P: Fn(Self::Item) -> bool;

    /// Split off exactly `count` symbols, or `None` if fewer remain.
    fn split_count(&self, count: usize) -> Option<(Self, Self)>;

    /// Split off `literal` if the view starts with it.
    fn strip_literal(&self, literal: Self) -> Option<(Self, Self)>;

    /// Returns `true` if `item` occurs anywhere in the view.
    fn contains_item(&self, item: Self::Item) -> bool;

    /// Distance from the start of this view to `suffix`, one of its suffixes.
    #[inline]
    fn offset_to(&self, suffix: Self) -> usize {
        self.input_len().saturating_sub(suffix.input_len())
    }
}

impl<'a> Input for &'a str {
    type Item = char;

    #[inline]
    fn input_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn split_first_item(&self) -> Option<(char, &'a str)> {
        let text: &'a str = *self;
        let mut chars = text.chars();
        chars.next().map(|c| (c, chars.as_str()))
    }

    fn split_at_offset(&self, offset: usize) -> (&'a str, &'a str) {
        let text: &'a str = *self;
        let mut end = offset.min(text.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.split_at(end)
    }

    fn split_while<P>(&self, pred: P) -> (&'a str, &'a str)
    where
        P: Fn(char) -> bool,
    {
        let text: &'a str = *self;
        let end = text
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(text.len(), |(idx, _)| idx);
        text.split_at(end)
    }

    fn split_count(&self, count: usize) -> Option<(&'a str, &'a str)> {
        let text: &'a str = *self;
        let mut chars = text.chars();
        let mut end = 0;
        for _ in 0..count {
            end += chars.next()?.len_utf8();
        }
        Some(text.split_at(end))
    }

    fn strip_literal(&self, literal: &'a str) -> Option<(&'a str, &'a str)> {
        let text: &'a str = *self;
        text.strip_prefix(literal)
            .map(|rest| (&text[..literal.len()], rest))
    }

    #[inline]
    fn contains_item(&self, item: char) -> bool {
        self.contains(item)
    }
}

impl<'a, T> Input for &'a [T]
where
    T: Copy + PartialEq,
{
    type Item = T;

    #[inline]
    fn input_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn split_first_item(&self) -> Option<(T, &'a [T])> {
        <[T]>::split_first(*self).map(|(first, rest)| (*first, rest))
    }

    fn split_at_offset(&self, offset: usize) -> (&'a [T], &'a [T]) {
        let items: &'a [T] = *self;
        items.split_at(offset.min(items.len()))
    }

    fn split_while<P>(&self, pred: P) -> (&'a [T], &'a [T])
    where
        P: Fn(T) -> bool,
    {
        let items: &'a [T] = *self;
        let end = items
            .iter()
            .position(|&item| !pred(item))
            .unwrap_or(items.len());
        items.split_at(end)
    }

    fn split_count(&self, count: usize) -> Option<(&'a [T], &'a [T])> {
        let items: &'a [T] = *self;
        (count <= items.len()).then(|| items.split_at(count))
    }

    fn strip_literal(&self, literal: &'a [T]) -> Option<(&'a [T], &'a [T])> {
        let items: &'a [T] = *self;
        items
            .starts_with(literal)
            .then(|| items.split_at(literal.len()))
    }

    #[inline]
    fn contains_item(&self, item: T) -> bool {
        self.contains(&item)
    }
}

#[cfg(test)]
mod tests;
