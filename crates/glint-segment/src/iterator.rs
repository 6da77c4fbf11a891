//! Cursor-style break iteration over an attached text.
//!
//! A [`BreakIterator`] owns a copy of the text it segments. Attaching text
//! eagerly computes the full boundary list (and one rule status per
//! boundary) with `icu_segmenter`; navigation then walks that list with the
//! classic cursor semantics: `first`, `last`, `next`, `previous`,
//! `preceding`, `following`, `is_boundary`. Calls that run past either end
//! return the [`DONE`] sentinel and keep returning it.
//!
//! Offsets are UTF-8 byte indices into the attached text.

use glint_core::error::SegmentError;
use icu::locale::Locale;
use icu_segmenter::options::{
    LineBreakOptions, SentenceBreakOptions, WordBreakOptions, WordType,
};
use icu_segmenter::{GraphemeClusterSegmenter, LineSegmenter, SentenceSegmenter, WordSegmenter};

use crate::locale;

/// Sentinel returned by cursor calls that run past either end of the text.
pub const DONE: i32 = -1;

/// Which boundary rules an iterator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreakKind {
    Character,
    Word,
    Line,
    Sentence,
}

impl BreakKind {
    /// Decode the legacy integer encoding (0..=3).
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(BreakKind::Character),
            1 => Some(BreakKind::Word),
            2 => Some(BreakKind::Line),
            3 => Some(BreakKind::Sentence),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            BreakKind::Character => 0,
            BreakKind::Word => 1,
            BreakKind::Line => 2,
            BreakKind::Sentence => 3,
        }
    }
}

/// Rule-status values, matching the segmentation library's numbering.
///
/// Word statuses occupy ranges of 100: a boundary ending a number segment
/// reports [`WORD_NUMBER`](rule_status::WORD_NUMBER), a word segment
/// [`WORD_LETTER`](rule_status::WORD_LETTER), everything else
/// [`WORD_NONE`](rule_status::WORD_NONE). Line boundaries distinguish
/// mandatory (hard) breaks from break opportunities; sentence boundaries
/// distinguish terminator-ended sentences from separator-ended ones.
pub mod rule_status {
    pub const WORD_NONE: i32 = 0;
    pub const WORD_NUMBER: i32 = 100;
    pub const WORD_LETTER: i32 = 200;

    pub const LINE_SOFT: i32 = 0;
    pub const LINE_HARD: i32 = 100;

    pub const SENTENCE_TERM: i32 = 0;
    pub const SENTENCE_SEP: i32 = 100;
}

/// A cursor over the boundary positions of an attached text.
pub struct BreakIterator {
    kind: BreakKind,
    locale: Locale,
    text: String,
    /// Sorted, deduplicated byte offsets; always starts at 0 and ends at
    /// `text.len()`.
    boundaries: Vec<i32>,
    /// One rule status per boundary, parallel to `boundaries`.
    statuses: Vec<i32>,
    /// Index into `boundaries`.
    cursor: usize,
}

impl BreakIterator {
    /// Open an iterator for a segmentation kind and an optional locale tag.
    ///
    /// `None` means the process default locale (see
    /// [`locale::default_locale`]). Fails with
    /// [`SegmentError::IllegalLocale`] for a malformed tag or
    /// [`SegmentError::MissingLocaleData`] when the segmenter cannot be
    /// built for the locale.
    pub fn new(kind: BreakKind, locale_tag: Option<&str>) -> Result<Self, SegmentError> {
        let resolved = match locale_tag {
            Some(tag) => locale::parse(tag)?,
            None => locale::default_locale(),
        };
        // Dry-run over empty text so locale problems surface at open time,
        // not on the first attach.
        let (boundaries, statuses) = compute_boundaries(kind, &resolved, "")?;
        log::debug!("opened {kind:?} break iterator for locale {resolved}");
        Ok(Self {
            kind,
            locale: resolved,
            text: String::new(),
            boundaries,
            statuses,
            cursor: 0,
        })
    }

    pub fn kind(&self) -> BreakKind {
        self.kind
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The currently attached text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach a copy of `text` and reset the cursor to the first boundary.
    ///
    /// Re-attaching drops the previous copy; the iterator owns its text, so
    /// nothing leaks and no external buffer has to outlive anything.
    pub fn set_text(&mut self, text: &str) -> Result<(), SegmentError> {
        if text.len() > i32::MAX as usize {
            return Err(SegmentError::IndexOutOfBounds(text.len()));
        }
        let (boundaries, statuses) = compute_boundaries(self.kind, &self.locale, text)?;
        self.text.clear();
        self.text.push_str(text);
        self.boundaries = boundaries;
        self.statuses = statuses;
        self.cursor = 0;
        Ok(())
    }

    /// The boundary the cursor currently rests on.
    pub fn current(&self) -> i32 {
        self.boundaries[self.cursor]
    }

    /// Advance to the next boundary, or [`DONE`] when already at the last.
    ///
    /// After returning [`DONE`] the cursor stays on the final boundary, so
    /// further calls keep returning [`DONE`].
    pub fn next(&mut self) -> i32 {
        if self.cursor + 1 < self.boundaries.len() {
            self.cursor += 1;
            self.boundaries[self.cursor]
        } else {
            self.cursor = self.boundaries.len() - 1;
            DONE
        }
    }

    /// Step back to the previous boundary, or [`DONE`] at the first.
    pub fn previous(&mut self) -> i32 {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.boundaries[self.cursor]
        } else {
            DONE
        }
    }

    /// Move to the first boundary (always 0) and return it.
    pub fn first(&mut self) -> i32 {
        self.cursor = 0;
        self.boundaries[0]
    }

    /// Move to the last boundary (the text length) and return it.
    pub fn last(&mut self) -> i32 {
        self.cursor = self.boundaries.len() - 1;
        self.boundaries[self.cursor]
    }

    /// Move to the first boundary strictly after `offset`.
    ///
    /// Returns [`DONE`] when no boundary follows; a negative offset lands on
    /// the first boundary.
    pub fn following(&mut self, offset: i32) -> i32 {
        let index = self.boundaries.partition_point(|&b| b <= offset);
        if index < self.boundaries.len() {
            self.cursor = index;
            self.boundaries[index]
        } else {
            self.cursor = self.boundaries.len() - 1;
            DONE
        }
    }

    /// Move to the last boundary strictly before `offset`.
    ///
    /// Returns [`DONE`] when no boundary precedes (i.e. `offset <= 0`).
    pub fn preceding(&mut self, offset: i32) -> i32 {
        let index = self.boundaries.partition_point(|&b| b < offset);
        if index > 0 {
            self.cursor = index - 1;
            self.boundaries[self.cursor]
        } else {
            self.cursor = 0;
            DONE
        }
    }

    /// Whether `offset` is a boundary position.
    ///
    /// Like the underlying library, this also moves the cursor: onto
    /// `offset` when it is a boundary, otherwise onto the first boundary
    /// after it.
    pub fn is_boundary(&mut self, offset: i32) -> bool {
        if offset < 0 {
            self.cursor = 0;
            return false;
        }
        match self.boundaries.binary_search(&offset) {
            Ok(index) => {
                self.cursor = index;
                true
            }
            Err(index) => {
                self.cursor = index.min(self.boundaries.len() - 1);
                false
            }
        }
    }

    /// Status of the rule that produced the current boundary.
    pub fn rule_status(&self) -> i32 {
        self.statuses[self.cursor]
    }

    /// Length the destination slice for [`rule_statuses`](Self::rule_statuses)
    /// must have. Idempotent while the iterator is not mutated.
    pub fn rule_statuses_len(&self) -> usize {
        // One status per boundary in this implementation; the two-phase
        // protocol is kept for callers written against the original shape.
        1
    }

    /// Fill `dest` with the rule statuses of the current boundary.
    ///
    /// Callers follow the two-phase protocol: query
    /// [`rule_statuses_len`](Self::rule_statuses_len), allocate, then fill.
    /// A shorter slice fails with [`SegmentError::BufferOverflow`]. Returns
    /// the number of statuses written.
    pub fn rule_statuses(&self, dest: &mut [i32]) -> Result<usize, SegmentError> {
        let needed = self.rule_statuses_len();
        if dest.len() < needed {
            return Err(SegmentError::BufferOverflow {
                needed,
                got: dest.len(),
            });
        }
        debug_assert_eq!(needed, 1);
        dest[0] = self.rule_status();
        Ok(needed)
    }

    /// Single-call form of the two-phase protocol.
    pub fn rule_status_vec(&self) -> Vec<i32> {
        vec![self.rule_status()]
    }
}

impl std::fmt::Debug for BreakIterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreakIterator")
            .field("kind", &self.kind)
            .field("locale", &self.locale.to_string())
            .field("text_len", &self.text.len())
            .field("boundaries", &self.boundaries.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Segment `text` and derive one rule status per boundary.
fn compute_boundaries(
    kind: BreakKind,
    locale: &Locale,
    text: &str,
) -> Result<(Vec<i32>, Vec<i32>), SegmentError> {
    let (raw, statuses) = match kind {
        BreakKind::Character => {
            let segmenter = GraphemeClusterSegmenter::new();
            let raw: Vec<usize> = segmenter.segment_str(text).collect();
            let statuses = vec![0; raw.len()];
            (raw, statuses)
        }
        BreakKind::Word => {
            let mut options = WordBreakOptions::default();
            options.content_locale = Some(&locale.id);
            let segmenter = WordSegmenter::try_new_auto(options)
                .map_err(|_| SegmentError::MissingLocaleData(locale.to_string()))?;
            let segmenter = segmenter.as_borrowed();
            let mut iter = segmenter.segment_str(text);
            let mut raw = Vec::new();
            let mut statuses = Vec::new();
            while let Some(boundary) = iter.next() {
                raw.push(boundary);
                statuses.push(word_status(iter.word_type()));
            }
            (raw, statuses)
        }
        BreakKind::Line => {
            let mut options = LineBreakOptions::default();
            options.content_locale = Some(&locale.id);
            let segmenter = LineSegmenter::new_auto(options);
            let raw: Vec<usize> = segmenter.segment_str(text).collect();
            let statuses = raw
                .iter()
                .map(|&b| {
                    if b > 0 && ends_with_mandatory_break(&text[..b]) {
                        rule_status::LINE_HARD
                    } else {
                        rule_status::LINE_SOFT
                    }
                })
                .collect();
            (raw, statuses)
        }
        BreakKind::Sentence => {
            let mut options = SentenceBreakOptions::default();
            options.content_locale = Some(&locale.id);
            let segmenter = SentenceSegmenter::try_new(options)
                .map_err(|_| SegmentError::MissingLocaleData(locale.to_string()))?;
            let raw: Vec<usize> = segmenter.as_borrowed().segment_str(text).collect();
            let mut statuses = Vec::with_capacity(raw.len());
            let mut previous = 0usize;
            for &boundary in &raw {
                statuses.push(if boundary == 0 {
                    rule_status::SENTENCE_TERM
                } else {
                    sentence_status(&text[previous..boundary])
                });
                previous = boundary;
            }
            (raw, statuses)
        }
    };

    Ok(normalize_boundaries(raw, statuses, text.len()))
}

/// Guarantee the invariants navigation depends on: boundaries are sorted and
/// unique, start at 0, and end at the text length.
fn normalize_boundaries(
    raw: Vec<usize>,
    raw_statuses: Vec<i32>,
    text_len: usize,
) -> (Vec<i32>, Vec<i32>) {
    let mut boundaries = Vec::with_capacity(raw.len() + 2);
    let mut statuses = Vec::with_capacity(raw.len() + 2);

    if raw.first() != Some(&0) {
        boundaries.push(0);
        statuses.push(0);
    }
    for (boundary, status) in raw.into_iter().zip(raw_statuses) {
        if boundaries.last() == Some(&(boundary as i32)) {
            continue;
        }
        boundaries.push(boundary as i32);
        statuses.push(status);
    }
    if boundaries.last() != Some(&(text_len as i32)) {
        boundaries.push(text_len as i32);
        statuses.push(0);
    }

    (boundaries, statuses)
}

fn word_status(word_type: WordType) -> i32 {
    match word_type {
        WordType::Number => rule_status::WORD_NUMBER,
        WordType::Letter => rule_status::WORD_LETTER,
        _ => rule_status::WORD_NONE,
    }
}

/// Mandatory line break characters (BK, CR, LF, NL classes).
fn ends_with_mandatory_break(prefix: &str) -> bool {
    matches!(
        prefix.chars().next_back(),
        Some('\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}')
    )
}

/// Terminator-ended sentences report `SENTENCE_TERM`; everything else
/// (paragraph separators, end of text) reports `SENTENCE_SEP`.
fn sentence_status(segment: &str) -> i32 {
    for ch in segment.chars().rev() {
        if ch.is_whitespace() || matches!(ch, '"' | '\'' | ')' | ']' | '\u{00BB}' | '\u{2019}' | '\u{201D}') {
            continue;
        }
        return if matches!(ch, '.' | '!' | '?' | '\u{2026}' | '\u{3002}' | '！' | '？' | '\u{061F}' | '\u{0964}') {
            rule_status::SENTENCE_TERM
        } else {
            rule_status::SENTENCE_SEP
        };
    }
    rule_status::SENTENCE_SEP
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_iter(text: &str) -> BreakIterator {
        let mut iter = BreakIterator::new(BreakKind::Word, Some("en-US")).unwrap();
        iter.set_text(text).unwrap();
        iter
    }

    fn collect_forward(iter: &mut BreakIterator) -> Vec<i32> {
        let mut offsets = vec![iter.first()];
        loop {
            let boundary = iter.next();
            if boundary == DONE {
                return offsets;
            }
            offsets.push(boundary);
        }
    }

    #[test]
    fn kind_raw_round_trip() {
        for raw in 0..4 {
            let kind = BreakKind::from_raw(raw).unwrap();
            assert_eq!(kind.as_raw(), raw);
        }
        assert_eq!(BreakKind::from_raw(4), None);
        assert_eq!(BreakKind::from_raw(-1), None);
    }

    #[test]
    fn word_boundaries_of_hello_world() {
        let mut iter = word_iter("Hello World");
        assert_eq!(collect_forward(&mut iter), vec![0, 5, 6, 11]);
    }

    #[test]
    fn next_past_the_end_keeps_returning_done() {
        let mut iter = word_iter("Hi");
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.next(), 2);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.next(), DONE);
        // Cursor parked on the last boundary, like the original library.
        assert_eq!(iter.current(), 2);
    }

    #[test]
    fn previous_before_the_start_returns_done() {
        let mut iter = word_iter("Hi");
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.previous(), DONE);
        assert_eq!(iter.previous(), DONE);
        assert_eq!(iter.current(), 0);
    }

    #[test]
    fn sentence_hi_dot_has_exactly_one_boundary_then_done() {
        let mut iter = BreakIterator::new(BreakKind::Sentence, Some("en-US")).unwrap();
        iter.set_text("Hi.").unwrap();
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.next(), 3);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.next(), DONE);
    }

    #[test]
    fn sentence_rule_status_distinguishes_terminators() {
        let mut iter = BreakIterator::new(BreakKind::Sentence, Some("en-US")).unwrap();
        iter.set_text("Hi. No terminator").unwrap();
        iter.first();
        iter.next();
        assert_eq!(iter.rule_status(), rule_status::SENTENCE_TERM);
        iter.last();
        assert_eq!(iter.rule_status(), rule_status::SENTENCE_SEP);
    }

    #[test]
    fn word_rule_status_tracks_segment_class() {
        let mut iter = word_iter("abc 42");
        iter.first();
        assert_eq!(iter.next(), 3);
        assert_eq!(iter.rule_status(), rule_status::WORD_LETTER);
        assert_eq!(iter.next(), 4); // the space
        assert_eq!(iter.rule_status(), rule_status::WORD_NONE);
        assert_eq!(iter.next(), 6);
        assert_eq!(iter.rule_status(), rule_status::WORD_NUMBER);
    }

    #[test]
    fn line_rule_status_marks_hard_breaks() {
        let mut iter = BreakIterator::new(BreakKind::Line, Some("en-US")).unwrap();
        iter.set_text("aa\nbb cc").unwrap();
        let offsets = collect_forward(&mut iter);
        assert!(offsets.contains(&3));
        iter.is_boundary(3);
        assert_eq!(iter.rule_status(), rule_status::LINE_HARD);
        iter.last();
        assert_eq!(iter.rule_status(), rule_status::LINE_SOFT);
    }

    #[test]
    fn following_and_preceding_bracket_an_offset() {
        let mut iter = word_iter("Hello World");
        assert_eq!(iter.following(0), 5);
        assert_eq!(iter.following(5), 6);
        assert_eq!(iter.following(11), DONE);
        assert_eq!(iter.following(-3), 0);
        assert_eq!(iter.preceding(11), 6);
        assert_eq!(iter.preceding(1), 0);
        assert_eq!(iter.preceding(0), DONE);
    }

    #[test]
    fn is_boundary_agrees_with_navigation() {
        let mut iter = word_iter("Hello World");
        let offsets = collect_forward(&mut iter);
        for offset in 0..=11 {
            assert_eq!(
                iter.is_boundary(offset),
                offsets.contains(&offset),
                "offset {offset}"
            );
        }
    }

    #[test]
    fn is_boundary_moves_to_the_following_boundary() {
        let mut iter = word_iter("Hello World");
        assert!(!iter.is_boundary(2));
        assert_eq!(iter.current(), 5);
        assert!(!iter.is_boundary(-1));
        assert_eq!(iter.current(), 0);
    }

    #[test]
    fn two_phase_rule_status_protocol() {
        let mut iter = word_iter("Hello");
        iter.next();
        let len = iter.rule_statuses_len();
        assert_eq!(len, iter.rule_statuses_len()); // sizing call is idempotent
        let mut buffer = vec![0; len];
        assert_eq!(iter.rule_statuses(&mut buffer), Ok(len));
        assert_eq!(buffer, iter.rule_status_vec());

        let mut empty: [i32; 0] = [];
        assert_eq!(
            iter.rule_statuses(&mut empty),
            Err(SegmentError::BufferOverflow { needed: 1, got: 0 })
        );
    }

    #[test]
    fn reattaching_text_replaces_the_old_boundaries() {
        let mut iter = word_iter("Hello World");
        iter.set_text("Hi").unwrap();
        assert_eq!(collect_forward(&mut iter), vec![0, 2]);
        assert_eq!(iter.text(), "Hi");
        // Nothing from the previous attachment remains reachable.
        assert!(!iter.is_boundary(5));
    }

    #[test]
    fn empty_text_has_the_zero_boundary_only() {
        let mut iter = word_iter("");
        assert_eq!(iter.first(), 0);
        assert_eq!(iter.next(), DONE);
        assert_eq!(iter.last(), 0);
    }

    #[test]
    fn default_locale_matches_its_explicit_spelling() {
        let tag = crate::locale::default_locale().to_string();
        let mut implicit = BreakIterator::new(BreakKind::Word, None).unwrap();
        let mut explicit = BreakIterator::new(BreakKind::Word, Some(&tag)).unwrap();
        let text = "The quick brown fox, 42 times.";
        implicit.set_text(text).unwrap();
        explicit.set_text(text).unwrap();
        assert_eq!(
            collect_forward(&mut implicit),
            collect_forward(&mut explicit)
        );
    }

    #[test]
    fn malformed_locale_fails_at_open() {
        let err = BreakIterator::new(BreakKind::Word, Some("!!")).unwrap_err();
        assert!(matches!(err, SegmentError::IllegalLocale(_)));
    }

    #[test]
    fn grapheme_boundaries_respect_clusters() {
        let mut iter = BreakIterator::new(BreakKind::Character, Some("en-US")).unwrap();
        // "e" + combining acute is one grapheme cluster (3 bytes total).
        iter.set_text("e\u{0301}x").unwrap();
        assert_eq!(collect_forward(&mut iter), vec![0, 3, 4]);
    }
}
