//! Property tests for cursor invariants.

use proptest::prelude::*;

use crate::iterator::{BreakIterator, BreakKind, DONE};

fn any_kind() -> impl Strategy<Value = BreakKind> {
    prop_oneof![
        Just(BreakKind::Character),
        Just(BreakKind::Word),
        Just(BreakKind::Line),
        Just(BreakKind::Sentence),
    ]
}

fn forward_offsets(iter: &mut BreakIterator) -> Vec<i32> {
    let mut offsets = vec![iter.first()];
    loop {
        let boundary = iter.next();
        if boundary == DONE {
            return offsets;
        }
        offsets.push(boundary);
    }
}

proptest! {
    #[test]
    fn boundaries_are_sorted_unique_and_span_the_text(
        kind in any_kind(),
        text in ".{0,64}",
    ) {
        let mut iter = BreakIterator::new(kind, Some("en-US")).unwrap();
        iter.set_text(&text).unwrap();
        let offsets = forward_offsets(&mut iter);

        prop_assert_eq!(offsets[0], 0);
        prop_assert_eq!(*offsets.last().unwrap(), text.len() as i32);
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        // Every boundary falls on a char boundary of the attached text.
        for &offset in &offsets {
            prop_assert!(text.is_char_boundary(offset as usize));
        }
    }

    #[test]
    fn backward_traversal_mirrors_forward(
        kind in any_kind(),
        text in ".{0,64}",
    ) {
        let mut iter = BreakIterator::new(kind, Some("en-US")).unwrap();
        iter.set_text(&text).unwrap();
        let forward = forward_offsets(&mut iter);

        let mut backward = vec![iter.last()];
        loop {
            let boundary = iter.previous();
            if boundary == DONE {
                break;
            }
            backward.push(boundary);
        }
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn is_boundary_matches_the_traversed_set(
        kind in any_kind(),
        text in ".{0,48}",
    ) {
        let mut iter = BreakIterator::new(kind, Some("en-US")).unwrap();
        iter.set_text(&text).unwrap();
        let offsets = forward_offsets(&mut iter);

        for offset in 0..=text.len() as i32 {
            prop_assert_eq!(iter.is_boundary(offset), offsets.contains(&offset));
        }
    }

    #[test]
    fn following_then_preceding_returns_to_a_boundary(
        kind in any_kind(),
        text in ".{1,48}",
        probe in 0usize..48,
    ) {
        let mut iter = BreakIterator::new(kind, Some("en-US")).unwrap();
        iter.set_text(&text).unwrap();

        let probe = probe.min(text.len()) as i32;
        let after = iter.following(probe);
        if after != DONE {
            prop_assert!(after > probe);
            // The boundary before `after` is at or before the probe.
            let back = iter.preceding(after);
            prop_assert!(back != DONE && back <= probe);
        }
    }

    #[test]
    fn rule_status_fill_never_overflows_a_sized_buffer(
        kind in any_kind(),
        text in ".{0,32}",
    ) {
        let mut iter = BreakIterator::new(kind, Some("en-US")).unwrap();
        iter.set_text(&text).unwrap();
        iter.first();
        loop {
            let len = iter.rule_statuses_len();
            prop_assert_eq!(len, iter.rule_statuses_len());
            let mut buffer = vec![0; len];
            prop_assert_eq!(iter.rule_statuses(&mut buffer), Ok(len));
            if iter.next() == DONE {
                break;
            }
        }
    }
}
