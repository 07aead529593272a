//! Glyph matching against the element stream.

use crate::table::{START_CODE, STOP_CODE, TELE_LENS, TELE_TABLE};

/// Candidate order for sequential glyph matching.
///
/// The stop glyph is probed first so termination is always detected, then
/// the digit-pair codes `27..=126` (the common case in Numeric mode), then
/// the single-digit codes `17..=26`, then everything else. Built once at
/// compile time; the matching loop is a plain table walk.
pub static SEARCH_ORDER: [u8; 128] = build_search_order();

const fn build_search_order() -> [u8; 128] {
    let mut order = [0u8; 128];
    let mut n = 0usize;

    order[n] = STOP_CODE;
    n += 1;

    let mut c = 27u8;
    while c <= 126 {
        if c != STOP_CODE {
            order[n] = c;
            n += 1;
        }
        c += 1;
    }

    let mut c = 17u8;
    while c <= 26 {
        order[n] = c;
        n += 1;
        c += 1;
    }

    let mut c = 0u8;
    while c < 17 {
        order[n] = c;
        n += 1;
        c += 1;
    }
    order[n] = 127;

    order
}

/// Does the pattern of `code` occur at `idx` in the element stream?
///
/// Exact slot-wise comparison; a pattern running past the end of the
/// stream never matches.
#[inline]
pub fn pattern_matches_at(elements: &[u8], idx: usize, code: u8) -> bool {
    let len = usize::from(TELE_LENS[usize::from(code)]);
    match elements.get(idx..idx + len) {
        Some(window) => window == TELE_TABLE[usize::from(code)],
        None => false,
    }
}

/// First code in [`SEARCH_ORDER`] whose pattern occurs at `idx`.
pub fn match_glyph_at(elements: &[u8], idx: usize) -> Option<u8> {
    SEARCH_ORDER
        .iter()
        .copied()
        .find(|&code| pattern_matches_at(elements, idx, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_order_is_a_permutation() {
        let mut seen = [false; 128];
        for &c in &SEARCH_ORDER {
            assert!(!seen[usize::from(c)], "duplicate code {c}");
            seen[usize::from(c)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn stop_is_probed_first() {
        assert_eq!(SEARCH_ORDER[0], STOP_CODE);
        assert_eq!(SEARCH_ORDER[1], 27);
        // 122 is skipped inside the pair range, so the range contributes
        // 99 codes and the single-digit block starts right after.
        assert_eq!(SEARCH_ORDER[100], 17);
        assert_eq!(SEARCH_ORDER[110], 0);
        assert_eq!(SEARCH_ORDER[127], 127);
    }

    #[test]
    fn exact_match_only() {
        let mut stream = TELE_TABLE[usize::from(START_CODE)].to_vec();
        assert!(pattern_matches_at(&stream, 0, START_CODE));

        stream[3] = 3;
        assert!(!pattern_matches_at(&stream, 0, START_CODE));
    }

    #[test]
    fn truncated_stream_never_matches() {
        let pat = TELE_TABLE[usize::from(STOP_CODE)];
        let stream = &pat[..pat.len() - 1];
        assert!(!pattern_matches_at(stream, 0, STOP_CODE));
    }

    #[test]
    fn match_at_offset() {
        let mut stream = vec![1u8, 3];
        stream.extend_from_slice(TELE_TABLE[40]);
        assert_eq!(
            match_glyph_at(&stream, 2),
            Some(40),
            "expected the pair glyph at offset 2"
        );
    }
}
