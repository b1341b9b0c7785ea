// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! UAX #15's quick-check algorithm: a cheap single pass that can often
//! decide whether a string is already normalized without running the full
//! decompose/recompose transducer. Used to make `is_nfc`/`is_nfd`/etc.
//! fast on the (common) already-normalized case.

use crate::lookups::canonical_combining_class;
use crate::stream_safe::is_stream_safe;
use crate::tables::{self, hangul, DecompositionType};
use crate::{normalize_nfc, normalize_nfd, normalize_nfkc, normalize_nfkd};

/// The result of a quick check: `Yes` and `No` are decisive; `Maybe` means
/// the cheap pass could not tell and the caller must run the full
/// algorithm and compare.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum IsNormalized {
    /// Definitely normalized.
    Yes,
    /// Definitely not normalized.
    No,
    /// Undetermined by the cheap pass; run the full algorithm to be sure.
    Maybe,
}

fn quick_check(mode: DecompositionType, composing: bool, s: &str) -> IsNormalized {
    let mut result = IsNormalized::Yes;
    let mut last_ccc = 0u8;
    for c in s.chars() {
        let ccc = canonical_combining_class(c);
        if ccc != 0 && last_ccc > ccc {
            // A reorderable pair: definitely not normalized.
            return IsNormalized::No;
        }
        // Hangul syllables decompose algorithmically, not through the
        // decomposition table, so `is_decomposable` alone would miss them.
        if tables::is_decomposable(mode, c) || hangul::is_hangul(c) {
            if composing {
                // `c`'s decomposition might or might not be excluded from
                // composition; a cheap per-character check can't always
                // tell, so this degrades to Maybe rather than No.
                result = IsNormalized::Maybe;
            } else {
                return IsNormalized::No;
            }
        } else if composing && (tables::compose_pair_second(c) || hangul::is_jamo(c)) {
            // `c` didn't itself decompose, but it might still *combine*
            // with whatever precedes it: a preceding starter via the
            // composition table, or a preceding L/LV Hangul fragment via
            // the Jamo algorithm (neither of which goes through
            // `is_decomposable`). Can't tell without the full composer.
            result = IsNormalized::Maybe;
        }
        last_ccc = ccc;
    }
    result
}

/// Quick-checks `s` for NFD. Never returns `Maybe`.
pub fn is_nfd_quick(s: &str) -> IsNormalized {
    quick_check(DecompositionType::Canonical, false, s)
}

/// Quick-checks `s` for NFKD. Never returns `Maybe`.
pub fn is_nfkd_quick(s: &str) -> IsNormalized {
    quick_check(DecompositionType::Compatible, false, s)
}

/// Quick-checks `s` for NFC.
pub fn is_nfc_quick(s: &str) -> IsNormalized {
    quick_check(DecompositionType::Canonical, true, s)
}

/// Quick-checks `s` for NFKC.
pub fn is_nfkc_quick(s: &str) -> IsNormalized {
    quick_check(DecompositionType::Compatible, true, s)
}

/// True if `s` is in NFD. Resolves a `Maybe` from the quick check by
/// running the full algorithm and comparing.
pub fn is_nfd(s: &str) -> bool {
    match is_nfd_quick(s) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => s.chars().eq(normalize_nfd(s).chars()),
    }
}

/// True if `s` is in NFKD.
pub fn is_nfkd(s: &str) -> bool {
    match is_nfkd_quick(s) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => s.chars().eq(normalize_nfkd(s).chars()),
    }
}

/// True if `s` is in NFC.
pub fn is_nfc(s: &str) -> bool {
    match is_nfc_quick(s) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => s.chars().eq(normalize_nfc(s).chars()),
    }
}

/// True if `s` is in NFKC.
pub fn is_nfkc(s: &str) -> bool {
    match is_nfkc_quick(s) {
        IsNormalized::Yes => true,
        IsNormalized::No => false,
        IsNormalized::Maybe => s.chars().eq(normalize_nfkc(s).chars()),
    }
}

/// True if `s` is both NFD and stream-safe (UAX #15-D4: no run of more
/// than `MAX_NONSTARTERS` consecutive non-starters).
pub fn is_nfd_stream_safe(s: &str) -> bool {
    is_nfd(s) && is_stream_safe(s)
}

/// Quick variant of [`is_nfd_stream_safe`].
pub fn is_nfd_stream_safe_quick(s: &str) -> IsNormalized {
    if !is_stream_safe(s) {
        return IsNormalized::No;
    }
    is_nfd_quick(s)
}

/// True if `s` is both NFKD and stream-safe.
pub fn is_nfkd_stream_safe(s: &str) -> bool {
    is_nfkd(s) && is_stream_safe(s)
}

/// Quick variant of [`is_nfkd_stream_safe`].
pub fn is_nfkd_stream_safe_quick(s: &str) -> IsNormalized {
    if !is_stream_safe(s) {
        return IsNormalized::No;
    }
    is_nfkd_quick(s)
}

/// True if `s` is both NFC and stream-safe.
pub fn is_nfc_stream_safe(s: &str) -> bool {
    is_nfc(s) && is_stream_safe(s)
}

/// Quick variant of [`is_nfc_stream_safe`].
pub fn is_nfc_stream_safe_quick(s: &str) -> IsNormalized {
    if !is_stream_safe(s) {
        return IsNormalized::No;
    }
    is_nfc_quick(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposed_ascii_is_already_nfc_and_nfd() {
        assert!(is_nfd("hello"));
        assert!(is_nfc("hello"));
    }

    #[test]
    fn out_of_order_marks_are_not_nfd() {
        assert_eq!(is_nfd_quick("a\u{301}\u{323}"), IsNormalized::No);
        assert!(!is_nfd("a\u{301}\u{323}"));
    }

    #[test]
    fn precomposed_form_is_not_nfd() {
        assert_eq!(is_nfd_quick("\u{E9}"), IsNormalized::No);
    }

    #[test]
    fn precomposed_form_is_nfc_but_its_decomposition_is_not() {
        assert!(is_nfc("\u{E9}"));
        assert!(!is_nfc("e\u{301}"));
    }

    #[test]
    fn decomposed_hangul_jamo_are_not_nfc() {
        assert!(!is_nfc("\u{1100}\u{1161}\u{11A8}"));
        assert!(is_nfc("\u{AC01}"));
    }
}
