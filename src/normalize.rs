// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Single-character composition and decomposition primitives, and the
//! whole-string push-model entry points (`normalize_nfd` and friends).
//! Downstream crates that build their own grapheme-aware pipelines (rather
//! than normalizing a whole `&str` at once) consume the single-character
//! API directly.

use crate::decompose;
use crate::no_std_prelude::String;
use crate::recompose;
use crate::tables::{self, DecompositionType};
use crate::UnicodeNormalization;

/// Compose two characters into a single character, if their composition
/// is a "primary composite" per the Unicode Character Database. This is
/// not the full NFC algorithm (it does not handle Hangul, reordering, or
/// blocking) — just the primitive composition-table lookup.
///
/// ```rust
/// use unicode_normalization_core::char::compose;
/// assert_eq!(compose('A', '\u{30A}'), Some('Å'));
/// ```
pub fn compose(a: char, b: char) -> Option<char> {
    tables::compose(a, b)
}

/// Canonically decomposes `c`, passing each resulting character to `push`
/// in order. Hangul syllables decompose algorithmically to their L, V and
/// (if present) T jamo; everything else expands recursively against the
/// canonical decomposition table.
pub fn decompose_canonical<F: FnMut(char)>(c: char, push: F) {
    decompose_one(DecompositionType::Canonical, c, push);
}

/// Like [`decompose_canonical`], but using compatibility decomposition
/// mappings (which subsume the canonical ones).
pub fn decompose_compatible<F: FnMut(char)>(c: char, push: F) {
    decompose_one(DecompositionType::Compatible, c, push);
}

/// Extended canonical decomposition. Identical to [`decompose_canonical`]
/// over this crate's curated tables; see the note in `decompose.rs`.
pub fn decompose_canonical_ext<F: FnMut(char)>(c: char, push: F) {
    decompose_canonical(c, push);
}

/// Extended compatibility decomposition. Identical to
/// [`decompose_compatible`] over this crate's curated tables; see the note
/// in `decompose.rs`.
pub fn decompose_compatible_ext<F: FnMut(char)>(c: char, push: F) {
    decompose_compatible(c, push);
}

fn decompose_one<F: FnMut(char)>(mode: DecompositionType, c: char, mut push: F) {
    let iter = match mode {
        DecompositionType::Canonical => decompose::new_canonical(core::iter::once(c)),
        DecompositionType::Compatible => decompose::new_compatible(core::iter::once(c)),
    };
    for out in iter {
        push(out);
    }
}

/// Normalizes `text` to NFD (canonical decomposition).
pub fn normalize_nfd(text: &str) -> String {
    text.nfd().collect()
}

/// Normalizes `text` to NFKD (compatibility decomposition).
pub fn normalize_nfkd(text: &str) -> String {
    text.nfkd().collect()
}

/// Normalizes `text` to NFC (canonical decomposition followed by canonical
/// composition).
pub fn normalize_nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Normalizes `text` to NFKC (compatibility decomposition followed by
/// canonical composition).
pub fn normalize_nfkc(text: &str) -> String {
    text.nfkc().collect()
}
