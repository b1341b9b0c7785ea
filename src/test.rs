// Copyright 2012-2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Whole-crate tests exercising the public `UnicodeNormalization` trait
//! and the concrete scenarios from the Unicode Normalization Conformance
//! Test shape (this crate's curated table subset rather than the full
//! `NormalizationTest.txt`).

use crate::UnicodeNormalization;

/// S1-S6 from the conformance scenario table, driven through the public
/// `&str` trait methods rather than the internal iterators directly.
#[test]
fn conformance_style_scenarios() {
    let cases: &[(&str, &str, &str)] = &[
        // (input, expected NFD, expected NFC)
        ("\u{E9}", "e\u{301}", "\u{E9}"),
        ("\u{1E0B}\u{323}", "d\u{323}\u{307}", "\u{1E0D}\u{307}"),
        ("q\u{307}\u{323}", "q\u{323}\u{307}", "q\u{323}\u{307}"),
        ("\u{AC01}", "\u{1100}\u{1161}\u{11A8}", "\u{AC01}"),
        ("\u{1100}\u{1161}\u{11A8}", "\u{1100}\u{1161}\u{11A8}", "\u{AC01}"),
        ("\u{212B}", "A\u{30A}", "\u{C5}"),
    ];
    for &(input, nfd, nfc) in cases {
        assert_eq!(input.nfd().collect::<String>(), nfd, "NFD({:?})", input);
        assert_eq!(input.nfc().collect::<String>(), nfc, "NFC({:?})", input);
    }
}

#[test]
fn idempotence() {
    let inputs = ["hello", "\u{E9}", "e\u{301}", "\u{AC01}", "\u{1EA5}", "q\u{307}\u{323}"];
    for &s in &inputs {
        let nfd_once: String = s.nfd().collect();
        let nfd_twice: String = nfd_once.nfd().collect();
        assert_eq!(nfd_once, nfd_twice, "NFD(NFD({:?})) != NFD({:?})", s, s);

        let nfc_once: String = s.nfc().collect();
        let nfc_twice: String = nfc_once.nfc().collect();
        assert_eq!(nfc_once, nfc_twice, "NFC(NFC({:?})) != NFC({:?})", s, s);
    }
}

#[test]
fn nfc_nfd_round_trip() {
    let inputs = ["\u{E9}", "\u{1E0D}\u{307}", "\u{AC01}", "\u{1EA5}"];
    for &s in &inputs {
        let nfd: String = s.nfd().collect();
        let nfc_of_nfd: String = nfd.nfc().collect();
        let nfc: String = s.nfc().collect();
        assert_eq!(nfc_of_nfd, nfc, "NFC(NFD({:?})) != NFC({:?})", s, s);

        let nfc: String = s.nfc().collect();
        let nfd_of_nfc: String = nfc.nfd().collect();
        assert_eq!(nfd_of_nfc, nfd, "NFD(NFC({:?})) != NFD({:?})", s, s);
    }
}

#[test]
fn ascii_fixed_point() {
    let s = "Normalization does nothing to plain ASCII, 0-9, punctuation!";
    assert_eq!(s.nfd().collect::<String>(), s);
    assert_eq!(s.nfkd().collect::<String>(), s);
    assert_eq!(s.nfc().collect::<String>(), s);
    assert_eq!(s.nfkc().collect::<String>(), s);
}

#[test]
fn nfd_has_no_reorderable_pairs() {
    use crate::char::canonical_combining_class;

    let inputs = ["\u{1E0B}\u{323}", "q\u{307}\u{323}", "\u{1EA5}"];
    for &s in &inputs {
        let nfd: Vec<char> = s.nfd().collect();
        for pair in nfd.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let ccc_b = canonical_combining_class(b);
            assert!(
                ccc_b == 0 || canonical_combining_class(a) <= ccc_b,
                "reorderable pair <{:?}, {:?}> survived NFD({:?})",
                a,
                b,
                s
            );
        }
    }
}
