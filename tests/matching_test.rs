// ABOUTME: Integration tests for membership and status classification strategies
// ABOUTME: Loop and compiled pattern report identical counts; name and flag agree on liveness
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use strategy_bench::constants::matching::{EXPECTED_MATCHES, HAYSTACK, NEEDLES};
use strategy_bench::matching::status::{is_live_by_name, StatusFlags, STATUS_NAMES};
use strategy_bench::matching::{count_matches_loop, NeedlePattern};

#[test]
fn test_reference_fixture_counts_three() -> Result<()> {
    let pattern = NeedlePattern::compile(&NEEDLES)?;
    assert_eq!(count_matches_loop(&HAYSTACK, &NEEDLES), EXPECTED_MATCHES);
    assert_eq!(pattern.count_matches(&HAYSTACK), EXPECTED_MATCHES);
    Ok(())
}

#[test]
fn test_strategies_agree_on_varied_fixtures() -> Result<()> {
    let cases: [(&[&str], &[&str]); 5] = [
        (&["abc", "abd", "xyz"], &["ab", "z"]),
        (&["a.c", "abc"], &["."]),
        (&["", "x"], &["x"]),
        (&["aaa"], &["a", "aa"]),
        (&["one", "two"], &[]),
    ];
    for (haystack, needles) in cases {
        let pattern = NeedlePattern::compile(needles)?;
        assert_eq!(
            count_matches_loop(haystack, needles),
            pattern.count_matches(haystack),
            "{needles:?} in {haystack:?}"
        );
    }
    Ok(())
}

#[test]
fn test_name_and_flag_classification_agree() {
    for (name, flag) in STATUS_NAMES {
        assert_eq!(is_live_by_name(name), flag.is_live(), "{name}");
        assert_eq!(StatusFlags::from_status(name).is_live(), flag.is_live(), "{name}");
    }
    for unknown in ["", "Active", "live", "unknown"] {
        assert!(!is_live_by_name(unknown));
        assert!(!StatusFlags::from_status(unknown).is_live());
    }
}
