// SPDX-License-Identifier: MPL-2.0
//! Location fragment handling for slide deep links.
//!
//! A deck location may carry a `#<N>` suffix naming a 1-based slide ordinal,
//! e.g. `talk.toml#3`. The fragment is read when a deck path arrives (CLI
//! argument, file drop, open dialog) and written back by the navigator on
//! every user-initiated move. Malformed or out-of-range values are never an
//! error; the caller falls back to the first slide.

/// Splits a deck argument into its path part and optional fragment.
///
/// The fragment starts at the first `#`, mirroring URL semantics.
pub fn split_target(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('#') {
        Some((path, fragment)) => (path, Some(fragment)),
        None => (arg, None),
    }
}

/// Parses a fragment as a 1-based slide ordinal.
///
/// A leading `#` is tolerated so callers can pass either the raw fragment or
/// the full suffix. Anything that is not a plain positive integer yields
/// `None`.
pub fn parse(raw: &str) -> Option<usize> {
    let digits = raw.trim().trim_start_matches('#');
    digits.parse::<usize>().ok().filter(|n| *n >= 1)
}

/// Formats a 1-based slide ordinal as a fragment.
pub fn format(ordinal: usize) -> String {
    format!("#{}", ordinal)
}
