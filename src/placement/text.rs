//! Modifier text assembly and label stacking.

use crate::modifier::{Modifier, ModifierTag};

/// Join the non-empty parts with `sep`; never yields a bare separator
pub(crate) fn join_non_empty(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// "DTG - DTG1", or whichever one is set
pub(crate) fn dtg_range(dtg: &str, dtg1: &str) -> String {
    join_non_empty(&[dtg, dtg1], " - ")
}

/// `prefix` + `value`, or nothing when `value` is empty
pub(crate) fn prefixed(prefix: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}")
    }
}

/// Name followed by the country code in parentheses
pub(crate) fn with_country(name: &str, country: &str) -> String {
    if country.is_empty() {
        return name.to_string();
    }
    join_non_empty(&[name, &format!("({country})")], " ")
}

/// One line of a label stack
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StackLine {
    pub text: String,
    pub tag: Option<ModifierTag>,
}

impl StackLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: None,
        }
    }

    pub fn tagged(text: impl Into<String>, tag: ModifierTag) -> Self {
        Self {
            text: text.into(),
            tag: Some(tag),
        }
    }
}

/// Line factors for `count` lines centered on the anchor, `cs` apart
pub(crate) fn stack_factors(count: usize, cs: f64) -> impl Iterator<Item = f64> {
    let mid = (count as f64 - 1.0) / 2.0;
    (0..count).map(move |i| (i as f64 - mid) * cs)
}

/// Build a centered stack from `lines`, skipping empty ones.
///
/// `make` turns (text, line factor) into a modifier for the caller's anchor.
pub(crate) fn build_stack(
    lines: Vec<StackLine>,
    cs: f64,
    make: impl Fn(String, f64) -> Option<Modifier>,
) -> Vec<Modifier> {
    let lines: Vec<StackLine> = lines.into_iter().filter(|l| !l.text.is_empty()).collect();
    let factors = stack_factors(lines.len(), cs);
    lines
        .into_iter()
        .zip(factors)
        .filter_map(|(line, lf)| {
            let m = make(line.text, lf)?;
            Some(match line.tag {
                Some(tag) => m.with_tag(tag),
                None => m,
            })
        })
        .collect()
}

/// Line factors for two fields in reading order: the first always sits above
pub(crate) fn ordered_pair(a: f64, b: f64) -> (f64, f64) {
    (a.min(b), a.max(b))
}

/// Two fields joined by `sep` on line `lf` when the result fits in `span`.
///
/// Otherwise each field gets its own line: `lf` and one line further from the
/// anchor (`cs` apart), with `first` always on the upper one. A missing field
/// never splits.
pub(crate) fn split_if_wider(
    first: &str,
    second: &str,
    sep: &str,
    lf: f64,
    cs: f64,
    span: f64,
    width: impl Fn(&str) -> f64,
) -> Vec<(String, f64)> {
    let joined = join_non_empty(&[first, second], sep);
    if joined.is_empty() {
        return Vec::new();
    }
    if first.is_empty() || second.is_empty() || width(&joined) <= span {
        return vec![(joined, lf)];
    }
    let away = if lf > 0.0 { cs } else { -cs };
    let (upper, lower) = ordered_pair(lf, lf + away);
    vec![(first.to_string(), upper), (second.to_string(), lower)]
}
