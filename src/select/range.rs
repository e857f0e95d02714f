use std::{collections::BTreeSet, str::FromStr};

use crate::foundation::{
    error::{GifSplitError, GifSplitResult},
    frame::FrameRecord,
};

/// Which decoded frames a conversion should emit.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSpec {
    /// Every frame, in decode order.
    #[default]
    All,
    /// Only frame 0.
    First,
    /// Only the final frame.
    Last,
    /// A 1-based range expression such as `"1-5"` or `"1,3,5"`.
    Custom(String),
}

impl SelectionSpec {
    /// Build a [`SelectionSpec::Custom`] from a range expression.
    pub fn custom(expr: impl Into<String>) -> Self {
        Self::Custom(expr.into())
    }
}

impl FromStr for SelectionSpec {
    type Err = std::convert::Infallible;

    /// `all`, `first` and `last` (case-insensitive) are mode keywords;
    /// anything else is taken as a custom range expression.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_lowercase().as_str() {
            "all" => Self::All,
            "first" => Self::First,
            "last" => Self::Last,
            _ => Self::Custom(trimmed.to_owned()),
        })
    }
}

/// Outcome of parsing a custom range expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeParse {
    /// At least one token parsed. Indices are 0-based, ascending and unique;
    /// the list may be empty when every parsed token fell outside the frames.
    Parsed(Vec<usize>),
    /// The expression was blank or no token parsed; callers select everything.
    Fallback,
}

/// Parse a 1-based range expression against `len` frames.
///
/// Tokens are separated by `,`. A token is either `n` or `a-b` (inclusive),
/// with optional surrounding whitespace. Single indices outside the frame
/// list are dropped, range bounds are clamped, and malformed tokens are
/// skipped.
pub fn parse_range(expr: &str, len: usize) -> RangeParse {
    if expr.trim().is_empty() {
        return RangeParse::Fallback;
    }

    let last = len as i64 - 1;
    let mut picked = BTreeSet::new();
    let mut any_parsed = false;

    for token in expr.split(',').map(str::trim) {
        match parse_token(token) {
            Some(Token::Single(n)) => {
                any_parsed = true;
                let idx = n - 1;
                if (0..=last).contains(&idx) {
                    picked.insert(idx as usize);
                }
            }
            Some(Token::Span(a, b)) => {
                any_parsed = true;
                let start = (a - 1).max(0);
                let end = (b - 1).min(last);
                if start <= end {
                    picked.extend((start as usize)..=(end as usize));
                }
            }
            None => tracing::debug!(token, "skipping malformed range token"),
        }
    }

    if any_parsed {
        RangeParse::Parsed(picked.into_iter().collect())
    } else {
        RangeParse::Fallback
    }
}

enum Token {
    Single(i64),
    Span(i64, i64),
}

fn parse_token(token: &str) -> Option<Token> {
    match token.split_once('-') {
        Some((a, b)) => {
            // Extra dashes ("1-2-3") keep the first two bounds.
            let b = b.split('-').next().unwrap_or(b);
            let a = a.trim().parse::<i64>().ok()?;
            let b = b.trim().parse::<i64>().ok()?;
            Some(Token::Span(a, b))
        }
        None => token.parse::<i64>().ok().map(Token::Single),
    }
}

/// Pick the frames named by `spec`, in ascending `original_index` order.
///
/// `first` and `last` fail with [`GifSplitError::EmptyInput`] on an empty
/// frame list; `all` and custom expressions return whatever is available.
#[tracing::instrument(skip(frames), fields(len = frames.len()))]
pub fn select<'a>(
    frames: &'a [FrameRecord],
    spec: &SelectionSpec,
) -> GifSplitResult<Vec<&'a FrameRecord>> {
    let picked: Vec<&FrameRecord> = match spec {
        SelectionSpec::All => frames.iter().collect(),
        SelectionSpec::First => {
            let first = frames
                .first()
                .ok_or_else(|| GifSplitError::empty_input("cannot select first of zero frames"))?;
            vec![first]
        }
        SelectionSpec::Last => {
            let last = frames
                .last()
                .ok_or_else(|| GifSplitError::empty_input("cannot select last of zero frames"))?;
            vec![last]
        }
        SelectionSpec::Custom(expr) => match parse_range(expr, frames.len()) {
            RangeParse::Parsed(indices) => indices.into_iter().map(|i| &frames[i]).collect(),
            RangeParse::Fallback => {
                tracing::debug!(expr = %expr, "no parseable range token, using all frames");
                frames.iter().collect()
            }
        },
    };
    Ok(picked)
}

#[cfg(test)]
#[path = "../../tests/unit/select/range.rs"]
mod tests;
