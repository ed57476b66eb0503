use std::{ops::Deref, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// A duration written as whitespace separated parts like `1d 2h 3m 4s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid duration part `{0}`, expected a number followed by s, m, h or d")]
pub struct ParseDurationError(String);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(0u64, |total, part| {
                parse_part(part)
                    .and_then(|seconds| total.checked_add(seconds))
                    .ok_or_else(|| ParseDurationError(part.into()))
            })
            .map(|seconds| Self(std::time::Duration::from_secs(seconds)))
    }
}

fn parse_part(part: &str) -> Option<u64> {
    let unit_start = part.find(|c: char| !c.is_ascii_digit())?;
    let (value, unit) = part.split_at(unit_start);
    let value = value.parse::<u64>().ok()?;
    let factor = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };
    value.checked_mul(factor)
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
