// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song lengths written as `m:ss`.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::SetlistError;

/// Length of a song in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SongDuration {
    seconds: u32,
}

impl SongDuration {
    /// Create from a number of seconds
    pub fn from_secs(seconds: u32) -> Self {
        Self { seconds }
    }

    /// Parse `m:ss` (minutes may have any number of digits)
    pub fn parse(s: &str) -> Result<Self, SetlistError> {
        let invalid = || SetlistError::InvalidDuration(s.to_string());

        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes.is_empty()
            || seconds.len() != 2
            || !minutes.bytes().all(|b| b.is_ascii_digit())
            || !seconds.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u32 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }

        minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .map(Self::from_secs)
            .ok_or_else(invalid)
    }

    /// Total seconds
    pub fn as_secs(&self) -> u32 {
        self.seconds
    }

    /// Whole minutes component
    pub fn minutes(&self) -> u32 {
        self.seconds / 60
    }

    /// Seconds within the minute
    pub fn seconds(&self) -> u32 {
        self.seconds % 60
    }
}

impl fmt::Display for SongDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes(), self.seconds())
    }
}

impl TryFrom<String> for SongDuration {
    type Error = SetlistError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SongDuration> for String {
    fn from(d: SongDuration) -> Self {
        d.to_string()
    }
}

impl Add for SongDuration {
    type Output = SongDuration;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_secs(self.seconds.saturating_add(rhs.seconds))
    }
}

impl Sum for SongDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(SongDuration::default(), Add::add)
    }
}

impl<'a> Sum<&'a SongDuration> for SongDuration {
    fn sum<I: Iterator<Item = &'a SongDuration>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
