// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised while turning external song records into core input.
//!
//! The sequencing core itself never fails; these only surface from the
//! config layer before a `Song` reaches it.

use thiserror::Error;

/// Validation errors for setlist files and song records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetlistError {
    /// Duration string is not `m:ss`
    #[error("Invalid duration {0:?}, expected m:ss")]
    InvalidDuration(String),
    /// Rated energy outside 1-10
    #[error("Song {id}: energy {energy} is outside 1-10")]
    EnergyOutOfRange { id: String, energy: i64 },
    /// Audio feature ratio outside 0.0-1.0
    #[error("Song {id}: audio feature {feature} = {value} is outside 0.0-1.0")]
    FeatureOutOfRange {
        id: String,
        feature: &'static str,
        value: f64,
    },
    /// Title missing or blank
    #[error("Song {0}: title must not be empty")]
    EmptyTitle(String),
    /// Same id used by two records
    #[error("Duplicate song id {0}")]
    DuplicateId(String),
    /// File extension not recognised as a setlist file
    #[error("Unsupported setlist file format: {0}")]
    UnsupportedFormat(String),
}
