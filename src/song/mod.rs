// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song records consumed by the setlist engine.
//!
//! Songs arrive either from manual entry (a title, a length and an energy
//! rating) or from a streaming catalog (popularity and audio analysis).
//! Both shapes are modeled by [`SongKind`] and expose the same
//! [`Scoreable`] view to the energy scorer.

pub mod duration;

pub use duration::SongDuration;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Song identifier (catalog id or form-generated number)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawSongId", into = "String")]
pub struct SongId(String);

impl SongId {
    /// Create a new id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<SongId> for String {
    fn from(id: SongId) -> Self {
        id.0
    }
}

/// Ids are written either as strings or bare numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSongId {
    Text(String),
    Number(u64),
}

impl From<RawSongId> for SongId {
    fn from(raw: RawSongId) -> Self {
        match raw {
            RawSongId::Text(s) => SongId(s),
            RawSongId::Number(n) => SongId::from(n),
        }
    }
}

/// Audio analysis values from a streaming catalog.
///
/// Ratios are 0.0 - 1.0, tempo is in BPM and loudness in dB (usually -60 - 0).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AudioFeatures {
    #[serde(default)]
    pub energy: Option<f64>,
    #[serde(default)]
    pub danceability: Option<f64>,
    #[serde(default)]
    pub valence: Option<f64>,
    #[serde(default)]
    pub tempo: Option<f64>,
    #[serde(default)]
    pub loudness: Option<f64>,
}

/// Catalog data attached to an enhanced song
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpotifyData {
    /// Catalog popularity (0-100)
    #[serde(default)]
    pub popularity: Option<u32>,
    /// Audio analysis, if the catalog provided one
    #[serde(default)]
    pub audio_features: Option<AudioFeatures>,
    /// Album name
    #[serde(default)]
    pub album: Option<String>,
    /// Artist names
    #[serde(default)]
    pub artists: Vec<String>,
}

/// Where a song's energy information comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SongKind {
    /// Entered by hand with an optional 1-10 rating
    Manual {
        #[serde(default)]
        energy: Option<u8>,
    },
    /// Imported from a catalog; may still carry a precomputed rating
    Enhanced {
        #[serde(default)]
        energy: Option<u8>,
        spotify: SpotifyData,
    },
}

/// Read-only view of the attributes the energy scorer needs
pub trait Scoreable {
    /// 1-10 rating supplied by the performer or importer
    fn rated_energy(&self) -> Option<u8>;

    /// Audio analysis, if any
    fn audio_features(&self) -> Option<&AudioFeatures>;

    /// Catalog popularity, if any
    fn popularity(&self) -> Option<u32>;
}

impl Scoreable for SongKind {
    fn rated_energy(&self) -> Option<u8> {
        match self {
            SongKind::Manual { energy } => *energy,
            SongKind::Enhanced { energy, .. } => *energy,
        }
    }

    fn audio_features(&self) -> Option<&AudioFeatures> {
        match self {
            SongKind::Manual { .. } => None,
            SongKind::Enhanced { spotify, .. } => spotify.audio_features.as_ref(),
        }
    }

    fn popularity(&self) -> Option<u32> {
        match self {
            SongKind::Manual { .. } => None,
            SongKind::Enhanced { spotify, .. } => spotify.popularity,
        }
    }
}

/// A candidate song for the setlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub duration: SongDuration,
    #[serde(flatten)]
    pub kind: SongKind,
}

impl Song {
    /// Create a song from its parts
    pub fn new(
        id: impl Into<SongId>,
        title: impl Into<String>,
        duration: SongDuration,
        kind: SongKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration,
            kind,
        }
    }

    /// Create a manually rated song
    pub fn manual(
        id: impl Into<SongId>,
        title: impl Into<String>,
        duration: SongDuration,
        energy: u8,
    ) -> Self {
        Self::new(id, title, duration, SongKind::Manual { energy: Some(energy) })
    }

    /// Create a song imported from a catalog
    pub fn enhanced(
        id: impl Into<SongId>,
        title: impl Into<String>,
        duration: SongDuration,
        spotify: SpotifyData,
    ) -> Self {
        Self::new(id, title, duration, SongKind::Enhanced { energy: None, spotify })
    }

    /// Attach a precomputed rating
    pub fn with_rated_energy(mut self, rating: u8) -> Self {
        match &mut self.kind {
            SongKind::Manual { energy } | SongKind::Enhanced { energy, .. } => {
                *energy = Some(rating);
            }
        }
        self
    }

    /// Whether this song came from a catalog
    pub fn is_enhanced(&self) -> bool {
        matches!(self.kind, SongKind::Enhanced { .. })
    }

    /// Catalog data, if any
    pub fn spotify(&self) -> Option<&SpotifyData> {
        match &self.kind {
            SongKind::Manual { .. } => None,
            SongKind::Enhanced { spotify, .. } => Some(spotify),
        }
    }
}

impl Scoreable for Song {
    fn rated_energy(&self) -> Option<u8> {
        self.kind.rated_energy()
    }

    fn audio_features(&self) -> Option<&AudioFeatures> {
        self.kind.audio_features()
    }

    fn popularity(&self) -> Option<u32> {
        self.kind.popularity()
    }
}
