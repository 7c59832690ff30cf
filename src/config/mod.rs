// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration and setlist files.
//!
//! A setlist file holds the generation settings and the candidate song
//! records. Files are YAML by default; a `.toml` extension selects TOML.
//! Records are validated here, before any song reaches the generator.

pub mod watcher;

pub use watcher::{validate_setlist, SetlistEvent, SetlistWatcher};

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::SetlistError;
use crate::song::{Song, SongDuration, SongId, SongKind, SpotifyData};
use crate::venue::VenueType;

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SetlistConfig {
    /// Venue name (unknown names fall back to club)
    #[serde(default)]
    pub venue_type: Option<String>,
    /// Explicit target curve, overrides the venue's curve
    #[serde(default)]
    pub energy_curve: Option<Vec<u8>>,
}

impl SetlistConfig {
    /// Settings for a named venue
    pub fn for_venue(venue: impl Into<String>) -> Self {
        Self {
            venue_type: Some(venue.into()),
            energy_curve: None,
        }
    }

    /// Settings with an explicit curve
    pub fn with_curve(curve: Vec<u8>) -> Self {
        Self {
            venue_type: None,
            energy_curve: Some(curve),
        }
    }

    /// Resolved venue type
    pub fn venue(&self) -> VenueType {
        self.venue_type
            .as_deref()
            .map(VenueType::parse)
            .unwrap_or_default()
    }

    /// Curve to match against
    pub fn curve(&self) -> Vec<u8> {
        match &self.energy_curve {
            Some(curve) => curve.clone(),
            None => self.venue().energy_curve().to_vec(),
        }
    }

    /// Overlay values set in `other` on top of these
    pub fn merge(mut self, other: SetlistConfig) -> Self {
        if other.venue_type.is_some() {
            self.venue_type = other.venue_type;
        }
        if other.energy_curve.is_some() {
            self.energy_curve = other.energy_curve;
        }
        self
    }
}

/// Song record as supplied by data entry or a catalog import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongRecord {
    pub id: SongId,
    pub title: String,
    /// Length as `m:ss`
    pub duration: String,
    /// 1-10 rating
    #[serde(default)]
    pub energy: Option<i64>,
    /// Catalog data; its presence makes the song an enhanced one
    #[serde(default)]
    pub spotify_data: Option<SpotifyData>,
}

impl SongRecord {
    /// Validate and convert into a song
    pub fn into_song(self) -> Result<Song, SetlistError> {
        let id = self.id;

        if self.title.trim().is_empty() {
            return Err(SetlistError::EmptyTitle(id.to_string()));
        }

        let duration = SongDuration::parse(&self.duration)?;

        let energy = match self.energy {
            Some(e) if (1..=10).contains(&e) => Some(e as u8),
            Some(e) => {
                return Err(SetlistError::EnergyOutOfRange {
                    id: id.to_string(),
                    energy: e,
                })
            }
            None => None,
        };

        let kind = match self.spotify_data {
            Some(spotify) => {
                check_features(&id, &spotify)?;
                SongKind::Enhanced { energy, spotify }
            }
            None => SongKind::Manual { energy },
        };

        Ok(Song::new(id, self.title, duration, kind))
    }
}

fn check_features(id: &SongId, spotify: &SpotifyData) -> Result<(), SetlistError> {
    let Some(features) = &spotify.audio_features else {
        return Ok(());
    };

    let ratios = [
        ("energy", features.energy),
        ("danceability", features.danceability),
        ("valence", features.valence),
    ];
    for (feature, value) in ratios {
        if let Some(value) = value {
            if !(0.0..=1.0).contains(&value) {
                return Err(SetlistError::FeatureOutOfRange {
                    id: id.to_string(),
                    feature,
                    value,
                });
            }
        }
    }
    Ok(())
}

/// Serialization format of a setlist file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
}

impl FileFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SetlistError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") | None => Ok(FileFormat::Yaml),
            Some("toml") => Ok(FileFormat::Toml),
            Some(other) => Err(SetlistError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Root of a setlist file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SetlistFile {
    /// Generation settings
    #[serde(default)]
    pub config: SetlistConfig,
    /// Candidate songs
    #[serde(default)]
    pub songs: Vec<SongRecord>,
}

impl SetlistFile {
    /// Load a setlist file, choosing the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read setlist file: {:?}", path))?;
        match format {
            FileFormat::Yaml => Self::from_yaml(&contents),
            FileFormat::Toml => Self::from_toml(&contents),
        }
    }

    /// Parse a setlist from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML setlist")
    }

    /// Parse a setlist from TOML
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML setlist")
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize setlist to YAML")
    }

    /// Save as YAML
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write setlist file: {:?}", path.as_ref()))
    }

    /// Validate every record and convert to songs, rejecting duplicate ids
    pub fn songs(&self) -> Result<Vec<Song>, SetlistError> {
        let mut seen = HashSet::new();
        let mut songs = Vec::with_capacity(self.songs.len());

        for record in &self.songs {
            if !seen.insert(record.id.clone()) {
                return Err(SetlistError::DuplicateId(record.id.to_string()));
            }
            songs.push(record.clone().into_song()?);
        }

        Ok(songs)
    }
}
