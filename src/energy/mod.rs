// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Energy scoring.
//!
//! Every song, however it was described, is reduced to two numbers: a
//! 1-10 display energy shown to the performer and a 0-100 energy score
//! used to measure distance from a venue's target curve.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::song::{AudioFeatures, Scoreable, Song};

/// Display energy used when a song carries no energy information
pub const NEUTRAL_DISPLAY_ENERGY: u8 = 5;

/// Lowest display energy
pub const MIN_DISPLAY_ENERGY: u8 = 1;

/// Highest display energy
pub const MAX_DISPLAY_ENERGY: u8 = 10;

// Weights of the live-energy blend (sum to 100)
const ENERGY_WEIGHT: f64 = 40.0;
const DANCEABILITY_WEIGHT: f64 = 25.0;
const TEMPO_WEIGHT: f64 = 20.0;
const VALENCE_WEIGHT: f64 = 10.0;
const LOUDNESS_WEIGHT: f64 = 5.0;

/// Tempo at which the tempo component saturates
const TEMPO_CEILING_BPM: f64 = 140.0;

// Neutral stand-ins for missing audio features
const NEUTRAL_ENERGY: f64 = 0.5;
const NEUTRAL_DANCEABILITY: f64 = 0.5;
const NEUTRAL_TEMPO: f64 = 120.0;
const NEUTRAL_VALENCE: f64 = 0.5;
const NEUTRAL_LOUDNESS: f64 = -10.0;

/// Which rule produced a song's energy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    /// Derived from audio analysis
    AudioFeatures,
    /// Taken from a 1-10 rating
    Rated,
    /// Nothing known, neutral default
    Default,
}

/// Catalog metrics surfaced to the reasoning text.
///
/// Only values the catalog actually supplied are present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpotifyMetrics {
    /// Tempo in BPM
    pub tempo: Option<f64>,
    /// Danceability as a percentage (0-100), unrounded
    pub danceability: Option<f64>,
    /// Valence as a percentage (0-100), unrounded
    pub valence: Option<f64>,
    /// Catalog popularity (0-100)
    pub popularity: Option<u32>,
}

impl SpotifyMetrics {
    fn from_features(features: &AudioFeatures, popularity: Option<u32>) -> Self {
        Self {
            tempo: known(features.tempo),
            danceability: known(features.danceability).map(percentage),
            valence: known(features.valence).map(percentage),
            popularity,
        }
    }
}

/// Result of scoring a single song
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRating {
    /// User-facing energy (1-10)
    pub display_energy: u8,
    /// Internal energy on a 0-100 scale
    pub energy_score: u8,
    /// Catalog metrics, when audio analysis was available
    pub spotify_metrics: Option<SpotifyMetrics>,
    /// Which rule applied
    pub source: EnergySource,
}

impl EnergyRating {
    fn from_display(display_energy: u8, source: EnergySource) -> Self {
        let display_energy = display_energy.clamp(MIN_DISPLAY_ENERGY, MAX_DISPLAY_ENERGY);
        Self {
            display_energy,
            energy_score: display_energy * 10,
            spotify_metrics: None,
            source,
        }
    }
}

/// A song together with its energy rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSong {
    #[serde(flatten)]
    pub song: Song,
    pub display_energy: u8,
    pub energy_score: u8,
    pub spotify_metrics: Option<SpotifyMetrics>,
    pub energy_source: EnergySource,
}

impl ScoredSong {
    /// Score a song and wrap it
    pub fn new(song: Song) -> Self {
        let rating = score(&song);
        trace!(
            id = %song.id,
            display_energy = rating.display_energy,
            source = ?rating.source,
            "Scored song"
        );
        Self {
            song,
            display_energy: rating.display_energy,
            energy_score: rating.energy_score,
            spotify_metrics: rating.spotify_metrics,
            energy_source: rating.source,
        }
    }
}

/// Score a song.
///
/// Audio analysis wins over a rating; a song with neither gets the neutral
/// default. Never fails.
pub fn score<S: Scoreable + ?Sized>(song: &S) -> EnergyRating {
    if let Some(features) = song.audio_features() {
        let display = (live_score(features) / 10.0)
            .clamp(MIN_DISPLAY_ENERGY as f64, MAX_DISPLAY_ENERGY as f64)
            .round() as u8;
        let mut rating = EnergyRating::from_display(display, EnergySource::AudioFeatures);
        rating.spotify_metrics = Some(SpotifyMetrics::from_features(features, song.popularity()));
        return rating;
    }

    match song.rated_energy() {
        Some(energy) => EnergyRating::from_display(energy, EnergySource::Rated),
        None => EnergyRating::from_display(NEUTRAL_DISPLAY_ENERGY, EnergySource::Default),
    }
}

/// Score every song, preserving input order
pub fn score_all(songs: &[Song]) -> Vec<ScoredSong> {
    songs.iter().cloned().map(ScoredSong::new).collect()
}

/// Weighted 0-100 blend of audio features
pub fn live_score(features: &AudioFeatures) -> f64 {
    let energy = known(features.energy).unwrap_or(NEUTRAL_ENERGY);
    let danceability = known(features.danceability).unwrap_or(NEUTRAL_DANCEABILITY);
    let tempo = known(features.tempo).unwrap_or(NEUTRAL_TEMPO);
    let valence = known(features.valence).unwrap_or(NEUTRAL_VALENCE);
    let loudness = known(features.loudness).unwrap_or(NEUTRAL_LOUDNESS);

    energy * ENERGY_WEIGHT
        + danceability * DANCEABILITY_WEIGHT
        + (tempo / TEMPO_CEILING_BPM).min(1.0) * TEMPO_WEIGHT
        + valence * VALENCE_WEIGHT
        + ((loudness + 60.0) / 60.0).clamp(0.0, 1.0) * LOUDNESS_WEIGHT
}

/// Non-finite values count as missing
fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn percentage(ratio: f64) -> f64 {
    (ratio * 100.0).clamp(0.0, 100.0)
}
