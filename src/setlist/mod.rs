// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Setlist generation.
//!
//! This module provides:
//! - Matching: greedy assignment of scored songs to curve positions
//! - Reasoning: a short explanation per position
//! - Aggregation: summary statistics over the finished set

pub mod aggregate;
pub mod matcher;
pub mod reasoning;

pub use aggregate::{aggregate, average_energy};
pub use matcher::{match_to_curve, Assignment};
pub use reasoning::{explain, SetRole};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SetlistConfig;
use crate::energy::{score_all, ScoredSong};
use crate::song::{Song, SongDuration};
use crate::venue::VenueType;

/// One position in the generated setlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetlistEntry {
    #[serde(flatten)]
    pub song: ScoredSong,
    /// 1-based position
    pub position: usize,
    /// Curve target for this position
    pub target_energy: u8,
    /// Why the song was placed here
    pub reasoning: String,
}

impl SetlistEntry {
    /// Annotate an assignment with its explanation
    pub fn from_assignment(assignment: Assignment, venue: VenueType) -> Self {
        let reasoning = explain(&assignment, venue);
        Self {
            song: assignment.song,
            position: assignment.position,
            target_energy: assignment.target_energy,
            reasoning,
        }
    }
}

/// A generated setlist with summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetlistResult {
    pub entries: Vec<SetlistEntry>,
    pub total_songs: usize,
    /// Rounded mean display energy (0 when empty)
    pub average_energy: u8,
    /// Display energy per position
    pub energy_flow: Vec<u8>,
    /// Whether any entry carries catalog metrics
    pub spotify_enhanced: bool,
    pub venue_type: VenueType,
    /// Targets the songs were matched against
    pub energy_curve: Vec<u8>,
    /// Combined length of all entries
    pub total_duration: SongDuration,
}

impl SetlistResult {
    /// Check if no songs were placed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a setlist from candidate songs.
///
/// Pure: identical inputs always give identical output.
pub fn generate_setlist(songs: &[Song], config: &SetlistConfig) -> SetlistResult {
    let venue = config.venue();
    let curve = config.curve();

    let scored: Vec<ScoredSong> = score_all(songs);
    let entries: Vec<SetlistEntry> = match_to_curve(scored, &curve)
        .into_iter()
        .map(|assignment| SetlistEntry::from_assignment(assignment, venue))
        .collect();

    let result = aggregate(entries, venue, curve);
    info!(
        venue = %venue,
        candidates = songs.len(),
        placed = result.total_songs,
        average_energy = result.average_energy,
        "Generated setlist"
    );
    result
}
