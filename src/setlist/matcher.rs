// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Greedy nearest-match assignment of songs to curve positions.
//!
//! Positions are filled in curve order. Each position takes the unassigned
//! song whose energy score is closest to its target, and that choice is
//! never revisited. The result therefore depends on position order and is
//! not the assignment with the smallest total deviation.

use tracing::debug;

use crate::energy::ScoredSong;

/// A song locked into a setlist position
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The chosen song
    pub song: ScoredSong,
    /// 1-based position in the set
    pub position: usize,
    /// Curve target for this position
    pub target_energy: u8,
}

/// Assign songs to curve positions.
///
/// Produces `min(songs.len(), curve.len())` assignments. Candidates are
/// scanned highest energy first (ties in input order); on equal distance
/// the first candidate scanned wins.
pub fn match_to_curve(mut songs: Vec<ScoredSong>, curve: &[u8]) -> Vec<Assignment> {
    // Stable, so equal scores keep input order
    songs.sort_by(|a, b| b.energy_score.cmp(&a.energy_score));

    let mut pool: Vec<Option<ScoredSong>> = songs.into_iter().map(Some).collect();
    let count = pool.len().min(curve.len());
    let mut assignments = Vec::with_capacity(count);

    for (index, &target) in curve.iter().take(count).enumerate() {
        let mut best: Option<(usize, u8)> = None;

        for (slot, candidate) in pool.iter().enumerate() {
            let Some(song) = candidate else { continue };
            let diff = song.energy_score.abs_diff(target);
            if best.map_or(true, |(_, best_diff)| diff < best_diff) {
                best = Some((slot, diff));
            }
        }

        let Some((slot, diff)) = best else { break };
        let Some(song) = pool[slot].take() else { break };

        debug!(
            position = index + 1,
            target,
            id = %song.song.id,
            energy_score = song.energy_score,
            diff,
            "Matched position"
        );

        assignments.push(Assignment {
            song,
            position: index + 1,
            target_energy: target,
        });
    }

    assignments
}
