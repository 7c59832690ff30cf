// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Summary statistics over a finished setlist.

use crate::song::SongDuration;
use crate::venue::VenueType;

use super::{SetlistEntry, SetlistResult};

/// Fold annotated entries into a result
pub fn aggregate(entries: Vec<SetlistEntry>, venue_type: VenueType, energy_curve: Vec<u8>) -> SetlistResult {
    let energy_flow: Vec<u8> = entries.iter().map(|e| e.song.display_energy).collect();

    SetlistResult {
        total_songs: entries.len(),
        average_energy: average_energy(&energy_flow),
        spotify_enhanced: entries.iter().any(|e| e.song.spotify_metrics.is_some()),
        total_duration: entries.iter().map(|e| e.song.song.duration).sum::<SongDuration>(),
        energy_flow,
        venue_type,
        energy_curve,
        entries,
    }
}

/// Rounded mean display energy, 0 for an empty set
pub fn average_energy(energy_flow: &[u8]) -> u8 {
    if energy_flow.is_empty() {
        return 0;
    }
    let total: u32 = energy_flow.iter().map(|&e| e as u32).sum();
    (total as f64 / energy_flow.len() as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::ScoredSong;
    use crate::song::{AudioFeatures, Song, SpotifyData};

    fn entry(position: usize, song: Song) -> SetlistEntry {
        SetlistEntry {
            song: ScoredSong::new(song),
            position,
            target_energy: 80,
            reasoning: String::new(),
        }
    }

    fn manual(id: &str, energy: u8, secs: u32) -> Song {
        Song::manual(id, id, SongDuration::from_secs(secs), energy)
    }

    #[test]
    fn test_average_energy() {
        assert_eq!(average_energy(&[5, 9, 2]), 5);
        assert_eq!(average_energy(&[7, 8]), 8);
        assert_eq!(average_energy(&[10]), 10);
        assert_eq!(average_energy(&[]), 0);
    }

    #[test]
    fn test_aggregate() {
        let entries = vec![
            entry(1, manual("a", 5, 200)),
            entry(2, manual("b", 9, 245)),
            entry(3, manual("c", 2, 180)),
        ];
        let result = aggregate(entries, VenueType::Theater, vec![65, 75, 85]);

        assert_eq!(result.total_songs, 3);
        assert_eq!(result.average_energy, 5);
        assert_eq!(result.energy_flow, vec![5, 9, 2]);
        assert!(!result.spotify_enhanced);
        assert_eq!(result.venue_type, VenueType::Theater);
        assert_eq!(result.total_duration.to_string(), "10:25");
        assert_eq!(result.energy_curve, vec![65, 75, 85]);
    }

    #[test]
    fn test_spotify_enhanced_flag() {
        let analysed = Song::enhanced(
            "s",
            "Track",
            SongDuration::from_secs(210),
            SpotifyData {
                audio_features: Some(AudioFeatures::default()),
                ..Default::default()
            },
        );
        let entries = vec![entry(1, manual("a", 5, 200)), entry(2, analysed)];
        assert!(aggregate(entries, VenueType::Club, vec![65, 75]).spotify_enhanced);
    }

    #[test]
    fn test_empty_aggregate() {
        let result = aggregate(Vec::new(), VenueType::Arena, Vec::new());
        assert_eq!(result.total_songs, 0);
        assert_eq!(result.average_energy, 0);
        assert!(result.energy_flow.is_empty());
        assert!(result.entries.is_empty());
        assert!(!result.spotify_enhanced);
        assert_eq!(result.total_duration.as_secs(), 0);
    }
}
