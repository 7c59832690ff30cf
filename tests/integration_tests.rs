// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for SETLIST
//!
//! These tests drive the public API from setlist file to finished result.

use std::collections::HashSet;
use std::fs;

use setlist::{
    generate_setlist, AudioFeatures, SetlistConfig, SetlistFile, Song, SongDuration, SongKind,
    SpotifyData, VenueType,
};
use tempfile::tempdir;

fn manual(id: u64, energy: u8) -> Song {
    Song::manual(id, format!("Song {}", id), SongDuration::from_secs(180 + id as u32), energy)
}

fn analysed(id: &str, energy: f64, danceability: f64, tempo: f64, popularity: u32) -> Song {
    Song::enhanced(
        id,
        format!("Track {}", id),
        SongDuration::from_secs(210),
        SpotifyData {
            popularity: Some(popularity),
            audio_features: Some(AudioFeatures {
                energy: Some(energy),
                danceability: Some(danceability),
                valence: Some(0.5),
                tempo: Some(tempo),
                loudness: Some(-6.0),
            }),
            album: None,
            artists: vec!["Headliner".to_string()],
        },
    )
}

/// The worked example: ratings 9, 5, 2 against 65, 75, 85
#[test]
fn test_worked_example() {
    let songs = vec![manual(1, 9), manual(2, 5), manual(3, 2)];
    let result = generate_setlist(&songs, &SetlistConfig::with_curve(vec![65, 75, 85]));

    let order: Vec<&str> = result.entries.iter().map(|e| e.song.song.id.as_str()).collect();
    assert_eq!(order, vec!["2", "1", "3"]);
    assert_eq!(result.energy_flow, vec![5, 9, 2]);
    assert_eq!(result.average_energy, 5);
    assert_eq!(result.total_songs, 3);
}

/// Entry count, positions and uniqueness hold for any input size
#[test]
fn test_structural_invariants() {
    let curves: Vec<Vec<u8>> = vec![
        vec![],
        vec![50],
        VenueType::Arena.energy_curve().to_vec(),
        vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 90, 80],
    ];

    for song_count in [0usize, 1, 3, 7, 12, 40] {
        let songs: Vec<Song> = (0..song_count as u64)
            .map(|i| manual(i, (i % 10) as u8 + 1))
            .collect();

        for curve in &curves {
            let result = generate_setlist(&songs, &SetlistConfig::with_curve(curve.clone()));

            assert_eq!(result.entries.len(), song_count.min(curve.len()));
            assert_eq!(result.total_songs, result.entries.len());

            for (i, entry) in result.entries.iter().enumerate() {
                assert_eq!(entry.position, i + 1);
                assert_eq!(entry.target_energy, curve[i]);
                assert!((1..=10).contains(&entry.song.display_energy));
                assert!(entry.song.energy_score <= 100);
            }

            let ids: HashSet<&str> = result.entries.iter().map(|e| e.song.song.id.as_str()).collect();
            assert_eq!(ids.len(), result.entries.len());
        }
    }
}

/// Rated songs keep their rating
#[test]
fn test_rated_energy_passthrough() {
    for energy in 1..=10u8 {
        let result = generate_setlist(&[manual(1, energy)], &SetlistConfig::default());
        assert_eq!(result.entries[0].song.display_energy, energy);
        assert_eq!(result.entries[0].song.energy_score, energy * 10);
    }
}

/// Same input, same output
#[test]
fn test_idempotent() {
    let songs = vec![
        manual(1, 8),
        analysed("a", 0.9, 0.8, 150.0, 85),
        manual(2, 4),
        analysed("b", 0.3, 0.4, 90.0, 30),
        manual(3, 8),
    ];
    let config = SetlistConfig::for_venue("festival");

    assert_eq!(generate_setlist(&songs, &config), generate_setlist(&songs, &config));
}

/// Unknown venues behave exactly like a club
#[test]
fn test_unknown_venue_matches_club() {
    let songs: Vec<Song> = (1..=9u64).map(|i| manual(i, (10 - i) as u8)).collect();

    let unknown = generate_setlist(&songs, &SetlistConfig::for_venue("unknown123"));
    let club = generate_setlist(&songs, &SetlistConfig::for_venue("club"));
    assert_eq!(unknown, club);
}

/// No songs, well-formed empty result
#[test]
fn test_empty_song_list() {
    for venue in VenueType::ALL {
        let result = generate_setlist(&[], &SetlistConfig::for_venue(venue.name()));
        assert!(result.entries.is_empty());
        assert_eq!(result.total_songs, 0);
        assert_eq!(result.average_energy, 0);
        assert!(result.energy_flow.is_empty());
        assert!(!result.spotify_enhanced);
        assert_eq!(result.venue_type, venue);
    }
}

/// Catalog songs carry metrics into the reasoning
#[test]
fn test_enhanced_songs_in_festival_set() {
    let songs = vec![
        analysed("anthem", 0.95, 0.85, 150.0, 90),
        manual(1, 6),
        Song::new(9u64, "Unrated", SongDuration::from_secs(200), SongKind::Manual { energy: None }),
    ];
    let result = generate_setlist(&songs, &SetlistConfig::for_venue("festival"));

    assert!(result.spotify_enhanced);
    let anthem = result
        .entries
        .iter()
        .find(|e| e.song.song.id.as_str() == "anthem")
        .unwrap();
    assert_eq!(anthem.position, 1);
    assert!(anthem.reasoning.starts_with("Opener: energy 9/10"));
    assert!(anthem.reasoning.contains("Crowd favourite with 90% popularity."));
    assert!(anthem.reasoning.contains("Highly danceable (85%)."));
    assert!(anthem.reasoning.contains("Driving tempo at 150 BPM."));
    assert!(anthem.reasoning.ends_with("Big enough for a festival field."));

    let manual_entry = result
        .entries
        .iter()
        .find(|e| e.song.song.id.as_str() == "1")
        .unwrap();
    assert!(!manual_entry.reasoning.contains("popularity"));
}

/// File on disk through to result
#[test]
fn test_setlist_file_pipeline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gig.yaml");
    fs::write(
        &path,
        r#"
config:
  venue_type: intimate
songs:
  - { id: 1, title: "Hush", duration: "4:20", energy: 3 }
  - { id: 2, title: "Lift", duration: "3:10", energy: 6 }
  - { id: 3, title: "Glow", duration: "3:55", energy: 5 }
"#,
    )
    .unwrap();

    let file = SetlistFile::load(&path).unwrap();
    let songs = file.songs().unwrap();
    let result = generate_setlist(&songs, &file.config);

    // Intimate curve starts 40, 50, 55. "Glow" (50) and "Hush" (30) are
    // both 10 away from 40; the higher score is scanned first.
    assert_eq!(result.energy_flow, vec![5, 6, 3]);
    assert_eq!(result.venue_type, VenueType::Intimate);
    assert_eq!(result.total_duration.to_string(), "11:25");
    assert!(result.entries[0].reasoning.contains("intimate room"));
}

/// TOML files work the same way, and CLI-style overrides win
#[test]
fn test_toml_file_with_override() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gig.toml");
    fs::write(
        &path,
        r#"
[config]
venue_type = "arena"

[[songs]]
id = 1
title = "Big"
duration = "3:00"
energy = 9

[[songs]]
id = 2
title = "Small"
duration = "3:00"
energy = 2
"#,
    )
    .unwrap();

    let file = SetlistFile::load(&path).unwrap();
    let config = file.config.clone().merge(SetlistConfig::with_curve(vec![20, 90]));
    let result = generate_setlist(&file.songs().unwrap(), &config);

    assert_eq!(result.venue_type, VenueType::Arena);
    assert_eq!(result.energy_flow, vec![2, 9]);
}

/// Invalid records never reach the generator
#[test]
fn test_invalid_records_rejected() {
    let file = SetlistFile::from_yaml(
        r#"
songs:
  - { id: 1, title: "Fine", duration: "3:00", energy: 5 }
  - { id: 2, title: "Too Hot", duration: "3:00", energy: 12 }
"#,
    )
    .unwrap();

    let err = file.songs().unwrap_err();
    assert_eq!(err.to_string(), "Song 2: energy 12 is outside 1-10");
}

/// Result serializes for a display layer
#[test]
fn test_result_yaml_output() {
    let result = generate_setlist(&[manual(1, 7), manual(2, 8)], &SetlistConfig::default());
    let yaml = serde_yaml::to_string(&result).unwrap();

    assert!(yaml.contains("total_songs: 2"));
    assert!(yaml.contains("reasoning:"));
    assert!(yaml.contains("energy_source: rated"));
}

/// The bundled sample file stays valid
#[test]
fn test_sample_setlist() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/setlists/club_night.yaml");
    let file = SetlistFile::load(path).unwrap();
    let songs = file.songs().unwrap();
    assert_eq!(songs.len(), 8);

    let result = generate_setlist(&songs, &file.config);
    assert_eq!(result.venue_type, VenueType::Club);
    assert_eq!(result.total_songs, 7);
    assert!(result.spotify_enhanced);
}
