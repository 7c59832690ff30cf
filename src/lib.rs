// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! SETLIST - energy-curve setlist generation.
//!
//! Songs are scored onto a common energy scale, then matched position by
//! position against a venue's target energy curve. Each placement comes
//! with a short explanation and the whole set with summary statistics.
//!
//! ```
//! use setlist::{generate_setlist, SetlistConfig, Song, SongDuration};
//!
//! let songs = vec![
//!     Song::manual(1u64, "Fast One", SongDuration::from_secs(190), 9),
//!     Song::manual(2u64, "Mid One", SongDuration::from_secs(240), 5),
//!     Song::manual(3u64, "Slow One", SongDuration::from_secs(300), 2),
//! ];
//! let result = generate_setlist(&songs, &SetlistConfig::with_curve(vec![65, 75, 85]));
//! assert_eq!(result.energy_flow, vec![5, 9, 2]);
//! ```

pub mod config;
pub mod energy;
pub mod error;
pub mod setlist;
pub mod song;
pub mod venue;

pub use config::{SetlistConfig, SetlistFile, SongRecord};
pub use energy::{score, EnergyRating, EnergySource, ScoredSong, SpotifyMetrics};
pub use error::SetlistError;
pub use setlist::{generate_setlist, SetlistEntry, SetlistResult};
pub use song::{AudioFeatures, Scoreable, Song, SongDuration, SongId, SongKind, SpotifyData};
pub use venue::{curve_for, VenueType};
