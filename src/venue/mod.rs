// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Venue types and their target energy curves.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of points in every built-in energy curve
pub const CURVE_LENGTH: usize = 7;

/// Ordered target energies (0-100), one per setlist position
pub type EnergyCurve = [u8; CURVE_LENGTH];

/// Kind of room the set is played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueType {
    #[default]
    Club,
    Festival,
    Intimate,
    Theater,
    Arena,
}

impl VenueType {
    /// All venue types
    pub const ALL: [VenueType; 5] = [
        VenueType::Club,
        VenueType::Festival,
        VenueType::Intimate,
        VenueType::Theater,
        VenueType::Arena,
    ];

    /// Parse a venue name; anything unrecognised is a club
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "club" => VenueType::Club,
            "festival" => VenueType::Festival,
            "intimate" => VenueType::Intimate,
            "theater" | "theatre" => VenueType::Theater,
            "arena" => VenueType::Arena,
            other => {
                debug!(venue = other, "Unknown venue type, using club curve");
                VenueType::Club
            }
        }
    }

    /// Lowercase name
    pub fn name(self) -> &'static str {
        match self {
            VenueType::Club => "club",
            VenueType::Festival => "festival",
            VenueType::Intimate => "intimate",
            VenueType::Theater => "theater",
            VenueType::Arena => "arena",
        }
    }

    /// Target energy curve for this venue
    pub fn energy_curve(self) -> EnergyCurve {
        match self {
            VenueType::Club => [65, 75, 85, 90, 95, 85, 95],
            VenueType::Festival => [75, 85, 90, 95, 100, 90, 100],
            VenueType::Intimate => [40, 50, 55, 60, 65, 55, 70],
            VenueType::Theater => [50, 60, 70, 75, 80, 70, 85],
            VenueType::Arena => [70, 80, 85, 90, 95, 90, 100],
        }
    }
}

impl fmt::Display for VenueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Curve lookup by venue name, with the club fallback
pub fn curve_for(venue: &str) -> EnergyCurve {
    VenueType::parse(venue).energy_curve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_parse() {
        assert_eq!(VenueType::parse("festival"), VenueType::Festival);
        assert_eq!(VenueType::parse("  Arena "), VenueType::Arena);
        assert_eq!(VenueType::parse("THEATRE"), VenueType::Theater);
        assert_eq!(VenueType::parse("intimate"), VenueType::Intimate);
    }

    #[test]
    fn test_unknown_venue_is_club() {
        assert_eq!(VenueType::parse("unknown123"), VenueType::Club);
        assert_eq!(VenueType::parse(""), VenueType::Club);
        assert_eq!(curve_for("unknown123"), curve_for("club"));
    }

    #[test]
    fn test_curves_in_range() {
        for venue in VenueType::ALL {
            let curve = venue.energy_curve();
            assert_eq!(curve.len(), CURVE_LENGTH);
            assert!(curve.iter().all(|&e| e <= 100), "{} curve out of range", venue);
        }
    }

    #[test]
    fn test_club_curve() {
        assert_eq!(VenueType::Club.energy_curve(), [65, 75, 85, 90, 95, 85, 95]);
        assert_eq!(VenueType::default(), VenueType::Club);
    }

    #[test]
    fn test_name_round_trip() {
        for venue in VenueType::ALL {
            assert_eq!(VenueType::parse(venue.name()), venue);
            assert_eq!(venue.to_string(), venue.name());
        }
    }
}
