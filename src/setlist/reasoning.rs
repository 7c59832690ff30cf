// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Explanations for why a song sits where it does.
//!
//! The text is assembled from clauses in a fixed order: position role,
//! popularity, danceability, tempo, mood, venue. A clause is left out
//! entirely when its data is missing or its threshold is not met.

use crate::energy::SpotifyMetrics;
use crate::venue::VenueType;

use super::matcher::Assignment;

/// Role a position plays in the arc of the set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetRole {
    Opener,
    WarmUp,
    BuildUp,
    PeakSustain,
    PreFinale,
    Finale,
    MidSet,
}

impl SetRole {
    /// Role for a 1-based position
    pub fn for_position(position: usize) -> Self {
        match position {
            1 => SetRole::Opener,
            2 => SetRole::WarmUp,
            3 => SetRole::BuildUp,
            4 | 5 => SetRole::PeakSustain,
            6 => SetRole::PreFinale,
            7 => SetRole::Finale,
            _ => SetRole::MidSet,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            SetRole::Opener => "Opener",
            SetRole::WarmUp => "Warm-up",
            SetRole::BuildUp => "Build-up",
            SetRole::PeakSustain => "Peak/Sustain",
            SetRole::PreFinale => "Pre-Finale",
            SetRole::Finale => "Finale",
            SetRole::MidSet => "Mid-Set",
        }
    }

    fn describe(self, display_energy: u8) -> String {
        let purpose = match self {
            SetRole::Opener => "grabs the room's attention",
            SetRole::WarmUp => "eases the crowd into the set",
            SetRole::BuildUp => "starts raising the stakes",
            SetRole::PeakSustain => "keeps the crowd at full intensity",
            SetRole::PreFinale => "sets up the closing run",
            SetRole::Finale => "sends everyone home on a high",
            SetRole::MidSet => "holds the momentum",
        };
        format!("{}: energy {}/10 {}.", self.label(), display_energy, purpose)
    }
}

/// Explain an assignment for the given venue
pub fn explain(assignment: &Assignment, venue: VenueType) -> String {
    let display_energy = assignment.song.display_energy;
    let mut clauses = vec![SetRole::for_position(assignment.position).describe(display_energy)];

    if let Some(metrics) = &assignment.song.spotify_metrics {
        clauses.extend(metric_clauses(metrics));
    }

    if let Some(clause) = venue_clause(venue, display_energy) {
        clauses.push(clause.to_string());
    }

    clauses.join(" ")
}

fn metric_clauses(metrics: &SpotifyMetrics) -> Vec<String> {
    let mut clauses = Vec::new();

    match metrics.popularity {
        Some(p) if p > 70 => clauses.push(format!("Crowd favourite with {}% popularity.", p)),
        Some(p) if p > 40 => clauses.push(format!("Familiar to many listeners ({}% popularity).", p)),
        _ => {}
    }

    match metrics.danceability {
        Some(d) if d > 75.0 => clauses.push(format!("Highly danceable ({}%).", figure(d))),
        Some(d) if d > 50.0 => {
            clauses.push(format!("Keeps people moving ({}% danceability).", figure(d)))
        }
        _ => {}
    }

    match metrics.tempo {
        Some(t) if t > 140.0 => clauses.push(format!("Driving tempo at {} BPM.", figure(t))),
        Some(t) if t < 80.0 => {
            clauses.push(format!("Slow {} BPM gives the crowd a breather.", figure(t)))
        }
        Some(t) if (120.0..=140.0).contains(&t) => {
            clauses.push(format!("{} BPM sits in the dance-floor sweet spot.", figure(t)))
        }
        _ => {}
    }

    match metrics.valence {
        Some(v) if v > 80.0 => clauses.push("Euphoric mood lifts the room.".to_string()),
        Some(v) if v < 30.0 => clauses.push("Darker mood adds contrast.".to_string()),
        _ => {}
    }

    clauses
}

/// Up to three decimals, trailing zeros dropped (128.0 -> "128", 75.04 -> "75.04")
fn figure(value: f64) -> String {
    format!("{}", (value * 1000.0).round() / 1000.0)
}

fn venue_clause(venue: VenueType, display_energy: u8) -> Option<&'static str> {
    match venue {
        VenueType::Festival if display_energy >= 8 => Some("Big enough for a festival field."),
        VenueType::Intimate if display_energy <= 6 => {
            Some("Suits the close atmosphere of an intimate room.")
        }
        _ => None,
    }
}
