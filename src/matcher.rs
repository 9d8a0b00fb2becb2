//! Fuzzy matching between a search target and track candidates.
//!
//! Search providers return a handful of candidates per query; titles and
//! artist credits rarely match a hand-written song list verbatim ("Bailando"
//! vs "Bailando - Radio Edit", "Snap!" vs "SNAP!"). The matcher scores each
//! candidate against the target and keeps the best one, or nothing when no
//! candidate is convincing enough.

use crate::types::{SearchTarget, Track};

/// Minimum score a candidate must reach to count as a match.
pub const MIN_MATCH_SCORE: u32 = 2;

/// Contribution when the whole target field is contained in the candidate field.
const SUBSTRING_SCORE: u32 = 3;

/// Contribution when only some word of the target field is contained.
const TOKEN_SCORE: u32 = 1;

/// Scores a single field: full containment beats token overlap.
///
/// Both sides are lowercased. A field scores [`SUBSTRING_SCORE`] when the
/// whole target value appears in the candidate value, [`TOKEN_SCORE`] when
/// any whitespace-delimited word of the target does, and 0 otherwise.
fn field_score(target: &str, candidate: &str) -> u32 {
    let target = target.to_lowercase();
    let candidate = candidate.to_lowercase();

    if candidate.contains(&target) {
        SUBSTRING_SCORE
    } else if target.split_whitespace().any(|word| candidate.contains(word)) {
        TOKEN_SCORE
    } else {
        0
    }
}

/// Computes the match score (0-6) between a target and one candidate.
///
/// Title and artist contribute independently. The artist credits are scanned
/// in order and the scan stops at the first artist that matches at all, so a
/// weak match on the lead artist is not upgraded by a stronger match on a
/// featured one.
pub fn score_candidate(target: &SearchTarget, candidate: &Track) -> u32 {
    let mut score = field_score(&target.song_title, &candidate.name);

    for artist in &candidate.artist_names {
        let artist_score = field_score(&target.artist_name, artist);
        if artist_score > 0 {
            score += artist_score;
            break;
        }
    }

    score
}

/// Selects the best matching candidate for a target, if any is good enough.
///
/// Candidates are folded in input order tracking the best score seen so far;
/// only a strictly higher score replaces the current best, so ties keep the
/// earlier candidate. The winner is returned only when its score reaches
/// [`MIN_MATCH_SCORE`]; an empty candidate list yields `None`.
pub fn select_best_match<'a>(
    target: &SearchTarget,
    candidates: &'a [Track],
) -> Option<&'a Track> {
    let (best_score, best_track) =
        candidates
            .iter()
            .fold((0u32, None), |(best_score, best_track), candidate| {
                let score = score_candidate(target, candidate);
                if score > best_score {
                    (score, Some(candidate))
                } else {
                    (best_score, best_track)
                }
            });

    if best_score >= MIN_MATCH_SCORE {
        best_track
    } else {
        None
    }
}
