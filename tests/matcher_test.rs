use spoplcli::matcher::{MIN_MATCH_SCORE, score_candidate, select_best_match};
use spoplcli::types::{SearchTarget, Track};

fn target(song: &str, artist: &str) -> SearchTarget {
    SearchTarget {
        song_title: song.to_string(),
        artist_name: artist.to_string(),
    }
}

fn track(name: &str, artists: &[&str]) -> Track {
    Track {
        id: format!("{}_id", name.to_lowercase().replace(' ', "_")),
        name: name.to_string(),
        uri: format!("spotify:track:{}", name.to_lowercase().replace(' ', "_")),
        artist_names: artists.iter().map(|a| a.to_string()).collect(),
        duration_ms: 200_000,
    }
}

#[test]
fn test_exact_match_scores_six() {
    let target = target("Bailando", "Paradisio");
    let candidate = track("Bailando", &["Paradisio"]);

    assert_eq!(score_candidate(&target, &candidate), 6);
}

#[test]
fn test_matching_is_case_insensitive() {
    let target = target("rhythm is a dancer", "snap!");
    let candidate = track("Rhythm Is a Dancer", &["SNAP!"]);

    assert_eq!(score_candidate(&target, &candidate), 6);
}

#[test]
fn test_title_substring_in_longer_candidate_name() {
    // Remaster/edit suffixes still contain the full title.
    let target = target("Bailando", "Paradisio");
    let candidate = track("Bailando - Radio Edit", &["Paradisio"]);

    assert_eq!(score_candidate(&target, &candidate), 6);
}

#[test]
fn test_token_overlap_scores_one_per_field() {
    let target = target("Blue Monday", "New Order");
    let candidate = track("Monday Blues", &["Order of Things"]);

    // "monday" appears in the name, "order" in the artist
    assert_eq!(score_candidate(&target, &candidate), 2);
}

#[test]
fn test_no_overlap_scores_zero() {
    let target = target("Unknown Song", "Totally Different");
    let candidate = track("Something Else", &["Somebody"]);

    assert_eq!(score_candidate(&target, &candidate), 0);
}

#[test]
fn test_artist_scan_stops_at_first_matching_artist() {
    // The first credited artist matching by token ends the scan; the full
    // match on the later artist does not upgrade the score.
    let target = target("Get Lucky", "Daft Punk");
    let candidate = track("Get Lucky", &["Punk Collective", "Daft Punk"]);

    assert_eq!(score_candidate(&target, &candidate), 4);
}

#[test]
fn test_featured_artist_can_carry_the_match() {
    let target = target("Get Lucky", "Pharrell Williams");
    let candidate = track("Get Lucky", &["Daft Punk", "Pharrell Williams"]);

    // Lead artist does not match at all, so the scan reaches the feature.
    assert_eq!(score_candidate(&target, &candidate), 6);
}

#[test]
fn test_select_best_match_empty_candidates() {
    let target = target("Bailando", "Paradisio");
    assert!(select_best_match(&target, &[]).is_none());
}

#[test]
fn test_select_best_match_picks_highest_score() {
    let target = target("Bailando", "Paradisio");
    let candidates = vec![
        track("Bailando", &["Enrique Iglesias"]), // title only: 3
        track("Bailando", &["Paradisio"]),        // title + artist: 6
        track("Bailando Conmigo", &["Paradisio"]),
    ];

    let best = select_best_match(&target, &candidates).unwrap();
    assert_eq!(best.name, "Bailando");
    assert_eq!(best.artist_names, vec!["Paradisio"]);
    assert_eq!(score_candidate(&target, best), 6);
}

#[test]
fn test_select_best_match_ties_keep_earlier_candidate() {
    let target = target("Bailando", "Paradisio");
    let candidates = vec![
        track("Bailando - Radio Edit", &["Paradisio"]),
        track("Bailando - Extended Mix", &["Paradisio"]),
    ];

    let best = select_best_match(&target, &candidates).unwrap();
    assert_eq!(best.name, "Bailando - Radio Edit");
}

#[test]
fn test_select_best_match_rejects_scores_below_threshold() {
    let target = target("Blue Monday", "New Order");
    // Token overlap in the title only: score 1
    let candidates = vec![track("Manic Monday", &["The Bangles"])];

    assert!(select_best_match(&target, &candidates).is_none());
}

#[test]
fn test_select_best_match_accepts_score_at_threshold() {
    let target = target("Blue Monday", "New Order");
    // Token overlap in both fields: score 2 == threshold
    let candidates = vec![track("Monday Blues", &["Order of Things"])];

    let best = select_best_match(&target, &candidates);
    assert!(best.is_some());
    assert_eq!(score_candidate(&target, best.unwrap()), MIN_MATCH_SCORE);
}

#[test]
fn test_select_best_match_zero_score_never_selected() {
    let target = target("Unknown Song", "Totally Different");
    let candidates = vec![track("Something Else", &["Somebody"])];

    assert!(select_best_match(&target, &candidates).is_none());
}
