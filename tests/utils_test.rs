use spoplcli::types::{SearchTarget, Track};
use spoplcli::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, artists: &[&str], id: &str, duration_ms: u64) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{}", id),
        artist_names: artists.iter().map(|a| a.to_string()).collect(),
        duration_ms,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_parse_song_list_basic() {
    let content = "Paradisio - Bailando\nSnap! - Rhythm Is a Dancer\n";
    let targets = parse_song_list(content);

    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].artist_name, "Paradisio");
    assert_eq!(targets[0].song_title, "Bailando");
    assert_eq!(targets[1].artist_name, "Snap!");
    assert_eq!(targets[1].song_title, "Rhythm Is a Dancer");
}

#[test]
fn test_parse_song_list_skips_comments_and_blanks() {
    let content = "# eurodance classics\n\n   \nCorona - The Rhythm of the Night\n# another comment\n";
    let targets = parse_song_list(content);

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].artist_name, "Corona");
}

#[test]
fn test_parse_song_list_splits_on_first_separator() {
    // Titles may themselves contain " - "; the artist is everything before
    // the first separator.
    let content = "Paradisio - Bailando - Radio Edit";
    let targets = parse_song_list(content);

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].artist_name, "Paradisio");
    assert_eq!(targets[0].song_title, "Bailando - Radio Edit");
}

#[test]
fn test_parse_song_list_skips_malformed_lines() {
    let content = "no separator here\n - Title only\nArtist - \nReal Artist - Real Title";
    let targets = parse_song_list(content);

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].artist_name, "Real Artist");
    assert_eq!(targets[0].song_title, "Real Title");
}

#[test]
fn test_parse_song_list_trims_whitespace() {
    let content = "  Daft Punk   -   Get Lucky  ";
    let targets = parse_song_list(content);

    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].artist_name, "Daft Punk");
    assert_eq!(targets[0].song_title, "Get Lucky");
}

#[test]
fn test_build_search_term() {
    let target = SearchTarget {
        song_title: "Bailando".to_string(),
        artist_name: "Paradisio".to_string(),
    };

    assert_eq!(build_search_term(&target), "Paradisio Bailando");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59_999), "0:59");
    assert_eq!(format_duration(60_000), "1:00");
    assert_eq!(format_duration(225_000), "3:45");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_extract_track_id() {
    assert_eq!(
        extract_track_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
        Some("4uLU6hMCjMI75M1A2tKUQC".to_string())
    );
    assert_eq!(
        extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        Some("4uLU6hMCjMI75M1A2tKUQC".to_string())
    );
    assert_eq!(
        extract_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123"),
        Some("4uLU6hMCjMI75M1A2tKUQC".to_string())
    );
    assert_eq!(extract_track_id("spotify:album:123"), None);
    assert_eq!(extract_track_id("not a uri at all"), None);
    assert_eq!(extract_track_id("https://open.spotify.com/track/"), None);
}

#[test]
fn test_track_url() {
    let track = create_test_track("Bailando", &["Paradisio"], "4uLU6hMCjMI75M1A2tKUQC", 0);
    assert_eq!(
        track_url(&track),
        Some("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC".to_string())
    );
}

#[test]
fn test_remove_duplicate_tracks() {
    let mut tracks = vec![
        create_test_track("Track 1", &["Artist A"], "id1", 1000),
        create_test_track("Track 2", &["Artist B"], "id2", 2000),
        create_test_track("Track 1 Again", &["Artist A"], "id1", 1000), // Duplicate URI
        create_test_track("Track 3", &["Artist C"], "id3", 3000),
    ];

    remove_duplicate_tracks(&mut tracks);

    // Should have 3 unique tracks
    assert_eq!(tracks.len(), 3);

    // Should keep the first occurrence of each URI
    let names: Vec<&String> = tracks.iter().map(|t| &t.name).collect();
    assert_eq!(names, vec!["Track 1", "Track 2", "Track 3"]);
}

#[test]
fn test_format_tracks_csv() {
    let tracks = vec![
        create_test_track("Bailando", &["Paradisio"], "id1", 225_000),
        create_test_track(
            "Around the World / Harder, Better, Faster, Stronger",
            &["Daft Punk"],
            "id2",
            344_000,
        ),
    ];

    let csv = format_tracks_csv(&tracks);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], "Track Name,Artist(s),Duration,Spotify URL");
    assert_eq!(
        lines[1],
        "Bailando,Paradisio,3:45,https://open.spotify.com/track/id1"
    );

    // Fields containing a comma get quoted
    assert!(lines[2].starts_with("\"Around the World / Harder, Better, Faster, Stronger\","));
}

#[test]
fn test_format_tracks_csv_escapes_quotes() {
    let tracks = vec![create_test_track("Say \"Hello\"", &["Artist"], "id1", 0)];

    let csv = format_tracks_csv(&tracks);
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[1].starts_with("\"Say \"\"Hello\"\"\","));
}

#[test]
fn test_format_tracks_csv_joins_multiple_artists() {
    let tracks = vec![create_test_track(
        "Get Lucky",
        &["Daft Punk", "Pharrell Williams"],
        "id1",
        0,
    )];

    let csv = format_tracks_csv(&tracks);
    let lines: Vec<&str> = csv.lines().collect();

    // Joined artist list contains a comma, so it must be quoted
    assert!(lines[1].contains("\"Daft Punk, Pharrell Williams\""));
}

#[test]
fn test_format_tracks_text() {
    let tracks = vec![create_test_track("Bailando", &["Paradisio"], "id1", 225_000)];

    let text = format_tracks_text(&tracks);

    assert!(text.starts_with("Spotify Track List\n"));
    assert!(text.contains("Track: Bailando\n"));
    assert!(text.contains("Artist(s): Paradisio\n"));
    assert!(text.contains("Duration: 3:45\n"));
    assert!(text.contains("Spotify URL: https://open.spotify.com/track/id1\n"));
}
