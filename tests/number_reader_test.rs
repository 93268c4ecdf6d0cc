use std::sync::Arc;

use pitvoice::number::en::EnglishVocabulary;
use pitvoice::number::{NumberReader, RaceTime, VocabularyRegistry};

/// Pack version with the combined seconds-with-tenths clips
const NEW_PACK: i32 = 107;
/// Last pack version without them
const OLD_PACK: i32 = 106;

fn english_reader(sound_pack_version: i32) -> NumberReader {
    let mut registry = VocabularyRegistry::new();
    registry
        .register(Arc::new(EnglishVocabulary::with_seed(42)))
        .expect("English vocabulary must register cleanly");
    let vocabulary = registry.get("en").expect("en is registered");
    NumberReader::new(vocabulary, sound_pack_version)
}

#[test]
fn test_short_lap_uses_combined_clip() {
    let reader = english_reader(NEW_PACK);
    let sounds = reader.time_sounds(&RaceTime::new(0, 0, 5, 300), false);
    assert_eq!(sounds, vec!["pause_50", "numbers/5_point_3"]);
}

#[test]
fn test_two_minute_lap_uses_combined_minute_phrase() {
    let reader = english_reader(NEW_PACK);
    let sounds = reader.time_sounds(&RaceTime::new(0, 2, 10, 0), false);
    assert_eq!(
        sounds,
        vec!["pause_50", "numbers/2", "numbers/minutes", "numbers/10_point_0"]
    );
}

#[test]
fn test_old_pack_decomposes_the_lap() {
    let reader = english_reader(OLD_PACK);
    let sounds = reader.time_sounds(&RaceTime::new(0, 1, 23, 400), false);
    assert_eq!(
        sounds,
        vec![
            "numbers/1",
            "numbers/minute",
            "numbers/23",
            "numbers/point",
            "numbers/4",
            "numbers/seconds"
        ]
    );
}

#[test]
fn test_lap_with_hours_always_decomposes() {
    let reader = english_reader(NEW_PACK);
    let sounds = reader.time_sounds(&RaceTime::new(1, 2, 3, 0), false);
    assert_eq!(
        sounds,
        vec![
            "numbers/1",
            "numbers/hour",
            "numbers/2",
            "numbers/minutes",
            "numbers/3",
            "numbers/seconds"
        ]
    );
}

#[test]
fn test_millisecond_boundary_carries_into_seconds() {
    let reader = english_reader(NEW_PACK);

    let sounds = reader.time_sounds(&RaceTime::new(0, 0, 5, 949), false);
    assert_eq!(sounds, vec!["pause_50", "numbers/5_point_9"]);

    let sounds = reader.time_sounds(&RaceTime::new(0, 0, 5, 950), false);
    assert_eq!(sounds, vec!["pause_50", "numbers/6_point_0"]);
}

#[test]
fn test_position_announcement_integers() {
    let reader = english_reader(NEW_PACK);
    assert_eq!(reader.integer_sounds(3), vec!["numbers/3"]);
    assert_eq!(
        reader.integer_sounds(12_345),
        vec![
            "numbers/12",
            "numbers/thousand",
            "numbers/3",
            "numbers/hundred",
            "numbers/and",
            "numbers/45"
        ]
    );
}

#[test]
fn test_out_of_range_integers_stay_silent() {
    let reader = english_reader(NEW_PACK);
    assert!(reader.integer_sounds(-1).is_empty());
    assert!(reader.integer_sounds(100_000).is_empty());
}

#[test]
fn test_same_configuration_gives_identical_announcements() {
    let first = english_reader(NEW_PACK);
    let second = english_reader(NEW_PACK);
    let time = RaceTime::new(0, 1, 42, 850);
    assert_eq!(first.time_sounds(&time, true), second.time_sounds(&time, true));
    assert_eq!(first.integer_sounds(77), second.integer_sounds(77));
}
