//! Number-to-Speech Segment Compiler
//!
//! Turns lap times and telemetry integers into ordered sequences of recorded
//! sound-clip identifiers. The clips themselves (and the grammar stitching
//! them together) belong to a pluggable [`NumberVocabulary`]; this module owns
//! the numeric normalization and the choice of phrasing strategy.

pub mod en;
pub mod time;
pub mod vocabulary;

pub use time::RaceTime;
pub use vocabulary::{NumberVocabulary, VocabularyRegistry};

use std::sync::Arc;

use tracing::{debug, warn};

/// Sound packs newer than this version carry the combined
/// seconds-with-tenths recordings.
pub const COMPACT_SOUND_PACK_VERSION: i32 = 106;

/// Largest integer the vocabularies have recordings for.
pub const MAX_SPOKEN_INTEGER: i64 = 99_999;

/// Playback pause of the given length in milliseconds, as a segment token
/// the player resolves to silence rather than to a file.
pub fn pause(millis: u32) -> String {
    format!("pause_{}", millis)
}

/// Phrasing strategies for a time announcement, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimePhrasing {
    /// One combined "S point T" clip; no hours or minutes part.
    SecondsWithTenths,
    /// Combined minutes-plus-seconds-with-tenths phrase.
    MinutesSecondsTenths,
    /// Hours, minutes, seconds and tenths spoken as separate phrases.
    /// Always available, in every locale.
    Decomposed,
}

/// Compiles numbers into clip sequences using one locale's vocabulary.
///
/// Holds no shared state; create one per announcer pipeline. The sound pack
/// version is read from the installed pack at startup and never mutated here.
pub struct NumberReader {
    vocabulary: Arc<dyn NumberVocabulary>,
    sound_pack_version: i32,
}

impl NumberReader {
    pub fn new(vocabulary: Arc<dyn NumberVocabulary>, sound_pack_version: i32) -> Self {
        Self {
            vocabulary,
            sound_pack_version,
        }
    }

    /// Convert an elapsed time to clip identifiers.
    ///
    /// `rising_inflection` asks for the alternate tenths take with a rising
    /// tone, for languages where the pronunciation changes when nothing
    /// follows the number. Total over all inputs; never fails.
    pub fn time_sounds(&self, time: &RaceTime, rising_inflection: bool) -> Vec<String> {
        // Carry 950+ ms into the next second first, otherwise rounding
        // would produce ten tenths.
        let time = time.normalized_for_tenths();
        let tenths = time.tenths();

        let phrasing = self.select_phrasing(&time, tenths);
        debug!(
            "⏱️ {}:{:02}:{:02}.{} -> {:?}",
            time.hours(),
            time.minutes(),
            time.seconds(),
            tenths,
            phrasing
        );

        let mut segments = Vec::new();
        match phrasing {
            TimePhrasing::SecondsWithTenths => {
                segments.push(pause(50));
                segments.push(
                    self.vocabulary
                        .seconds_with_tenths(time.seconds(), tenths),
                );
            }
            TimePhrasing::MinutesSecondsTenths => {
                segments.push(pause(50));
                segments.extend(self.vocabulary.minutes_and_seconds_with_tenths(
                    time.minutes(),
                    time.seconds(),
                    tenths,
                ));
            }
            TimePhrasing::Decomposed => {
                let (h, m, s) = (time.hours(), time.minutes(), time.seconds());
                segments.extend(self.vocabulary.hours_sounds(h, m, s, tenths));
                segments.extend(self.vocabulary.minutes_sounds(h, m, s, tenths));
                segments.extend(self.vocabulary.seconds_sounds(h, m, s, tenths));
                segments.extend(
                    self.vocabulary
                        .tenths_sounds(h, m, s, tenths, rising_inflection),
                );
            }
        }
        segments
    }

    /// Convert an integer to clip identifiers.
    ///
    /// Values outside [0, 99999] have no recordings: they yield an empty
    /// sequence (the announcer stays silent) and a diagnostic, never an error.
    pub fn integer_sounds(&self, value: i64) -> Vec<String> {
        if !(0..=MAX_SPOKEN_INTEGER).contains(&value) {
            warn!(
                "Cannot convert integer {}, valid range is 0 - {}",
                value, MAX_SPOKEN_INTEGER
            );
            return Vec::new();
        }
        let digits: Vec<char> = value.to_string().chars().collect();
        self.vocabulary.integer_sounds(&digits)
    }

    /// Pick the phrasing for a normalized time. Guards are evaluated in
    /// precedence order; the decomposed form is the fallback every
    /// vocabulary must support.
    fn select_phrasing(&self, time: &RaceTime, tenths: u32) -> TimePhrasing {
        let compact_available = self.sound_pack_version > COMPACT_SOUND_PACK_VERSION
            && self.vocabulary.supports_compact_times();

        // Seconds 0-59 is guaranteed by RaceTime construction.
        if compact_available
            && time.hours() == 0
            && time.minutes() == 0
            && (time.seconds() > 0 || tenths > 0)
        {
            TimePhrasing::SecondsWithTenths
        } else if compact_available
            && time.hours() == 0
            && (1..=2).contains(&time.minutes())
            && time.seconds() >= 1
        {
            TimePhrasing::MinutesSecondsTenths
        } else {
            TimePhrasing::Decomposed
        }
    }
}
