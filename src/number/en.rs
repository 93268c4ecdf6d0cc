//! Bundled English vocabulary.
//!
//! Segment identifiers follow the sound pack's folder layout (`numbers/12`,
//! `numbers/hundred`, `numbers/1_point_5`, ...); resolving them to files and
//! playing them is the player's job, not ours. English is the locale with the
//! combined seconds-with-tenths recordings, so this vocabulary declares
//! compact-time support.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::vocabulary::NumberVocabulary;

/// The pack records more than one take of the standalone zero-time phrase;
/// any of them is correct.
const ZERO_TIME_TAKES: &[&str] = &["numbers/zero", "numbers/zero_b"];

/// English number grammar over the pack's recorded clips.
///
/// Owns its random generator, so two announcers never share variation state
/// and a seeded instance is fully reproducible under test.
pub struct EnglishVocabulary {
    rng: Mutex<StdRng>,
}

impl EnglishVocabulary {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded variant for reproducible output.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Direct clip for 0-99; the pack records each of these as one file.
    fn number_clip(n: u32) -> String {
        format!("numbers/{}", n)
    }

    fn unit_clip(count: u32, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("numbers/{}", singular)
        } else {
            format!("numbers/{}", plural)
        }
    }

    /// Choose one of several equivalent takes of the same phrase.
    fn pick(&self, takes: &'static [&'static str]) -> &'static str {
        let index = self
            .rng
            .lock()
            .map(|mut rng| rng.gen_range(0..takes.len()))
            .unwrap_or(0);
        takes[index]
    }
}

impl Default for EnglishVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberVocabulary for EnglishVocabulary {
    fn locale(&self) -> &str {
        "en"
    }

    fn integer_sounds(&self, digits: &[char]) -> Vec<String> {
        let value = digits
            .iter()
            .fold(0u32, |acc, c| acc * 10 + c.to_digit(10).unwrap_or(0));

        let mut sounds = Vec::new();
        let thousands = value / 1000;
        let hundreds = (value % 1000) / 100;
        let tail = value % 100;

        if thousands > 0 {
            sounds.push(Self::number_clip(thousands));
            sounds.push("numbers/thousand".to_string());
        }
        if hundreds > 0 {
            sounds.push(Self::number_clip(hundreds));
            sounds.push("numbers/hundred".to_string());
        }
        if tail > 0 {
            if thousands > 0 || hundreds > 0 {
                sounds.push("numbers/and".to_string());
            }
            sounds.push(Self::number_clip(tail));
        } else if value == 0 {
            sounds.push(Self::number_clip(0));
        }
        sounds
    }

    fn hours_sounds(&self, hours: u32, _minutes: u32, _seconds: u32, _tenths: u32) -> Vec<String> {
        if hours == 0 {
            return Vec::new();
        }
        vec![
            Self::number_clip(hours),
            Self::unit_clip(hours, "hour", "hours"),
        ]
    }

    fn minutes_sounds(&self, _hours: u32, minutes: u32, _seconds: u32, _tenths: u32) -> Vec<String> {
        // "zero minutes" is never spoken, with or without an hours part
        if minutes == 0 {
            return Vec::new();
        }
        vec![
            Self::number_clip(minutes),
            Self::unit_clip(minutes, "minute", "minutes"),
        ]
    }

    fn seconds_sounds(&self, hours: u32, minutes: u32, seconds: u32, tenths: u32) -> Vec<String> {
        if seconds == 0 {
            if hours == 0 && minutes == 0 && tenths == 0 {
                // The whole time is zero; it still has to be spoken
                return vec![self.pick(ZERO_TIME_TAKES).to_string(), "numbers/seconds".to_string()];
            }
            if tenths > 0 {
                // Leading zero for "zero point three"
                return vec![Self::number_clip(0)];
            }
            return Vec::new();
        }

        let mut sounds = vec![Self::number_clip(seconds)];
        // When tenths follow, the unit word is spoken after them instead
        if tenths == 0 {
            sounds.push(Self::unit_clip(seconds, "second", "seconds"));
        }
        sounds
    }

    fn tenths_sounds(
        &self,
        _hours: u32,
        _minutes: u32,
        _seconds: u32,
        tenths: u32,
        _rising_inflection: bool,
    ) -> Vec<String> {
        // English tenths read the same with or without trailing words, so the
        // inflection hint is ignored here
        if tenths == 0 {
            return Vec::new();
        }
        vec![
            "numbers/point".to_string(),
            Self::number_clip(tenths),
            "numbers/seconds".to_string(),
        ]
    }

    fn supports_compact_times(&self) -> bool {
        true
    }

    fn seconds_with_tenths(&self, seconds: u32, tenths: u32) -> String {
        format!("numbers/{}_point_{}", seconds, tenths)
    }

    fn minutes_and_seconds_with_tenths(
        &self,
        minutes: u32,
        seconds: u32,
        tenths: u32,
    ) -> Vec<String> {
        let mut sounds = vec![
            Self::number_clip(minutes),
            Self::unit_clip(minutes, "minute", "minutes"),
        ];
        // The combined clips have no leading "oh", so pad single-digit seconds
        if seconds < 10 {
            sounds.push("numbers/oh".to_string());
        }
        sounds.push(self.seconds_with_tenths(seconds, tenths));
        sounds
    }
}
