use crate::error::ProfileError;
use crate::page::StoryPage;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

/// Narrator voices offered by the text-to-speech backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    /// Young female child voice
    #[default]
    Ivy,
    /// Young male child voice
    Kevin,
    Joanna,
    Matthew,
}

impl Voice {
    pub const ALL: [Self; 4] = [Self::Ivy, Self::Kevin, Self::Joanna, Self::Matthew];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ivy => "Ivy",
            Self::Kevin => "Kevin",
            Self::Joanna => "Joanna",
            Self::Matthew => "Matthew",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ivy => "Ivy (child, female)",
            Self::Kevin => "Kevin (child, male)",
            Self::Joanna => "Joanna (adult, female)",
            Self::Matthew => "Matthew (adult, male)",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|voice| voice.id().eq_ignore_ascii_case(id.trim()))
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub voice: Voice,
}

impl UserProfile {
    /// Validate raw form input into a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when the name is blank or the age is outside
    /// the accepted range.
    pub fn new(name: &str, age: u8, voice: Voice) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ProfileError::AgeOutOfRange {
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }
        Ok(Self {
            name: name.to_string(),
            age,
            voice,
        })
    }
}

/// Wall-clock instant supplied by the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub millis: u64,
    /// RFC 3339 rendering of the same instant.
    pub iso: String,
}

/// Snapshot of a story that reached an ending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinishedBook {
    pub id: String,
    pub theme: String,
    pub pages: Vec<StoryPage>,
    pub completed_at: String,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl FinishedBook {
    #[must_use]
    pub fn new(
        id: String,
        pages: Vec<StoryPage>,
        completed_at: impl Into<String>,
        profile: Option<&UserProfile>,
    ) -> Self {
        let theme = pages
            .first()
            .map(|page| page.theme.clone())
            .unwrap_or_default();
        Self {
            id,
            theme,
            pages,
            completed_at: completed_at.into(),
            user_name: profile.map(|p| p.name.clone()),
        }
    }

    /// Snapshot `pages` as a finished book stamped with `now`.
    pub fn finish<R: Rng + ?Sized>(
        pages: Vec<StoryPage>,
        profile: Option<&UserProfile>,
        rng: &mut R,
        now: &Timestamp,
    ) -> Self {
        Self::new(
            Self::generate_id(rng, now.millis),
            pages,
            now.iso.clone(),
            profile,
        )
    }

    /// Book identifiers combine the completion time with a random suffix so
    /// two books finished in the same millisecond stay distinct.
    pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, now_millis: u64) -> String {
        let suffix: u32 = rng.gen_range(0..0x0010_0000);
        format!("book-{now_millis}-{suffix:05x}")
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn profile_rejects_blank_name_and_bad_age() {
        assert_eq!(
            UserProfile::new("   ", 7, Voice::Ivy),
            Err(ProfileError::MissingName)
        );
        assert!(matches!(
            UserProfile::new("Mia", 0, Voice::Ivy),
            Err(ProfileError::AgeOutOfRange { .. })
        ));
        let profile = UserProfile::new("  Mia ", 7, Voice::Kevin).unwrap();
        assert_eq!(profile.name, "Mia");
        assert_eq!(profile.voice, Voice::Kevin);
    }

    #[test]
    fn voice_parses_case_insensitively() {
        assert_eq!(Voice::from_id("matthew"), Some(Voice::Matthew));
        assert_eq!(Voice::from_id("Brian"), None);
    }

    #[test]
    fn finished_book_uses_camel_case_keys() {
        let page = StoryPage {
            story: String::from("The end."),
            theme: String::from("dragons"),
            ..StoryPage::default()
        };
        let profile = UserProfile::new("Sam", 9, Voice::Ivy).unwrap();
        let book = FinishedBook::new(
            String::from("book-1"),
            vec![page],
            "2026-10-18T10:00:00Z",
            Some(&profile),
        );
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["completedAt"], "2026-10-18T10:00:00Z");
        assert_eq!(json["userName"], "Sam");
        assert_eq!(json["theme"], "dragons");
    }

    #[test]
    fn generated_ids_carry_timestamp() {
        let mut rng = SmallRng::seed_from_u64(7);
        let first = FinishedBook::generate_id(&mut rng, 1_700_000_000_000);
        let second = FinishedBook::generate_id(&mut rng, 1_700_000_000_000);
        assert!(first.starts_with("book-1700000000000-"));
        assert_ne!(first, second);
    }
}
