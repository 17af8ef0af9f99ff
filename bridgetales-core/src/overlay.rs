//! "Visit this place" prompts derived from the page being read.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const MAX_OVERLAYS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayCategory {
    Food,
    Park,
    Library,
    Shop,
    Playground,
    Generic,
}

impl OverlayCategory {
    /// Keyword categories in the order they are tested.
    pub const PRIORITY: [Self; 5] = [
        Self::Food,
        Self::Park,
        Self::Library,
        Self::Shop,
        Self::Playground,
    ];

    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Food => "Hungry like the heroes? Visit a cafe nearby!",
            Self::Park => "Explore a park or garden just like in the story!",
            Self::Library => "Find more stories at your local library!",
            Self::Shop => "Discover a market or shop around the corner!",
            Self::Playground => "Head to a playground for your own adventure!",
            Self::Generic => "Take your adventure outside and explore your neighborhood!",
        }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Food => "☕",
            Self::Park => "🌳",
            Self::Library => "📚",
            Self::Shop => "🛍",
            Self::Playground => "🛝",
            Self::Generic => "🧭",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Food => "overlay-food",
            Self::Park => "overlay-park",
            Self::Library => "overlay-library",
            Self::Shop => "overlay-shop",
            Self::Playground => "overlay-playground",
            Self::Generic => "overlay-generic",
        }
    }

    fn pattern(self) -> Option<&'static Regex> {
        match self {
            Self::Food => FOOD.as_ref(),
            Self::Park => PARK.as_ref(),
            Self::Library => LIBRARY.as_ref(),
            Self::Shop => SHOP.as_ref(),
            Self::Playground => PLAYGROUND.as_ref(),
            Self::Generic => None,
        }
    }
}

/// Case-insensitive match on any keyword appearing anywhere in the text.
fn keyword_regex(words: &[&str]) -> Option<Regex> {
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)(?:{alternation})")).ok()
}

static FOOD: Lazy<Option<Regex>> = Lazy::new(|| keyword_regex(&["food", "cafe"]));
static PARK: Lazy<Option<Regex>> = Lazy::new(|| keyword_regex(&["park", "garden"]));
static LIBRARY: Lazy<Option<Regex>> = Lazy::new(|| keyword_regex(&["book", "library"]));
static SHOP: Lazy<Option<Regex>> = Lazy::new(|| keyword_regex(&["shop", "market"]));
static PLAYGROUND: Lazy<Option<Regex>> = Lazy::new(|| keyword_regex(&["playground", "play"]));

/// Fixed three-slot layout around the illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlaySlot {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl OverlaySlot {
    pub const LAYOUT: [Self; MAX_OVERLAYS] = [Self::TopLeft, Self::TopRight, Self::BottomLeft];

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::TopLeft => "slot-top-left",
            Self::TopRight => "slot-top-right",
            Self::BottomLeft => "slot-bottom-left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    pub category: OverlayCategory,
    pub slot: OverlaySlot,
}

impl Overlay {
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.category.prompt()
    }
}

/// Map page text to at most three overlays, in keyword priority order.
/// Text with no keyword gets a single generic prompt.
#[must_use]
pub fn overlays_for(text: &str) -> SmallVec<[Overlay; MAX_OVERLAYS]> {
    let mut overlays: SmallVec<[Overlay; MAX_OVERLAYS]> = OverlayCategory::PRIORITY
        .into_iter()
        .filter(|category| category.pattern().is_some_and(|re| re.is_match(text)))
        .zip(OverlaySlot::LAYOUT)
        .map(|(category, slot)| Overlay { category, slot })
        .collect();
    if overlays.is_empty() {
        overlays.push(Overlay {
            category: OverlayCategory::Generic,
            slot: OverlaySlot::TopLeft,
        });
    }
    overlays
}
