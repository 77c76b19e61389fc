//! Built-in fallback word list
//!
//! Used whenever the configured lists are missing, unreadable or filter down to nothing.

/// Built-in answer and guess list (72 words)
pub const DEFAULT_WORDS: &[&str] = &[
    "about",
    "agent",
    "ahead",
    "angel",
    "baker",
    "basic",
    "blaze",
    "brain",
    "brave",
    "bring",
    "cabin",
    "cable",
    "chair",
    "chart",
    "chase",
    "cider",
    "clean",
    "crane",
    "crisp",
    "crown",
    "dance",
    "delta",
    "dream",
    "eager",
    "eagle",
    "earth",
    "faith",
    "flame",
    "frost",
    "giant",
    "globe",
    "grace",
    "great",
    "habit",
    "happy",
    "heart",
    "jelly",
    "juice",
    "light",
    "lucky",
    "magic",
    "maker",
    "match",
    "north",
    "ocean",
    "paint",
    "panel",
    "party",
    "piano",
    "quick",
    "quiet",
    "raise",
    "river",
    "robot",
    "scale",
    "shine",
    "smile",
    "solar",
    "sound",
    "stone",
    "storm",
    "story",
    "think",
    "toast",
    "trail",
    "trust",
    "uncle",
    "vivid",
    "whale",
    "world",
    "youth",
    "zebra",
];
