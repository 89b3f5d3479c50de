//! The fixed set of selectable moods.
//!
//! Each mood has a display label (emoji + word) shown in the picker and a
//! short tag that is what actually lands in the spreadsheet's `Mood` column.

pub struct Mood {
    pub label: &'static str,
    pub tag: &'static str,
}

pub const MOODS: &[Mood] = &[
    Mood { label: "😊 Happy", tag: "happy" },
    Mood { label: "😠 Frustrated", tag: "frustrated" },
    Mood { label: "😕 Confused", tag: "confused" },
    Mood { label: "🎉 Excited", tag: "excited" },
    Mood { label: "😔 Sad", tag: "sad" },
    Mood { label: "😐 Neutral", tag: "neutral" },
];

pub fn is_known_tag(tag: &str) -> bool {
    MOODS.iter().any(|m| m.tag == tag)
}

pub fn label_for_tag(tag: &str) -> Option<&'static str> {
    MOODS.iter().find(|m| m.tag == tag).map(|m| m.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_has_a_label() {
        for mood in MOODS {
            assert_eq!(label_for_tag(mood.tag), Some(mood.label));
            assert!(is_known_tag(mood.tag));
        }
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(is_known_tag("happy"));
        assert!(!is_known_tag("angry"));
        assert!(!is_known_tag(""));
        assert_eq!(label_for_tag("angry"), None);
    }

    #[test]
    fn test_tags_are_unique() {
        for (i, a) in MOODS.iter().enumerate() {
            for b in &MOODS[i + 1..] {
                assert_ne!(a.tag, b.tag);
            }
        }
    }
}
