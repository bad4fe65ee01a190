//! Canned poetic response per emotion label.

use super::emotion::EmotionLabel;

const HOPEFUL_LINE: &str = "Even in shadows, your light reaches far.";
const HEAVY_LINE: &str = "Your pain is valid. The world listens.";
const MIXED_LINE: &str = "You're in between storms and sunshine—and that's okay.";

/// Pure lookup table, one fixed line per label.
pub fn poetic_line(emotion: EmotionLabel) -> &'static str {
    match emotion {
        EmotionLabel::Hopeful => HOPEFUL_LINE,
        EmotionLabel::Heavy => HEAVY_LINE,
        // Mixed doubles as the fallback for any label outside the two
        // strong buckets.
        _ => MIXED_LINE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lines() {
        assert_eq!(
            poetic_line(EmotionLabel::Hopeful),
            "Even in shadows, your light reaches far."
        );
        assert_eq!(
            poetic_line(EmotionLabel::Heavy),
            "Your pain is valid. The world listens."
        );
        assert_eq!(
            poetic_line(EmotionLabel::Mixed),
            "You're in between storms and sunshine—and that's okay."
        );
    }
}
