use std::fmt;

use serde::Serialize;

/// Five-tier grade over accuracy percentage.
///
/// | accuracy >= | category          | points |
/// |-------------|-------------------|--------|
/// | 81          | Excellent         | 5      |
/// | 61          | Good              | 4      |
/// | 41          | Fair              | 3      |
/// | 21          | Poor              | 2      |
/// | 0           | Needs Improvement | 1      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Excellent,
    Good,
    Fair,
    Poor,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Category {
    pub const ALL: &[Category] = &[
        Category::Excellent,
        Category::Good,
        Category::Fair,
        Category::Poor,
        Category::NeedsImprovement,
    ];

    pub fn from_accuracy(accuracy_percentage: f64) -> Self {
        if accuracy_percentage >= 81.0 {
            Category::Excellent
        } else if accuracy_percentage >= 61.0 {
            Category::Good
        } else if accuracy_percentage >= 41.0 {
            Category::Fair
        } else if accuracy_percentage >= 21.0 {
            Category::Poor
        } else {
            Category::NeedsImprovement
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            Category::Excellent => 5,
            Category::Good => 4,
            Category::Fair => 3,
            Category::Poor => 2,
            Category::NeedsImprovement => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Excellent => "Excellent",
            Category::Good => "Good",
            Category::Fair => "Fair",
            Category::Poor => "Poor",
            Category::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Coaching advice for speakers in this band.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Category::Excellent => &[
                "Excellent delivery! Keep up the quality of your speech",
                "Focus on fluency and varied intonation",
            ],
            Category::Good => &[
                "Good work! Focus on the specific words that are still unclear",
                "Keep your current pace and intonation",
            ],
            Category::Fair => &[
                "Practise the words you mispronounced most often",
                "Slow down slightly so every word is articulated fully",
            ],
            Category::Poor => &[
                "Slow down your speaking pace for clarity",
                "Pay attention to the articulation of each word",
                "Practise pronouncing the words you often get wrong",
            ],
            Category::NeedsImprovement => &[
                "Read the script aloud slowly, word by word, before speaking freely",
                "Slow down your speaking pace for clarity",
                "Record yourself and compare the recording against the script",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
