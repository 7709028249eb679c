//! Map a score to a learner-facing feedback tier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Feedback band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeedbackTier {
    /// Below 50.
    TryAgain,
    /// 50 to 69.
    KeepTrying,
    /// 70 to 84.
    Good,
    /// 85 and above.
    Excellent,
}

impl FeedbackTier {
    /// Tier for `score`.
    ///
    /// ```
    /// use tracewise_scoring::FeedbackTier;
    ///
    /// assert_eq!(FeedbackTier::for_score(85), FeedbackTier::Excellent);
    /// assert_eq!(FeedbackTier::for_score(84), FeedbackTier::Good);
    /// assert_eq!(FeedbackTier::for_score(40), FeedbackTier::TryAgain);
    /// ```
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        match score {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            50..=69 => Self::KeepTrying,
            _ => Self::TryAgain,
        }
    }

    /// Short headline.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent!",
            Self::Good => "Good Job!",
            Self::KeepTrying => "Keep Trying!",
            Self::TryAgain => "Try Again!",
        }
    }

    /// Encouragement shown under the score.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Amazing tracing! You stayed right on the guide!",
            Self::Good => "Great work! Most of your drawing followed the path.",
            Self::KeepTrying => "Getting closer! Try to follow the dotted guide line.",
            Self::TryAgain => "Stay close to the dotted guide path. You can do it!",
        }
    }

    /// Accent color as a hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#4CAF50",
            Self::Good => "#4A90D9",
            Self::KeepTrying => "#FF9800",
            Self::TryAgain => "#FF5252",
        }
    }
}

impl fmt::Display for FeedbackTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
