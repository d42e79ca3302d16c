/// Self-declared skill level. Only feeds the proficiency bonus, never matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Case-insensitive parse. Surrounding whitespace is not stripped.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "beginner" => Some(Proficiency::Beginner),
            "intermediate" => Some(Proficiency::Intermediate),
            "advanced" => Some(Proficiency::Advanced),
            "expert" => Some(Proficiency::Expert),
            _ => None,
        }
    }

    pub fn weight(self) -> u8 {
        match self {
            Proficiency::Beginner => 1,
            Proficiency::Intermediate => 2,
            Proficiency::Advanced => 3,
            Proficiency::Expert => 4,
        }
    }

    /// Weight for a stored label; unrecognised labels weigh as `Beginner`.
    pub fn weight_of(label: &str) -> u8 {
        Self::from_label(label)
            .unwrap_or(Proficiency::Beginner)
            .weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_follow_level_order() {
        assert_eq!(Proficiency::weight_of("beginner"), 1);
        assert_eq!(Proficiency::weight_of("intermediate"), 2);
        assert_eq!(Proficiency::weight_of("advanced"), 3);
        assert_eq!(Proficiency::weight_of("expert"), 4);
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        assert_eq!(Proficiency::from_label("EXPERT"), Some(Proficiency::Expert));
        assert_eq!(Proficiency::weight_of("Advanced"), 3);
    }

    #[test]
    fn test_unknown_labels_fall_back_to_beginner_weight() {
        assert_eq!(Proficiency::weight_of("guru"), 1);
        assert_eq!(Proficiency::weight_of(""), 1);
        assert_eq!(Proficiency::weight_of(" expert"), 1);
    }
}
