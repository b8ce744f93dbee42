use std::fmt;

/// Coarse label for an ability's power value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PowerLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PowerLevel {
    pub fn from_power(power: u32) -> Self {
        match power {
            35.. => PowerLevel::VeryStrong,
            25.. => PowerLevel::Strong,
            15.. => PowerLevel::Medium,
            _ => PowerLevel::Weak,
        }
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerLevel::Weak => write!(f, "Weak"),
            PowerLevel::Medium => write!(f, "Medium"),
            PowerLevel::Strong => write!(f, "Strong"),
            PowerLevel::VeryStrong => write!(f, "Very Strong"),
        }
    }
}
