//! Canned example texts offered as one-click presets

/// One of the three example buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Positive,
    Negative,
    Neutral,
}

impl Preset {
    /// Button order, left to right
    pub const ALL: [Preset; 3] = [Preset::Positive, Preset::Negative, Preset::Neutral];

    /// The literal text written into the input
    pub fn text(&self) -> &'static str {
        match self {
            Preset::Positive => {
                "I'm absolutely thrilled with this incredible breakthrough! This is genuinely amazing and I couldn't be happier!"
            }
            Preset::Negative => {
                "This is absolutely terrible and completely disappointing. I'm extremely frustrated and utterly disgusted with this horrible mess."
            }
            Preset::Neutral => {
                "The presentation covered various topics. Some points were discussed and several options were mentioned."
            }
        }
    }

    /// Button caption
    pub fn button_label(&self) -> &'static str {
        match self {
            Preset::Positive => "Try Positive",
            Preset::Negative => "Try Negative",
            Preset::Neutral => "Try Neutral",
        }
    }

    /// Function key that applies this preset from anywhere
    pub fn function_key(&self) -> u8 {
        match self {
            Preset::Positive => 1,
            Preset::Negative => 2,
            Preset::Neutral => 3,
        }
    }

    pub fn from_function_key(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.function_key() == n)
    }
}
