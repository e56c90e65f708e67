use std::fmt;

/// Preset theme labels offered as toggles, distinct from the free-text
/// custom theme.
pub const PRESET_THEMES: [&str; 6] = [
    "Adventure",
    "Animals",
    "Friendship",
    "Space",
    "Nature",
    "Magic",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Whimsical,
    Adventurous,
    Gentle,
    Funny,
}

impl Tone {
    pub const ALL: [Tone; 4] = [
        Tone::Whimsical,
        Tone::Adventurous,
        Tone::Gentle,
        Tone::Funny,
    ];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Tone::Whimsical => "whimsical",
            Tone::Adventurous => "adventurous",
            Tone::Gentle => "gentle",
            Tone::Funny => "funny",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl StoryLength {
    pub const ALL: [StoryLength; 3] = [StoryLength::Short, StoryLength::Medium, StoryLength::Long];
}

impl fmt::Display for StoryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Somali,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Somali, Language::Arabic];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Language::English => "English",
            Language::Somali => "Somali",
            Language::Arabic => "Arabic",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingLevel {
    #[default]
    Simple,
    Intermediate,
    Advanced,
}

impl ReadingLevel {
    pub const ALL: [ReadingLevel; 3] = [
        ReadingLevel::Simple,
        ReadingLevel::Intermediate,
        ReadingLevel::Advanced,
    ];
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ReadingLevel::Simple => "simple",
            ReadingLevel::Intermediate => "intermediate",
            ReadingLevel::Advanced => "advanced",
        };
        f.write_str(tag)
    }
}

/// The free-text fields of the form. Select fields are typed enums and
/// assigned directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    ChildName,
    Age,
    CustomTheme,
    Moral,
}

/// All user-editable state for one editing session. Free text is accepted
/// as-is; nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub child_name: String,
    pub age: String,
    pub themes: Vec<String>,
    pub custom_theme: String,
    pub tone: Tone,
    pub length: StoryLength,
    pub language: Language,
    pub reading_level: ReadingLevel,
    pub moral: String,
}

impl FormState {
    pub fn update_field(&mut self, field: TextField, value: String) {
        match field {
            TextField::ChildName => self.child_name = value,
            TextField::Age => self.age = value,
            TextField::CustomTheme => self.custom_theme = value,
            TextField::Moral => self.moral = value,
        }
    }

    /// Removes `theme` if selected, otherwise appends it. Selection order
    /// is preserved and the list stays duplicate-free.
    pub fn toggle_theme(&mut self, theme: &str) {
        if let Some(pos) = self.themes.iter().position(|t| t == theme) {
            self.themes.remove(pos);
        } else {
            self.themes.push(theme.to_string());
        }
    }

    pub fn has_theme(&self, theme: &str) -> bool {
        self.themes.iter().any(|t| t == theme)
    }
}
