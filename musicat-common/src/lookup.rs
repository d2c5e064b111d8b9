//! Reference table values (sexes, titles)
//!
//! The `sexes` and `titles` tables are seeded from these enums; the HTTP
//! layer validates incoming `sex_id` / `title_id` against them.

/// Artist sex, as stored in the `sexes` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male = 1,
    Female = 2,
    NonBinary = 3,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::NonBinary];

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Display name stored in `sexes.name`
    pub fn name(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::NonBinary => "Non-binary",
        }
    }
}

/// Artist title (honorific), as stored in the `titles` table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Mr = 1,
    Mrs = 2,
    Ms = 3,
    Dr = 4,
    Prof = 5,
}

impl Title {
    pub const ALL: [Title; 5] = [Title::Mr, Title::Mrs, Title::Ms, Title::Dr, Title::Prof];

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Display name stored in `titles.name`
    pub fn name(self) -> &'static str {
        match self {
            Title::Mr => "Mr.",
            Title::Mrs => "Mrs.",
            Title::Ms => "Ms.",
            Title::Dr => "Dr.",
            Title::Prof => "Prof.",
        }
    }
}
