use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use ustr::Ustr;

pub const OFFICIAL_RESPONSIBILITIES: &[&str] = &[
    "Event Director",
    "Finance Manager",
    "Operations Head",
    "Marketing Lead",
    "Logistics Coordinator",
];

pub const VOLUNTEER_RESPONSIBILITIES: &[&str] = &[
    "Registration Desk",
    "Food Court Assistant",
    "Stage Coordinator",
    "Security Support",
    "Information Booth",
];

pub const SHIFTS: &[&str] = &[
    "Morning (8AM-2PM)",
    "Afternoon (12PM-6PM)",
    "Evening (2PM-8PM)",
    "Night (6PM-10PM)",
];

/// Store-generated identifier of a team member.
///
/// Interned so cards, the delete input and the in-flight set can copy it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MemberId(Ustr);

impl MemberId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<MemberId> for String {
    fn from(value: MemberId) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a team member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Official,
    Volunteer,
}

impl Role {
    pub const ALL: [Self; 2] = [Self::Official, Self::Volunteer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Official => "Official",
            Self::Volunteer => "Volunteer",
        }
    }

    /// Plural, lowercase. Used in tab titles and placeholders.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Official => "officials",
            Self::Volunteer => "volunteers",
        }
    }

    /// Responsibilities offered for this category.
    pub fn responsibilities(self) -> &'static [&'static str] {
        match self {
            Self::Official => OFFICIAL_RESPONSIBILITIES,
            Self::Volunteer => VOLUNTEER_RESPONSIBILITIES,
        }
    }

    pub fn has_shifts(self) -> bool {
        self == Self::Volunteer
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of `team_members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub responsibilities: String,
    #[serde(default)]
    pub shift_details: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    pub fn mobile(&self) -> Option<&str> {
        non_empty(self.mobile.as_deref())
    }

    pub fn shift(&self) -> Option<&str> {
        non_empty(self.shift_details.as_deref())
    }

    pub fn responsibility(&self) -> Option<&str> {
        non_empty(Some(self.responsibilities.as_str()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Rows written outside the form may hold `null` in text columns.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTeamMember {
    pub name: String,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub responsibilities: String,
    pub shift_details: Option<String>,
    pub role: Role,
}
