//! Resume data model
//!
//! Lists only grow: entries are appended and edited in place, never removed
//! or reordered. Each entry carries an [`EntryId`] assigned at creation, so
//! a host can bind widgets to an entry independently of its index. Ids are
//! unique within a list: an appended or deserialized entry whose id is
//! already taken gets a fresh one.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generate a fresh, never reused identity
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One education entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: EntryId,
    pub school_name: String,
    pub degree: String,
    /// Opaque text, not validated as a year
    pub start_year: String,
    /// Opaque text, not validated as a year
    pub end_year: String,
}

impl Education {
    pub fn new(
        school_name: impl Into<String>,
        degree: impl Into<String>,
        start_year: impl Into<String>,
        end_year: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            school_name: school_name.into(),
            degree: degree.into(),
            start_year: start_year.into(),
            end_year: end_year.into(),
        }
    }
}

/// One work experience entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: EntryId,
    pub company_name: String,
    pub position: String,
    pub start_year: String,
    pub end_year: String,
    /// Rendered as a single line
    pub description: String,
}

impl Experience {
    pub fn new(
        company_name: impl Into<String>,
        position: impl Into<String>,
        start_year: impl Into<String>,
        end_year: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            company_name: company_name.into(),
            position: position.into(),
            start_year: start_year.into(),
            end_year: end_year.into(),
            description: description.into(),
        }
    }
}

/// Root aggregate holding everything entered for one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ResumeRecord")]
pub struct Resume {
    pub id: Uuid,

    // Personal information
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linked_in: String,

    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
}

/// Serialized form of a [`Resume`], before entry ids are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResumeRecord {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    #[serde(default)]
    full_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    linked_in: String,
    #[serde(default)]
    education: Vec<Education>,
    #[serde(default)]
    experience: Vec<Experience>,
    #[serde(default)]
    skills: Vec<String>,
}

impl From<ResumeRecord> for Resume {
    fn from(record: ResumeRecord) -> Self {
        let mut resume = Resume {
            id: record.id,
            full_name: record.full_name,
            email: record.email,
            phone: record.phone,
            linked_in: record.linked_in,
            education: record.education,
            experience: record.experience,
            skills: record.skills,
        };
        resume.reassign_duplicate_ids();
        resume
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            linked_in: String::new(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
        }
    }
}

impl Resume {
    /// Create an empty resume
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank education entry and return it for editing
    pub fn add_education(&mut self) -> &mut Education {
        self.education.push(Education::default());
        let last = self.education.len() - 1;
        &mut self.education[last]
    }

    /// Append a prepared education entry
    ///
    /// The entry keeps its id unless another entry already has it. Returns
    /// the id the entry ends up with.
    pub fn push_education(&mut self, mut education: Education) -> EntryId {
        if self.education(education.id).is_some() {
            education.id = EntryId::new();
        }
        let id = education.id;
        self.education.push(education);
        id
    }

    /// Append a blank experience entry and return it for editing
    pub fn add_experience(&mut self) -> &mut Experience {
        self.experience.push(Experience::default());
        let last = self.experience.len() - 1;
        &mut self.experience[last]
    }

    /// Append a prepared experience entry
    ///
    /// The entry keeps its id unless another entry already has it.
    pub fn push_experience(&mut self, mut experience: Experience) -> EntryId {
        if self.experience(experience.id).is_some() {
            experience.id = EntryId::new();
        }
        let id = experience.id;
        self.experience.push(experience);
        id
    }

    /// Append an empty skill and return its index
    pub fn add_skill(&mut self) -> usize {
        self.skills.push(String::new());
        self.skills.len() - 1
    }

    pub fn push_skill(&mut self, skill: impl Into<String>) {
        self.skills.push(skill.into());
    }

    pub fn education(&self, id: EntryId) -> Option<&Education> {
        self.education.iter().find(|e| e.id == id)
    }

    pub fn education_mut(&mut self, id: EntryId) -> Option<&mut Education> {
        self.education.iter_mut().find(|e| e.id == id)
    }

    pub fn experience(&self, id: EntryId) -> Option<&Experience> {
        self.experience.iter().find(|e| e.id == id)
    }

    pub fn experience_mut(&mut self, id: EntryId) -> Option<&mut Experience> {
        self.experience.iter_mut().find(|e| e.id == id)
    }

    /// Give every entry whose id repeats an earlier one in its list a fresh id
    fn reassign_duplicate_ids(&mut self) {
        let mut seen = HashSet::new();
        for entry in &mut self.education {
            if !seen.insert(entry.id) {
                entry.id = EntryId::new();
            }
        }

        seen.clear();
        for entry in &mut self.experience {
            if !seen.insert(entry.id) {
                entry.id = EntryId::new();
            }
        }
    }
}
