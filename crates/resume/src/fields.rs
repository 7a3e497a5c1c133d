//! Field selectors for binding form inputs to the model
//!
//! A form host maps each text input to one of these selectors and calls the
//! matching setter on every change event. Values are stored verbatim.

use crate::model::{Education, EntryId, Experience, Resume};

/// Input affordance a host may use to pick a keyboard; never enforced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardHint {
    Text,
    Email,
    Phone,
    Url,
    Number,
}

/// Personal information fields of a [`Resume`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    LinkedIn,
}

impl PersonalField {
    pub const ALL: [PersonalField; 4] = [
        PersonalField::FullName,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::LinkedIn,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PersonalField::FullName => "Full Name",
            PersonalField::Email => "Email",
            PersonalField::Phone => "Phone",
            PersonalField::LinkedIn => "LinkedIn URL",
        }
    }

    pub fn keyboard(&self) -> KeyboardHint {
        match self {
            PersonalField::FullName => KeyboardHint::Text,
            PersonalField::Email => KeyboardHint::Email,
            PersonalField::Phone => KeyboardHint::Phone,
            PersonalField::LinkedIn => KeyboardHint::Url,
        }
    }
}

/// Fields of an [`Education`] entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    SchoolName,
    Degree,
    StartYear,
    EndYear,
}

impl EducationField {
    pub const ALL: [EducationField; 4] = [
        EducationField::SchoolName,
        EducationField::Degree,
        EducationField::StartYear,
        EducationField::EndYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EducationField::SchoolName => "School Name",
            EducationField::Degree => "Degree",
            EducationField::StartYear => "Start Year",
            EducationField::EndYear => "End Year",
        }
    }

    pub fn keyboard(&self) -> KeyboardHint {
        match self {
            EducationField::StartYear | EducationField::EndYear => KeyboardHint::Number,
            _ => KeyboardHint::Text,
        }
    }
}

/// Fields of an [`Experience`] entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    CompanyName,
    Position,
    StartYear,
    EndYear,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 5] = [
        ExperienceField::CompanyName,
        ExperienceField::Position,
        ExperienceField::StartYear,
        ExperienceField::EndYear,
        ExperienceField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceField::CompanyName => "Company Name",
            ExperienceField::Position => "Position",
            ExperienceField::StartYear => "Start Year",
            ExperienceField::EndYear => "End Year",
            ExperienceField::Description => "Description",
        }
    }

    pub fn keyboard(&self) -> KeyboardHint {
        match self {
            ExperienceField::StartYear | ExperienceField::EndYear => KeyboardHint::Number,
            _ => KeyboardHint::Text,
        }
    }
}

impl Resume {
    pub fn field(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.full_name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::LinkedIn => &self.linked_in,
        }
    }

    pub fn set_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let slot = match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::LinkedIn => &mut self.linked_in,
        };
        *slot = value.into();
    }

    /// Set a field of the education entry with `id`
    ///
    /// Returns `false` if no entry has that id.
    pub fn update_education(
        &mut self,
        id: EntryId,
        field: EducationField,
        value: impl Into<String>,
    ) -> bool {
        match self.education_mut(id) {
            Some(entry) => {
                entry.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Set a field of the experience entry with `id`
    ///
    /// Returns `false` if no entry has that id.
    pub fn update_experience(
        &mut self,
        id: EntryId,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> bool {
        match self.experience_mut(id) {
            Some(entry) => {
                entry.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Replace the skill at `index`; returns `false` when out of range
    pub fn update_skill(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.skills.get_mut(index) {
            Some(skill) => {
                *skill = value.into();
                true
            }
            None => false,
        }
    }
}

impl Education {
    pub fn field(&self, field: EducationField) -> &str {
        match field {
            EducationField::SchoolName => &self.school_name,
            EducationField::Degree => &self.degree,
            EducationField::StartYear => &self.start_year,
            EducationField::EndYear => &self.end_year,
        }
    }

    pub fn set_field(&mut self, field: EducationField, value: impl Into<String>) {
        let slot = match field {
            EducationField::SchoolName => &mut self.school_name,
            EducationField::Degree => &mut self.degree,
            EducationField::StartYear => &mut self.start_year,
            EducationField::EndYear => &mut self.end_year,
        };
        *slot = value.into();
    }
}

impl Experience {
    pub fn field(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::CompanyName => &self.company_name,
            ExperienceField::Position => &self.position,
            ExperienceField::StartYear => &self.start_year,
            ExperienceField::EndYear => &self.end_year,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: ExperienceField, value: impl Into<String>) {
        let slot = match field {
            ExperienceField::CompanyName => &mut self.company_name,
            ExperienceField::Position => &mut self.position,
            ExperienceField::StartYear => &mut self.start_year,
            ExperienceField::EndYear => &mut self.end_year,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_personal_fields() {
        let mut resume = Resume::new();
        resume.set_field(PersonalField::FullName, "Jane Doe");
        resume.set_field(PersonalField::Email, "a@b.com");
        resume.set_field(PersonalField::Phone, "555-1234");
        resume.set_field(PersonalField::LinkedIn, "li.com/x");

        assert_eq!(resume.full_name, "Jane Doe");
        assert_eq!(resume.field(PersonalField::Email), "a@b.com");
        assert_eq!(resume.field(PersonalField::Phone), "555-1234");
        assert_eq!(resume.linked_in, "li.com/x");
    }

    #[test]
    fn test_values_are_not_validated() {
        let mut resume = Resume::new();
        resume.set_field(PersonalField::Email, "not an email");
        let id = resume.add_education().id;
        assert!(resume.update_education(id, EducationField::StartYear, "last year"));

        assert_eq!(resume.email, "not an email");
        assert_eq!(resume.education[0].start_year, "last year");
    }

    #[test]
    fn test_update_education_by_id() {
        let mut resume = Resume::new();
        let first = resume.add_education().id;
        let second = resume.add_education().id;

        assert!(resume.update_education(second, EducationField::SchoolName, "MIT"));
        assert!(resume.update_education(first, EducationField::Degree, "BA"));

        assert_eq!(resume.education[0].degree, "BA");
        assert!(resume.education[0].school_name.is_empty());
        assert_eq!(resume.education[1].field(EducationField::SchoolName), "MIT");
    }

    #[test]
    fn test_update_unknown_entry_changes_nothing() {
        let mut resume = Resume::new();
        resume.add_experience();
        let before = resume.clone();

        assert!(!resume.update_experience(EntryId::new(), ExperienceField::Position, "CTO"));
        assert_eq!(resume, before);
    }

    #[test]
    fn test_update_experience_every_field() {
        let mut resume = Resume::new();
        let id = resume.add_experience().id;
        for (i, field) in ExperienceField::ALL.iter().enumerate() {
            assert!(resume.update_experience(id, *field, format!("value {i}")));
        }

        let entry = resume.experience(id).unwrap();
        assert_eq!(entry.company_name, "value 0");
        assert_eq!(entry.position, "value 1");
        assert_eq!(entry.start_year, "value 2");
        assert_eq!(entry.end_year, "value 3");
        assert_eq!(entry.description, "value 4");
    }

    #[test]
    fn test_update_skill() {
        let mut resume = Resume::new();
        let index = resume.add_skill();

        assert!(resume.update_skill(index, "Rust"));
        assert!(!resume.update_skill(5, "Go"));
        assert_eq!(resume.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PersonalField::LinkedIn.label(), "LinkedIn URL");
        assert_eq!(EducationField::SchoolName.label(), "School Name");
        assert_eq!(ExperienceField::CompanyName.label(), "Company Name");
    }

    #[test]
    fn test_keyboard_hints() {
        assert_eq!(PersonalField::Email.keyboard(), KeyboardHint::Email);
        assert_eq!(PersonalField::Phone.keyboard(), KeyboardHint::Phone);
        assert_eq!(PersonalField::LinkedIn.keyboard(), KeyboardHint::Url);
        assert_eq!(EducationField::EndYear.keyboard(), KeyboardHint::Number);
        assert_eq!(ExperienceField::Description.keyboard(), KeyboardHint::Text);
    }

    #[test]
    fn test_field_getters_cover_all_fields() {
        let entry = Education::new("MIT", "BS CS", "2018", "2022");
        let values: Vec<&str> = EducationField::ALL.iter().map(|f| entry.field(*f)).collect();
        assert_eq!(values, vec!["MIT", "BS CS", "2018", "2022"]);
    }
}
