//! Fixed vertical-flow layout of a resume
//!
//! A single cursor walks down the page from the top margin. Every block
//! advances it by a fixed amount; nothing is measured, so long content runs
//! off the bottom of the page.

use crate::model::{Education, Experience, Resume};
use pdf_core::StandardFont;

/// Cursor start, in points from the top of the page
pub const TOP_MARGIN: f64 = 20.0;

/// X position of the title, contact line and section headers
pub const LEFT_MARGIN: f64 = 20.0;
/// X position of education/experience lines and the skills line
pub const ENTRY_INDENT: f64 = 30.0;
/// X position of experience descriptions
pub const DESCRIPTION_INDENT: f64 = 40.0;

pub const TITLE_ADVANCE: f64 = 40.0;
pub const CONTACT_ADVANCE: f64 = 30.0;
pub const HEADER_ADVANCE: f64 = 25.0;
pub const ENTRY_ADVANCE: f64 = 20.0;
pub const DESCRIPTION_ADVANCE: f64 = 30.0;
pub const SECTION_GAP: f64 = 10.0;

pub const CONTACT_SEPARATOR: &str = " | ";
pub const SKILLS_SEPARATOR: &str = ", ";

pub const EDUCATION_HEADER: &str = "Education";
pub const EXPERIENCE_HEADER: &str = "Experience";
pub const SKILLS_HEADER: &str = "Skills";

/// Typographic role of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Full name
    Title,
    /// Section headers
    Subtitle,
    /// Everything else
    Body,
}

impl TextStyle {
    pub fn font(&self) -> StandardFont {
        match self {
            TextStyle::Title => StandardFont::HelveticaBold,
            TextStyle::Subtitle | TextStyle::Body => StandardFont::Helvetica,
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            TextStyle::Title => 24.0,
            TextStyle::Subtitle => 18.0,
            TextStyle::Body => 14.0,
        }
    }
}

/// One line of text placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutLine {
    pub text: String,
    pub x: f64,
    /// Top edge of the line, in points from the top of the page
    pub y: f64,
    pub style: TextStyle,
}

pub fn contact_line(resume: &Resume) -> String {
    [
        resume.email.as_str(),
        resume.phone.as_str(),
        resume.linked_in.as_str(),
    ]
    .join(CONTACT_SEPARATOR)
}

pub fn education_line(education: &Education) -> String {
    format!(
        "{} - {} ({} - {})",
        education.degree, education.school_name, education.start_year, education.end_year
    )
}

pub fn experience_line(experience: &Experience) -> String {
    format!(
        "{} - {} ({} - {})",
        experience.position, experience.company_name, experience.start_year, experience.end_year
    )
}

pub fn skills_line(skills: &[String]) -> String {
    skills.join(SKILLS_SEPARATOR)
}

/// Running vertical position
struct Cursor {
    y: f64,
    lines: Vec<LayoutLine>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            y: TOP_MARGIN,
            lines: Vec::new(),
        }
    }

    fn draw(&mut self, text: impl Into<String>, x: f64, style: TextStyle) {
        self.lines.push(LayoutLine {
            text: text.into(),
            x,
            y: self.y,
            style,
        });
    }

    fn advance(&mut self, amount: f64) {
        self.y += amount;
    }
}

/// Place every block of the resume in its fixed order
pub fn layout_resume(resume: &Resume) -> Vec<LayoutLine> {
    let mut cursor = Cursor::new();

    cursor.draw(resume.full_name.as_str(), LEFT_MARGIN, TextStyle::Title);
    cursor.advance(TITLE_ADVANCE);

    cursor.draw(contact_line(resume), LEFT_MARGIN, TextStyle::Body);
    cursor.advance(CONTACT_ADVANCE);

    cursor.draw(EDUCATION_HEADER, LEFT_MARGIN, TextStyle::Subtitle);
    cursor.advance(HEADER_ADVANCE);
    for education in &resume.education {
        cursor.draw(education_line(education), ENTRY_INDENT, TextStyle::Body);
        cursor.advance(ENTRY_ADVANCE);
    }
    cursor.advance(SECTION_GAP);

    cursor.draw(EXPERIENCE_HEADER, LEFT_MARGIN, TextStyle::Subtitle);
    cursor.advance(HEADER_ADVANCE);
    for experience in &resume.experience {
        cursor.draw(experience_line(experience), ENTRY_INDENT, TextStyle::Body);
        cursor.advance(ENTRY_ADVANCE);
        cursor.draw(
            experience.description.as_str(),
            DESCRIPTION_INDENT,
            TextStyle::Body,
        );
        cursor.advance(DESCRIPTION_ADVANCE);
    }
    cursor.advance(SECTION_GAP);

    cursor.draw(SKILLS_HEADER, LEFT_MARGIN, TextStyle::Subtitle);
    cursor.advance(HEADER_ADVANCE);
    cursor.draw(skills_line(&resume.skills), ENTRY_INDENT, TextStyle::Body);

    cursor.lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(text: &str, x: f64, y: f64, style: TextStyle) -> LayoutLine {
        LayoutLine {
            text: text.to_string(),
            x,
            y,
            style,
        }
    }

    #[test]
    fn test_contact_line() {
        let mut resume = Resume::new();
        resume.email = "a@b.com".to_string();
        resume.phone = "555-1234".to_string();
        resume.linked_in = "li.com/x".to_string();

        assert_eq!(contact_line(&resume), "a@b.com | 555-1234 | li.com/x");
    }

    #[test]
    fn test_empty_contact_line_keeps_separators() {
        assert_eq!(contact_line(&Resume::new()), " |  | ");
    }

    #[test]
    fn test_education_line() {
        let education = Education::new("MIT", "BS CS", "2018", "2022");
        assert_eq!(education_line(&education), "BS CS - MIT (2018 - 2022)");
    }

    #[test]
    fn test_experience_line() {
        let experience = Experience::new("Acme", "Engineer", "2020", "2023", "Built rockets");
        assert_eq!(experience_line(&experience), "Engineer - Acme (2020 - 2023)");
    }

    #[test]
    fn test_skills_line() {
        let skills = vec!["Go".to_string(), "Rust".to_string(), "C++".to_string()];
        assert_eq!(skills_line(&skills), "Go, Rust, C++");
    }

    #[test]
    fn test_empty_skills_line() {
        assert_eq!(skills_line(&[]), "");
    }

    #[test]
    fn test_empty_resume_layout() {
        let lines = layout_resume(&Resume::new());

        assert_eq!(
            lines,
            vec![
                line("", 20.0, 20.0, TextStyle::Title),
                line(" |  | ", 20.0, 60.0, TextStyle::Body),
                line("Education", 20.0, 90.0, TextStyle::Subtitle),
                line("Experience", 20.0, 125.0, TextStyle::Subtitle),
                line("Skills", 20.0, 160.0, TextStyle::Subtitle),
                line("", 30.0, 185.0, TextStyle::Body),
            ]
        );
    }

    #[test]
    fn test_full_resume_layout_positions() {
        let mut resume = Resume::new();
        resume.full_name = "Jane Doe".to_string();
        resume.push_education(Education::new("MIT", "BS CS", "2018", "2022"));
        resume.push_education(Education::new("Stanford", "MS CS", "2022", "2024"));
        resume.push_experience(Experience::new("Acme", "Engineer", "2020", "2023", "Rockets"));
        resume.push_skill("Rust");

        let lines = layout_resume(&resume);

        assert_eq!(
            lines,
            vec![
                line("Jane Doe", 20.0, 20.0, TextStyle::Title),
                line(" |  | ", 20.0, 60.0, TextStyle::Body),
                line("Education", 20.0, 90.0, TextStyle::Subtitle),
                line("BS CS - MIT (2018 - 2022)", 30.0, 115.0, TextStyle::Body),
                line("MS CS - Stanford (2022 - 2024)", 30.0, 135.0, TextStyle::Body),
                line("Experience", 20.0, 165.0, TextStyle::Subtitle),
                line("Engineer - Acme (2020 - 2023)", 30.0, 190.0, TextStyle::Body),
                line("Rockets", 40.0, 210.0, TextStyle::Body),
                line("Skills", 20.0, 250.0, TextStyle::Subtitle),
                line("Rust", 30.0, 275.0, TextStyle::Body),
            ]
        );
    }

    #[test]
    fn test_line_count_scales_with_entries() {
        let mut resume = Resume::new();
        for _ in 0..3 {
            resume.add_education();
        }
        for _ in 0..2 {
            resume.add_experience();
        }

        // title, contact, 3 headers, skills + 3 education + 2 * 2 experience
        assert_eq!(layout_resume(&resume).len(), 6 + 3 + 4);
    }

    #[test]
    fn test_overflow_is_not_paginated() {
        let mut resume = Resume::new();
        for i in 0..60 {
            resume.push_experience(Experience::new(format!("Company {i}"), "Dev", "", "", ""));
        }

        let lines = layout_resume(&resume);
        let last = lines.last().unwrap();

        // 20 + 40 + 30 + 25 + 10 + 25 + 60 * 50 + 10 + 25
        assert_eq!(last.y, 3185.0);
        assert!(last.y > 792.0);
        assert_eq!(lines.len(), 6 + 120);
    }

    #[test]
    fn test_text_is_not_escaped() {
        let mut resume = Resume::new();
        resume.full_name = "O'Brien (\"Bob\") \\ <x>".to_string();

        assert_eq!(layout_resume(&resume)[0].text, "O'Brien (\"Bob\") \\ <x>");
    }

    #[test]
    fn test_styles() {
        assert_eq!(TextStyle::Title.font(), StandardFont::HelveticaBold);
        assert_eq!(TextStyle::Title.size(), 24.0);
        assert_eq!(TextStyle::Subtitle.font(), StandardFont::Helvetica);
        assert_eq!(TextStyle::Subtitle.size(), 18.0);
        assert_eq!(TextStyle::Body.size(), 14.0);
    }
}
