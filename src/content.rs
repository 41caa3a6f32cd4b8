use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::contact::looks_like_email;

pub const CONTENT_FILE: &str = "portfolio.json";
pub const CONTACT_ENTRY_COUNT: usize = 3;

pub static GLOBAL_CONTENT: LazyLock<PortfolioContent> = LazyLock::new(|| {
    PortfolioContent::load().expect("Embedded portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

/// Read-only access to the page's fixed content.
pub fn content() -> &'static PortfolioContent {
    &GLOBAL_CONTENT
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Skill {name:?} has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("Expected exactly three contact entries, found {0}")]
    ContactCount(usize),
    #[error("Contact form recipient {0:?} is not an email address")]
    Recipient(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub project: ProjectRecord,
    pub skills: Vec<SkillRecord>,
    pub resume: Vec<ResumeEntry>,
    pub contacts: Vec<ContactEntry>,
    pub contact_form: ContactFormSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub location: String,
    pub hero_image: String,
    pub avatar_image: String,
    pub about: Vec<String>,
    #[serde(default)]
    pub cv_href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub details: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    /// Percentage, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    Education,
    Experience,
}

impl ResumeKind {
    pub fn heading(self) -> &'static str {
        match self {
            ResumeKind::Education => "Education",
            ResumeKind::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub kind: ResumeKind,
    pub title: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactIcon {
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub icon: ContactIcon,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Tailwind gradient stops for the icon badge.
    pub color: String,
}

impl ContactEntry {
    /// Entries without a link point back at the page.
    pub fn href(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormSettings {
    pub recipient: String,
    pub subject_prefix: String,
}

impl PortfolioContent {
    pub fn load() -> Result<Self, ContentError> {
        let file = ContentAssets::get(CONTENT_FILE)
            .ok_or_else(|| ContentError::NotFound(CONTENT_FILE.to_string()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_slice(data)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }
        if self.contacts.len() != CONTACT_ENTRY_COUNT {
            return Err(ContentError::ContactCount(self.contacts.len()));
        }
        if !looks_like_email(&self.contact_form.recipient) {
            return Err(ContentError::Recipient(self.contact_form.recipient.clone()));
        }
        Ok(())
    }

    pub fn resume_entries(&self, kind: ResumeKind) -> impl Iterator<Item = &ResumeEntry> {
        self.resume.iter().filter(move |e| e.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded_json() -> serde_json::Value {
        let file = ContentAssets::get(CONTENT_FILE).expect("content file should be embedded");
        serde_json::from_slice(&file.data).unwrap()
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = PortfolioContent::load().expect("embedded content should be valid");
        assert_eq!(content.profile.name, "Jack Tambanis");
        assert_eq!(content.project.title, "My Fun Project");
        assert_eq!(content.project.tags, ["HTML/CSS", "JavaScript"]);
        assert_eq!(content.contacts.len(), CONTACT_ENTRY_COUNT);
        assert!(content.skills.iter().all(|s| s.level <= 100));
        assert_eq!(content, *GLOBAL_CONTENT);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut json = embedded_json();
        // lower levels first, deliberately unsorted by name and level
        json["skills"] = serde_json::json!([
            { "name": "Rust", "level": 10 },
            { "name": "CSS", "level": 95 },
            { "name": "Go", "level": 40 },
            { "name": "Awk", "level": 95 }
        ]);
        let contacts = json["contacts"].as_array().unwrap().clone();
        json["contacts"] = serde_json::json!([contacts[2], contacts[0], contacts[1]]);

        let content = PortfolioContent::from_json(json.to_string().as_bytes()).unwrap();
        let names: Vec<&str> = content.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Rust", "CSS", "Go", "Awk"]);
        let titles: Vec<&str> = content.contacts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Location", "Email", "Phone"]);
    }

    #[test]
    fn test_rejects_skill_level_over_100() {
        let mut json = embedded_json();
        json["skills"][1]["level"] = serde_json::json!(101);
        let err = PortfolioContent::from_json(json.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::SkillLevel { level: 101, .. }));

        // not representable as a percentage at all
        json["skills"][1]["level"] = serde_json::json!(-5);
        let err = PortfolioContent::from_json(json.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_rejects_wrong_contact_count() {
        let mut json = embedded_json();
        json["contacts"].as_array_mut().unwrap().pop();
        let err = PortfolioContent::from_json(json.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::ContactCount(2)));
    }

    #[test]
    fn test_recipient_must_be_an_email() {
        let content = PortfolioContent::load().unwrap();
        assert_eq!(content.contact_form.recipient, "jack@jacktambanis.tech");
        assert!(looks_like_email(&content.contact_form.recipient));

        let mut json = embedded_json();
        json["contact_form"]["recipient"] = serde_json::json!("jack.jacktambanis.tech");
        let err = PortfolioContent::from_json(json.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ContentError::Recipient(ref r) if r == "jack.jacktambanis.tech"));
    }

    #[test]
    fn test_mail_handoff_uses_configured_recipient() {
        let content = PortfolioContent::load().unwrap();
        let msg = crate::contact::ContactMessage::new("Ada", "ada@example.com", "hi");
        let href = msg.mailto_href(&content.contact_form).unwrap();
        assert!(href.starts_with("mailto:jack@jacktambanis.tech?subject="));
    }

    #[test]
    fn test_malformed_json() {
        let err = PortfolioContent::from_json(b"{ \"profile\": ").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
    }

    #[test]
    fn test_contact_href_defaults_to_page() {
        let content = PortfolioContent::load().unwrap();
        let hrefs: Vec<&str> = content.contacts.iter().map(|c| c.href()).collect();
        assert_eq!(hrefs, ["mailto:jack@jacktambanis.tech", "tel:+61491601", "#"]);
        assert_eq!(content.contacts[0].icon, ContactIcon::Email);
        assert_eq!(content.contacts[2].icon, ContactIcon::Location);
    }

    #[test]
    fn test_resume_entries_by_kind() {
        let content = PortfolioContent::load().unwrap();
        let education: Vec<&str> = content
            .resume_entries(ResumeKind::Education)
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(education, ["Web Development Course"]);
        let experience: Vec<&str> = content
            .resume_entries(ResumeKind::Experience)
            .map(|e| e.period.as_str())
            .collect();
        assert_eq!(experience, ["2023 - Present"]);
    }
}
