use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize};
use std::{collections::HashSet, fmt, sync::LazyLock};
use thiserror::Error;

pub static SITE_CONTENT: LazyLock<Result<SiteContent, ContentError>> =
    LazyLock::new(SiteContent::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

pub const MAX_SKILL_LEVEL: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub site_title: String,
    pub greeting: String,
    pub tagline: String,
    pub phrases: Vec<String>,
    pub avatar_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Filled state of each dot in the 1-5 level indicator.
    pub fn dots(&self) -> [bool; MAX_SKILL_LEVEL as usize] {
        std::array::from_fn(|i| (i as u8) < self.level)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub id: u32,
    pub degree: String,
    pub school: String,
    pub period: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub bio: String,
    pub skill_categories: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    School,
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
    pub tooltip: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: String, reason: String },
    #[error("Duplicate project id: {0}")]
    DuplicateProject(ProjectId),
    #[error("Skill level for {name} must be between 1 and 5, got {level}")]
    SkillLevel { name: String, level: u8 },
    #[error("Profile needs at least one hero phrase")]
    NoPhrases,
}

#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub about: About,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

fn read_json<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: read_json("profile.json")?,
            about: read_json("about.json")?,
            projects: read_json("projects.json")?,
            social_links: read_json("social.json")?,
        };
        content.validate()?;
        log::debug!(
            "loaded site content: {} projects, {} social links",
            content.projects.len(),
            content.social_links.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.profile.phrases.is_empty() {
            return Err(ContentError::NoPhrases);
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
            if project.image_urls.is_empty() {
                // renders with the placeholder image
                log::warn!("project {} has no images", project.id);
            }
        }
        let skills = self
            .about
            .skill_categories
            .iter()
            .flat_map(|c| c.skills.iter());
        for skill in skills {
            if skill.level == 0 || skill.level > MAX_SKILL_LEVEL {
                return Err(ContentError::SkillLevel {
                    name: skill.name.clone(),
                    level: skill.level,
                });
            }
        }
        Ok(())
    }
}

pub fn site_content() -> Result<&'static SiteContent, &'static ContentError> {
    SITE_CONTENT.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, images: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            description: String::new(),
            image_urls: images.iter().map(|s| s.to_string()).collect(),
            tags: vec![],
            link: String::new(),
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let content = site_content().expect("embedded content should be valid");

        assert!(!content.profile.name.is_empty());
        assert!(!content.profile.phrases.is_empty());
        assert!(!content.projects.is_empty());
        assert_eq!(content.social_links.len(), 4);
        assert!(!content.about.skill_categories.is_empty());
        assert!(!content.about.experiences.is_empty());
        assert!(!content.about.education.is_empty());
    }

    #[test]
    fn test_embedded_projects_have_images() {
        let content = site_content().expect("embedded content should be valid");
        for project in &content.projects {
            assert!(
                !project.image_urls.is_empty(),
                "project {} should have at least one image",
                project.id
            );
        }
        // at least one single-image card and one multi-image card
        assert!(content.projects.iter().any(|p| p.image_urls.len() == 1));
        assert!(content.projects.iter().any(|p| p.image_urls.len() > 1));
    }

    #[test]
    fn test_social_icons_parse() {
        let link: SocialLink = serde_json::from_str(
            r#"{"id": 9, "name": "Mail", "url": "mailto:a@b.c", "icon": "mail", "tooltip": "Send"}"#,
        )
        .unwrap();
        assert_eq!(link.icon, SocialIcon::Mail);

        let bad = serde_json::from_str::<SocialLink>(
            r#"{"id": 9, "name": "X", "url": "x", "icon": "myspace", "tooltip": "x"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_education_description_optional() {
        let edu: Education = serde_json::from_str(
            r#"{"id": 1, "degree": "B.Sc.", "school": "Somewhere", "period": "2020"}"#,
        )
        .unwrap();
        assert!(edu.description.is_none());
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let mut content = site_content().unwrap().clone();
        content.projects = vec![project(1, &["a"]), project(2, &["b"]), project(1, &["c"])];

        assert_eq!(
            content.validate(),
            Err(ContentError::DuplicateProject(ProjectId(1)))
        );
    }

    #[test]
    fn test_skill_level_out_of_range_rejected() {
        let mut content = site_content().unwrap().clone();
        content.about.skill_categories = vec![SkillCategory {
            title: "Frontend".to_string(),
            skills: vec![Skill {
                name: "HTML".to_string(),
                level: 6,
            }],
        }];

        assert!(matches!(
            content.validate(),
            Err(ContentError::SkillLevel { level: 6, .. })
        ));
    }

    #[test]
    fn test_empty_phrases_rejected() {
        let mut content = site_content().unwrap().clone();
        content.profile.phrases.clear();
        assert_eq!(content.validate(), Err(ContentError::NoPhrases));
    }

    #[test]
    fn test_skill_dots() {
        let skill = Skill {
            name: "Rust".to_string(),
            level: 3,
        };
        assert_eq!(skill.dots(), [true, true, true, false, false]);

        let maxed = Skill {
            name: "Git".to_string(),
            level: 5,
        };
        assert!(maxed.dots().iter().all(|d| *d));
    }

    #[test]
    fn test_missing_file() {
        let res = read_json::<Profile>("nope.json");
        assert_eq!(res.unwrap_err(), ContentError::NotFound("nope.json".to_string()));
    }
}
