//! The profile the engine answers questions about, and how it becomes a corpus.
//!
//! Document order is fixed: the bio first, then every graphics item, then
//! every video item, each in listed order.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::types::Document;

/// Identifier reserved for the bio document.
pub const ABOUT_ID: &str = "about";

/// Marker used by profiles that have no resume link yet.
pub const RESUME_PLACEHOLDER: &str = "#";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSource {
    pub name: String,
    pub roles: Vec<String>,
    pub about: About,
    pub graphics: Vec<WorkItem>,
    pub video: Vec<WorkItem>,
    pub email: String,
    pub whatsapp: String,
    #[serde(rename = "resumeURL", alias = "resume_url")]
    pub resume_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub text: String,
    pub image: Option<String>,
}

/// A graphics or video entry. `thumbnail`, `url` and `images` are carried for
/// the presentation layer only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub url: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkKind {
    Graphics,
    Video,
}

impl WorkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkKind::Graphics => "graphics",
            WorkKind::Video => "video",
        }
    }
}

impl WorkItem {
    pub fn new(id: &str, title: &str, description: &str, tags: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }

    fn document_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags.join(" "))
    }
}

impl ContentSource {
    /// Builds the corpus in its canonical order.
    pub fn documents(&self) -> Vec<Document> {
        let mut docs = Vec::with_capacity(1 + self.graphics.len() + self.video.len());
        docs.push(Document::new(
            ABOUT_ID,
            format!("{} {} {}", self.name, self.roles.join(" "), self.about.text),
        ));
        for item in self.graphics.iter().chain(&self.video) {
            docs.push(Document::new(item.id.clone(), item.document_text()));
        }
        docs
    }

    /// Finds a work item by id, graphics first.
    pub fn find_work(&self, id: &str) -> Option<(WorkKind, &WorkItem)> {
        self.graphics
            .iter()
            .find(|g| g.id == id)
            .map(|g| (WorkKind::Graphics, g))
            .or_else(|| self.video.iter().find(|v| v.id == id).map(|v| (WorkKind::Video, v)))
    }

    /// Human label for a document id. Anything that is not a work item is the bio.
    pub fn label_for(&self, id: &str) -> String {
        match self.find_work(id) {
            Some((kind, item)) => format!("{} ({})", item.title, kind.as_str()),
            None => "About".to_string(),
        }
    }

    /// The resume link, if one has been set.
    pub fn resume_link(&self) -> Option<&str> {
        let url = self.resume_url.trim();
        (!url.is_empty() && url != RESUME_PLACEHOLDER).then_some(url)
    }

    /// Rejects profiles whose documents would not have unique ids.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        seen.insert(ABOUT_ID);
        for item in self.graphics.iter().chain(&self.video) {
            if item.id.is_empty() {
                return Err(Error::InvalidConfig(format!("work item '{}' has no id", item.title)));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(Error::InvalidConfig(format!("duplicate document id '{}'", item.id)));
            }
        }
        Ok(())
    }

    /// The profile used when configuration provides none.
    pub fn sample() -> Self {
        Self {
            name: "Arijit".to_string(),
            roles: vec!["Creative Director".to_string(), "Designer".to_string(), "Animator".to_string()],
            about: About {
                text: "I am a multidisciplinary creative director with a passion for design, motion, and storytelling. \
                       This space is a curated selection of my work across different mediums."
                    .to_string(),
                image: Some("/profile.jpg".to_string()),
            },
            graphics: vec![WorkItem {
                thumbnail: Some("/work1.jpg".to_string()),
                images: vec!["/work1.jpg".to_string()],
                ..WorkItem::new("g1", "Series One", "A series of abstract graphics exploring light and form.", &["abstract", "light"])
            }],
            video: vec![WorkItem {
                thumbnail: Some("/video1.jpg".to_string()),
                url: Some("https://example.com".to_string()),
                ..WorkItem::new("v1", "Motion Study", "A short video exploring motion and rhythm.", &["motion", "study"])
            }],
            email: "replace@example.com".to_string(),
            whatsapp: "911234567890".to_string(),
            resume_url: RESUME_PLACEHOLDER.to_string(),
        }
    }
}
