use crate::core::document::DocId;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    About,
    Projects,
    Contact,
    Resume,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSpec {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub github: String,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSpec {
    pub id: String,
    pub kind: DocumentKind,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    Demo,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::Demo => "demo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub project: usize,
    pub kind: LinkKind,
    pub url: String,
}

impl ProjectLink {
    /// Links still pointing at template placeholders are never followed.
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_url(&self.url)
    }
}

pub fn is_placeholder_url(url: &str) -> bool {
    url.contains("yourusername") || url.contains("your-")
}

#[derive(Debug, Deserialize)]
struct BuiltinDocumentsConfig {
    documents: Vec<DocumentSpec>,
}

pub fn load_builtin_documents() -> Result<Vec<DocumentSpec>, toml::de::Error> {
    const CONFIG_CONTENT: &str = include_str!("../builtin_documents.toml");
    let config: BuiltinDocumentsConfig = toml::from_str(CONFIG_CONTENT)?;
    Ok(config.documents)
}

/// Read-only set of documents the workbench can show.
#[derive(Debug, Clone, Default)]
pub struct DocumentCatalog {
    documents: Vec<DocumentSpec>,
}

impl DocumentCatalog {
    pub fn new(documents: Vec<DocumentSpec>) -> Self {
        Self { documents }
    }

    pub fn builtin() -> Result<Self, toml::de::Error> {
        load_builtin_documents().map(Self::new)
    }

    pub fn get(&self, id: &DocId) -> Option<&DocumentSpec> {
        self.documents.iter().find(|d| d.id == id.as_str())
    }

    pub fn contains(&self, id: &DocId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.documents.iter().map(|d| DocId::new(d.id.clone()))
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn first_of_kind(&self, kind: DocumentKind) -> Option<&DocumentSpec> {
        self.documents.iter().find(|d| d.kind == kind)
    }

    pub fn skills(&self) -> &[String] {
        self.first_of_kind(DocumentKind::About)
            .map(|d| d.skills.as_slice())
            .unwrap_or(&[])
    }

    /// Project links in display order: each project's GitHub link, then its demo.
    pub fn project_links(&self) -> Vec<ProjectLink> {
        let Some(doc) = self.first_of_kind(DocumentKind::Projects) else {
            return Vec::new();
        };
        let mut links = Vec::new();
        for (idx, project) in doc.projects.iter().enumerate() {
            links.push(ProjectLink {
                project: idx,
                kind: LinkKind::GitHub,
                url: project.github.clone(),
            });
            if let Some(demo) = &project.demo {
                links.push(ProjectLink {
                    project: idx,
                    kind: LinkKind::Demo,
                    url: demo.clone(),
                });
            }
        }
        links
    }
}
