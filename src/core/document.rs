//! Virtual documents shown in the editor and the static lookups keyed by them.

use ratatui::style::Color;
use std::fmt;

/// Opaque name of a virtual file. Equality is exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(String);

impl DocId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text after the last `.`, or the whole id when it has none.
    pub fn extension(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<&str> for DocId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileIcon {
    pub glyph: &'static str,
    pub color: Color,
}

const HTML_ICON: FileIcon = FileIcon {
    glyph: "■",
    color: Color::Rgb(0xe3, 0x4c, 0x26),
};

/// File name → tab/tree icon. Unknown names fall back to the `index.html` icon.
pub const FILE_ICONS: &[(&str, FileIcon)] = &[
    ("index.html", HTML_ICON),
    (
        "style.css",
        FileIcon {
            glyph: "■",
            color: Color::Rgb(0x15, 0x72, 0xb6),
        },
    ),
    (
        "script.js",
        FileIcon {
            glyph: "■",
            color: Color::Rgb(0xf1, 0xe0, 0x5a),
        },
    ),
    (
        "readme.md",
        FileIcon {
            glyph: "■",
            color: Color::Rgb(0x08, 0x3f, 0xa1),
        },
    ),
];

pub fn file_icon(id: &DocId) -> FileIcon {
    FILE_ICONS
        .iter()
        .find(|(name, _)| *name == id.as_str())
        .map(|(_, icon)| *icon)
        .unwrap_or(HTML_ICON)
}

/// Extension → status bar language label. Unknown extensions read as `Plain Text`.
pub const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("html", "HTML"),
    ("css", "CSS"),
    ("js", "JavaScript"),
    ("md", "Markdown"),
];

pub const FALLBACK_LANGUAGE: &str = "Plain Text";

pub fn language_label(id: &DocId) -> &'static str {
    let ext = id.extension();
    LANGUAGE_LABELS
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_LANGUAGE)
}

/// Activity bar entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Explorer,
    Projects,
    Contact,
    Resume,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Explorer,
        Section::Projects,
        Section::Contact,
        Section::Resume,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Explorer => "explorer",
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Resume => "resume",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Section::Explorer => "⧉",
            Section::Projects => "◫",
            Section::Contact => "✉",
            Section::Resume => "☰",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Explorer => "Explorer",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
            Section::Resume => "Resume",
        }
    }
}

/// Section → document opened when the section is selected.
pub const SECTION_FILES: &[(Section, &str)] = &[
    (Section::Explorer, "index.html"),
    (Section::Projects, "style.css"),
    (Section::Contact, "script.js"),
    (Section::Resume, "readme.md"),
];

pub fn section_file(section: Section) -> Option<DocId> {
    SECTION_FILES
        .iter()
        .find(|(s, _)| *s == section)
        .map(|(_, file)| DocId::from(*file))
}
