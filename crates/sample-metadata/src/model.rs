use serde::{Deserialize, Serialize};

/// Metadata for one sample folder.
///
/// Built empty, populated once from either a JSON sidecar or a README, then flushed to
/// JSON or used to emit a standalone project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SampleRecord {
    /// Name of the folder containing the sample, e.g. "DisplayMap"
    pub formal_name: String,
    /// Human-readable title, e.g. "Display map"
    pub friendly_name: String,
    /// Category from the folder containing the sample folder, e.g. "Local Server"
    pub category: String,
    pub keywords: Vec<String>,
    pub relevant_api: Vec<String>,
    pub since: String,
    /// Screenshot paths relative to the sample folder
    pub images: Vec<String>,
    /// Source files relative to the sample folder
    pub source_files: Vec<String>,
    /// Documentation URL paths that should redirect to this sample
    pub redirect_from: Vec<String>,
    /// Portal item ids of data downloaded by the sample
    pub offline_data: Vec<String>,
    /// Second README paragraph; empty until a README or sidecar provides one
    pub description: String,
    pub how_to_use: String,
    pub how_it_works: HowItWorks,
    pub use_case: String,
    pub data_statement: String,
    pub additional_info: String,
    pub ignore: bool,
}

/// Body of the "How it works" section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HowItWorks {
    Raw(String),
    /// Cleaned numbered steps; sub-bullets carry a `***` prefix.
    Steps(Vec<String>),
}

impl Default for HowItWorks {
    fn default() -> Self {
        HowItWorks::Raw(String::new())
    }
}

/// How much of a README could be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadmeStyle {
    /// The file could not be read; nothing past the path-derived fields was populated.
    Unreadable,
    /// Fewer than three paragraphs; only the title was populated.
    TitleOnly,
    /// Title, description and screenshot without headed sections.
    OldStyle,
    /// Title, description, screenshot and headed sections.
    Sectioned,
}

impl ReadmeStyle {
    pub fn is_usable(self) -> bool {
        !matches!(self, ReadmeStyle::Unreadable)
    }
}

/// Keys read from a `readme.metadata.json` sidecar. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SampleSidecar {
    pub category: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub redirect_from: Option<Vec<String>>,
    pub description: Option<String>,
    pub ignore: Option<bool>,
    pub title: Option<String>,
    pub relevant_apis: Option<Vec<String>>,
    pub snippets: Option<Vec<String>>,
}

/// On-disk metadata document.
///
/// Fields are declared in alphabetical order so the serialized keys come out sorted.
#[derive(Debug, Serialize)]
pub struct SampleDocument<'a> {
    pub category: &'a str,
    pub description: &'a str,
    pub formal_name: &'a str,
    pub ignore: bool,
    pub images: &'a [String],
    pub keywords: &'a [String],
    pub offline_data: &'a [String],
    pub redirect_from: &'a [String],
    pub relevant_apis: &'a [String],
    pub snippets: &'a [String],
    pub title: &'a str,
}
