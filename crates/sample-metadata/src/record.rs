/// Population and serialization of [`SampleRecord`].
///
/// A record is filled from exactly one source: a JSON sidecar written by an earlier run,
/// or the sample's README. README population never fails on content; a README that can't
/// be read or doesn't follow the expected layout yields a partially filled record.
use std::path::{Component, Path};

use tracing::{debug, warn};

use sample_common::error::CommonError;
use sample_common::files;
use sample_common::platform::Platform;

use crate::catalog;
use crate::error::AppError;
use crate::model::{HowItWorks, ReadmeStyle, SampleDocument, SampleRecord, SampleSidecar};
use crate::parser::{self, HeadingKind};

/// Paragraph count below which a README has no headed sections.
const SECTIONED_MIN_PARTS: usize = 5;

impl SampleRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from a metadata JSON file. The formal name is the containing folder's name.
    pub fn populate_from_json(&mut self, path: &Path) -> Result<(), AppError> {
        self.formal_name = path_segment_from_end(path, 2)
            .ok_or_else(|| AppError::SamplePath(path.display().to_string()))?;

        let contents = files::read_contents(path)?;
        let sidecar: SampleSidecar =
            serde_json::from_str(&contents).map_err(|e| CommonError::json(path, e))?;
        self.apply_sidecar(sidecar);
        Ok(())
    }

    fn apply_sidecar(&mut self, sidecar: SampleSidecar) {
        if let Some(category) = sidecar.category {
            self.category = category;
        }
        if let Some(keywords) = sidecar.keywords {
            self.keywords = keywords;
        }
        if let Some(images) = sidecar.images {
            self.images = images;
        }
        if let Some(redirect_from) = sidecar.redirect_from {
            self.redirect_from = redirect_from;
        }
        if let Some(description) = sidecar.description {
            self.description = description;
        }
        if let Some(ignore) = sidecar.ignore {
            self.ignore = ignore;
        }
        if let Some(title) = sidecar.title {
            self.friendly_name = title;
        }
        if let Some(relevant_apis) = sidecar.relevant_apis {
            self.relevant_api = relevant_apis;
        }
        if let Some(snippets) = sidecar.snippets {
            self.source_files = snippets;
        }
    }

    /// Populate from a sample README at `<category>/<formal name>/readme.md`.
    ///
    /// Path-derived fields (formal name, category, redirects) are set even when the file
    /// can't be read; callers should skip samples that come back `Unreadable`.
    pub fn populate_from_readme(
        &mut self,
        platform: Platform,
        path: &Path,
    ) -> Result<ReadmeStyle, AppError> {
        self.formal_name = path_segment_from_end(path, 2)
            .ok_or_else(|| AppError::SamplePath(path.display().to_string()))?;

        let url_platform = platform.display_name().to_lowercase();
        self.redirect_from.push(format!(
            "/net/latest/{url_platform}/sample-code/{}.htm",
            self.formal_name.to_lowercase()
        ));
        for slug in catalog::legacy_redirects(&self.formal_name) {
            self.redirect_from
                .push(format!("/net/{url_platform}/sample-code/{slug}"));
        }

        self.category = path_segment_from_end(path, 3)
            .map(|folder| catalog::fix_category(&folder))
            .unwrap_or_default();

        let contents = match files::read_contents(path) {
            Ok(contents) => contents.replace("\r\n", "\n"),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "error populating sample from readme, skipping"
                );
                return Ok(ReadmeStyle::Unreadable);
            }
        };

        Ok(self.populate_from_readme_text(&contents))
    }

    fn populate_from_readme_text(&mut self, contents: &str) -> ReadmeStyle {
        let parts = parser::split_sections(contents);

        self.friendly_name = parser::parse_title(parts[0]);

        if parts.len() < 3 {
            debug!(sample = %self.formal_name, parts = parts.len(), "readme too short, title only");
            return ReadmeStyle::TitleOnly;
        }

        self.description = parts[1].to_string();
        self.images.push(parser::extract_image(parts[2]));

        if parts.len() < SECTIONED_MIN_PARTS {
            return ReadmeStyle::OldStyle;
        }

        let mut current_heading: Option<&str> = None;
        let mut body: Vec<&str> = Vec::new();

        for &part in &parts[2..] {
            if !parser::is_heading(part) {
                body.push(part);
                continue;
            }
            if let Some(heading) = current_heading {
                if !body.is_empty() {
                    self.populate_heading(heading, &body);
                }
            }
            current_heading = Some(part);
            body.clear();
        }
        if let Some(heading) = current_heading {
            if !body.is_empty() {
                self.populate_heading(heading, &body);
            }
        }

        ReadmeStyle::Sectioned
    }

    /// Store a README section in the field its heading names.
    ///
    /// `body` must not be empty. Headings with no corresponding field are dropped.
    pub fn populate_heading(&mut self, heading: &str, body: &[&str]) {
        let Some(kind) = HeadingKind::classify(heading) else {
            debug!(
                sample = %self.formal_name,
                heading = heading.trim(),
                "ignoring unrecognized heading"
            );
            return;
        };

        let first = body[0];
        match kind {
            HeadingKind::UseCase => self.use_case = body.join("\n\n"),
            HeadingKind::HowToUse => self.how_to_use = body.join("\n\n"),
            HeadingKind::HowItWorks => {
                self.how_it_works = HowItWorks::Steps(parser::parse_steps(first));
            }
            HeadingKind::RelevantApi => self.relevant_api = parser::parse_api_list(first),
            HeadingKind::OfflineData => {
                self.offline_data = parser::extract_guids(&body.join("\n"));
            }
            HeadingKind::AboutTheData => self.data_statement = body.join("\n\n"),
            HeadingKind::AdditionalInfo => self.additional_info = body.join("\n\n"),
            HeadingKind::Tags => self.keywords = parser::parse_tags(first),
        }
    }

    /// Build the on-disk document. Lists are written in stored order.
    pub fn to_document(&self) -> SampleDocument<'_> {
        SampleDocument {
            category: &self.category,
            description: &self.description,
            formal_name: &self.formal_name,
            ignore: self.ignore,
            images: &self.images,
            keywords: &self.keywords,
            offline_data: &self.offline_data,
            redirect_from: &self.redirect_from,
            relevant_apis: &self.relevant_api,
            snippets: &self.source_files,
            title: &self.friendly_name,
        }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        files::to_json_pretty(&self.to_document())
    }

    pub fn flush_to_json(&self, path: &Path) -> Result<(), AppError> {
        files::write_json_pretty(path, &self.to_document())?;
        debug!(sample = %self.formal_name, path = %path.display(), "wrote metadata");
        Ok(())
    }
}

/// The `n`th path segment counting from the end (1 is the file name).
fn path_segment_from_end(path: &Path, n: usize) -> Option<String> {
    let segments: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    segments
        .len()
        .checked_sub(n)
        .map(|idx| segments[idx].clone())
}
