/// Parser for sample README files.
///
/// The READMEs follow a loose, paragraph-oriented dialect:
/// - paragraphs are separated by one blank line
/// - paragraph 0 is the title (`# Title`)
/// - paragraph 1 is the description
/// - paragraph 2 is the screenshot, as `![alt](path)` or `<img src="path"/>`
/// - later paragraphs are grouped under `## Heading` paragraphs
///
/// Everything here is a pure function over text; the record module decides which field
/// each piece lands in.
use regex::Regex;

/// Sections of a README that map onto metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    UseCase,
    HowToUse,
    HowItWorks,
    RelevantApi,
    OfflineData,
    AboutTheData,
    AdditionalInfo,
    Tags,
}

impl HeadingKind {
    /// Classify a heading paragraph by the words it contains.
    ///
    /// Rules are checked in a fixed order and the first match wins, so
    /// "How to use the use case" is a use case. Returns `None` for headings with no
    /// corresponding field.
    pub fn classify(heading: &str) -> Option<Self> {
        let normalized = heading.trim_start_matches('#').trim().to_lowercase();
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .collect();
        let has = |word: &str| tokens.contains(&word);

        if has("use") && has("case") {
            Some(HeadingKind::UseCase)
        } else if has("use") && has("how") {
            Some(HeadingKind::HowToUse)
        } else if has("works") && has("how") {
            Some(HeadingKind::HowItWorks)
        } else if has("api") || has("apis") {
            Some(HeadingKind::RelevantApi)
        } else if has("offline") {
            Some(HeadingKind::OfflineData)
        } else if has("data") && has("about") {
            Some(HeadingKind::AboutTheData)
        } else if has("additional") {
            Some(HeadingKind::AdditionalInfo)
        } else if has("tags") {
            Some(HeadingKind::Tags)
        } else {
            None
        }
    }
}

/// Split README text into paragraphs on blank lines. Paragraph text is not trimmed.
pub fn split_sections(text: &str) -> Vec<&str> {
    text.split("\n\n").collect()
}

pub fn is_heading(section: &str) -> bool {
    section.starts_with('#')
}

/// Extract the title from the first paragraph.
///
/// Usually `# Title`. When the paragraph does not start with `#` (e.g. a leading comment),
/// the text after the first `#` is used; without any `#` the whole paragraph is kept.
pub fn parse_title(section: &str) -> String {
    let line = section.trim();
    let line = if line.starts_with('#') {
        line
    } else {
        line.split('#').nth(1).unwrap_or(line)
    };
    line.trim_start_matches('#').trim().to_string()
}

/// Extract the image path from a markdown image or an HTML `img` tag.
///
/// - `![alt-text](path_to_image.jpg)` returns `path_to_image.jpg`
/// - `<img src="path_to_image.jpg" width="350"/>` returns `path_to_image.jpg`
///
/// Anything that can't be taken apart is returned trimmed but otherwise unchanged.
pub fn extract_image(text: &str) -> String {
    let text = text.trim();

    if text.starts_with('!') {
        let (Some(open), Some(close)) = (text.rfind('('), text.rfind(')')) else {
            return text.to_string();
        };
        if open + 1 > close {
            return String::new();
        }
        return text[open + 1..close].to_string();
    }

    const SRC_ATTR: &str = "src=\"";
    let Some(attr) = text.rfind(SRC_ATTR) else {
        return text.to_string();
    };
    let start = attr + SRC_ATTR.len();
    let end = text[start..]
        .find('"')
        .map(|offset| start + offset)
        .unwrap_or(text.len());
    text[start..end].to_string()
}

/// Clean a numbered step list.
///
/// `1. Create a map.` becomes `Create a map.`; sub-bullets (`* detail`) become `***detail`.
pub fn parse_steps(section: &str) -> Vec<String> {
    section
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with('*') {
                format!("***{}", trimmed.trim_start_matches('*').trim())
            } else {
                line.split('.').skip(1).collect::<Vec<_>>().join(".").trim().to_string()
            }
        })
        .collect()
}

/// Clean an API bullet list into sorted, unique type/member names.
///
/// ``* `Foo::Bar` - what it does`` becomes `Foo.Bar`.
pub fn parse_api_list(section: &str) -> Vec<String> {
    let cleaned = section.split('\n').filter_map(|line| {
        let line = line.trim_matches('*').trim_matches('-');
        let name = line.split('-').next().unwrap_or(line);
        let name = name.trim_matches('`').trim().trim_matches('`').replace("::", ".");
        (!name.is_empty()).then_some(name)
    });

    let mut apis = dedup_preserving_order(cleaned);
    apis.sort();
    apis
}

/// Find portal item ids (GUIDs, with or without hyphens) in the order they first appear.
pub fn extract_guids(text: &str) -> Vec<String> {
    let guid_re = Regex::new(
        r"(?i)[0-9a-f]{8}-?[0-9a-f]{4}-?[1-5][0-9a-f]{3}-?[89ab][0-9a-f]{3}-?[0-9a-f]{12}",
    )
    .expect("valid regex");

    dedup_preserving_order(guid_re.find_iter(text).map(|m| m.as_str().to_string()))
}

/// Split a comma-separated tag line into sorted tags.
pub fn parse_tags(section: &str) -> Vec<String> {
    let mut tags: Vec<String> = section
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    tags.sort();
    tags
}

fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
