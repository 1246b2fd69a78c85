/// Discovery of a sample's source files.
///
/// Source files are the code and markup files in the sample folder. Android samples also
/// reference layout resources living in the viewer's shared `Resources/layout` folder;
/// those are found by scanning the code for layout references.
use std::fs;
use std::path::Path;

use tracing::warn;

use sample_common::error::CommonError;
use sample_common::files;
use sample_common::platform::Platform;

use crate::catalog;
use crate::error::AppError;
use crate::model::SampleRecord;

/// Code patterns that load a layout resource by name.
const LAYOUT_REFERENCES: &[&str] = &[
    "SetContentView(Resource.Layout.",
    "SetContentView(ArcGISRuntime.Resource.Layout.",
    ".Inflate(Resource.Layout.",
];

/// Layout file extensions, in probing order.
const LAYOUT_EXTENSIONS: &[&str] = &["xml", "axml"];

/// Add the files of the sample folder containing `readme_path` to `record.source_files`.
///
/// Layout references are resolved against `layout_dir` on Android only; without one they are
/// not scanned. The resulting list is sorted and free of duplicates.
pub fn populate_snippets_from_folder(
    record: &mut SampleRecord,
    platform: Platform,
    readme_path: &Path,
    layout_dir: Option<&Path>,
) -> Result<(), AppError> {
    let sample_dir = readme_path.parent().unwrap_or(Path::new("."));
    let entries = fs::read_dir(sample_dir).map_err(|e| CommonError::io(sample_dir, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| CommonError::io(sample_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        if catalog::SNIPPET_EXTENSIONS.contains(&extension) {
            record.source_files.push(file_name.to_string());
        }

        if extension != "cs" {
            continue;
        }
        let Some(layout_dir) = layout_dir.filter(|_| platform == Platform::Android) else {
            continue;
        };
        let code = match files::read_contents(&path) {
            Ok(code) => code,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "could not scan code file for layouts"
                );
                continue;
            }
        };
        for layout in layout_references(&code) {
            match find_layout_file(layout_dir, layout) {
                Some(layout_file) => record
                    .source_files
                    .push(format!("{}{layout_file}", catalog::ANDROID_LAYOUT_PREFIX)),
                None => warn!(
                    sample = %record.formal_name,
                    layout,
                    layout_dir = %layout_dir.display(),
                    "couldn't find layout file for sample"
                ),
            }
        }
    }

    if platform == Platform::Android
        && catalog::ANDROID_JOYSTICK_SAMPLES.contains(&record.formal_name.as_str())
    {
        record
            .source_files
            .extend(catalog::ANDROID_JOYSTICK_FILES.iter().map(|f| f.to_string()));
    }
    if catalog::LOGIN_HELPER_SAMPLES.contains(&record.formal_name.as_str()) {
        record
            .source_files
            .push(catalog::LOGIN_HELPER_FILE.to_string());
    }

    record.source_files.sort();
    record.source_files.dedup();
    Ok(())
}

/// Names of layouts loaded by `code`, in order of appearance.
fn layout_references(code: &str) -> Vec<&str> {
    code.lines()
        .filter(|line| LAYOUT_REFERENCES.iter().any(|pattern| line.contains(pattern)))
        .filter_map(|line| {
            let (_, rest) = line.split_once("Layout.")?;
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let name = &rest[..end];
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// File name of the layout called `name`, preferring `.xml` over `.axml`.
fn find_layout_file(layout_dir: &Path, name: &str) -> Option<String> {
    LAYOUT_EXTENSIONS
        .iter()
        .map(|ext| format!("{name}.{ext}"))
        .find(|file| layout_dir.join(file).is_file())
}
