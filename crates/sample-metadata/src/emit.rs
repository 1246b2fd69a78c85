/// Export of a sample as a standalone solution.
///
/// The platform's solution template and the sample's own folder are copied into
/// `<output>/<platform>/<formal name>/`, files the sample references from outside its
/// folder are flattened into the project, and placeholder tokens are substituted
/// throughout the tree. Filesystem failures abort the export.
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::info;

use sample_common::csproj;
use sample_common::error::CommonError;
use sample_common::files;
use sample_common::platform::Platform;

use crate::catalog;
use crate::error::AppError;
use crate::model::SampleRecord;

/// Write `record` out as a standalone solution. Returns the project folder.
pub fn emit_standalone_solution(
    record: &SampleRecord,
    platform: Platform,
    sample_dir: &Path,
    template_dir: &Path,
    output_root: &Path,
) -> Result<PathBuf, AppError> {
    let output_dir = output_root
        .join(platform.code())
        .join(&record.formal_name);

    if output_dir.exists() {
        fs::remove_dir_all(&output_dir).map_err(|e| CommonError::io(&output_dir, e))?;
    }
    fs::create_dir_all(&output_dir).map_err(|e| CommonError::io(&output_dir, e))?;

    let template_files = files::copy_tree(template_dir, &output_dir)?;
    let sample_files = files::copy_tree(sample_dir, &output_dir)?;

    for file in record.source_files.iter().filter(|f| f.contains("..")) {
        let source = sample_dir.join(file);
        let target = output_dir.join(flattened_location(file));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| CommonError::io(parent, e))?;
        }
        fs::copy(&source, &target).map_err(|e| CommonError::io(&source, e))?;
    }

    let replacements = replacements(record, platform, chrono::Local::now().year());
    let summary =
        files::rewrite_tree_in_place(&output_dir, &replacements, catalog::TEMPLATED_EXTENSIONS)?;

    let descriptor = output_dir.join(format!("{}.sample", record.formal_name));
    files::write_contents(&descriptor, &dot_sample_contents(record, platform))?;

    info!(
        sample = %record.formal_name,
        platform = %platform,
        output = %output_dir.display(),
        template_files,
        sample_files,
        rewritten = summary.rewritten,
        renamed = summary.renamed,
        "emitted standalone solution"
    );
    Ok(output_dir)
}

/// Where an out-of-folder file lands inside the standalone project.
fn flattened_location(file: &str) -> PathBuf {
    let name = Path::new(file)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(file));

    if file.contains("Attrs.xml") {
        Path::new("Resources").join("values").join(name)
    } else if file.ends_with(".cs") {
        Path::new("Controls").join(name)
    } else {
        Path::new("Resources").join("layout").join(name)
    }
}

/// Placeholder tokens and their values, in substitution order.
pub fn replacements(record: &SampleRecord, platform: Platform, year: i32) -> Vec<(String, String)> {
    vec![
        ("$$project$$".to_string(), record.formal_name.clone()),
        // Templates ship as .slntemplate so they don't show up as solutions in the repo.
        (".slntemplate".to_string(), ".sln".to_string()),
        ("$$embedded_resources$$".to_string(), String::new()),
        (
            "$$code_and_xaml$$".to_string(),
            csproj::code_files_xml(&record.source_files, platform),
        ),
        (
            "$$axml_files$$".to_string(),
            csproj::android_layout_xml(&record.source_files),
        ),
        ("$$current_year$$".to_string(), year.to_string()),
        ("$$friendly_name$$".to_string(), record.friendly_name.clone()),
    ]
}

fn executable_path(platform: Platform) -> &'static str {
    match platform {
        Platform::Wpf => r"bin\debug\ArcGISRuntime.exe",
        Platform::WinUI => r"bin\x64\debug\ArcGISRuntime.exe",
        Platform::Uwp | Platform::FormsUwp => r"obj\x86\Debug\intermediatexaml\ArcGISRuntime.exe",
        Platform::Android | Platform::FormsAndroid => r"bin\debug\ArcGISRuntime.dll",
        Platform::Ios | Platform::FormsIos => r"bin\iPhone\debug\ArcGISRuntime.exe",
    }
}

/// Contents of the `.sample` descriptor read by the sample viewer tooling.
pub fn dot_sample_contents(record: &SampleRecord, platform: Platform) -> String {
    let mut xml = String::from("<ArcGISRuntimeSDKdotNetSample>\n");
    xml.push_str(&format!("\t<SampleName>{}</SampleName>\n", record.formal_name));
    xml.push_str(&format!(
        "\t<SampleDescription>{}</SampleDescription>\n",
        record.description
    ));
    xml.push_str(&format!(
        "\t<ScreenShot>{}</ScreenShot>\n",
        record.images.first().map(String::as_str).unwrap_or_default()
    ));

    xml.push_str("\t<CodeFiles>\n");
    for file in &record.source_files {
        xml.push_str(&format!("\t\t<CodeFile>{file}</CodeFile>\n"));
    }
    xml.push_str("\t</CodeFiles>\n");

    xml.push_str("\t<XAMLParseFiles>\n");
    for file in record.source_files.iter().filter(|f| f.ends_with(".xaml")) {
        xml.push_str(&format!("\t\t<XAMLParseFile>{file}</XAMLParseFile>\n"));
    }
    xml.push_str("\t</XAMLParseFiles>\n");

    xml.push_str(&format!("\t<DllExeFile>{}</DllExeFile>\n", executable_path(platform)));
    xml.push_str("</ArcGISRuntimeSDKdotNetSample>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record() -> SampleRecord {
        SampleRecord {
            formal_name: "DisplayMap".to_string(),
            friendly_name: "Display map".to_string(),
            description: "Display a map.".to_string(),
            images: vec!["DisplayMap.jpg".to_string()],
            source_files: vec!["DisplayMap.xaml".to_string(), "DisplayMap.xaml.cs".to_string()],
            ..SampleRecord::default()
        }
    }

    #[test]
    fn dot_sample_file_lists_files() {
        let xml = dot_sample_contents(&record(), Platform::Wpf);
        assert_eq!(
            xml,
            "<ArcGISRuntimeSDKdotNetSample>\n\
             \t<SampleName>DisplayMap</SampleName>\n\
             \t<SampleDescription>Display a map.</SampleDescription>\n\
             \t<ScreenShot>DisplayMap.jpg</ScreenShot>\n\
             \t<CodeFiles>\n\
             \t\t<CodeFile>DisplayMap.xaml</CodeFile>\n\
             \t\t<CodeFile>DisplayMap.xaml.cs</CodeFile>\n\
             \t</CodeFiles>\n\
             \t<XAMLParseFiles>\n\
             \t\t<XAMLParseFile>DisplayMap.xaml</XAMLParseFile>\n\
             \t</XAMLParseFiles>\n\
             \t<DllExeFile>bin\\debug\\ArcGISRuntime.exe</DllExeFile>\n\
             </ArcGISRuntimeSDKdotNetSample>\n"
        );
    }

    #[test]
    fn executable_depends_on_platform() {
        let rec = SampleRecord::default();
        let exe = |platform| dot_sample_contents(&rec, platform);
        assert!(exe(Platform::FormsUwp).contains(r"intermediatexaml\ArcGISRuntime.exe"));
        assert!(exe(Platform::FormsAndroid).contains(r"bin\debug\ArcGISRuntime.dll"));
        assert!(exe(Platform::Ios).contains(r"bin\iPhone\debug\ArcGISRuntime.exe"));
        assert!(exe(Platform::WinUI).contains(r"bin\x64\debug\ArcGISRuntime.exe"));
        assert!(dot_sample_contents(&rec, Platform::Wpf).contains("<ScreenShot></ScreenShot>"));
    }

    #[test]
    fn flattened_locations() {
        assert_eq!(
            flattened_location("../../../Resources/values/Attrs.xml"),
            Path::new("Resources").join("values").join("Attrs.xml")
        );
        assert_eq!(
            flattened_location("../../../Helpers/ArcGISLoginPrompt.cs"),
            Path::new("Controls").join("ArcGISLoginPrompt.cs")
        );
        assert_eq!(
            flattened_location("../../../Resources/layout/NavigateAR.axml"),
            Path::new("Resources").join("layout").join("NavigateAR.axml")
        );
    }

    #[test]
    fn replacement_order_and_values() {
        let reps = replacements(&record(), Platform::Wpf, 2026);
        let tokens: Vec<&str> = reps.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(
            tokens,
            vec![
                "$$project$$",
                ".slntemplate",
                "$$embedded_resources$$",
                "$$code_and_xaml$$",
                "$$axml_files$$",
                "$$current_year$$",
                "$$friendly_name$$",
            ]
        );
        assert_eq!(reps[5].1, "2026");
        assert_eq!(reps[6].1, "Display map");
    }

    #[test]
    fn emits_solution_tree() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join("templates").join("WPF");
        fs::create_dir_all(&template).unwrap();
        fs::write(template.join("$$project$$.slntemplate"), "Project(\"$$project$$\")").unwrap();
        fs::write(
            template.join("$$project$$.csproj"),
            "<ItemGroup>\n$$code_and_xaml$$\n</ItemGroup>\n<!-- (c) $$current_year$$ -->",
        )
        .unwrap();
        fs::write(
            template.join("MainWindow.xaml"),
            "<Window Title=\"$$friendly_name$$\"/>",
        )
        .unwrap();

        let samples = tmp.path().join("Samples").join("Map").join("DisplayMap");
        fs::create_dir_all(&samples).unwrap();
        fs::write(samples.join("DisplayMap.xaml"), "<UserControl/>").unwrap();
        fs::write(
            samples.join("DisplayMap.xaml.cs"),
            "namespace ArcGISRuntime.Samples.DisplayMap {}",
        )
        .unwrap();

        let output_root = tmp.path().join("out");
        // stale output is replaced
        let stale = output_root.join("WPF").join("DisplayMap");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("stale.txt"), "old").unwrap();

        let out =
            emit_standalone_solution(&record(), Platform::Wpf, &samples, &template, &output_root)
                .unwrap();

        assert_eq!(out, stale);
        assert!(!out.join("stale.txt").exists());
        assert_eq!(
            fs::read_to_string(out.join("DisplayMap.sln")).unwrap(),
            "Project(\"DisplayMap\")"
        );
        let csproj = fs::read_to_string(out.join("DisplayMap.csproj")).unwrap();
        assert!(csproj.contains("<Page Include=\"DisplayMap.xaml\">"));
        assert!(csproj.contains("<DependentUpon>DisplayMap.xaml</DependentUpon>"));
        assert!(!csproj.contains("$$current_year$$"));
        assert_eq!(
            fs::read_to_string(out.join("MainWindow.xaml")).unwrap(),
            "<Window Title=\"Display map\"/>"
        );
        assert!(out.join("DisplayMap.xaml.cs").exists());
        assert!(out.join("DisplayMap.sample").exists());
    }

    #[test]
    fn out_of_folder_files_are_flattened() {
        let tmp = TempDir::new().unwrap();
        let template = tmp.path().join("templates").join("Android");
        fs::create_dir_all(&template).unwrap();

        let viewer = tmp.path().join("Xamarin.Android");
        let samples = viewer.join("Samples").join("AR").join("NavigateAR");
        fs::create_dir_all(&samples).unwrap();
        fs::write(samples.join("NavigateAR.cs"), "class NavigateAR {}").unwrap();
        fs::create_dir_all(viewer.join("Controls")).unwrap();
        fs::write(
            viewer.join("Controls").join("JoystickSeekBar.cs"),
            "class JoystickSeekBar {}",
        )
        .unwrap();
        fs::create_dir_all(viewer.join("Resources").join("values")).unwrap();
        fs::write(
            viewer.join("Resources").join("values").join("Attrs.xml"),
            "<resources/>",
        )
        .unwrap();

        let rec = SampleRecord {
            formal_name: "NavigateAR".to_string(),
            source_files: vec![
                "../../../Controls/JoystickSeekBar.cs".to_string(),
                "../../../Resources/values/Attrs.xml".to_string(),
                "NavigateAR.cs".to_string(),
            ],
            ..SampleRecord::default()
        };

        let output_root = tmp.path().join("out");
        let out =
            emit_standalone_solution(&rec, Platform::Android, &samples, &template, &output_root)
                .unwrap();

        assert!(out.join("Controls").join("JoystickSeekBar.cs").exists());
        assert!(out.join("Resources").join("values").join("Attrs.xml").exists());
        assert!(out.join("NavigateAR.cs").exists());
    }

    #[test]
    fn missing_template_fails() {
        let tmp = TempDir::new().unwrap();
        let samples = tmp.path().join("sample");
        fs::create_dir_all(&samples).unwrap();
        let result = emit_standalone_solution(
            &record(),
            Platform::Wpf,
            &samples,
            &tmp.path().join("no-template"),
            &tmp.path().join("out"),
        );
        assert!(result.is_err());
    }
}
