/// MSBuild item fragments substituted into project templates.
///
/// Sample file lists hold paths relative to the sample folder. Files living outside the
/// folder (`../../../Controls/Foo.cs`, layout resources) are flattened into the standalone
/// project's `Controls` and `Resources` folders, so their items point there instead.
use crate::platform::Platform;

const INDENT: &str = "    ";

fn file_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

fn is_out_of_dir(path: &str) -> bool {
    path.contains("..")
}

/// Items for the code and XAML files of a sample.
///
/// Layout resources and other non-code files are left to [`android_layout_xml`].
pub fn code_files_xml(files: &[String], platform: Platform) -> String {
    let mut items = Vec::new();

    for file in files {
        let name = file_name(file);

        if file.ends_with(".xaml") {
            if platform.is_forms() {
                items.push(format!(
                    "<EmbeddedResource Include=\"{file}\"><Generator>MSBuild:UpdateDesignTimeXaml</Generator></EmbeddedResource>"
                ));
            } else {
                items.push(format!(
                    "<Page Include=\"{file}\"><SubType>Designer</SubType><Generator>MSBuild:Compile</Generator></Page>"
                ));
            }
        } else if let Some(xaml) = file.strip_suffix(".cs").filter(|f| f.ends_with(".xaml")) {
            items.push(format!(
                "<Compile Include=\"{file}\"><DependentUpon>{xaml}</DependentUpon></Compile>"
            ));
        } else if file.ends_with(".cs") {
            if is_out_of_dir(file) {
                items.push(format!("<Compile Include=\"Controls\\{name}\" />"));
            } else {
                items.push(format!("<Compile Include=\"{file}\" />"));
            }
        }
    }

    items
        .iter()
        .map(|item| format!("{INDENT}{item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `AndroidResource` items for layout and attribute resources.
pub fn android_layout_xml(files: &[String]) -> String {
    files
        .iter()
        .filter(|f| f.ends_with(".axml") || f.ends_with(".xml"))
        .map(|f| {
            let name = file_name(f);
            let folder = if name == "Attrs.xml" { "values" } else { "layout" };
            format!("{INDENT}<AndroidResource Include=\"Resources\\{folder}\\{name}\" />")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn wpf_code_files() {
        let xml = code_files_xml(
            &files(&["DisplayMap.xaml", "DisplayMap.xaml.cs", "Helper.cs", "readme.md"]),
            Platform::Wpf,
        );
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    <Page Include=\"DisplayMap.xaml\">"));
        assert_eq!(
            lines[1],
            "    <Compile Include=\"DisplayMap.xaml.cs\"><DependentUpon>DisplayMap.xaml</DependentUpon></Compile>"
        );
        assert_eq!(lines[2], "    <Compile Include=\"Helper.cs\" />");
    }

    #[test]
    fn forms_xaml_is_embedded() {
        let xml = code_files_xml(&files(&["Sample.xaml"]), Platform::FormsIos);
        assert!(xml.contains("<EmbeddedResource Include=\"Sample.xaml\">"));
    }

    #[test]
    fn out_of_dir_code_goes_to_controls() {
        let xml = code_files_xml(
            &files(&["../../../Controls/JoystickSeekBar.cs"]),
            Platform::Android,
        );
        assert_eq!(xml, "    <Compile Include=\"Controls\\JoystickSeekBar.cs\" />");
    }

    #[test]
    fn android_layouts() {
        let xml = android_layout_xml(&files(&[
            "../../../Resources/layout/NavigateAR.axml",
            "../../../Resources/values/Attrs.xml",
            "NavigateAR.cs",
        ]));
        assert_eq!(
            xml,
            "    <AndroidResource Include=\"Resources\\layout\\NavigateAR.axml\" />\n    <AndroidResource Include=\"Resources\\values\\Attrs.xml\" />"
        );
    }
}
