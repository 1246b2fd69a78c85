/// Fixed data about the samples repository: names that need special handling and the
/// file extensions each step cares about.

/// Category folder names that lost their spaces, with their display form.
pub const CATEGORY_FIXUPS: &[(&str, &str)] = &[
    ("LocalServer", "Local Server"),
    ("NetworkAnalysis", "Network analysis"),
    ("UtilityNetwork", "Utility network"),
    ("AugmentedReality", "Augmented reality"),
];

/// Historical documentation pages, per sample, that must keep redirecting.
///
/// Each slug is published as `/net/{platform}/sample-code/{slug}`.
pub const LEGACY_REDIRECTS: &[(&str, &[&str])] = &[
    ("DisplayDeviceLocation", &["display-device-location/"]),
    (
        "ToggleBetweenFeatureRequestModes",
        &[
            "servicefeaturetablenocache.htm",
            "servicefeaturetablemanualcache.htm",
            "servicefeaturetablecache.htm",
        ],
    ),
    (
        "DisplayFeatureLayers",
        &[
            "featurelayergeopackage.htm",
            "featurelayergeodatabase.htm",
            "featurelayershapefile.htm",
        ],
    ),
];

/// Android AR samples that use the joystick control and its attributes.
pub const ANDROID_JOYSTICK_SAMPLES: &[&str] =
    &["NavigateAR", "CollectDataAR", "ViewHiddenInfrastructureAR"];

pub const ANDROID_JOYSTICK_FILES: &[&str] = &[
    "../../../Resources/values/Attrs.xml",
    "../../../Controls/JoystickSeekBar.cs",
];

/// Samples that sign in to a portal through the shared login helper.
pub const LOGIN_HELPER_SAMPLES: &[&str] = &["OAuth", "AuthorMap", "NavigateAR", "SearchPortalMaps"];

pub const LOGIN_HELPER_FILE: &str = "../../../Helpers/ArcGISLoginPrompt.cs";

/// Extensions (without dot) listed as sample source files.
pub const SNIPPET_EXTENSIONS: &[&str] = &["axml", "xaml", "cs", "xml"];

/// Extensions (without dot) whose contents get placeholder substitution on export.
pub const TEMPLATED_EXTENSIONS: &[&str] = &[
    "cs",
    "xaml",
    "sln",
    "slntemplate",
    "md",
    "csproj",
    "shproj",
    "axml",
    "xml",
];

/// Where Android layout references point, relative to a sample folder.
pub const ANDROID_LAYOUT_PREFIX: &str = "../../../Resources/layout/";

/// Metadata sidecar written next to each README.
pub const METADATA_FILE_NAME: &str = "readme.metadata.json";

pub const README_FILE_NAME: &str = "readme.md";

pub fn legacy_redirects(formal_name: &str) -> &'static [&'static str] {
    LEGACY_REDIRECTS
        .iter()
        .find(|(name, _)| *name == formal_name)
        .map(|(_, slugs)| *slugs)
        .unwrap_or(&[])
}

pub fn fix_category(folder_name: &str) -> String {
    CATEGORY_FIXUPS
        .iter()
        .fold(folder_name.to_string(), |acc, (from, to)| acc.replace(from, to))
}
