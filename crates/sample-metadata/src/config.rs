use std::path::{Path, PathBuf};

use sample_common::platform::Platform;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// The repository root is required; derived locations default to the standard layout of
/// the samples repository but can be pointed elsewhere.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the samples repository checkout.
    pub repo_path: PathBuf,
    /// Folder holding one solution template folder per platform.
    pub templates_path: PathBuf,
    /// Folder holding the Android viewer's layout resources.
    pub android_layout_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SAMPLES_REPO_PATH`: path to the samples repository root
    ///
    /// Optional:
    /// - `SAMPLE_TEMPLATES_PATH` (default: `tools/metadata_tools/templates/solutions` under the repo)
    /// - `ANDROID_LAYOUT_PATH` (default: `src/Android/Xamarin.Android/Resources/layout` under the repo)
    pub fn from_env() -> Result<Self, AppError> {
        let repo_path = std::env::var("SAMPLES_REPO_PATH").map_err(|_| {
            AppError::Config("SAMPLES_REPO_PATH environment variable is required".to_string())
        })?;

        Self::from_parts(
            repo_path,
            std::env::var("SAMPLE_TEMPLATES_PATH").ok(),
            std::env::var("ANDROID_LAYOUT_PATH").ok(),
        )
    }

    fn from_parts(
        repo_path: String,
        templates_path: Option<String>,
        android_layout_path: Option<String>,
    ) -> Result<Self, AppError> {
        let repo_path = PathBuf::from(repo_path);
        if !repo_path.is_dir() {
            return Err(AppError::Config(format!(
                "samples repository not found at {}",
                repo_path.display()
            )));
        }

        let templates_path = templates_path.map(PathBuf::from).unwrap_or_else(|| {
            repo_path
                .join("tools")
                .join("metadata_tools")
                .join("templates")
                .join("solutions")
        });

        let android_layout_path = android_layout_path.map(PathBuf::from).unwrap_or_else(|| {
            repo_path
                .join("src")
                .join("Android")
                .join("Xamarin.Android")
                .join("Resources")
                .join("layout")
        });

        Ok(Self {
            repo_path,
            templates_path,
            android_layout_path,
        })
    }

    /// Returns the solution template folder for a platform, checking that it exists.
    pub fn template_dir(&self, platform: Platform) -> Result<PathBuf, AppError> {
        let dir = self.templates_path.join(platform.code());
        if !dir.is_dir() {
            return Err(AppError::Config(format!(
                "solution template for {platform} not found at {}",
                dir.display()
            )));
        }
        Ok(dir)
    }

    pub fn android_layout_dir(&self) -> &Path {
        &self.android_layout_path
    }
}
