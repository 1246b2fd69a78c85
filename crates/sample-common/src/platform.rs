use std::fmt;
use std::str::FromStr;

/// A viewer platform that samples are written for.
///
/// Codes match the directory names used under `src/` and `templates/solutions/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Uwp,
    Wpf,
    WinUI,
    /// Xamarin.Forms on Android
    FormsAndroid,
    /// Xamarin.Forms on iOS
    FormsIos,
    /// Xamarin.Forms on UWP
    FormsUwp,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown platform '{0}' (expected one of: Android, iOS, UWP, WPF, WinUI, XFA, XFI, XFU)")]
pub struct UnknownPlatform(pub String);

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::Android,
        Platform::Ios,
        Platform::Uwp,
        Platform::Wpf,
        Platform::WinUI,
        Platform::FormsAndroid,
        Platform::FormsIos,
        Platform::FormsUwp,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Uwp => "UWP",
            Platform::Wpf => "WPF",
            Platform::WinUI => "WinUI",
            Platform::FormsAndroid => "XFA",
            Platform::FormsIos => "XFI",
            Platform::FormsUwp => "XFU",
        }
    }

    /// Name used in documentation URLs. All Xamarin.Forms targets share "Forms".
    pub fn display_name(self) -> &'static str {
        if self.is_forms() {
            "Forms"
        } else {
            self.code()
        }
    }

    pub fn is_forms(self) -> bool {
        matches!(
            self,
            Platform::FormsAndroid | Platform::FormsIos | Platform::FormsUwp
        )
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}
