//! Export platforms and their output slots.

use derive_more::Display;

use crate::{Error, Result};

/// A Godot export platform this action publishes artifacts for.
///
/// Parsed from the exact `platform` label Godot writes into
/// `export_presets.cfg`. Labels are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Platform {
    #[display("Windows Desktop")]
    WindowsDesktop,
    #[display("HTML5")]
    Html5,
    #[display("Mac OSX")]
    MacOsx,
    #[display("Linux/X11")]
    LinuxX11,
    #[display("Android")]
    Android,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::WindowsDesktop,
        Platform::Html5,
        Platform::MacOsx,
        Platform::LinuxX11,
        Platform::Android,
    ];

    /// The output slot artifacts for this platform are published under.
    pub fn slot(&self) -> OutputSlot {
        match self {
            Platform::WindowsDesktop => OutputSlot::Windows,
            Platform::Html5 => OutputSlot::Html5,
            Platform::MacOsx => OutputSlot::Osx,
            Platform::LinuxX11 => OutputSlot::Linux,
            Platform::Android => OutputSlot::Android,
        }
    }

    /// Whether packaging this platform's build needs a Windows compatibility layer.
    pub fn requires_wine(&self) -> bool {
        matches!(self, Platform::WindowsDesktop)
    }
}

impl std::str::FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Windows Desktop" => Ok(Platform::WindowsDesktop),
            "HTML5" => Ok(Platform::Html5),
            "Mac OSX" => Ok(Platform::MacOsx),
            "Linux/X11" => Ok(Platform::LinuxX11),
            "Android" => Ok(Platform::Android),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}

/// A named artifact output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    Windows,
    Html5,
    Osx,
    Linux,
    Android,
}

impl OutputSlot {
    pub const ALL: [OutputSlot; 5] = [
        OutputSlot::Windows,
        OutputSlot::Html5,
        OutputSlot::Osx,
        OutputSlot::Linux,
        OutputSlot::Android,
    ];

    /// Output name as the calling workflow sees it.
    pub fn output_name(&self) -> &'static str {
        match self {
            OutputSlot::Windows => "windows_artifact",
            OutputSlot::Html5 => "html5_artifact",
            OutputSlot::Osx => "osx_artifact",
            OutputSlot::Linux => "linux_artifact",
            OutputSlot::Android => "android_artifact",
        }
    }
}

impl std::fmt::Display for OutputSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.output_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_labels() {
        assert_eq!(
            "Windows Desktop".parse::<Platform>().unwrap(),
            Platform::WindowsDesktop
        );
        assert_eq!("HTML5".parse::<Platform>().unwrap(), Platform::Html5);
        assert_eq!("Mac OSX".parse::<Platform>().unwrap(), Platform::MacOsx);
        assert_eq!("Linux/X11".parse::<Platform>().unwrap(), Platform::LinuxX11);
        assert_eq!("Android".parse::<Platform>().unwrap(), Platform::Android);
    }

    #[test]
    fn test_unknown_label_is_error() {
        let err = "PlayStation".parse::<Platform>().unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(ref p) if p == "PlayStation"));

        // Labels are matched exactly.
        assert!("html5".parse::<Platform>().is_err());
        assert!(" HTML5".parse::<Platform>().is_err());
    }

    #[test]
    fn test_display_round_trips_label() {
        for platform in Platform::ALL {
            assert_eq!(platform.to_string().parse::<Platform>().unwrap(), platform);
        }
    }

    #[test]
    fn test_only_windows_requires_wine() {
        let wine: Vec<_> = Platform::ALL
            .into_iter()
            .filter(Platform::requires_wine)
            .collect();
        assert_eq!(wine, vec![Platform::WindowsDesktop]);
    }

    #[test]
    fn test_each_platform_has_distinct_slot() {
        let slots: Vec<_> = Platform::ALL.iter().map(Platform::slot).collect();
        assert_eq!(slots, OutputSlot::ALL.to_vec());
    }

    #[test]
    fn test_slot_names() {
        for slot in OutputSlot::ALL {
            assert_eq!(slot.to_string(), slot.output_name());
        }
        assert_eq!(OutputSlot::Linux.output_name(), "linux_artifact");
    }
}
