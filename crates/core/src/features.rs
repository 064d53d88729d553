//! PHP language levels and the syntactic capabilities they unlock
//!
//! Generation never queries a global "current version" service. Callers
//! derive a [`FeatureProfile`] once, from a [`PhpLanguageLevel`] or from
//! configuration, and pass it into every resolution call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::EnumIter;

use crate::error::{Error, Result};

/// Target PHP language level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumIter)]
pub enum PhpLanguageLevel {
    Php56,
    Php70,
    Php71,
    Php72,
    Php73,
    #[default]
    Php74,
    Php80,
    Php81,
    Php82,
    Php83,
}

impl PhpLanguageLevel {
    /// Dotted version string (`"7.4"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            PhpLanguageLevel::Php56 => "5.6",
            PhpLanguageLevel::Php70 => "7.0",
            PhpLanguageLevel::Php71 => "7.1",
            PhpLanguageLevel::Php72 => "7.2",
            PhpLanguageLevel::Php73 => "7.3",
            PhpLanguageLevel::Php74 => "7.4",
            PhpLanguageLevel::Php80 => "8.0",
            PhpLanguageLevel::Php81 => "8.1",
            PhpLanguageLevel::Php82 => "8.2",
            PhpLanguageLevel::Php83 => "8.3",
        }
    }

    /// Capabilities available at this level.
    pub fn feature_profile(&self) -> FeatureProfile {
        let php7 = *self >= PhpLanguageLevel::Php70;
        let php71 = *self >= PhpLanguageLevel::Php71;
        FeatureProfile {
            scalar_type_hints: php7,
            nullable_types: php71,
            return_type_declarations: php7,
            void_return_type: php71,
        }
    }
}

impl fmt::Display for PhpLanguageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhpLanguageLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let normalized = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("php") => &trimmed[3..],
            _ => trimmed,
        };
        match normalized {
            "5.6" | "56" => Ok(PhpLanguageLevel::Php56),
            "7.0" | "7" | "70" => Ok(PhpLanguageLevel::Php70),
            "7.1" | "71" => Ok(PhpLanguageLevel::Php71),
            "7.2" | "72" => Ok(PhpLanguageLevel::Php72),
            "7.3" | "73" => Ok(PhpLanguageLevel::Php73),
            "7.4" | "74" => Ok(PhpLanguageLevel::Php74),
            "8.0" | "8" | "80" => Ok(PhpLanguageLevel::Php80),
            "8.1" | "81" => Ok(PhpLanguageLevel::Php81),
            "8.2" | "82" => Ok(PhpLanguageLevel::Php82),
            "8.3" | "83" => Ok(PhpLanguageLevel::Php83),
            _ => Err(Error::unsupported_language_level(s)),
        }
    }
}

impl Serialize for PhpLanguageLevel {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PhpLanguageLevel {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // `language_level = 7.4` arrives as a float from TOML and the environment
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawLevel {
            Text(String),
            Number(f64),
        }

        match RawLevel::deserialize(deserializer)? {
            RawLevel::Text(s) => s.parse().map_err(serde::de::Error::custom),
            RawLevel::Number(n) => format!("{n:.1}").parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Syntactic capabilities of the target runtime that gate emitted hints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FeatureProfile {
    /// `int`, `string`, `bool`, `float` parameter hints
    pub scalar_type_hints: bool,
    /// `?Type` hints
    pub nullable_types: bool,
    /// `function f(): Type`
    pub return_type_declarations: bool,
    /// `function f(): void`
    pub void_return_type: bool,
}

impl FeatureProfile {
    /// Every capability enabled.
    pub const fn all() -> Self {
        Self {
            scalar_type_hints: true,
            nullable_types: true,
            return_type_declarations: true,
            void_return_type: true,
        }
    }

    /// No capability enabled (PHP 5.6 style output).
    pub const fn none() -> Self {
        Self {
            scalar_type_hints: false,
            nullable_types: false,
            return_type_declarations: false,
            void_return_type: false,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_php56_has_no_features() {
        assert_eq!(
            PhpLanguageLevel::Php56.feature_profile(),
            FeatureProfile::none()
        );
    }

    #[test]
    fn test_php70_has_scalar_and_return_types_only() {
        let profile = PhpLanguageLevel::Php70.feature_profile();
        assert!(profile.scalar_type_hints);
        assert!(profile.return_type_declarations);
        assert!(!profile.nullable_types);
        assert!(!profile.void_return_type);
    }

    #[test]
    fn test_php71_and_later_have_everything() {
        for level in PhpLanguageLevel::iter().filter(|l| *l >= PhpLanguageLevel::Php71) {
            assert_eq!(level.feature_profile(), FeatureProfile::all(), "{level}");
        }
    }

    #[test]
    fn test_parse_language_level() {
        assert_eq!(
            "7.4".parse::<PhpLanguageLevel>().unwrap(),
            PhpLanguageLevel::Php74
        );
        assert_eq!(
            "php8.1".parse::<PhpLanguageLevel>().unwrap(),
            PhpLanguageLevel::Php81
        );
        assert!("6.0".parse::<PhpLanguageLevel>().is_err());
    }

    #[test]
    fn test_parse_requires_exact_php_prefix() {
        assert_eq!(
            "PHP7.1".parse::<PhpLanguageLevel>().unwrap(),
            PhpLanguageLevel::Php71
        );
        assert!("hhpp7.4".parse::<PhpLanguageLevel>().is_err());
        assert!("h8".parse::<PhpLanguageLevel>().is_err());
        assert!("phpphp7.4".parse::<PhpLanguageLevel>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for level in PhpLanguageLevel::iter() {
            assert_eq!(level.to_string().parse::<PhpLanguageLevel>().unwrap(), level);
        }
    }
}
