//! Display Settings Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::settings::errors::SettingsError;

/// Section title used when none is configured.
pub const DEFAULT_SECTION_TITLE: &str = "Promoted Product";

#[expect(
    clippy::expect_used,
    reason = "constant pattern, exercised by the unit tests below"
)]
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color pattern")
});

/// CSS hex color, `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// The color as written, lowercased.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexColor {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();

        if HEX_COLOR.is_match(value) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(SettingsError::InvalidColor(value.to_string()))
        }
    }
}

impl TryFrom<String> for HexColor {
    type Error = SettingsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// How the storefront banner is styled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Heading shown before the product title, e.g. "FLASH SALE"
    pub section_title: Option<String>,

    /// Banner background color
    pub background_color: Option<HexColor>,

    /// Banner text color
    pub text_color: Option<HexColor>,
}

impl DisplaySettings {
    /// The configured section title, or [`DEFAULT_SECTION_TITLE`].
    #[must_use]
    pub fn section_title(&self) -> &str {
        self.section_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_SECTION_TITLE)
    }
}

/// Changes submitted from the settings page.
///
/// `None` leaves a setting untouched; an empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySettingsUpdate {
    /// New section title
    pub section_title: Option<String>,

    /// New background color
    pub background_color: Option<String>,

    /// New text color
    pub text_color: Option<String>,
}
