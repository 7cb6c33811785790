use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// CSS colour literal as written in a chart configuration.
///
/// The source text is kept verbatim so serialized configs match what the host
/// page expects, while `rgba()` exposes the parsed value for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor {
    source: String,
    rgba: Color,
}

impl CssColor {
    pub fn parse(source: impl Into<String>) -> ChartResult<Self> {
        let source = source.into();
        let rgba = parse_css_color(&source)?;
        Ok(Self { source, rgba })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn rgba(&self) -> Color {
        self.rgba
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for CssColor {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CssColor {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CssColor> for String {
    fn from(value: CssColor) -> Self {
        value.source
    }
}

/// Fill or border colour: shared by every bar or listed per bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(CssColor),
    PerItem(Vec<CssColor>),
}

impl ColorSpec {
    /// Colour for bar `index`; per-item lists wrap around when shorter than the data.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<&CssColor> {
        match self {
            Self::Single(color) => Some(color),
            Self::PerItem(colors) if colors.is_empty() => None,
            Self::PerItem(colors) => colors.get(index % colors.len()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::PerItem(colors) => colors.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<CssColor> for ColorSpec {
    fn from(value: CssColor) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<CssColor>> for ColorSpec {
    fn from(value: Vec<CssColor>) -> Self {
        Self::PerItem(value)
    }
}

fn parse_css_color(source: &str) -> ChartResult<Color> {
    let text = source.trim().to_ascii_lowercase();
    let invalid = || ChartError::InvalidData(format!("unsupported css color `{source}`"));

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }
    if let Some(body) = text
        .strip_prefix("rgba(")
        .or_else(|| text.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_function(body).ok_or_else(invalid);
    }

    match text.as_str() {
        "white" => Ok(Color::rgb(1.0, 1.0, 1.0)),
        "black" => Ok(Color::rgb(0.0, 0.0, 0.0)),
        "gray" | "grey" => Ok(Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0)),
        "transparent" => Ok(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        _ => Err(invalid()),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok().map(|v| f64::from(v) / 255.0);
    let short = |index: usize| channel(&hex[index..=index].repeat(2));

    match hex.len() {
        3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
        4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts = body
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let channel = |value: f64| (value.is_finite() && (0.0..=255.0).contains(&value)).then_some(value / 255.0);
    let alpha = |value: f64| (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(value);

    match parts.as_slice() {
        [r, g, b] => Some(Color::rgb(channel(*r)?, channel(*g)?, channel(*b)?)),
        [r, g, b, a] => Some(Color::rgba(channel(*r)?, channel(*g)?, channel(*b)?, alpha(*a)?)),
        _ => None,
    }
}
