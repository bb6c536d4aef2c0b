use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use badgesmith_types::DEFAULT_FONT_FAMILY;

/// MIME type of the inlined font resource.
pub const FONT_MIME: &str = "application/x-font-woff2";

/// CSS `format()` hint for the font source.
pub const FONT_FORMAT: &str = "woff2";

/// A WOFF2 font to inline into the badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    family: String,
    data: Vec<u8>,
}

impl FontFace {
    /// Font bytes under the default family name.
    pub fn woff2(data: impl Into<Vec<u8>>) -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_string(),
            data: data.into(),
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_uri(&self) -> String {
        format!(
            "data:{FONT_MIME};charset=utf-8;base64,{}",
            STANDARD.encode(&self.data)
        )
    }

    /// The `@font-face` rule declaring this font.
    pub fn css(&self) -> String {
        format!(
            "@font-face {{ font-family: '{}'; src: url({}) format('{FONT_FORMAT}'); }}",
            css_string(&self.family),
            self.data_uri()
        )
    }
}

/// Body of a single-quoted CSS string.
fn css_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\a "),
            _ => out.push(c),
        }
    }
    out
}
