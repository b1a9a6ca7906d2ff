//! Color palettes mapping color ids to fill and outline RGBA values

use crate::io::error::{ApparatusError, Result, invalid_configuration};
use crate::spatial::cell::ColorId;

/// RGBA color as stored in image buffers
pub type Rgba8 = [u8; 4];

// Sketch palette: fills are the normal tones followed by the light tones,
// outlines repeat the dark tones for both halves.
const ASSEMBLY_DARK: [&str; 10] = [
    "#d9542d", "#b5332c", "#984188", "#432658", "#192749", "#396ea8", "#008272", "#1d733e",
    "#8ab840", "#f6d13a",
];
const ASSEMBLY_NORMAL: [&str; 10] = [
    "#eb8f42", "#d83a31", "#d23e83", "#602e74", "#1f3a71", "#55b3d8", "#25ad92", "#159f50",
    "#c0d242", "#f6e857",
];
const ASSEMBLY_LIGHT: [&str; 10] = [
    "#f4ba3a", "#d7632b", "#c482ac", "#92548e", "#4b69a4", "#7bbbd9", "#71c3bc", "#80c076",
    "#e0e189", "#f1eeac",
];
const ASSEMBLY_BACKGROUND: &str = "#e8e8e7";

const TUNDRA: [&str; 5] = ["#40708c", "#8e998c", "#5d3f37", "#ed6954", "#f2e9e2"];
const RETRO: [&str; 7] = [
    "#69766f", "#9ed6cb", "#f7e5cc", "#9d8f7f", "#936454", "#bf5c32", "#efad57",
];
const ROYGBIV_WARM: [&str; 7] = [
    "#705f84", "#687d99", "#6c843e", "#fc9a1a", "#dc383a", "#aa3a33", "#9c4257",
];

// Outlines of single-tone palettes are the fill scaled by this factor
const OUTLINE_SHADE: f64 = 0.7;

/// Names accepted by [`Palette::by_name`]
pub const PALETTE_NAMES: [&str; 4] = ["assembly", "tundra", "retro", "roygbiv-warm"];

/// Fill and outline colors indexed by color id, plus a canvas background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    fills: Vec<Rgba8>,
    outlines: Vec<Rgba8>,
    background: Rgba8,
}

impl Palette {
    /// Build a palette from explicit colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if there are no fills or the outline count differs
    pub fn new(fills: Vec<Rgba8>, outlines: Vec<Rgba8>, background: Rgba8) -> Result<Self> {
        if fills.is_empty() {
            return Err(invalid_configuration(
                "palette",
                &"[]",
                &"a palette needs at least one color",
            ));
        }
        if fills.len() != outlines.len() {
            return Err(invalid_configuration(
                "palette",
                &outlines.len(),
                &format!("expected {} outline colors", fills.len()),
            ));
        }
        Ok(Self {
            fills,
            outlines,
            background,
        })
    }

    /// Build a palette whose outlines are darker shades of its fills
    ///
    /// # Errors
    ///
    /// Returns an error if a hex color is malformed or `fills` is empty
    pub fn shaded(fills: &[&str], background: &str) -> Result<Self> {
        let fills = fills
            .iter()
            .map(|hex| parse_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        let outlines = fills.iter().map(|&fill| shade(fill, OUTLINE_SHADE)).collect();
        Self::new(fills, outlines, parse_hex(background)?)
    }

    /// The palette the apparatus sketch draws with: 20 colors
    ///
    /// # Errors
    ///
    /// Never fails for the built-in colors; the signature follows hex parsing
    pub fn assembly() -> Result<Self> {
        let fills = ASSEMBLY_NORMAL
            .iter()
            .chain(ASSEMBLY_LIGHT.iter())
            .map(|hex| parse_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        let outlines = ASSEMBLY_DARK
            .iter()
            .chain(ASSEMBLY_DARK.iter())
            .map(|hex| parse_hex(hex))
            .collect::<Result<Vec<_>>>()?;
        Self::new(fills, outlines, parse_hex(ASSEMBLY_BACKGROUND)?)
    }

    /// Look up a built-in palette by name
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` for an unknown name
    pub fn by_name(name: &str) -> Result<Self> {
        match name {
            "assembly" => Self::assembly(),
            "tundra" => Self::shaded(&TUNDRA, ASSEMBLY_BACKGROUND),
            "retro" => Self::shaded(&RETRO, ASSEMBLY_BACKGROUND),
            "roygbiv-warm" => Self::shaded(&ROYGBIV_WARM, ASSEMBLY_BACKGROUND),
            other => Err(invalid_configuration(
                "palette",
                &other,
                &format!("expected one of: {}", PALETTE_NAMES.join(", ")),
            )),
        }
    }

    /// Number of colors
    pub const fn len(&self) -> usize {
        self.fills.len()
    }

    /// Palettes always hold at least one color
    pub const fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Color ids covered by this palette, for use as a generator color list
    pub fn color_ids(&self) -> Vec<ColorId> {
        (0..self.len()).collect()
    }

    /// Canvas background color
    pub const fn background(&self) -> Rgba8 {
        self.background
    }

    /// Fill color for `color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorIndex` if the palette has no such color
    pub fn fill(&self, color: ColorId) -> Result<Rgba8> {
        self.fills.get(color).copied().ok_or(ApparatusError::InvalidColorIndex {
            index: color,
            palette_size: self.fills.len(),
        })
    }

    /// Outline color for `color`
    ///
    /// # Errors
    ///
    /// Returns `InvalidColorIndex` if the palette has no such color
    pub fn outline(&self, color: ColorId) -> Result<Rgba8> {
        self.outlines
            .get(color)
            .copied()
            .ok_or(ApparatusError::InvalidColorIndex {
                index: color,
                palette_size: self.outlines.len(),
            })
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (the leading `#` is optional) into RGBA
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the string is not 6 or 8 hex digits
pub fn parse_hex(hex: &str) -> Result<Rgba8> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let malformed = || invalid_configuration("color", &hex, &"expected #rrggbb or #rrggbbaa");

    let well_formed = matches!(digits.len(), 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(malformed());
    }

    let mut rgba = [0, 0, 0, u8::MAX];
    for (channel, slot) in rgba.iter_mut().enumerate().take(digits.len() / 2) {
        let pair = digits
            .get(channel * 2..channel * 2 + 2)
            .ok_or_else(malformed)?;
        *slot = u8::from_str_radix(pair, 16)
            .map_err(|err| invalid_configuration("color", &hex, &err))?;
    }
    Ok(rgba)
}

fn shade(color: Rgba8, factor: f64) -> Rgba8 {
    let [r, g, b, a] = color;
    let scale = |channel: u8| (f64::from(channel) * factor).round() as u8;
    [scale(r), scale(g), scale(b), a]
}
