//! Color schemes and deterministic color assignment.
//!
//! # Algorithm
//!
//! For each activity without a manual color, in list order:
//! 1. Seed a [`ColorStream`] from the activity ID.
//! 2. Draw `index = stream.next_u32() % K`, where `K` is the palette size.
//! 3. While `index` was already taken in this call and fewer than `K`
//!    indices are taken, redraw.
//! 4. Assign `palette[index]`.
//!
//! With at most `K` activities all colors are distinct. Beyond that,
//! repeats are accepted.
//!
//! # Compatibility
//! The hash is a MurmurHash3-style fold over UTF-16 code units followed by
//! the `fmix32` finalizer, applied repeatedly. Its exact bit operations fix
//! every activity's color; [`COLOR_HASH_VERSION`] must change with them.

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Error;
use crate::models::Activity;

/// Version of the ID-to-color hash.
pub const COLOR_HASH_VERSION: u32 = 1;

/// Upper bound on redraws for one activity, so assignment always terminates.
const MAX_REDRAWS: usize = 4096;

/// Available color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorScheme {
    /// Saturated colors on a light UI.
    Light,
    /// Pastel colors on a dark UI.
    Dark,
    /// The classic palette on a light UI.
    Classic,
    /// The classic palette, brightened for a dark UI.
    #[serde(rename = "Classic Dark")]
    ClassicDark,
}

impl ColorScheme {
    /// All schemes, in menu order.
    pub const ALL: [ColorScheme; 4] = [Self::Light, Self::Dark, Self::Classic, Self::ClassicDark];

    /// Display name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Classic => "Classic",
            Self::ClassicDark => "Classic Dark",
        }
    }

    /// Background palette for this scheme.
    pub fn palette(&self) -> &'static [&'static str] {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
            Self::Classic => &CLASSIC_PALETTE,
            Self::ClassicDark => &CLASSIC_DARK_PALETTE,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| Error::UnknownColorScheme(s.to_string()))
    }
}

const LIGHT_PALETTE: [&str; 8] = [
    "#D32F2F", "#2E7D32", "#1565C0", "#BF360C", "#00838f", "#AD1457", "#827717", "#795548",
];

const DARK_PALETTE: [&str; 8] = [
    "#D47777", "#7BC77F", "#8AA3BF", "#E68E73", "#9BC6C9", "#CC9DB1", "#F5EA87", "#DE9D85",
];

const CLASSIC_PALETTE: [&str; 10] = [
    "#23AF83", "#3E9ED1", "#AE7CB4", "#DE676F", "#E4793C", "#D7AD00", "#33AE60", "#F08E94",
    "#8FBDD9", "#A2ACB0",
];

const CLASSIC_DARK_PALETTE: [&str; 10] = [
    "#36C0A5", "#5EBEF1", "#CE9CD4", "#EA636B", "#FF995C", "#F7CD20", "#47CE80", "#FFAEB4",
    "#AFDDF9", "#C2CCD0",
];

/// Whether a scheme uses a light or dark UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Light UI.
    Light,
    /// Dark UI.
    Dark,
}

/// UI mode of a color scheme.
pub fn color_mode_for(scheme: ColorScheme) -> ColorMode {
    match scheme {
        ColorScheme::Light | ColorScheme::Classic => ColorMode::Light,
        ColorScheme::Dark | ColorScheme::ClassicDark => ColorMode::Dark,
    }
}

/// Neutral background for activities without an assigned color.
pub fn fallback_color(scheme: ColorScheme) -> &'static str {
    match color_mode_for(scheme) {
        ColorMode::Light => "#4A5568",
        ColorMode::Dark => "#CBD5E0",
    }
}

/// Pseudo-random 32-bit stream seeded from a string.
///
/// Seeding folds each UTF-16 code unit into the state with a multiply and
/// rotate. Each draw applies the MurmurHash3 finalizer to the state and
/// returns the result, which also becomes the new state.
#[derive(Debug, Clone)]
pub struct ColorStream {
    state: u32,
}

impl ColorStream {
    /// Seeds a stream from a string.
    pub fn new(seed: &str) -> Self {
        let units: Vec<u16> = seed.encode_utf16().collect();
        let mut state = 1_779_033_703u32 ^ units.len() as u32;
        for unit in units {
            state = (state ^ u32::from(unit)).wrapping_mul(3_432_918_353);
            state = state.rotate_left(13);
        }
        Self { state }
    }
}

impl RngCore for ColorStream {
    fn next_u32(&mut self) -> u32 {
        let mut h = self.state;
        h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
        h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
        h ^= h >> 16;
        self.state = h;
        h
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Assigns background colors to activities, in place.
///
/// Activities with a manual color are skipped and do not reserve a palette
/// index. The result depends only on the IDs, their order, and the scheme.
/// Redraws for one activity stop after a fixed bound.
pub fn assign_colors(activities: &mut [Activity], scheme: ColorScheme) {
    let palette = scheme.palette();
    let color_len = palette.len();
    let mut indices: Vec<usize> = Vec::with_capacity(activities.len());

    for activity in activities.iter_mut() {
        if activity.manual_color().is_some() {
            continue;
        }
        let mut stream = ColorStream::new(activity.id());
        let mut index = stream.next_u32() as usize % color_len;
        let mut redraws = 0;
        while indices.len() < color_len && indices.contains(&index) && redraws < MAX_REDRAWS {
            index = stream.next_u32() as usize % color_len;
            redraws += 1;
        }
        indices.push(index);
        trace!(id = activity.id(), index, "assigned color");
        activity.set_background_color(palette[index]);
    }

    debug!(%scheme, assigned = indices.len(), "assigned activity colors");
}

/// Text color readable on a `#RRGGBB` background.
///
/// Uses perceived brightness `(299R + 587G + 114B) / 1000`: black above
/// 128, white otherwise. Input that is not parseable hex yields white.
pub fn text_color(color: &str) -> &'static str {
    let channel = |range: std::ops::Range<usize>| {
        color
            .get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
    };
    let (Some(r), Some(g), Some(b)) = (channel(1..3), channel(3..5), channel(5..7)) else {
        return "#ffffff";
    };
    let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) as f64 / 1000.0;
    if brightness > 128.0 {
        "#000000"
    } else {
        "#ffffff"
    }
}
