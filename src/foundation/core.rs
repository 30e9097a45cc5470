use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ProbeError, ProbeResult};

/// An opaque 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb8 {
    /// Red sample.
    pub r: u8,
    /// Green sample.
    pub g: u8,
    /// Blue sample.
    pub b: u8,
}

const NAMED: [(&str, Rgb8); 8] = [
    ("red", Rgb8::new(255, 0, 0)),
    ("green", Rgb8::new(0, 255, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("yellow", Rgb8::new(255, 255, 0)),
    ("gray", Rgb8::new(128, 128, 128)),
    ("orange", Rgb8::new(255, 128, 0)),
    ("black", Rgb8::new(0, 0, 0)),
    ("white", Rgb8::new(255, 255, 255)),
];

impl Rgb8 {
    /// Build a color from in-range samples.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, rejecting anything outside `0..=255`.
    ///
    /// Out-of-range samples are never truncated: a wrapped value would still produce a
    /// well-formed PNG, just of the wrong color.
    pub fn try_from_ints(r: i64, g: i64, b: i64) -> ProbeResult<Self> {
        fn sample(name: &str, v: i64) -> ProbeResult<u8> {
            u8::try_from(v).map_err(|_| {
                ProbeError::invalid_argument(format!(
                    "{name} sample {v} is outside the range 0..=255"
                ))
            })
        }

        Ok(Self {
            r: sample("red", r)?,
            g: sample("green", g)?,
            b: sample("blue", b)?,
        })
    }

    /// Look up one of the built-in color names (`red`, `gray`, `orange`, ...).
    pub fn named(name: &str) -> Option<Self> {
        let name = name.trim();
        NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Samples in `[r, g, b]` order.
    pub fn samples(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Accepts `#rrggbb`, `r,g,b` with decimal samples, or a built-in name.
impl FromStr for Rgb8 {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(c) = Self::named(s) {
            return Ok(c);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if s.contains(',') {
            return parse_triple(s);
        }
        Err(ProbeError::invalid_argument(format!(
            "unrecognized color \"{s}\" (expected #rrggbb, r,g,b, or a color name)"
        )))
    }
}

fn parse_hex(hex: &str) -> ProbeResult<Rgb8> {
    if hex.len() != 6 || !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(ProbeError::invalid_argument(
            "hex color must be #RRGGBB (case-insensitive)",
        ));
    }

    fn hex_byte(pair: &str) -> ProbeResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| ProbeError::invalid_argument(format!("invalid hex byte \"{pair}\"")))
    }

    Ok(Rgb8 {
        r: hex_byte(&hex[0..2])?,
        g: hex_byte(&hex[2..4])?,
        b: hex_byte(&hex[4..6])?,
    })
}

fn parse_triple(s: &str) -> ProbeResult<Rgb8> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ProbeError::invalid_argument(format!(
            "color triple \"{s}\" must have exactly three components"
        )));
    };

    fn int(part: &str) -> ProbeResult<i64> {
        part.parse::<i64>().map_err(|_| {
            ProbeError::invalid_argument(format!("color sample \"{part}\" is not an integer"))
        })
    }

    Rgb8::try_from_ints(int(r)?, int(g)?, int(b)?)
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Obj { r: i64, g: i64, b: i64 },
            Arr([i64; 3]),
        }

        let parsed = match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.parse(),
            Repr::Obj { r, g, b } => Rgb8::try_from_ints(r, g, b),
            Repr::Arr([r, g, b]) => Rgb8::try_from_ints(r, g, b),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
