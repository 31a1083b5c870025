use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TransitError;

/// An RGB color, as found in `route_color` and `route_text_color`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = TransitError;

    /// Parses `RRGGBB`. `from_str_radix` would accept a sign, so the digits are checked first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TransitError::InvalidColor(s.to_owned()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&s[i..i + 2], 16).map_err(|_| TransitError::InvalidColor(s.to_owned()))
        };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A time of the service day, in seconds since "noon minus 12h".
///
/// Hours may go past 23 for trips that finish after midnight.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceTime(pub u32);

impl ServiceTime {
    pub fn from_hms(h: u32, m: u32, s: u32) -> ServiceTime {
        ServiceTime(h * 3600 + m * 60 + s)
    }

    pub fn seconds(&self) -> u32 {
        self.0
    }

    /// Parses `H:MM:SS` or `HH:MM:SS`.
    pub fn parse(s: &str) -> Option<ServiceTime> {
        let mut parts = s.split(':');
        let (h, m, sec) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || m.len() != 2 || sec.len() != 2 || h.is_empty() || h.len() > 3 {
            return None;
        }
        if ![h, m, sec].iter().all(|p| p.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }
        let (h, m, sec) = (h.parse().ok()?, m.parse().ok()?, sec.parse().ok()?);
        if m > 59 || sec > 59 {
            return None;
        }
        Some(ServiceTime::from_hms(h, m, sec))
    }
}

impl fmt::Display for ServiceTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.0;
        write!(f, "{:02}:{:02}:{:02}", t / 3600, t % 3600 / 60, t % 60)
    }
}

impl Serialize for ServiceTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
