// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fc;

/// Axis along which a coordinate value is measured.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value in decimal degrees.
    fn limit(&self) -> f64 {
        match self {
            Self::Latitude => 90.0,
            Self::Longitude => 180.0,
        }
    }
}

/// Hemisphere of a latitude or longitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The axis on which the hemisphere lies.
    pub fn axis(&self) -> Axis {
        match self {
            Self::North | Self::South => Axis::Latitude,
            Self::East | Self::West => Axis::Longitude,
        }
    }

    fn is_negative(&self) -> bool {
        matches!(self, Self::South | Self::West)
    }
}

/// Parses the degrees, minutes and seconds of a coordinate string.
///
/// Returns the components which have to be given in order. Each component
/// can be followed by its marker (`°` or `d`, `'` or `m`, `"` or `s`) and
/// they are separated by markers or whitespace.
fn components(s: &str) -> Option<Vec<f64>> {
    fn number(s: &str) -> Option<f64> {
        // rejects signs, exponents, inf and NaN which f64 would parse
        if s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            s.parse().ok()
        } else {
            None
        }
    }

    let mut values = Vec::with_capacity(3);
    let mut digits = String::new();
    // whether the last value has its marker already
    let mut marked = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() || c == '.' {
            digits.push(c);
            continue;
        }

        // index of the component the marker belongs to
        let marker = match c {
            '°' | 'º' | 'd' | 'D' => Some(0),
            '\'' | '′' => {
                // two single quotes mark seconds
                if c == '\'' && chars.peek() == Some(&'\'') {
                    chars.next();
                    Some(2)
                } else {
                    Some(1)
                }
            }
            'm' | 'M' => Some(1),
            '"' | '″' | 's' | 'S' => Some(2),
            c if c.is_whitespace() => None,
            _ => return None,
        };

        if !digits.is_empty() {
            values.push(number(&digits)?);
            digits.clear();
            marked = false;
        }

        if let Some(index) = marker {
            if marked || values.len() != index + 1 {
                return None;
            }
            marked = true;
        }
    }

    if !digits.is_empty() {
        values.push(number(&digits)?);
    }

    Some(values)
}

/// Whether the string ends in an `s` written right after a number, which
/// reads as the seconds marker as well as the southern hemisphere.
fn ends_with_seconds(s: &str) -> bool {
    let mut chars = s.chars().rev();
    matches!(chars.next(), Some('s' | 'S')) && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// Parses a coordinate string into decimal degrees and its hemisphere.
fn parse(input: &str) -> Option<(f64, Option<Hemisphere>)> {
    let mut s = input.trim();
    let mut hemisphere = None;

    if let Some(h) = s.chars().next().and_then(Hemisphere::from_char) {
        hemisphere = Some(h);
        s = s[1..].trim_start();
    }

    // `36s` is read as seconds unless that gives no coordinate
    if ends_with_seconds(s) {
        if let Some(decimal) = signed_decimal(s, hemisphere) {
            return Some((decimal, hemisphere));
        }
    }

    if let Some(h) = s.chars().next_back().and_then(Hemisphere::from_char) {
        if hemisphere.is_some() {
            return None;
        }
        hemisphere = Some(h);
        s = s[..s.len() - 1].trim_end();
    }

    Some((signed_decimal(s, hemisphere)?, hemisphere))
}

/// Converts the sign and components into decimal degrees.
fn signed_decimal(s: &str, hemisphere: Option<Hemisphere>) -> Option<f64> {
    let (signed, negative) = match s.as_bytes().first() {
        Some(b'-') => (true, true),
        Some(b'+') => (true, false),
        _ => (false, false),
    };

    let s = if signed {
        if hemisphere.is_some() {
            return None;
        }
        s[1..].trim_start()
    } else {
        s
    };

    let values = components(s)?;

    let (degrees, minutes, seconds) = match values.as_slice() {
        [d] => (*d, 0.0, 0.0),
        [d, m] => (*d, *m, 0.0),
        [d, m, s] => (*d, *m, *s),
        _ => return None,
    };

    // only the last component may have a fraction
    if values[..values.len() - 1].iter().any(|v| v.fract() != 0.0) {
        return None;
    }

    if minutes >= 60.0 || seconds >= 60.0 {
        return None;
    }

    let decimal = fc::dms_to_decimal(degrees, minutes, seconds);

    if !decimal.is_finite() {
        return None;
    }

    if negative || hemisphere.is_some_and(|h| h.is_negative()) {
        Some(-decimal)
    } else {
        Some(decimal)
    }
}

/// Parses a latitude or longitude given in degrees, minutes and seconds into
/// decimal degrees.
///
/// The string consists of the degrees optionally followed by minutes and
/// seconds e.g. `53° 51' 29.1234"`, `53 51.5`, `53d 51m 29s` or
/// `N53°51'29"`. Only the last component may have a fraction. Southern
/// latitudes and western longitudes are negative and given either by a
/// leading `-` or the hemisphere letter `S` or `W` in front of or behind the
/// value. An `s` right after the last number marks seconds, unless the value
/// only parses with it as the hemisphere.
///
/// Returns `None` if the string isn't a coordinate.
///
/// ```
/// use e6b::geom::parse_dms;
///
/// assert_eq!(parse_dms("53° 30'"), Some(53.5));
/// assert_eq!(parse_dms("53° 30' S"), Some(-53.5));
/// assert_eq!(parse_dms("N/A"), None);
/// ```
pub fn parse_dms(input: &str) -> Option<f64> {
    match parse(input) {
        Some((decimal, _)) => Some(decimal),
        None => {
            trace!("unparseable coordinate {input:?}");
            None
        }
    }
}

/// Formats decimal degrees as degrees, minutes and seconds with hemisphere.
///
/// ```
/// use e6b::geom::{format_dms, Axis};
///
/// assert_eq!(format_dms(-74.24561944, Axis::Longitude), "74° 14' 44.23\" W");
/// ```
pub fn format_dms(decimal: f64, axis: Axis) -> String {
    let hemisphere = match (axis, decimal < 0.0) {
        (Axis::Latitude, false) => 'N',
        (Axis::Latitude, true) => 'S',
        (Axis::Longitude, false) => 'E',
        (Axis::Longitude, true) => 'W',
    };

    // rounding to centiseconds first carries a 59.999" into the next minute
    let centiseconds = (decimal.abs() * 360_000.0).round() as u64;
    let degrees = centiseconds / 360_000;
    let minutes = centiseconds / 6_000 % 60;
    let seconds = (centiseconds % 6_000) as f64 / 100.0;

    format!("{degrees}° {minutes:02}' {seconds:05.2}\" {hemisphere}")
}

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parses the coordinate from latitude and longitude strings in degrees,
    /// minutes and seconds as accepted by [`parse_dms`].
    ///
    /// Returns `None` if either value isn't parsable, is out of range or its
    /// hemisphere belongs to the other axis e.g. a latitude marked `E`.
    pub fn from_dms(latitude: &str, longitude: &str) -> Option<Self> {
        fn on_axis(input: &str, axis: Axis) -> Option<f64> {
            let (decimal, hemisphere) = parse(input)?;

            if hemisphere.is_some_and(|h| h.axis() != axis) || decimal.abs() > axis.limit() {
                trace!("{input:?} is no valid {axis:?}");
                return None;
            }

            Some(decimal)
        }

        Some(Self {
            latitude: on_axis(latitude, Axis::Latitude)?,
            longitude: on_axis(longitude, Axis::Longitude)?,
        })
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}",
            format_dms(self.latitude, Axis::Latitude),
            format_dms(self.longitude, Axis::Longitude)
        )
    }
}
