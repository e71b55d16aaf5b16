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

//! Conversions of values whose units are given as tags.
//!
//! Web forms hand over units as plain strings like `"knots"` or
//! `"nauticalMiles"`. The functions of this module parse those tags and fail
//! with [`Error::InvalidUnit`] if a tag is no unit of the quantity, instead of
//! returning some meaningless number.
//!
//! ```
//! use e6b::convert;
//!
//! # fn main() -> Result<(), e6b::Error> {
//! let ms = convert::convert_speed(1.0, "knots", "m/s")?;
//! assert_eq!(ms, 0.514444);
//!
//! let err = convert::convert_speed(1.0, "invalid", "m/s").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "invalid unit \"invalid\" for conversion to meters per second"
//! );
//! # Ok(())
//! # }
//! ```

use std::str::FromStr;

use log::debug;

use crate::error::{ConversionDirection, Error};
use crate::measurements::{
    self, AngleUnit, LengthUnit, SpeedUnit, TemperatureUnit, UnitOfMeasure,
};

fn parse_unit<U>(unit: &str, direction: ConversionDirection) -> Result<U, Error>
where
    U: UnitOfMeasure<f64> + FromStr,
{
    unit.parse().map_err(|_| {
        debug!("rejecting {} conversion with unit {unit:?}", U::quantity());
        Error::InvalidUnit {
            unit: unit.to_string(),
            quantity: U::quantity(),
            direction,
        }
    })
}

fn to_si<U>(value: f64, unit: &str) -> Result<f64, Error>
where
    U: UnitOfMeasure<f64> + FromStr,
{
    let unit: U = parse_unit(unit, ConversionDirection::ToSi)?;
    Ok(unit.to_si(&value))
}

fn from_si<U>(value: f64, unit: &str) -> Result<f64, Error>
where
    U: UnitOfMeasure<f64> + FromStr,
{
    let unit: U = parse_unit(unit, ConversionDirection::FromSi)?;
    Ok(U::from_si(value, &unit))
}

fn convert<U>(value: f64, from: &str, to: &str) -> Result<f64, Error>
where
    U: UnitOfMeasure<f64> + FromStr,
{
    let from: U = parse_unit(from, ConversionDirection::ToSi)?;
    let to: U = parse_unit(to, ConversionDirection::FromSi)?;
    Ok(measurements::convert(value, &from, &to))
}

/// Returns whether `unit` is the tag of a [`SpeedUnit`].
pub fn is_speed_unit(unit: &str) -> bool {
    unit.parse::<SpeedUnit>().is_ok()
}

/// Returns whether `unit` is the tag of a [`LengthUnit`].
pub fn is_length_unit(unit: &str) -> bool {
    unit.parse::<LengthUnit>().is_ok()
}

/// Returns whether `unit` is the tag of an [`AngleUnit`].
pub fn is_angle_unit(unit: &str) -> bool {
    unit.parse::<AngleUnit>().is_ok()
}

/// Returns whether `unit` is the tag of a [`TemperatureUnit`].
pub fn is_temperature_unit(unit: &str) -> bool {
    unit.parse::<TemperatureUnit>().is_ok()
}

/// Converts a speed in `unit` to meters per second.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no speed unit.
pub fn to_meters_per_second(value: f64, unit: &str) -> Result<f64, Error> {
    to_si::<SpeedUnit>(value, unit)
}

/// Converts a speed in meters per second to `unit`.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no speed unit.
pub fn from_meters_per_second(value: f64, unit: &str) -> Result<f64, Error> {
    from_si::<SpeedUnit>(value, unit)
}

/// Converts a speed between two units.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if either unit is no speed unit.
pub fn convert_speed(value: f64, from: &str, to: &str) -> Result<f64, Error> {
    convert::<SpeedUnit>(value, from, to)
}

/// Converts a length in `unit` to meters.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no length unit.
pub fn to_meters(value: f64, unit: &str) -> Result<f64, Error> {
    to_si::<LengthUnit>(value, unit)
}

/// Converts a length in meters to `unit`.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no length unit.
pub fn from_meters(value: f64, unit: &str) -> Result<f64, Error> {
    from_si::<LengthUnit>(value, unit)
}

/// Converts a length between two units.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if either unit is no length unit.
pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, Error> {
    convert::<LengthUnit>(value, from, to)
}

/// Converts an angle in `unit` to radians.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no angle unit.
pub fn to_radians(value: f64, unit: &str) -> Result<f64, Error> {
    to_si::<AngleUnit>(value, unit)
}

/// Converts an angle in radians to `unit`.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no angle unit.
pub fn from_radians(value: f64, unit: &str) -> Result<f64, Error> {
    from_si::<AngleUnit>(value, unit)
}

/// Converts an angle between two units.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if either unit is no angle unit.
pub fn convert_angle(value: f64, from: &str, to: &str) -> Result<f64, Error> {
    convert::<AngleUnit>(value, from, to)
}

/// Converts a temperature in `unit` to Kelvin.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no temperature unit.
pub fn to_kelvin(value: f64, unit: &str) -> Result<f64, Error> {
    to_si::<TemperatureUnit>(value, unit)
}

/// Converts a temperature in Kelvin to `unit`.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if `unit` is no temperature unit.
pub fn from_kelvin(value: f64, unit: &str) -> Result<f64, Error> {
    from_si::<TemperatureUnit>(value, unit)
}

/// Converts a temperature between two units.
///
/// # Errors
///
/// Returns [`Error::InvalidUnit`] if either unit is no temperature unit.
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, Error> {
    convert::<TemperatureUnit>(value, from, to)
}
