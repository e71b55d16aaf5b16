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

//! Physical quantities measured in a unit.
//!
//! Every quantity has a closed set of units and one SI unit through which
//! all conversions are routed. A [`Measurement`] pairs a value with its unit
//! and converts on demand:
//!
//! ```
//! use e6b::measurements::{Speed, SpeedUnit};
//!
//! let tas = Speed::kt(100.0);
//! assert_eq!(tas.to_si(), 51.4444);
//! assert_eq!(*tas.convert_to(SpeedUnit::Knots).value(), 100.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod angle;
mod angular_velocity;
pub mod constants;
mod length;
mod speed;
mod temperature;

pub use angle::{Angle, AngleUnit};
pub use angular_velocity::{AngularVelocity, AngularVelocityUnit};
pub use length::{Length, LengthUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};

/// The physical quantity of a unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub enum PhysicalQuantity {
    Angle,
    AngularVelocity,
    Length,
    Speed,
    Temperature,
}

impl PhysicalQuantity {
    /// Returns the name of the quantity's SI unit.
    pub fn si_name(&self) -> &'static str {
        match self {
            Self::Angle => "radians",
            Self::AngularVelocity => "radians per second",
            Self::Length => "meters",
            Self::Speed => "meters per second",
            Self::Temperature => "kelvin",
        }
    }
}

impl fmt::Display for PhysicalQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle => write!(f, "angle"),
            Self::AngularVelocity => write!(f, "angular velocity"),
            Self::Length => write!(f, "length"),
            Self::Speed => write!(f, "speed"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}

/// A unit in which a physical quantity is measured.
///
/// Conversions between two units of the same quantity are routed through the
/// [SI unit](UnitOfMeasure::si). Converting from or to the SI unit itself
/// returns the value unchanged.
pub trait UnitOfMeasure<T>: Copy + PartialEq {
    /// The quantity measured by the unit.
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    /// The symbol of the unit e.g. `kt` for knots.
    fn symbol(&self) -> &'static str;

    /// Converts the `value` given in the SI unit into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts the `value` given in this unit into the SI unit.
    fn to_si(&self, value: &T) -> T;
}

/// Converts a `value` between two units of the same quantity.
///
/// The value is returned as is if both units are the same.
///
/// ```
/// use e6b::measurements::{convert, SpeedUnit};
///
/// let mph = convert(1.0, &SpeedUnit::Knots, &SpeedUnit::MilesPerHour);
/// assert!((mph - 1.150778).abs() < 1e-6);
/// ```
pub fn convert<U: UnitOfMeasure<f64>>(value: f64, from: &U, to: &U) -> f64 {
    if from == to {
        value
    } else {
        U::from_si(from.to_si(&value), to)
    }
}

/// A value measured in a unit.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

/// A value tagged with the unit it's measured in.
pub type ValueUnitPair<U> = Measurement<f64, U>;

impl<T, U> Measurement<T, U> {
    /// Creates a new measurement.
    pub const fn new(value: T, unit: U) -> Self {
        Self { value, unit }
    }

    /// The measured value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The unit of the value.
    pub fn unit(&self) -> &U {
        &self.unit
    }
}

impl<U: UnitOfMeasure<f64>> Measurement<f64, U> {
    /// Creates the measurement in `unit` from a `value` given in the SI unit.
    pub fn from_si(value: f64, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    /// Returns the value in the SI unit.
    pub fn to_si(&self) -> f64 {
        self.unit.to_si(&self.value)
    }

    /// Returns this measurement converted into the `unit`.
    pub fn convert_to(&self, unit: U) -> Self {
        Self {
            value: convert(self.value, &self.unit, &unit),
            unit,
        }
    }
}

impl<U: UnitOfMeasure<f64>> PartialEq for Measurement<f64, U> {
    fn eq(&self, other: &Self) -> bool {
        if self.unit == other.unit {
            self.value == other.value
        } else {
            self.to_si() == other.to_si()
        }
    }
}

impl<U: UnitOfMeasure<f64>> PartialOrd for Measurement<f64, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.unit == other.unit {
            self.value.partial_cmp(&other.value)
        } else {
            self.to_si().partial_cmp(&other.to_si())
        }
    }
}

impl<U: UnitOfMeasure<f64>> fmt::Display for Measurement<f64, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.unit.symbol();
        // plain degrees are written without a space
        let sep = if symbol == "°" { "" } else { " " };

        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$}{sep}{symbol}", self.value)
        } else {
            write!(f, "{}{sep}{symbol}", self.value)
        }
    }
}

impl<U: UnitOfMeasure<f64>> Add for Measurement<f64, U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + convert(rhs.value, &rhs.unit, &self.unit),
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f64>> Sub for Measurement<f64, U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - convert(rhs.value, &rhs.unit, &self.unit),
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f64>> Neg for Measurement<f64, U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f64>> Mul<f64> for Measurement<f64, U> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<U: UnitOfMeasure<f64>> Div<f64> for Measurement<f64, U> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}
