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

//! Ranges of the form inputs.

use std::error;
use std::fmt;

use e6b::measurements::{Angle, AngleUnit, Speed};

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RangeError {
    field: &'static str,
    expected: &'static str,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} should be {}", self.field, self.expected)
    }
}

impl error::Error for RangeError {}

fn check(field: &'static str, valid: bool, expected: &'static str) -> Result<(), RangeError> {
    if valid {
        Ok(())
    } else {
        Err(RangeError { field, expected })
    }
}

fn degrees(angle: &Angle) -> f64 {
    *angle.convert_to(AngleUnit::Degrees).value()
}

/// A speed that is not negative.
pub fn speed(field: &'static str, speed: &Speed) -> Result<(), RangeError> {
    let value = *speed.value();
    check(field, value.is_finite() && value >= 0.0, "at least 0")
}

/// A direction from 0° to 360°.
pub fn direction(field: &'static str, angle: &Angle) -> Result<(), RangeError> {
    let deg = degrees(angle);
    check(field, (0.0..=360.0).contains(&deg), "within 0° and 360°")
}

/// A bank angle between -90° and 90°.
pub fn bank_angle(angle: &Angle) -> Result<(), RangeError> {
    let deg = degrees(angle);
    check("bank angle", deg > -90.0 && deg < 90.0, "between -90° and 90°")
}

/// A flight path angle from -90° to 90°.
pub fn flight_path_angle(angle: &Angle) -> Result<(), RangeError> {
    let deg = degrees(angle);
    check(
        "flight path angle",
        (-90.0..=90.0).contains(&deg),
        "within -90° and 90°",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds() {
        assert!(speed("TAS", &Speed::kt(0.0)).is_ok());
        assert!(speed("TAS", &Speed::kt(120.0)).is_ok());
        assert!(speed("TAS", &Speed::kt(-1.0)).is_err());
        assert!(speed("TAS", &Speed::kt(f64::NAN)).is_err());
    }

    #[test]
    fn directions() {
        assert!(direction("runway direction", &Angle::deg(0.0)).is_ok());
        assert!(direction("runway direction", &Angle::deg(360.0)).is_ok());
        assert!(direction("runway direction", &Angle::rad(std::f64::consts::PI)).is_ok());
        assert!(direction("runway direction", &Angle::deg(361.0)).is_err());
        assert!(direction("runway direction", &Angle::deg(-1.0)).is_err());
    }

    #[test]
    fn bank_angles() {
        assert!(bank_angle(&Angle::deg(89.9)).is_ok());
        assert!(bank_angle(&Angle::deg(-45.0)).is_ok());
        assert!(bank_angle(&Angle::deg(90.0)).is_err());
        assert!(bank_angle(&Angle::deg(-90.0)).is_err());
        assert!(bank_angle(&Angle::rad(std::f64::consts::FRAC_PI_2)).is_err());
    }

    #[test]
    fn flight_path_angles() {
        assert!(flight_path_angle(&Angle::deg(90.0)).is_ok());
        assert!(flight_path_angle(&Angle::deg(-3.0)).is_ok());
        assert!(flight_path_angle(&Angle::deg(91.0)).is_err());
    }

    #[test]
    fn message() {
        let err = bank_angle(&Angle::deg(90.0)).unwrap_err();
        assert_eq!(err.to_string(), "bank angle should be between -90° and 90°");
    }
}
