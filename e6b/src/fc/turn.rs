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

use log::debug;

use crate::error::Error;
use crate::measurements::constants::{G, STANDARD_RATE_TURN};
use crate::measurements::{Angle, AngularVelocity, Length, Speed};

// cos(bank) below which the tangent of the bank angle is unbounded
const SINGULARITY: f64 = 1e-12;

/// Returns the bank angle in radians if a turn with it has a solution.
fn bank_angle_rad(bank_angle: &Angle) -> Result<f64, Error> {
    let bank = bank_angle.to_si();

    if bank.cos().abs() < SINGULARITY {
        debug!("rejecting singular bank angle of {bank_angle}");
        Err(Error::SingularBankAngle)
    } else {
        Ok(bank)
    }
}

/// Returns the radius of a level turn in meters.
///
/// A bank angle of zero gives an infinite radius, i.e. straight flight.
///
/// # Errors
///
/// Returns [`Error::SingularBankAngle`] for a bank angle of ±90°.
pub fn turn_radius(tas: &Speed, bank_angle: &Angle) -> Result<Length, Error> {
    let bank = bank_angle_rad(bank_angle)?;
    let tas = tas.to_si();

    Ok(Length::m(tas.powi(2) / (G * bank.tan())))
}

/// Returns the rate of a level turn in rad/s.
///
/// # Errors
///
/// Returns [`Error::SingularBankAngle`] for a bank angle of ±90°.
pub fn turn_rate(tas: &Speed, bank_angle: &Angle) -> Result<AngularVelocity, Error> {
    let bank = bank_angle_rad(bank_angle)?;

    Ok(AngularVelocity::rad_per_s(G * bank.tan() / tas.to_si()))
}

/// Returns the load factor in a level turn.
///
/// The load factor is the ratio of lift to weight, e.g. 2 at 60° of bank.
///
/// # Errors
///
/// Returns [`Error::SingularBankAngle`] for a bank angle of ±90°.
pub fn turn_load_factor(bank_angle: &Angle) -> Result<f64, Error> {
    let bank = bank_angle_rad(bank_angle)?;

    Ok(1.0 / bank.cos())
}

/// Returns the bank angle in radians required to turn at the standard rate of
/// 3°/s.
pub fn standard_rate_bank_angle(tas: &Speed) -> Angle {
    Angle::rad((tas.to_si() * STANDARD_RATE_TURN / G).atan())
}
