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

use super::{constants, Measurement, PhysicalQuantity, UnitOfMeasure};

/// Angular velocity unit with _rad/s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub enum AngularVelocityUnit {
    RadiansPerSecond,
    DegreesPerSecond,
}

unit_tags!(AngularVelocityUnit, PhysicalQuantity::AngularVelocity, {
    RadiansPerSecond => "radians/s",
    DegreesPerSecond => "degrees/s",
});

impl UnitOfMeasure<f64> for AngularVelocityUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::AngularVelocity
    }

    fn si() -> Self {
        Self::RadiansPerSecond
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::RadiansPerSecond => "rad/s",
            Self::DegreesPerSecond => "°/s",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::RadiansPerSecond => value,
            Self::DegreesPerSecond => value / constants::DEGREE_IN_RADIAN,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::RadiansPerSecond => *value,
            Self::DegreesPerSecond => value * constants::DEGREE_IN_RADIAN,
        }
    }
}

/// Rate of heading change in a turn.
pub type AngularVelocity = Measurement<f64, AngularVelocityUnit>;

impl AngularVelocity {
    pub const fn rad_per_s(value: f64) -> Self {
        Self::new(value, AngularVelocityUnit::RadiansPerSecond)
    }

    pub const fn deg_per_s(value: f64) -> Self {
        Self::new(value, AngularVelocityUnit::DegreesPerSecond)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn standard_rate() {
        assert_eq!(AngularVelocity::deg_per_s(3.0).to_si(), constants::STANDARD_RATE_TURN);

        let rate = AngularVelocity::rad_per_s(constants::STANDARD_RATE_TURN)
            .convert_to(AngularVelocityUnit::DegreesPerSecond);
        assert_relative_eq!(*rate.value(), 3.0, max_relative = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{:.1}", AngularVelocity::deg_per_s(3.0)), "3.0 °/s");
    }
}
