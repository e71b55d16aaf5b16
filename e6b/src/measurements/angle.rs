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

/// Angle unit with _rad_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

unit_tags!(AngleUnit, PhysicalQuantity::Angle, {
    Degrees => "degrees",
    Radians => "radians",
});

impl UnitOfMeasure<f64> for AngleUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Angle
    }

    fn si() -> Self {
        Self::Radians
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Degrees => "°",
            Self::Radians => "rad",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Radians => value,
            Self::Degrees => value / constants::DEGREE_IN_RADIAN,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Radians => *value,
            Self::Degrees => value * constants::DEGREE_IN_RADIAN,
        }
    }
}

/// An angle like a direction, a bank angle or a flight path angle.
pub type Angle = Measurement<f64, AngleUnit>;

impl Angle {
    /// Creates an angle in degrees.
    pub const fn deg(value: f64) -> Self {
        Self::new(value, AngleUnit::Degrees)
    }

    /// Creates an angle in radians.
    pub const fn rad(value: f64) -> Self {
        Self::new(value, AngleUnit::Radians)
    }
}
