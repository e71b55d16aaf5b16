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

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub enum LengthUnit {
    Meters,
    Feet,
    NauticalMiles,
    Kilometers,
    Miles,
}

unit_tags!(LengthUnit, PhysicalQuantity::Length, {
    Meters => "meters",
    Feet => "feet",
    NauticalMiles => "nauticalMiles",
    Kilometers => "kilometers",
    Miles => "miles",
});

impl UnitOfMeasure<f64> for LengthUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Feet => "ft",
            Self::NauticalMiles => "NM",
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Feet => value / constants::FEET_IN_METER,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
            Self::Kilometers => value / constants::KILOMETER_IN_METER,
            Self::Miles => value / constants::STATUTE_MILE_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Feet => value * constants::FEET_IN_METER,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
            Self::Kilometers => value * constants::KILOMETER_IN_METER,
            Self::Miles => value * constants::STATUTE_MILE_IN_METER,
        }
    }
}

/// A horizontal distance e.g. a turn radius.
pub type Length = Measurement<f64, LengthUnit>;

impl Length {
    pub const fn m(value: f64) -> Self {
        Self::new(value, LengthUnit::Meters)
    }

    pub const fn ft(value: f64) -> Self {
        Self::new(value, LengthUnit::Feet)
    }

    pub const fn nm(value: f64) -> Self {
        Self::new(value, LengthUnit::NauticalMiles)
    }

    pub const fn km(value: f64) -> Self {
        Self::new(value, LengthUnit::Kilometers)
    }

    /// Creates a length in statute miles.
    pub const fn mi(value: f64) -> Self {
        Self::new(value, LengthUnit::Miles)
    }
}
