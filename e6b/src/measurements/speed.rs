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

/// Speed unit with _m/s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub enum SpeedUnit {
    MetersPerSecond,
    Knots,
    MilesPerHour,
    KilometersPerHour,
    FeetPerSecond,
    FeetPerMinute,
}

unit_tags!(SpeedUnit, PhysicalQuantity::Speed, {
    MetersPerSecond => "m/s",
    Knots => "knots",
    MilesPerHour => "mph",
    KilometersPerHour => "kph",
    FeetPerSecond => "fps",
    FeetPerMinute => "fpm",
});

impl SpeedUnit {
    fn factor(&self) -> f64 {
        match self {
            Self::MetersPerSecond => 1.0,
            Self::Knots => constants::KNOTS_IN_METER_PER_SECOND,
            Self::MilesPerHour => constants::MPH_IN_METER_PER_SECOND,
            Self::KilometersPerHour => constants::KPH_IN_METER_PER_SECOND,
            Self::FeetPerSecond => constants::FPS_IN_METER_PER_SECOND,
            Self::FeetPerMinute => constants::FPM_IN_METER_PER_SECOND,
        }
    }
}

impl UnitOfMeasure<f64> for SpeedUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Speed
    }

    fn si() -> Self {
        Self::MetersPerSecond
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::Knots => "kt",
            Self::MilesPerHour => "mph",
            Self::KilometersPerHour => "km/h",
            Self::FeetPerSecond => "ft/s",
            Self::FeetPerMinute => "ft/min",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::MetersPerSecond => value,
            _ => value / to.factor(),
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::MetersPerSecond => *value,
            _ => value * self.factor(),
        }
    }
}

/// Speed of an aircraft or the wind.
pub type Speed = Measurement<f64, SpeedUnit>;

impl Speed {
    /// Creates a speed in meters per second.
    pub const fn ms(value: f64) -> Self {
        Self::new(value, SpeedUnit::MetersPerSecond)
    }

    /// Creates a speed in knots.
    pub const fn kt(value: f64) -> Self {
        Self::new(value, SpeedUnit::Knots)
    }

    pub const fn mph(value: f64) -> Self {
        Self::new(value, SpeedUnit::MilesPerHour)
    }

    pub const fn kph(value: f64) -> Self {
        Self::new(value, SpeedUnit::KilometersPerHour)
    }

    pub const fn fps(value: f64) -> Self {
        Self::new(value, SpeedUnit::FeetPerSecond)
    }

    /// Creates a speed in feet per minute, the unit of vertical speed
    /// indicators.
    pub const fn fpm(value: f64) -> Self {
        Self::new(value, SpeedUnit::FeetPerMinute)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn to_si() {
        assert_eq!(Speed::ms(1.0).to_si(), 1.0);
        assert_eq!(Speed::kt(1.0).to_si(), 0.514444);
        assert_eq!(Speed::mph(1.0).to_si(), 0.44704);
        assert_eq!(Speed::kph(1.0).to_si(), 0.277778);
        assert_eq!(Speed::fps(1.0).to_si(), 0.3048);
        assert_eq!(Speed::fpm(1.0).to_si(), 0.00508);
    }

    #[test]
    fn from_si() {
        assert_relative_eq!(SpeedUnit::from_si(0.514444, &SpeedUnit::Knots), 1.0);
        assert_relative_eq!(SpeedUnit::from_si(0.44704, &SpeedUnit::MilesPerHour), 1.0);
        assert_relative_eq!(SpeedUnit::from_si(0.00508, &SpeedUnit::FeetPerMinute), 1.0);
    }

    #[test]
    fn knots_to_mph() {
        let mph = Speed::kt(100.0).convert_to(SpeedUnit::MilesPerHour);
        assert_relative_eq!(*mph.value(), 115.0778, max_relative = 1e-6);
    }

    #[test]
    fn parses_tags() {
        assert_eq!("m/s".parse(), Ok(SpeedUnit::MetersPerSecond));
        assert_eq!("fpm".parse(), Ok(SpeedUnit::FeetPerMinute));
        assert!("kts".parse::<SpeedUnit>().is_err());
        assert!("Knots".parse::<SpeedUnit>().is_err());
    }

    #[test]
    fn tags_round_trip() {
        for unit in SpeedUnit::ALL {
            assert_eq!(unit.as_str().parse(), Ok(*unit));
        }
    }
}
