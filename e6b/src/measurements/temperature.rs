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

/// Temperature unit with _K_ as SI unit.
///
/// Unlike the other units, temperatures are converted by an offset and a
/// scale and the zero points of the units differ.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

unit_tags!(TemperatureUnit, PhysicalQuantity::Temperature, {
    Celsius => "celsius",
    Fahrenheit => "fahrenheit",
    Kelvin => "kelvin",
    Rankine => "rankine",
});

impl UnitOfMeasure<f64> for TemperatureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Temperature
    }

    fn si() -> Self {
        Self::Kelvin
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
            Self::Rankine => "°R",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Kelvin => value,
            Self::Celsius => value - constants::KELVIN_IN_CELSIUS,
            Self::Fahrenheit => {
                (value - constants::KELVIN_IN_CELSIUS) / constants::RANKINE_IN_KELVIN
                    + constants::FAHRENHEIT_AT_FREEZING
            }
            Self::Rankine => value / constants::RANKINE_IN_KELVIN,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Kelvin => *value,
            Self::Celsius => value + constants::KELVIN_IN_CELSIUS,
            Self::Fahrenheit => {
                (value - constants::FAHRENHEIT_AT_FREEZING) * constants::RANKINE_IN_KELVIN
                    + constants::KELVIN_IN_CELSIUS
            }
            Self::Rankine => value * constants::RANKINE_IN_KELVIN,
        }
    }
}

/// An air or surface temperature.
pub type Temperature = Measurement<f64, TemperatureUnit>;

impl Temperature {
    /// Creates a temperature in degree Celsius.
    pub const fn c(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    /// Creates a temperature in degree Fahrenheit.
    pub const fn f(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    /// Creates a temperature in Kelvin.
    pub const fn k(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }

    /// Creates a temperature in degree Rankine.
    pub const fn r(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Rankine)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn freezing_point() {
        assert_eq!(Temperature::c(0.0).to_si(), 273.15);
        assert_eq!(*Temperature::k(273.15).convert_to(TemperatureUnit::Celsius).value(), 0.0);
        assert_eq!(*Temperature::k(273.15).convert_to(TemperatureUnit::Fahrenheit).value(), 32.0);
        assert_abs_diff_eq!(Temperature::f(32.0).to_si(), 273.15, epsilon = 1e-9);
        assert_abs_diff_eq!(Temperature::r(491.67).to_si(), 273.15, epsilon = 1e-2);
        assert_abs_diff_eq!(
            *Temperature::k(273.15).convert_to(TemperatureUnit::Rankine).value(),
            491.67,
            epsilon = 1e-2
        );
    }

    #[test]
    fn fahrenheit_and_rankine() {
        // both share the same scale and are offset by 459.67
        let r = Temperature::f(32.0).convert_to(TemperatureUnit::Rankine);
        assert_abs_diff_eq!(*r.value(), 491.67, epsilon = 1e-9);

        let f = Temperature::r(0.0).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(*f.value(), -459.67, epsilon = 1e-9);

        let f = Temperature::r(671.67).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(*f.value(), 212.0, epsilon = 1e-9);
    }

    #[test]
    fn isa_sea_level() {
        let f = Temperature::c(15.0).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(*f.value(), 59.0, epsilon = 1e-9);
    }

    #[test]
    fn celsius_equals_fahrenheit_at_minus_40() {
        let f = Temperature::c(-40.0).convert_to(TemperatureUnit::Fahrenheit);
        assert_abs_diff_eq!(*f.value(), -40.0, epsilon = 1e-9);
    }
}
