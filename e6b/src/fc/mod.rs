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

//! Flight Computer.
//!
//! The formulas of the computer take measurements in any unit, normalize them
//! to SI units and return their result in the SI unit of the quantity. Convert
//! the result into whatever unit should be displayed:
//!
//! ```
//! use e6b::fc;
//! use e6b::measurements::{Angle, Speed, SpeedUnit};
//!
//! let xwind = fc::crosswind(&Speed::kt(20.0), &Angle::deg(270.0), &Angle::deg(360.0));
//! let xwind_kt = xwind.convert_to(SpeedUnit::Knots);
//! assert_eq!(xwind_kt.value().round(), 20.0);
//! ```

mod climb;
mod turn;
mod wind;

pub use climb::rate_of_climb;
pub use turn::{standard_rate_bank_angle, turn_load_factor, turn_radius, turn_rate};
pub use wind::{crosswind, headwind, wind_components, WindComponents};

/// Converts an angle from degree minutes and seconds to decimal.
pub fn dms_to_decimal(degree: f64, minutes: f64, seconds: f64) -> f64 {
    degree + minutes / 60.0 + seconds / 3600.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn dms() {
        assert_eq!(dms_to_decimal(53.0, 0.0, 0.0), 53.0);
        assert_eq!(dms_to_decimal(0.0, 30.0, 0.0), 0.5);
        assert_relative_eq!(
            dms_to_decimal(53.0, 51.0, 29.1234),
            53.85808983,
            max_relative = 1e-9
        );
    }
}
