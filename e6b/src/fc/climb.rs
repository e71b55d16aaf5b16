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

use crate::measurements::{Angle, Speed};

/// Returns the rate of climb at a true airspeed (TAS) and flight path angle
/// (FPA).
///
/// The rate is the vertical part of the TAS in m/s and negative when
/// descending.
pub fn rate_of_climb(tas: &Speed, fpa: &Angle) -> Speed {
    Speed::ms(fpa.to_si().sin() * tas.to_si())
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::measurements::SpeedUnit;

    #[test]
    fn climb() {
        let roc = rate_of_climb(&Speed::ms(50.0), &Angle::deg(30.0));
        assert_relative_eq!(roc.to_si(), 25.0, max_relative = 1e-12);
    }

    #[test]
    fn descent_is_negative() {
        // a 3° glide path at 90 kt gives the well known ~480 ft/min
        let rod = rate_of_climb(&Speed::kt(90.0), &Angle::deg(-3.0))
            .convert_to(SpeedUnit::FeetPerMinute);
        assert_relative_eq!(*rod.value(), -477.0, max_relative = 1e-3);
    }

    #[test]
    fn level_flight() {
        assert_abs_diff_eq!(rate_of_climb(&Speed::kt(120.0), &Angle::deg(0.0)).to_si(), 0.0);
    }
}
