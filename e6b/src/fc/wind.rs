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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Angle, Speed};

/// The wind split into the components along and across a runway.
///
/// Both components are signed. A negative headwind is a tailwind and a
/// positive crosswind blows from the right of the runway direction.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindComponents {
    pub headwind: Speed,
    pub crosswind: Speed,
}

impl WindComponents {
    /// Returns `true` if the wind blows from behind.
    pub fn is_tailwind(&self) -> bool {
        self.headwind.to_si() < 0.0
    }
}

// angle between the wind and the runway in radians
fn wind_angle(wind_direction: &Angle, runway_direction: &Angle) -> f64 {
    wind_direction.to_si() - runway_direction.to_si()
}

/// Returns the crosswind component of the wind on a runway.
///
/// The component is the magnitude of the wind perpendicular to the runway in
/// m/s. Use [`wind_components`] to know the side from which the wind blows.
pub fn crosswind(wind_speed: &Speed, wind_direction: &Angle, runway_direction: &Angle) -> Speed {
    let angle = wind_angle(wind_direction, runway_direction);
    Speed::ms((angle.sin() * wind_speed.to_si()).abs())
}

/// Returns the headwind component of the wind on a runway.
///
/// The component is the magnitude of the wind parallel to the runway in m/s
/// and thus doesn't distinguish between head- and tailwind.
pub fn headwind(wind_speed: &Speed, wind_direction: &Angle, runway_direction: &Angle) -> Speed {
    let angle = wind_angle(wind_direction, runway_direction);
    Speed::ms((angle.cos() * wind_speed.to_si()).abs())
}

/// Returns the signed head- and crosswind components in m/s.
pub fn wind_components(
    wind_speed: &Speed,
    wind_direction: &Angle,
    runway_direction: &Angle,
) -> WindComponents {
    let angle = wind_angle(wind_direction, runway_direction);
    let speed = wind_speed.to_si();

    WindComponents {
        headwind: Speed::ms(angle.cos() * speed),
        crosswind: Speed::ms(angle.sin() * speed),
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::measurements::SpeedUnit;

    fn kt(speed: Speed) -> f64 {
        *speed.convert_to(SpeedUnit::Knots).value()
    }

    #[test]
    fn perpendicular_wind() {
        // runway 36 with wind from 270° at 20 kt
        let (ws, wd, rwy) = (Speed::kt(20.0), Angle::deg(270.0), Angle::deg(360.0));

        assert_relative_eq!(kt(crosswind(&ws, &wd, &rwy)), 20.0, max_relative = 1e-12);
        assert_abs_diff_eq!(kt(headwind(&ws, &wd, &rwy)), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn wind_along_runway() {
        let (ws, wd, rwy) = (Speed::kt(15.0), Angle::deg(90.0), Angle::deg(90.0));

        assert_eq!(kt(crosswind(&ws, &wd, &rwy)), 0.0);
        assert_relative_eq!(kt(headwind(&ws, &wd, &rwy)), 15.0, max_relative = 1e-12);
    }

    #[test]
    fn wind_at_30_degrees() {
        let (ws, wd, rwy) = (Speed::kt(20.0), Angle::deg(300.0), Angle::deg(270.0));

        assert_relative_eq!(kt(crosswind(&ws, &wd, &rwy)), 10.0, max_relative = 1e-9);
        assert_relative_eq!(kt(headwind(&ws, &wd, &rwy)), 17.320508, max_relative = 1e-6);
    }

    #[test]
    fn results_are_in_si() {
        let xwind = crosswind(&Speed::kt(20.0), &Angle::deg(270.0), &Angle::deg(360.0));
        assert_eq!(*xwind.unit(), SpeedUnit::MetersPerSecond);
    }

    #[test]
    fn signed_components() {
        // wind from the left
        let c = wind_components(&Speed::kt(20.0), &Angle::deg(270.0), &Angle::deg(360.0));
        assert_relative_eq!(kt(c.crosswind), -20.0, max_relative = 1e-12);
        assert!(!c.is_tailwind());

        // wind from the right and behind
        let c = wind_components(&Speed::kt(10.0), &Angle::deg(135.0), &Angle::deg(0.0));
        assert!(kt(c.crosswind) > 0.0);
        assert!(c.is_tailwind());
        assert_relative_eq!(kt(c.headwind), -7.0710678, max_relative = 1e-6);
    }
}
