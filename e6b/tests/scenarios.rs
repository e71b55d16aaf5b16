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

use approx::{assert_abs_diff_eq, assert_relative_eq};
use e6b::geom::{parse_dms, Coordinate};
use e6b::prelude::*;

#[test]
fn crosswind_and_headwind_on_runway_36() {
    let wind_speed = Speed::kt(20.0);
    let wind_direction = Angle::deg(270.0);
    let runway = Angle::deg(360.0);

    let xwind = fc::crosswind(&wind_speed, &wind_direction, &runway).convert_to(SpeedUnit::Knots);
    let hwind = fc::headwind(&wind_speed, &wind_direction, &runway).convert_to(SpeedUnit::Knots);

    assert_relative_eq!(*xwind.value(), 20.0, max_relative = 1e-12);
    assert_abs_diff_eq!(*hwind.value(), 0.0, epsilon = 1e-9);
}

#[test]
fn turn_radius_at_30_degrees_of_bank() {
    let radius = fc::turn_radius(&Speed::ms(100.0), &Angle::deg(30.0)).unwrap();
    assert_abs_diff_eq!(radius.to_si(), 1765.6, epsilon = 0.5);

    let nm = radius.convert_to(LengthUnit::NauticalMiles);
    assert_abs_diff_eq!(*nm.value(), 0.953, epsilon = 1e-3);
}

#[test]
fn standard_rate_bank_angle_at_100_kt() {
    let tas = Speed::kt(100.0);
    let bank = fc::standard_rate_bank_angle(&tas);

    let expected = (tas.to_si() * (std::f64::consts::PI / 60.0) / 9.81).atan();
    assert_relative_eq!(bank.to_si(), expected, max_relative = 1e-12);
    let deg = *bank.convert_to(AngleUnit::Degrees).value();
    assert_abs_diff_eq!(deg, 15.35, epsilon = 0.2);
}

#[test]
fn rate_of_climb_in_fpm() {
    let roc = fc::rate_of_climb(&Speed::kt(80.0), &Angle::deg(5.0))
        .convert_to(SpeedUnit::FeetPerMinute);
    assert_abs_diff_eq!(*roc.value(), 706.1, epsilon = 0.5);
}

#[test]
fn turn_rate_in_degrees_per_second() {
    let rate = fc::turn_rate(&Speed::kt(100.0), &Angle::deg(15.35))
        .unwrap()
        .convert_to(AngularVelocityUnit::DegreesPerSecond);
    assert_abs_diff_eq!(*rate.value(), 3.0, epsilon = 0.01);
}

#[test]
fn turns_at_90_degrees_of_bank_fail() {
    let tas = Speed::kt(100.0);
    let bank = Angle::deg(90.0);

    assert_eq!(fc::turn_radius(&tas, &bank), Err(Error::SingularBankAngle));
    assert_eq!(fc::turn_rate(&tas, &bank), Err(Error::SingularBankAngle));
    assert_eq!(fc::turn_load_factor(&bank), Err(Error::SingularBankAngle));
}

#[test]
fn formulas_take_any_unit() {
    let in_kt = fc::turn_radius(&Speed::kt(100.0), &Angle::deg(30.0)).unwrap();
    let bank = Angle::rad(std::f64::consts::FRAC_PI_6);
    let in_kph = fc::turn_radius(&Speed::kph(185.2), &bank).unwrap();
    assert_relative_eq!(in_kt.to_si(), in_kph.to_si(), max_relative = 1e-5);
}

#[test]
fn lat_lon_converter() {
    assert_relative_eq!(
        parse_dms("53° 51' 29.1234\"").unwrap(),
        53.85808983,
        max_relative = 1e-9
    );
    assert_eq!(parse_dms("not a coordinate"), None);

    let jfk = Coordinate::from_dms("40° 38' 23.74\" N", "073° 46' 43.29\" W").unwrap();
    assert_abs_diff_eq!(jfk.latitude, 40.6399, epsilon = 1e-4);
    assert_abs_diff_eq!(jfk.longitude, -73.7787, epsilon = 1e-4);
    assert_eq!(jfk.to_string(), "40° 38' 23.74\" N, 73° 46' 43.29\" W");
}
