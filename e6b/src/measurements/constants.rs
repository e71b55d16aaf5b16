// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

//! Conversion factors and physical constants.
//!
//! The `*_IN_*` factors multiply a value of the first unit into the SI unit.

use std::f64::consts::PI;

// speed in m/s
pub const KNOTS_IN_METER_PER_SECOND: f64 = 0.514444;
pub const MPH_IN_METER_PER_SECOND: f64 = 0.44704;
pub const KPH_IN_METER_PER_SECOND: f64 = 0.277778;
pub const FPS_IN_METER_PER_SECOND: f64 = 0.3048;
pub const FPM_IN_METER_PER_SECOND: f64 = 0.00508;

// length in m
pub const FEET_IN_METER: f64 = 0.3048;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
pub const KILOMETER_IN_METER: f64 = 1000.0;
pub const STATUTE_MILE_IN_METER: f64 = 1609.34;

// angle in rad
pub const DEGREE_IN_RADIAN: f64 = PI / 180.0;
pub const RADIAN_IN_DEGREE: f64 = 180.0 / PI;

// temperature in K
pub const KELVIN_IN_CELSIUS: f64 = 273.15;
pub const RANKINE_IN_KELVIN: f64 = 5.0 / 9.0;
pub const FAHRENHEIT_AT_FREEZING: f64 = 32.0;

/// Gravitational acceleration in m/s².
pub const G: f64 = 9.81;

/// Rate of a standard-rate turn (3°/s) in rad/s.
pub const STANDARD_RATE_TURN: f64 = 3.0 * DEGREE_IN_RADIAN;
