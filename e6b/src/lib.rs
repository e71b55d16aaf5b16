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

//! Flight computer for the calculations a pilot does on the ground or in
//! flight.
//!
//! The library is named after the E6B, the circular slide rule pilots use to
//! convert units and to solve wind triangles. It provides:
//!
//! - [measurements] of speed, length, angle, temperature and angular velocity
//!   with conversions between their units
//! - [conversions](convert) of values whose units are given as untyped tags
//!   e.g. from a web form
//! - the [flight computer](fc) with wind components, rate of climb and turn
//!   performance
//! - [coordinates](geom) parsed from degrees, minutes and seconds
//!
//! # Examples
//!
//! The crosswind on runway 36 with a wind from 270° at 20 kt:
//!
//! ```
//! use e6b::prelude::*;
//!
//! let xwind = fc::crosswind(&Speed::kt(20.0), &Angle::deg(270.0), &Angle::deg(360.0));
//! println!("{:.0}", xwind.convert_to(SpeedUnit::Knots)); // => "20 kt"
//! ```
//!
//! The turn radius at 100 m/s and 30° of bank:
//!
//! ```
//! use e6b::prelude::*;
//!
//! # fn main() -> Result<(), e6b::Error> {
//! let radius = fc::turn_radius(&Speed::ms(100.0), &Angle::deg(30.0))?;
//! assert_eq!(radius.value().round(), 1766.0);
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod error;

pub mod convert;
pub mod fc;
pub mod geom;
pub mod measurements;

pub use error::{ConversionDirection, Error};

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::fc;
    pub use crate::geom::Coordinate;
    pub use crate::measurements::{
        Angle, AngleUnit, AngularVelocity, AngularVelocityUnit, Length, LengthUnit, Measurement,
        Speed, SpeedUnit, Temperature, TemperatureUnit, UnitOfMeasure, ValueUnitPair,
    };
}
