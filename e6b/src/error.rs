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

use std::error;
use std::fmt;

use crate::measurements::PhysicalQuantity;

/// Direction of a conversion relative to the SI unit of a quantity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConversionDirection {
    /// Converting a value into the SI unit.
    ToSi,
    /// Converting a value out of the SI unit.
    FromSi,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Error {
    /// A unit tag that is no member of the quantity's units was used in a
    /// conversion.
    InvalidUnit {
        unit: String,
        quantity: PhysicalQuantity,
        direction: ConversionDirection,
    },
    /// A unit tag could not be parsed.
    UnknownUnit {
        unit: String,
        quantity: PhysicalQuantity,
    },
    /// The bank angle is ±90° where the turn has no finite solution.
    SingularBankAngle,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUnit {
                unit,
                quantity,
                direction,
            } => {
                let direction = match direction {
                    ConversionDirection::ToSi => "to",
                    ConversionDirection::FromSi => "from",
                };
                write!(
                    f,
                    "invalid unit \"{unit}\" for conversion {direction} {}",
                    quantity.si_name()
                )
            }
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "\"{unit}\" is no {quantity} unit")
            }
            Self::SingularBankAngle => {
                write!(f, "bank angle of 90° has no finite turn solution")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_unit_names_direction() {
        let err = Error::InvalidUnit {
            unit: "invalid".to_string(),
            quantity: PhysicalQuantity::Speed,
            direction: ConversionDirection::ToSi,
        };
        assert_eq!(
            err.to_string(),
            "invalid unit \"invalid\" for conversion to meters per second"
        );

        let err = Error::InvalidUnit {
            unit: "invalid".to_string(),
            quantity: PhysicalQuantity::Angle,
            direction: ConversionDirection::FromSi,
        };
        assert_eq!(
            err.to_string(),
            "invalid unit \"invalid\" for conversion from radians"
        );
    }

    #[test]
    fn unknown_unit() {
        let err = Error::UnknownUnit {
            unit: "furlong".to_string(),
            quantity: PhysicalQuantity::Length,
        };
        assert_eq!(err.to_string(), "\"furlong\" is no length unit");
    }
}
