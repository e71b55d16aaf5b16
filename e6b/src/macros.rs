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

/// Creates a [`Coordinate`] from latitude and longitude in decimal degrees.
///
/// ```
/// use e6b::coord;
///
/// let edhf = coord!(53.9925, 9.57666667);
/// assert_eq!(edhf.latitude, 53.9925);
/// ```
///
/// [`Coordinate`]: crate::geom::Coordinate
#[macro_export]
macro_rules! coord {
    ($latitude:expr, $longitude:expr) => {
        $crate::geom::Coordinate {
            latitude: $latitude,
            longitude: $longitude,
        }
    };
}

/// Implements the string tags of a unit enum.
///
/// The tags are the names under which units arrive from untyped input. Each
/// unit gets `ALL`, `as_str`, `FromStr` and, with the `serde` feature, a
/// (de)serialization as its tag.
macro_rules! unit_tags {
    ($unit:ident, $quantity:expr, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $unit {
            /// All units of the quantity.
            pub const ALL: &'static [$unit] = &[$($unit::$variant),+];

            /// Returns the tag of the unit.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::str::FromStr for $unit {
            type Err = $crate::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    _ => {
                        log::trace!("rejected {} unit tag {:?}", $quantity, s);
                        Err($crate::Error::UnknownUnit {
                            unit: s.to_string(),
                            quantity: $quantity,
                        })
                    }
                }
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $unit {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $unit {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
                tag.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
