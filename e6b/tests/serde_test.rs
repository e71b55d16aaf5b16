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

#![cfg(feature = "serde")]

use e6b::fc::WindComponents;
use e6b::measurements::{Speed, SpeedUnit, ValueUnitPair};

#[test]
fn deserializes_value_unit_pair() {
    let speed: Speed = serde_json::from_str(r#"{ "value": 20.0, "unit": "knots" }"#)
        .expect("pair should deserialize");
    assert_eq!(speed, Speed::kt(20.0));
}

#[test]
fn rejects_unknown_unit() {
    let result: Result<ValueUnitPair<SpeedUnit>, _> =
        serde_json::from_str(r#"{ "value": 20.0, "unit": "invalid" }"#);
    let err = result.expect_err("unknown unit should not deserialize");
    assert!(err.to_string().contains("\"invalid\" is no speed unit"));
}

#[test]
fn serializes_unit_as_tag() {
    let json = serde_json::to_string(&Speed::fpm(500.0)).expect("should serialize");
    assert_eq!(json, r#"{"value":500.0,"unit":"fpm"}"#);
}

#[test]
fn serializes_wind_components() {
    let c = WindComponents {
        headwind: Speed::ms(-1.0),
        crosswind: Speed::ms(2.0),
    };
    let json = serde_json::to_value(c).expect("should serialize");
    assert_eq!(json["headwind"]["unit"], "m/s");
    assert_eq!(json["crosswind"]["value"], 2.0);
}
