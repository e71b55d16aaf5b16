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

use e6b::convert;
use e6b::geom::parse_dms;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = convertSpeed)]
pub fn convert_speed(value: f64, from: &str, to: &str) -> Result<f64, JsError> {
    Ok(convert::convert_speed(value, from, to)?)
}

#[wasm_bindgen(js_name = convertLength)]
pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, JsError> {
    Ok(convert::convert_length(value, from, to)?)
}

#[wasm_bindgen(js_name = convertAngle)]
pub fn convert_angle(value: f64, from: &str, to: &str) -> Result<f64, JsError> {
    Ok(convert::convert_angle(value, from, to)?)
}

#[wasm_bindgen(js_name = convertTemperature)]
pub fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, JsError> {
    Ok(convert::convert_temperature(value, from, to)?)
}

#[wasm_bindgen(js_name = isSpeedUnit)]
pub fn is_speed_unit(unit: &str) -> bool {
    convert::is_speed_unit(unit)
}

#[wasm_bindgen(js_name = isLengthUnit)]
pub fn is_length_unit(unit: &str) -> bool {
    convert::is_length_unit(unit)
}

#[wasm_bindgen(js_name = isAngleUnit)]
pub fn is_angle_unit(unit: &str) -> bool {
    convert::is_angle_unit(unit)
}

#[wasm_bindgen(js_name = isTemperatureUnit)]
pub fn is_temperature_unit(unit: &str) -> bool {
    convert::is_temperature_unit(unit)
}

/// Returns the decimal degrees of a coordinate string or `undefined` if the
/// string isn't a coordinate.
#[wasm_bindgen(js_name = convertCoordStringToDecimalDegrees)]
pub fn convert_coord_string_to_decimal_degrees(input: &str) -> Option<f64> {
    parse_dms(input)
}
