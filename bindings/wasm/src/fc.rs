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

use e6b::fc;
use e6b::measurements::{Angle, Speed};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::validate;

/// Reads a `{ value, unit }` object.
fn pair<T: DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

fn wind(
    wind_speed: JsValue,
    wind_direction: JsValue,
    runway_direction: JsValue,
) -> Result<(Speed, Angle, Angle), JsError> {
    let wind_speed: Speed = pair(wind_speed)?;
    let wind_direction: Angle = pair(wind_direction)?;
    let runway_direction: Angle = pair(runway_direction)?;

    validate::speed("wind speed", &wind_speed)?;
    validate::direction("wind direction", &wind_direction)?;
    validate::direction("runway direction", &runway_direction)?;

    Ok((wind_speed, wind_direction, runway_direction))
}

fn turn(tas: JsValue, bank_angle: JsValue) -> Result<(Speed, Angle), JsError> {
    let tas: Speed = pair(tas)?;
    let bank_angle: Angle = pair(bank_angle)?;

    validate::speed("TAS", &tas)?;
    validate::bank_angle(&bank_angle)?;

    Ok((tas, bank_angle))
}

#[wasm_bindgen]
pub fn crosswind(
    wind_speed: JsValue,
    wind_direction: JsValue,
    runway_direction: JsValue,
) -> Result<JsValue, JsError> {
    let (ws, wd, rwy) = wind(wind_speed, wind_direction, runway_direction)?;
    to_js(&fc::crosswind(&ws, &wd, &rwy))
}

#[wasm_bindgen]
pub fn headwind(
    wind_speed: JsValue,
    wind_direction: JsValue,
    runway_direction: JsValue,
) -> Result<JsValue, JsError> {
    let (ws, wd, rwy) = wind(wind_speed, wind_direction, runway_direction)?;
    to_js(&fc::headwind(&ws, &wd, &rwy))
}

#[wasm_bindgen(js_name = windComponents)]
pub fn wind_components(
    wind_speed: JsValue,
    wind_direction: JsValue,
    runway_direction: JsValue,
) -> Result<JsValue, JsError> {
    let (ws, wd, rwy) = wind(wind_speed, wind_direction, runway_direction)?;
    to_js(&fc::wind_components(&ws, &wd, &rwy))
}

#[wasm_bindgen(js_name = rateOfClimb)]
pub fn rate_of_climb(tas: JsValue, fpa: JsValue) -> Result<JsValue, JsError> {
    let tas: Speed = pair(tas)?;
    let fpa: Angle = pair(fpa)?;

    validate::speed("TAS", &tas)?;
    validate::flight_path_angle(&fpa)?;

    to_js(&fc::rate_of_climb(&tas, &fpa))
}

#[wasm_bindgen(js_name = turnRadius)]
pub fn turn_radius(tas: JsValue, bank_angle: JsValue) -> Result<JsValue, JsError> {
    let (tas, bank_angle) = turn(tas, bank_angle)?;
    to_js(&fc::turn_radius(&tas, &bank_angle)?)
}

#[wasm_bindgen(js_name = turnRate)]
pub fn turn_rate(tas: JsValue, bank_angle: JsValue) -> Result<JsValue, JsError> {
    let (tas, bank_angle) = turn(tas, bank_angle)?;
    to_js(&fc::turn_rate(&tas, &bank_angle)?)
}

#[wasm_bindgen(js_name = turnLoadFactor)]
pub fn turn_load_factor(bank_angle: JsValue) -> Result<f64, JsError> {
    let bank_angle: Angle = pair(bank_angle)?;
    validate::bank_angle(&bank_angle)?;

    Ok(fc::turn_load_factor(&bank_angle)?)
}

#[wasm_bindgen(js_name = standardRateBankAngle)]
pub fn standard_rate_bank_angle(tas: JsValue) -> Result<JsValue, JsError> {
    let tas: Speed = pair(tas)?;
    validate::speed("TAS", &tas)?;

    to_js(&fc::standard_rate_bank_angle(&tas))
}
