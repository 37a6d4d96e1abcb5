/// GLMat Web - JavaScript bindings for the glmat operations
///
/// Exposes each core operation to JavaScript through wasm-bindgen. Inputs
/// arrive as Float32Array slices and are checked for the exact component
/// count their type mandates; outputs are returned as freshly allocated
/// Float32Arrays.

use wasm_bindgen::prelude::*;

use glmat_core::{mat3, quat};

#[wasm_bindgen(js_name = fromScaling)]
pub fn from_scaling(scale: &[f32]) -> Result<Vec<f32>, JsValue> {
    let scale = fixed::<3>("scale", scale)?;
    Ok(mat3::from_scaling(&scale).to_vec())
}

#[wasm_bindgen(js_name = fromTranslation)]
pub fn from_translation(offset: &[f32]) -> Result<Vec<f32>, JsValue> {
    let offset = fixed::<2>("offset", offset)?;
    Ok(mat3::from_translation(&offset).to_vec())
}

#[wasm_bindgen(js_name = normalFromMat4)]
pub fn normal_from_mat4(matrix: &[f32]) -> Result<Vec<f32>, JsValue> {
    let matrix = fixed::<16>("matrix", matrix)?;
    Ok(mat3::normal_from_mat4(&matrix).to_vec())
}

#[wasm_bindgen(js_name = rotationTo)]
pub fn rotation_to(a: &[f32], b: &[f32]) -> Result<Vec<f32>, JsValue> {
    let a = fixed::<3>("a", a)?;
    let b = fixed::<3>("b", b)?;
    Ok(quat::rotation_to(&a, &b).to_vec())
}

#[wasm_bindgen(js_name = setAxes)]
pub fn set_axes(view: &[f32], right: &[f32], up: &[f32]) -> Result<Vec<f32>, JsValue> {
    let view = fixed::<3>("view", view)?;
    let right = fixed::<3>("right", right)?;
    let up = fixed::<3>("up", up)?;
    Ok(quat::set_axes(&view, &right, &up).to_vec())
}

/// Check that a JS-side array carries exactly the expected component count
fn fixed<const N: usize>(name: &str, data: &[f32]) -> Result<[f32; N], JsValue> {
    data.try_into().map_err(|_| {
        JsValue::from_str(&format!(
            "{} must have {} components, got {}",
            name,
            N,
            data.len()
        ))
    })
}
