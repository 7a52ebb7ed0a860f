use crate::geometry::GeometryData;
use crate::shapes::SuperShape;
use js_sys::{Float32Array, Uint32Array};
use wasm_bindgen::prelude::*;

/// Generated mesh handed to JavaScript as flat typed arrays.
#[wasm_bindgen]
pub struct GeometryDataJs {
    pub(crate) inner: GeometryData,
}

#[wasm_bindgen]
impl GeometryDataJs {
    /// Interleaved array of vertex positions (x,y,z)*.
    #[wasm_bindgen(js_name = positions)]
    pub fn positions(&self) -> Float32Array {
        let flat: Vec<f32> = self.inner.vertices.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        Float32Array::from(flat.as_slice())
    }

    /// Interleaved array of vertex normals (nx,ny,nz)*.
    #[wasm_bindgen(js_name = normals)]
    pub fn normals(&self) -> Float32Array {
        let flat: Vec<f32> = self.inner.normals.iter().flat_map(|n| [n.x, n.y, n.z]).collect();
        Float32Array::from(flat.as_slice())
    }

    /// Interleaved array of texture coordinates (u,v)*.
    #[wasm_bindgen(js_name = uvs)]
    pub fn uvs(&self) -> Float32Array {
        let flat: Vec<f32> = self.inner.uvs.iter().flat_map(|t| [t.x, t.y]).collect();
        Float32Array::from(flat.as_slice())
    }

    /// Triangle indices (u32).
    #[wasm_bindgen(js_name = indices)]
    pub fn indices(&self) -> Uint32Array {
        Uint32Array::from(self.inner.indices.as_slice())
    }

    /// `[x, y, z, nx, ny, nz, u, v]` per vertex.
    #[wasm_bindgen(js_name = interleaved)]
    pub fn interleaved(&self) -> Float32Array {
        Float32Array::from(self.inner.interleaved().as_slice())
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> u32 {
        self.inner.vertex_count() as u32
    }

    #[wasm_bindgen(js_name = triangleCount)]
    pub fn triangle_count(&self) -> u32 {
        self.inner.triangle_count() as u32
    }

    #[wasm_bindgen(js_name = toGltf)]
    pub fn to_gltf(&self, name: &str) -> Result<String, JsValue> {
        let bytes = self
            .inner
            .export(crate::io::ExportFormat::Gltf, name)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Generate a supershape mesh; same parameters as
/// [`generate_super_shape_geometry_data`](crate::generate_super_shape_geometry_data).
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen(js_name = generateSuperShapeGeometryData)]
pub fn generate_super_shape_geometry_data_js(
    r1: f32,
    a1: f32,
    b1: f32,
    m1: f32,
    n11: f32,
    n21: f32,
    n31: f32,
    r2: f32,
    a2: f32,
    b2: f32,
    m2: f32,
    n12: f32,
    n22: f32,
    n32: f32,
    res_theta: i32,
    res_phi: i32,
) -> GeometryDataJs {
    GeometryDataJs {
        inner: SuperShape::new(r1, a1, b1, m1, n11, n21, n31, r2, a2, b2, m2, n12, n22, n32)
            .generate(res_theta, res_phi),
    }
}

/// The stock supershape at `resolution` on both axes.
#[wasm_bindgen(js_name = defaultSuperShape)]
pub fn default_super_shape_js(resolution: i32) -> GeometryDataJs {
    GeometryDataJs {
        inner: SuperShape::default().generate(resolution, resolution),
    }
}
