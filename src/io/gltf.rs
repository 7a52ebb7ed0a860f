#![doc = " glTF 2.0 file format support"]
#![doc = ""]
#![doc = " Export of a `GeometryData` as a self-contained glTF 2.0 JSON document"]
#![doc = " (POSITION, NORMAL, TEXCOORD_0 and u32 indices in one embedded buffer)."]

use crate::geometry::GeometryData;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use std::io::Write;

const ARRAY_BUFFER: u32 = 34962;
const ELEMENT_ARRAY_BUFFER: u32 = 34963;
const FLOAT: u32 = 5126;
const UNSIGNED_INT: u32 = 5125;

/// Byte buffers of the four accessors, in the order they are laid out in the single glTF buffer.
struct GltfBuffers {
    positions: Vec<u8>,
    normals: Vec<u8>,
    uvs: Vec<u8>,
    indices: Vec<u8>,
}

fn build_gltf_buffers(geometry: &GeometryData) -> GltfBuffers {
    let vertex_count = geometry.vertex_count();
    let mut buffers = GltfBuffers {
        positions: Vec::with_capacity(vertex_count * 3 * 4),
        normals: Vec::with_capacity(vertex_count * 3 * 4),
        uvs: Vec::with_capacity(vertex_count * 2 * 4),
        indices: Vec::with_capacity(geometry.indices.len() * 4),
    };

    for p in &geometry.vertices {
        for c in [p.x, p.y, p.z] {
            buffers.positions.extend_from_slice(&c.to_le_bytes());
        }
    }
    for n in &geometry.normals {
        for c in [n.x, n.y, n.z] {
            buffers.normals.extend_from_slice(&c.to_le_bytes());
        }
    }
    for uv in &geometry.uvs {
        // glTF puts the texture origin at the top-left corner
        for c in [uv.x, 1.0 - uv.y] {
            buffers.uvs.extend_from_slice(&c.to_le_bytes());
        }
    }
    for &idx in &geometry.indices {
        buffers.indices.extend_from_slice(&idx.to_le_bytes());
    }

    buffers
}

/// Build a glTF 2.0 JSON document with a single mesh & single scene.
///
/// All binary data is stored in a single buffer as a base64-embedded data URI.
fn gltf_from_geometry(geometry: &GeometryData, object_name: &str) -> String {
    // glTF forbids zero-length buffers and zero-count accessors
    if geometry.vertices.is_empty() || geometry.indices.is_empty() {
        return empty_gltf();
    }

    let buffers = build_gltf_buffers(geometry);

    let positions_len = buffers.positions.len();
    let normals_len = buffers.normals.len();
    let uvs_len = buffers.uvs.len();
    let indices_len = buffers.indices.len();

    let positions_offset = 0;
    let normals_offset = positions_offset + positions_len;
    let uvs_offset = normals_offset + normals_len;
    let indices_offset = uvs_offset + uvs_len;

    let mut buffer_data = Vec::with_capacity(indices_offset + indices_len);
    buffer_data.extend_from_slice(&buffers.positions);
    buffer_data.extend_from_slice(&buffers.normals);
    buffer_data.extend_from_slice(&buffers.uvs);
    buffer_data.extend_from_slice(&buffers.indices);

    let buffer_base64 = BASE64_ENGINE.encode(&buffer_data);

    let vertex_count = geometry.vertex_count();
    let index_count = geometry.indices.len();
    let aabb = geometry.bounding_box();

    let mut json = String::new();
    json.push_str("{\n");
    json.push_str("  \"asset\": {\n");
    json.push_str("    \"version\": \"2.0\",\n");
    json.push_str("    \"generator\": \"supershape\"\n");
    json.push_str("  },\n");
    json.push_str("  \"buffers\": [\n");
    json.push_str(&format!(
        "    {{\"byteLength\": {}, \"uri\": \"data:application/octet-stream;base64,{}\"}}\n",
        buffer_data.len(),
        buffer_base64
    ));
    json.push_str("  ],\n");
    json.push_str("  \"bufferViews\": [\n");
    json.push_str(&format!(
        "    {{\"buffer\": 0, \"byteOffset\": {positions_offset}, \"byteLength\": {positions_len}, \"target\": {ARRAY_BUFFER}}},\n"
    ));
    json.push_str(&format!(
        "    {{\"buffer\": 0, \"byteOffset\": {normals_offset}, \"byteLength\": {normals_len}, \"target\": {ARRAY_BUFFER}}},\n"
    ));
    json.push_str(&format!(
        "    {{\"buffer\": 0, \"byteOffset\": {uvs_offset}, \"byteLength\": {uvs_len}, \"target\": {ARRAY_BUFFER}}},\n"
    ));
    json.push_str(&format!(
        "    {{\"buffer\": 0, \"byteOffset\": {indices_offset}, \"byteLength\": {indices_len}, \"target\": {ELEMENT_ARRAY_BUFFER}}}\n"
    ));
    json.push_str("  ],\n");
    json.push_str("  \"accessors\": [\n");
    json.push_str(&format!(
        "    {{\"bufferView\": 0, \"componentType\": {FLOAT}, \"count\": {vertex_count}, \"type\": \"VEC3\", \"min\": [{}, {}, {}], \"max\": [{}, {}, {}]}},\n",
        aabb.mins.x, aabb.mins.y, aabb.mins.z, aabb.maxs.x, aabb.maxs.y, aabb.maxs.z
    ));
    json.push_str(&format!(
        "    {{\"bufferView\": 1, \"componentType\": {FLOAT}, \"count\": {vertex_count}, \"type\": \"VEC3\"}},\n"
    ));
    json.push_str(&format!(
        "    {{\"bufferView\": 2, \"componentType\": {FLOAT}, \"count\": {vertex_count}, \"type\": \"VEC2\"}},\n"
    ));
    json.push_str(&format!(
        "    {{\"bufferView\": 3, \"componentType\": {UNSIGNED_INT}, \"count\": {index_count}, \"type\": \"SCALAR\"}}\n"
    ));
    json.push_str("  ],\n");
    json.push_str("  \"meshes\": [\n");
    json.push_str(&format!(
        "    {{\"name\": \"{}\", \"primitives\": [{{\"attributes\": {{\"POSITION\": 0, \"NORMAL\": 1, \"TEXCOORD_0\": 2}}, \"indices\": 3}}]}}\n",
        json_escape(object_name)
    ));
    json.push_str("  ],\n");
    json.push_str("  \"nodes\": [\n");
    json.push_str("    {\"mesh\": 0}\n");
    json.push_str("  ],\n");
    json.push_str("  \"scenes\": [\n");
    json.push_str("    {\"nodes\": [0]}\n");
    json.push_str("  ],\n");
    json.push_str("  \"scene\": 0\n");
    json.push_str("}\n");

    json
}

/// A valid document holding a single scene with nothing in it.
fn empty_gltf() -> String {
    let mut json = String::new();
    json.push_str("{\n");
    json.push_str("  \"asset\": {\n");
    json.push_str("    \"version\": \"2.0\",\n");
    json.push_str("    \"generator\": \"supershape\"\n");
    json.push_str("  },\n");
    json.push_str("  \"scenes\": [\n");
    json.push_str("    {}\n");
    json.push_str("  ],\n");
    json.push_str("  \"scene\": 0\n");
    json.push_str("}\n");
    json
}

/// Escape `value` for use inside a JSON string literal.
fn json_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

impl GeometryData {
    /// Serialize as a glTF 2.0 JSON document.
    pub fn to_gltf(&self, object_name: &str) -> String {
        gltf_from_geometry(self, object_name)
    }

    pub fn write_gltf<W: Write>(&self, writer: &mut W, object_name: &str) -> std::io::Result<()> {
        let gltf_content = self.to_gltf(object_name);
        writer.write_all(gltf_content.as_bytes())
    }
}
