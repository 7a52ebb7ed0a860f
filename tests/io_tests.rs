#![allow(unused_imports)]

use std::path::Path;
use supershape::{
    GeometryData,
    io::{ExportFormat, IoError},
    shapes::SuperShape,
};

#[test]
fn export_format_from_extension() {
    assert_eq!(ExportFormat::from_path(Path::new("a/b.stl")).unwrap(), ExportFormat::StlBinary);
    assert_eq!(ExportFormat::from_path(Path::new("shape.GLTF")).unwrap(), ExportFormat::Gltf);
    assert!(matches!(
        ExportFormat::from_path(Path::new("shape.obj")),
        Err(IoError::Unimplemented(_))
    ));
    assert!(matches!(
        ExportFormat::from_path(Path::new("no_extension")),
        Err(IoError::MalformedPath(_))
    ));
}

#[test]
fn invalid_geometry_is_not_exported() {
    let mut mesh = SuperShape::sphere(1.0).generate(6, 4);
    mesh.indices.push(9999);
    mesh.indices.push(0);
    mesh.indices.push(1);

    let result = mesh.export(ExportFormat::Gltf, "broken");
    assert!(matches!(result, Err(IoError::InvalidGeometry(_))));
}

#[cfg(feature = "stl-io")]
mod stl {
    use super::*;

    #[test]
    fn ascii_stl_has_one_facet_per_triangle() {
        let mesh = SuperShape::default().generate(12, 8);
        let stl = mesh.to_stl_ascii("supershape");
        assert!(stl.starts_with("solid supershape\n"));
        assert!(stl.ends_with("endsolid supershape\n"));
        assert_eq!(stl.matches("facet normal").count(), mesh.triangle_count());
        assert_eq!(stl.matches("      vertex").count(), 3 * mesh.triangle_count());
        assert!(!stl.contains("NaN"));
    }

    #[test]
    fn binary_stl_round_trips_triangle_count() -> Result<(), Box<dyn std::error::Error>> {
        let mesh = SuperShape::sphere(2.0).generate(16, 8);
        let bytes = mesh.to_stl_binary("sphere")?;
        assert_eq!(bytes.len(), 84 + 50 * mesh.triangle_count());

        let mut cursor = std::io::Cursor::new(bytes);
        let read_back = stl_io::read_stl(&mut cursor)?;
        assert_eq!(read_back.faces.len(), mesh.triangle_count());
        Ok(())
    }

    #[test]
    fn export_to_file_writes_binary_stl() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join("supershape_export_test.stl");
        let mesh = SuperShape::default().generate(10, 10);
        mesh.export_to_file(&path, "supershape")?;
        let written = std::fs::read(&path)?;
        assert_eq!(written.len(), 84 + 50 * mesh.triangle_count());
        let _ = std::fs::remove_file(&path);
        Ok(())
    }
}

#[cfg(feature = "gltf-io")]
mod gltf {
    use super::*;

    #[test]
    fn gltf_declares_all_attributes() {
        let mesh = SuperShape::default().generate(8, 6);
        let json = mesh.to_gltf("shape");
        assert!(json.contains("\"version\": \"2.0\""));
        assert!(json.contains("\"POSITION\": 0, \"NORMAL\": 1, \"TEXCOORD_0\": 2"));
        assert!(json.contains(&format!("\"count\": {}, \"type\": \"VEC2\"", mesh.vertex_count())));
        assert!(json.contains(&format!("\"count\": {}, \"type\": \"SCALAR\"", mesh.indices.len())));

        let expected_bytes = mesh.vertex_count() * (12 + 12 + 8) + mesh.indices.len() * 4;
        assert!(json.contains(&format!("\"byteLength\": {expected_bytes}, \"uri\"")));
    }

    #[test]
    fn write_gltf_matches_to_gltf() -> Result<(), Box<dyn std::error::Error>> {
        let mesh = SuperShape::sphere(1.0).generate(6, 4);
        let mut out = Vec::new();
        mesh.write_gltf(&mut out, "sphere")?;
        assert_eq!(String::from_utf8(out)?, mesh.to_gltf("sphere"));
        Ok(())
    }

    /// The three numbers following `key` in the POSITION accessor.
    fn position_bound(json: &str, key: &str) -> [f32; 3] {
        let start = json.find(key).expect("bound present") + key.len();
        let end = start + json[start..].find(']').expect("closing bracket");
        let values: Vec<f32> = json[start..end]
            .split(',')
            .map(|v| v.trim().parse().expect("number"))
            .collect();
        [values[0], values[1], values[2]]
    }

    #[test]
    fn position_accessor_carries_the_bounding_box() {
        let radius = 2.0;
        let mesh = SuperShape::sphere(radius).generate(16, 8);
        let json = mesh.to_gltf("sphere");
        let aabb = mesh.bounding_box();

        let min = position_bound(&json, "\"min\": [");
        let max = position_bound(&json, "\"max\": [");
        assert_eq!(min, [aabb.mins.x, aabb.mins.y, aabb.mins.z]);
        assert_eq!(max, [aabb.maxs.x, aabb.maxs.y, aabb.maxs.z]);
        for c in min {
            assert!((c + radius).abs() < 1e-4, "min {min:?}");
        }
        for c in max {
            assert!((c - radius).abs() < 1e-4, "max {max:?}");
        }
    }

    #[test]
    fn empty_geometry_exports_an_empty_scene() {
        let json = GeometryData::new().to_gltf("empty");
        assert!(json.contains("\"version\": \"2.0\""));
        assert!(json.contains("\"scene\": 0"));
        for key in ["buffers", "bufferViews", "accessors", "meshes", "byteLength", "count"] {
            assert!(!json.contains(key), "empty document should not declare {key}");
        }
    }

    #[test]
    fn object_name_is_escaped() {
        let mesh = SuperShape::sphere(1.0).generate(6, 4);
        let json = mesh.to_gltf("two\nlines \"quoted\"");
        assert!(json.contains(r#""name": "two\nlines \"quoted\"""#));
    }
}

#[cfg(not(feature = "gltf-io"))]
#[test]
fn gltf_export_needs_its_feature() {
    let mesh = SuperShape::sphere(1.0).generate(6, 4);
    assert!(matches!(
        mesh.export(ExportFormat::Gltf, "sphere"),
        Err(IoError::Unimplemented(_))
    ));
}

#[cfg(not(feature = "stl-io"))]
#[test]
fn stl_export_needs_its_feature() {
    let mesh = SuperShape::sphere(1.0).generate(6, 4);
    for format in [ExportFormat::StlAscii, ExportFormat::StlBinary] {
        assert!(matches!(mesh.export(format, "sphere"), Err(IoError::Unimplemented(_))));
    }
}
