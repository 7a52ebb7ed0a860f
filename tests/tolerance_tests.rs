use supershape::{
    float_types::{Real, set_tolerance, tolerance},
    shapes::SuperShape,
};

// Own test binary: the tolerance can only be set once per process.
#[test]
fn tight_welding_tolerance_does_not_reject_generated_normals() {
    set_tolerance(Real::EPSILON);
    assert_eq!(tolerance(), Real::EPSILON);

    for shape in [SuperShape::default(), SuperShape::sphere(3.0)] {
        let mesh = shape.generate(64, 48);
        assert_eq!(mesh.validate(), Ok(()));

        #[cfg(feature = "gltf-io")]
        assert!(mesh.export(supershape::io::ExportFormat::Gltf, "tight").is_ok());
    }
}
