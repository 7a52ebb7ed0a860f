// main.rs
//
// Writes a handful of supershapes to the `stl` folder, one `.stl` and one
// `.gltf` per shape. An optional first argument sets the resolution.

use std::fs;

use supershape::shapes::{DEFAULT_RESOLUTION, SuperShape};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let resolution = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<i32>().ok())
        .unwrap_or(DEFAULT_RESOLUTION);

    // Ensure the /stl folder exists
    let _ = fs::create_dir_all("stl");

    let shapes = [
        ("supershape", SuperShape::default()),
        ("sphere", SuperShape::sphere(1.0)),
        // r1, a1, b1, m1, n11, n21, n31, r2, a2, b2, m2, n12, n22, n32
        (
            "rounded_cube",
            SuperShape::new(1.0, 1.0, 1.0, 4.0, 10.0, 10.0, 10.0, 1.0, 1.0, 1.0, 4.0, 10.0, 10.0, 10.0),
        ),
        (
            "star",
            SuperShape::new(1.0, 1.0, 1.0, 5.0, 0.1, 1.7, 1.7, 1.0, 1.0, 1.0, 1.0, 0.3, 0.5, 0.5),
        ),
        (
            "shell",
            SuperShape::new(1.0, 1.0, 1.0, 7.0, 0.2, 1.7, 1.7, 1.0, 1.0, 1.0, 7.0, 0.2, 1.7, 1.7),
        ),
    ];

    for (name, shape) in shapes {
        let mesh = shape.generate(resolution, resolution);
        println!(
            "{name}: {} vertices, {} triangles, area {:.4}",
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.surface_area()
        );

        for extension in ["stl", "gltf"] {
            let path = format!("stl/{name}.{extension}");
            if let Err(error) = mesh.export_to_file(&path, name) {
                eprintln!("could not write {path}: {error}");
            }
        }
    }

    // Done!
    println!("All shapes have been written to the 'stl' folder (where enabled).");
}
