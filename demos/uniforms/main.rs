//! Builds a small transform stack the way a path renderer would and prints
//! the per-draw uniform data and arc subdivision counts it derives.
//!
//! ```text
//! cargo run --example uniforms                 # ratio 1.0
//! cargo run --example uniforms -- 2.0          # HiDPI target
//! RUST_LOG=vgkernel=debug cargo run --example uniforms -- 0
//! ```

use std::f32::consts::PI;

use vgkernel::math::Point2;
use vgkernel::tessellation::TessellationParams;
use vgkernel::Affine2D;

fn main() -> vgkernel::Result<()> {
    // Default: WARN for everything, INFO for vgkernel.
    // Override with RUST_LOG env var (e.g. RUST_LOG=vgkernel=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("uniforms=info".parse().unwrap_or_default())
        .add_directive("vgkernel=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let ratio = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f32>().ok())
        .unwrap_or(1.0);
    let params = TessellationParams::new(ratio)?;
    tracing::info!(?params, "tessellation parameters");

    // Each pushed transform acts in the local space of the current one.
    let mut xform = Affine2D::IDENTITY;
    for step in [
        Affine2D::translate(100.0, 50.0),
        Affine2D::scale(2.0, 2.0),
        Affine2D::skew_x(15.0),
    ] {
        xform = Affine2D::compose(xform, step);
    }

    let corner = xform.apply_to_point(&Point2::new(10.0, 10.0));
    tracing::info!(x = corner.x, y = corner.y, "local (10, 10) in device space");

    let uniforms = xform.to_uniform_array();
    tracing::info!(?uniforms, "paint transform uniform");

    let inverse = xform.inverse();
    tracing::info!(?inverse, "inverse for paint lookups");

    let stroke = params.scaled_stroke_width(3.0, &xform);
    let cap_segments = params.arc_subdivisions(stroke * 0.5, PI);
    tracing::info!(stroke, cap_segments, "round cap tessellation");

    // Collapsed transforms fall back to identity (logged at debug).
    let collapsed = Affine2D::scale(0.0, 1.0).inverse();
    tracing::info!(?collapsed, "inverse of a collapsed transform");

    Ok(())
}
