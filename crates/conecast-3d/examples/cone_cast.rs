//! Sweep a cone through a small scene and report what it touches.
//!
//! Run with: cargo run -p conecast-3d --example cone_cast

use anyhow::Result;
use conecast_3d::{Cone3, ConeCast, SweepFilter, SweepHit, SweepScene};
use nalgebra::{Isometry3, Point3, Vector3};
use parry3d::shape::SharedShape;

fn main() -> Result<()> {
    let mut scene = SweepScene::new();
    scene.add(SharedShape::ball(0.5), Isometry3::translation(0.0, 0.0, 6.0));
    scene.add(SharedShape::ball(0.5), Isometry3::translation(1.5, 0.0, 9.0));
    scene.add(SharedShape::ball(0.5), Isometry3::translation(8.0, 0.0, 3.0));
    scene.add(
        SharedShape::cuboid(2.0, 2.0, 0.5),
        Isometry3::translation(0.0, 0.0, 14.0),
    );

    let filter = SweepFilter::default();
    let cone = Cone3::from_half_angle(
        Point3::origin(),
        Vector3::z(),
        25.0_f32.to_radians(),
        20.0,
    )?;

    match scene.cone_cast(&cone, &filter) {
        Some(hit) => println!(
            "nearest: {:?} at distance {:.2}, point {:?}",
            hit.target, hit.distance, hit.point
        ),
        None => println!("nearest: nothing in the cone"),
    }

    println!("all hits, nearest first:");
    for hit in scene.cone_cast_all(&cone, &filter) {
        println!(
            "  {:?}  distance {:.2}  point ({:.2}, {:.2}, {:.2})",
            hit.target, hit.distance, hit.point.x, hit.point.y, hit.point.z
        );
    }

    // The fixed-buffer form suits per-frame polling: allocate once, reuse.
    let mut buffer = [SweepHit {
        target: conecast_3d::ColliderId(0),
        point: Point3::origin(),
        normal: Vector3::zeros(),
        distance: 0.0,
    }; 16];
    let count = scene.cone_cast_into(&cone, &filter, &mut buffer);
    println!("buffer form found {count} hit(s)");

    Ok(())
}
