//! Sweep a pie wedge through a small planar scene and report what it touches.
//!
//! Run with: cargo run -p conecast-2d --example cone_cast

use anyhow::Result;
use conecast_2d::{Cone2, ConeCast, SweepFilter, SweepHit, SweepScene};
use nalgebra::{Isometry2, Point2, Vector2};
use parry2d::shape::SharedShape;

fn main() -> Result<()> {
    let mut scene = SweepScene::new();
    scene.add(SharedShape::ball(0.5), Isometry2::translation(6.0, 0.0));
    scene.add(SharedShape::ball(0.5), Isometry2::translation(9.0, 1.5));
    scene.add(SharedShape::ball(0.5), Isometry2::translation(3.0, 8.0));
    scene.add(
        SharedShape::cuboid(0.5, 2.0),
        Isometry2::translation(14.0, 0.0),
    );

    let filter = SweepFilter::default();
    let cone = Cone2::from_half_angle(
        Point2::origin(),
        Vector2::x(),
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
            "  {:?}  distance {:.2}  point ({:.2}, {:.2})",
            hit.target, hit.distance, hit.point.x, hit.point.y
        );
    }

    // The fixed-buffer form suits per-frame polling: allocate once, reuse.
    let mut buffer = [SweepHit {
        target: conecast_2d::ColliderId(0),
        point: Point2::origin(),
        normal: Vector2::zeros(),
        distance: 0.0,
    }; 16];
    let count = scene.cone_cast_into(&cone, &filter, &mut buffer);
    println!("buffer form found {count} hit(s)");

    Ok(())
}
