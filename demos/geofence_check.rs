//! Checks a few probe positions against each supported geofence shape.
//!
//! Run with: cargo run --example geofence_check

use perimetrum::{
    build_circle, build_corridor, build_polygon, parse_geofence, Coordinate, GeofenceError, Region,
};

fn report(name: &str, region: &Region, probes: &[(&str, Coordinate)]) {
    println!("{} ({} ring coordinates)", name, region.ring().len());
    for (label, position) in probes {
        let verdict = if region.contains(*position) {
            "inside"
        } else {
            "outside"
        };
        println!("  {:<12} {}", label, verdict);
    }
}

fn main() -> Result<(), GeofenceError> {
    // Monitored zone as an explicitly closed ring, longitude first.
    let zone = build_polygon(&[
        Coordinate::new(31.9424, 54.26491),
        Coordinate::new(31.8204, 54.25787),
        Coordinate::new(31.8204, 54.52955),
        Coordinate::new(31.9424, 54.53579),
        Coordinate::new(31.9424, 54.26491),
    ])?;
    report(
        "zone polygon",
        &zone,
        &[
            ("checkpoint", Coordinate::new(31.88791, 54.39709)),
            ("airfield", Coordinate::new(31.9003, 54.07934)),
        ],
    );

    // 500 m exclusion disc on the zone's southeast corner.
    let disc = build_circle(Coordinate::new(31.9424, 54.26491), 500.0)?;
    report(
        "exclusion disc",
        &disc,
        &[
            ("center", Coordinate::new(31.9424, 54.26491)),
            ("checkpoint", Coordinate::new(31.88791, 54.39709)),
        ],
    );

    // 50 m corridor along a short two-bend route, built from the
    // latitude-first coordinates a description would carry.
    let corridor = build_corridor(
        &[
            Coordinate::from_lat_lon(48.8566, 2.3522),
            Coordinate::from_lat_lon(48.8570, 2.3530),
            Coordinate::from_lat_lon(48.8575, 2.3540),
        ],
        50.0,
    )?;
    report(
        "route corridor",
        &corridor,
        &[
            ("on route", Coordinate::from_lat_lon(48.8568, 2.3525)),
            ("next block", Coordinate::from_lat_lon(48.8600, 2.3525)),
        ],
    );

    // The same shapes arriving as text.
    for description in [
        "POLYGON=(48.85 2.347, 48.85 2.34, 48.34 2.324, 48.231 2.231, 48.123 2.2313)",
        "ROUTE=(31.87 54.35, 31.87 54.34)",
        "CIRCULAR=(31.87 54.35 200)",
    ] {
        let region = parse_geofence(description)?;
        println!(
            "parsed {} ring coordinates from {}",
            region.ring().len(),
            description
        );
    }

    Ok(())
}
