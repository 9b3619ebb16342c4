//! Globe coordinate tool
//!
//! Converts points between Cartesian and geographic form, measures distances
//! and rotates points about an axis through the sphere center.
//!
//! Usage:
//!   cargo run --bin globe -- --degrees to-cartesian 12.5 41.9 30
//!   cargo run --bin globe -- --body moon to-geographic 1737400 0 0
//!   cargo run --bin globe -- rotate 1 0 0 --axis 0 0 1 --theta 1.5707963

use clap::{Parser, Subcommand, ValueEnum};
use globe::{CartesianPoint, GeographicPoint, ReferenceSphere};
use serde::Serialize;

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Globe coordinate tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Converts, measures and rotates points on a reference sphere",
    long_about = None
)]
struct Args {
    /// Reference body whose mean radius is used
    #[arg(long, value_enum, default_value_t = Body::Earth, global = true)]
    body: Body,

    /// Custom reference sphere radius, overrides --body
    #[arg(long, global = true, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Read and print angles in degrees instead of radians
    #[arg(long, global = true)]
    degrees: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Body {
    Earth,
    Moon,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert longitude, latitude and altitude into x, y, z
    #[command(allow_negative_numbers = true)]
    ToCartesian { lon: f64, lat: f64, alt: f64 },

    /// Convert x, y, z into longitude, latitude and altitude
    #[command(allow_negative_numbers = true)]
    ToGeographic { x: f64, y: f64, z: f64 },

    /// Great-circle distance between two geographic positions
    #[command(allow_negative_numbers = true)]
    DistanceGeo {
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
    },

    /// Straight-line distance between two Cartesian points
    #[command(allow_negative_numbers = true)]
    DistanceCart {
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    },

    /// Rotate a Cartesian point about the line through the origin and an axis point
    #[command(allow_negative_numbers = true)]
    Rotate {
        x: f64,
        y: f64,
        z: f64,

        /// Axis point
        #[arg(long, num_args = 3, value_names = ["AX", "AY", "AZ"], required = true)]
        axis: Vec<f64>,

        /// Rotation angle, right-hand rule
        #[arg(long)]
        theta: f64,
    },
}

/// Geographic output with angles in the requested unit
#[derive(Serialize, Debug, PartialEq)]
struct GeographicReport {
    longitude: f64,
    latitude: f64,
    altitude: f64,
}

#[derive(Serialize, Debug, PartialEq)]
struct GreatCircleReport {
    angle: f64,
    surface_distance: f64,
}

/// Picks the reference sphere from the command line options
fn reference_sphere(args: &Args) -> Result<ReferenceSphere> {
    match args.radius {
        Some(radius) => Ok(ReferenceSphere::new(radius)?),
        None => Ok(match args.body {
            Body::Earth => ReferenceSphere::EARTH,
            Body::Moon => ReferenceSphere::MOON,
        }),
    }
}

/// Converts an input angle into radians
fn input_angle(value: f64, degrees: bool) -> f64 {
    if degrees {
        value.to_radians()
    } else {
        value
    }
}

/// Converts a radian angle into the output unit
fn output_angle(value: f64, degrees: bool) -> f64 {
    if degrees {
        value.to_degrees()
    } else {
        value
    }
}

fn geographic_report(point: &GeographicPoint, degrees: bool) -> GeographicReport {
    GeographicReport {
        longitude: output_angle(point.longitude(), degrees),
        latitude: output_angle(point.latitude(), degrees),
        altitude: point.altitude(),
    }
}

/// Prints a value either as pretty JSON or through its text form
fn emit<T: Serialize>(value: &T, json: bool, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let sphere = reference_sphere(args)?;
    let unit = if args.degrees { "deg" } else { "rad" };

    match &args.command {
        Command::ToCartesian { lon, lat, alt } => {
            let geo = GeographicPoint::new(
                input_angle(*lon, args.degrees),
                input_angle(*lat, args.degrees),
                *alt,
            );
            let cart = sphere.to_cartesian(&geo);
            emit(&cart, args.json, || {
                format!("x: {}\ny: {}\nz: {}", cart.x(), cart.y(), cart.z())
            })
        }
        Command::ToGeographic { x, y, z } => {
            let geo = sphere.to_geographic(&CartesianPoint::new(*x, *y, *z));
            let report = geographic_report(&geo, args.degrees);
            emit(&report, args.json, || {
                format!(
                    "longitude: {} {}\nlatitude: {} {}\naltitude: {}",
                    report.longitude, unit, report.latitude, unit, report.altitude
                )
            })
        }
        Command::DistanceGeo {
            lon1,
            lat1,
            lon2,
            lat2,
        } => {
            let a = GeographicPoint::new(
                input_angle(*lon1, args.degrees),
                input_angle(*lat1, args.degrees),
                0.0,
            );
            let b = GeographicPoint::new(
                input_angle(*lon2, args.degrees),
                input_angle(*lat2, args.degrees),
                0.0,
            );
            let report = GreatCircleReport {
                angle: output_angle(a.distance(&b), args.degrees),
                surface_distance: sphere.surface_distance(&a, &b),
            };
            emit(&report, args.json, || {
                format!(
                    "angle: {} {}\nsurface distance: {}",
                    report.angle, unit, report.surface_distance
                )
            })
        }
        Command::DistanceCart {
            x1,
            y1,
            z1,
            x2,
            y2,
            z2,
        } => {
            let distance =
                CartesianPoint::new(*x1, *y1, *z1).distance(&CartesianPoint::new(*x2, *y2, *z2));
            emit(&distance, args.json, || format!("distance: {}", distance))
        }
        Command::Rotate {
            x,
            y,
            z,
            axis,
            theta,
        } => {
            let [ax, ay, az] = axis[..] else {
                return Err(format!("expected 3 axis components, got {}", axis.len()).into());
            };
            let mut point = CartesianPoint::new(*x, *y, *z);
            point.rotate(
                &CartesianPoint::new(ax, ay, az),
                input_angle(*theta, args.degrees),
            )?;
            emit(&point, args.json, || {
                format!("x: {}\ny: {}\nz: {}", point.x(), point.y(), point.z())
            })
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}
