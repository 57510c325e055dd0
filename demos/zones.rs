//! Prints every zone family in every directional mode as closed `(R, X)` rings.
//!
//! Usage:
//! ```text
//! cargo run --example zones
//! RUST_LOG=tripzone=debug cargo run --example zones   # show slicing steps
//! ```

use tripzone::{
    build_hexagonal_start_zone, DirMode, EarthHexagonalSettings, HexagonalSettings, Polygon,
    QuadrilateralSettings, ZoneError,
};

const MODES: [DirMode; 3] = [DirMode::Forward, DirMode::Reverse, DirMode::NonDirectional];

fn main() -> Result<(), ZoneError> {
    // Default: WARN for everything, INFO for tripzone.
    // Override with RUST_LOG env var (e.g. RUST_LOG=tripzone=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("tripzone=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    for dir_mode in MODES {
        let quad = QuadrilateralSettings {
            angle: 60.0,
            x_reach: 30.0,
            r_reach: 52.0,
            inclination: 5.0,
            dir_mode,
        };
        print_ring(&format!("quadrilateral {dir_mode}"), &quad.build()?);

        let hex = HexagonalSettings {
            dir_mode,
            ..HexagonalSettings::default()
        };
        print_ring(&format!("hexagonal phase-phase {dir_mode}"), &hex.build()?);

        let earth = EarthHexagonalSettings {
            angle_dir: hex.angle_dir,
            angle_neg_res: hex.angle_neg_res,
            dir_mode,
            x1: 20.0,
            r1: 3.0,
            x0: 60.0,
            r0: 10.0,
            reach_fault_pe: 20.0,
        };
        print_ring(&format!("hexagonal phase-earth {dir_mode}"), &earth.build()?);
    }

    print_ring("start zone", &build_hexagonal_start_zone(40.0, 5.0, 30.0, 10.0)?);
    Ok(())
}

fn print_ring(name: &str, zone: &Polygon) {
    println!("# {name} ({} vertices, {:.2} ohm²)", zone.vertex_count(), zone.area());
    for (r, x) in zone.to_ring() {
        println!("{r:.4}\t{x:.4}");
    }
    println!();
}
