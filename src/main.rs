// main.rs
//
// Minimal tour of circsg: a few circles and CSG combinations, each written to
// an SVG file under svg/.

use circsg::circle::Circle;
use circsg::csg::CsgOperation;
use circsg::float_types::Real;
use circsg::io::svg::{self, ToSvg};
use circsg::line::Line;
use circsg::quadrant::Quadrant;
use circsg::rect::Rect;
use circsg::region::Region;
use circsg::traits::Shape;
use std::error::Error;
use std::fs;
use tracing_subscriber::EnvFilter;

const VIEW: Rect = Rect::new(-60.0, -60.0, 120.0, 120.0);

fn save(name: &str, layers: &[(&Region, &str)]) -> Result<(), Box<dyn Error>> {
    let document = svg::document(layers, &VIEW)?;
    let file = format!("svg/{name}.svg");
    svg::write(&file, &document)?;
    tracing::info!(file = %file, "wrote");
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    fs::create_dir_all("svg")?;

    // 1) exact and flattened outlines
    let circle = Circle::new(0.0, 0.0, 50.0);
    let exact = circle.to_region();
    let coarse = Region::from_path(&circle.flattened_path(None, 12.0)?, 1.0)?;
    tracing::info!(
        exact = exact.area(),
        coarse = coarse.area(),
        analytic = circle.area(),
        "circle areas"
    );
    save("circle", &[(&exact, "lightblue"), (&coarse, "none")])?;

    // 2) quadrant decomposition
    let quarters: Vec<Region> = Quadrant::ALL
        .iter()
        .map(|q| circle.quadrant_circle(*q).to_region())
        .collect();
    let all_quarters = CsgOperation::Union.apply(&quarters[0], &quarters[1..])?;
    save("quadrants", &[(&exact, "white"), (&all_quarters, "orange")])?;

    // 3) two overlapping discs through every operation
    let left = Circle::new(-15.0, 0.0, 30.0);
    let right = Circle::new(15.0, 0.0, 30.0);
    tracing::info!(overlap = left.overlaps(&right), "discs");
    for op in CsgOperation::ALL {
        let result = op.apply_shapes(&left, &[&right])?;
        tracing::info!(operation = %op, area = result.area(), "combined");
        save(&format!("discs_{op}"), &[(&result, "seagreen")])?;
    }

    // 4) chord through the circle
    let chord = circle.intersection(&Line::from_coords(-60.0, 20.0, 60.0, 35.0))?;
    if let Some(chord) = chord {
        tracing::info!(
            length = chord.length(),
            start_angle = circle.angle_of(chord.start.x, chord.start.y),
            "chord"
        );
    }

    // 5) pie slice: a three-quarter circle sampled by hit testing
    let pie = circle.with_usable_fraction(0.75);
    let step: Real = 5.0;
    let cells: Vec<Region> = (0..24)
        .flat_map(|i| (0..24).map(move |j| (i, j)))
        .map(|(i, j)| Rect::new(-60.0 + i as Real * step, -60.0 + j as Real * step, step, step))
        .filter(|cell| {
            let c = cell.center();
            pie.contains(c.x, c.y)
        })
        .map(|cell| cell.to_region())
        .collect();
    if let Some((first, rest)) = cells.split_first() {
        let sampled = CsgOperation::Union.apply(first, rest)?;
        save("pie", &[(&sampled, "gold")])?;
    }

    // 6) the raw Bézier outline
    let outline = circle.path(None);
    tracing::debug!(data = ?outline.to_svg_data(), "outline");

    Ok(())
}
