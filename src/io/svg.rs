//! SVG export for paths and regions.

use super::IoError;
use crate::path::{Path, PathSegment};
use crate::rect::Rect;
use crate::region::Region;
use crate::traits::Shape;
use svg::Document;
use svg::node::element::{Path as SvgPath, path::Data};

pub trait ToSvg {
    /// Path data (`d` attribute) for this geometry.
    fn to_svg_data(&self) -> Data;
}

impl ToSvg for Path {
    fn to_svg_data(&self) -> Data {
        self.segments()
            .iter()
            .fold(Data::new(), |data, segment| match *segment {
                PathSegment::MoveTo(p) => data.move_to(vec![p.x as f32, p.y as f32]),
                PathSegment::LineTo(p) => data.line_to(vec![p.x as f32, p.y as f32]),
                PathSegment::CubicTo(c1, c2, p) => data.cubic_curve_to(vec![
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    p.x as f32,
                    p.y as f32,
                ]),
                PathSegment::Close => data.close(),
            })
    }
}

impl ToSvg for Region {
    fn to_svg_data(&self) -> Data {
        self.to_path(None).to_svg_data()
    }
}

/// Builds a document with one filled `<path>` per layer, drawn in order.
/// Each layer is a region and its fill colour.
pub fn document(layers: &[(&Region, &str)], view_box: &Rect) -> Result<Document, IoError> {
    if view_box.is_empty() {
        return Err(IoError::MalformedInput(format!(
            "view box must have a positive size, got {}x{}",
            view_box.width, view_box.height
        )));
    }
    let document = Document::new().set(
        "viewBox",
        format!(
            "{} {} {} {}",
            view_box.x, view_box.y, view_box.width, view_box.height
        ),
    );
    Ok(layers.iter().fold(document, |document, (geometry, fill)| {
        document.add(
            SvgPath::new()
                .set("fill", *fill)
                .set("fill-rule", "evenodd")
                .set("stroke", "black")
                .set("stroke-width", "0.5")
                .set("d", geometry.to_svg_data()),
        )
    }))
}

pub fn write(path: impl AsRef<std::path::Path>, document: &Document) -> Result<(), IoError> {
    std::fs::write(path, document.to_string())?;
    Ok(())
}
