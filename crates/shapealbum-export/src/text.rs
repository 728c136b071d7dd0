//! Plain-text export of snapshots.

use std::fmt::Write;

use shapealbum_core::{Shape, ShapeKind, Snapshot};

/// Numbers are printed with one decimal place, e.g. `200.0`
fn num(value: i32) -> String {
    format!("{:.1}", f64::from(value))
}

/// Text block describing one shape
pub fn describe_shape(shape: &Shape) -> String {
    let pos = shape.position();
    let extent = shape.extent();
    let color = shape.color();
    let (anchor, h_label, v_label) = match shape.kind() {
        ShapeKind::Rectangle => ("Min corner", "Width", "Height"),
        ShapeKind::Oval => ("Center", "X radius", "Y radius"),
    };

    format!(
        "Name: {}\nType: {}\n{}: ({},{}), {}: {}, {}: {}, Color: ({},{},{})\n\n",
        shape.name(),
        shape.kind(),
        anchor,
        num(pos.x),
        num(pos.y),
        h_label,
        num(extent.horizontal),
        v_label,
        num(extent.vertical),
        num(color.r),
        num(color.g),
        num(color.b),
    )
}

/// Text block describing one snapshot and all of its shapes
pub fn describe_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Snapshot ID: {}", snapshot.id());
    let _ = writeln!(out, "Timestamp: {}", snapshot.timestamp());
    let _ = writeln!(out, "Description: {}", snapshot.description());
    out.push_str("Shape Information:\n");
    for shape in snapshot.shapes() {
        out.push_str(&describe_shape(shape));
    }
    out
}

/// Every snapshot, oldest first, separated by blank lines
pub fn export_text(snapshots: &[Snapshot]) -> String {
    snapshots
        .iter()
        .map(|s| describe_snapshot(s) + "\n")
        .collect()
}
