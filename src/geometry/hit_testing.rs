use egui::{Pos2, Rect};

/// Bounding box of an outline, `Rect::NOTHING` when empty
pub fn outline_bounds(outline: &[Pos2]) -> Rect {
    let Some(first) = outline.first() else {
        return Rect::NOTHING;
    };

    let mut min = *first;
    let mut max = *first;
    for point in outline {
        min = min.min(*point);
        max = max.max(*point);
    }

    Rect::from_min_max(min, max)
}

/// Even-odd ray casting test. Works for concave outlines; points exactly on an
/// edge may land on either side.
pub fn point_in_polygon(pos: Pos2, outline: &[Pos2]) -> bool {
    if outline.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = outline.len() - 1;
    for i in 0..outline.len() {
        let (a, b) = (outline[i], outline[j]);
        if (a.y > pos.y) != (b.y > pos.y) {
            let x_cross = a.x + (pos.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if pos.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}
