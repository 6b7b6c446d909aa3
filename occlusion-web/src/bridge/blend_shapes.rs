//! Blend shape list - `name: score` rows with proportional bars

use std::fmt::Write;

use crate::detection::BlendShapeCategory;

/// HTML list items for the blend shape panel
pub fn blend_shapes_html(shapes: &[BlendShapeCategory]) -> String {
    let mut html = String::new();
    for shape in shapes {
        // Writing into a String cannot fail
        let _ = write!(
            html,
            "\n      <li class=\"blend-shapes-item\">\n        \
             <span class=\"blend-shapes-label\">{}</span>\n        \
             <span class=\"blend-shapes-value\" style=\"width: calc({}% - 120px)\">{:.4}</span>\n      \
             </li>\n    ",
            shape.label(),
            shape.score * 100.0,
            shape.score,
        );
    }
    html
}

/// Replace the list's contents; an empty list leaves the element untouched
pub fn render_blend_shapes(element: &web_sys::Element, shapes: &[BlendShapeCategory]) {
    if shapes.is_empty() {
        return;
    }
    log::debug!("{} blend shapes", shapes.len());
    element.set_inner_html(&blend_shapes_html(shapes));
}
