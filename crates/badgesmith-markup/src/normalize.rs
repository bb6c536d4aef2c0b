use crate::{Element, MarkupError};

/// Size used when a caller does not pick one.
pub const DEFAULT_ICON_SIZE: u32 = 12;

/// Fill used when a caller does not pick one.
pub const DEFAULT_ICON_COLOR: &str = "#000";

const SVG_TAG: &str = "svg";
const PATH_TAG: &str = "path";

/// Resize and recolor raw icon markup.
///
/// The first `<svg>` element gets `width` and `height` set to `size`, and
/// every `<path>` inside it gets `fill` set to `color`, whatever those
/// attributes held before. Only the `<svg>` element is returned, without any
/// XML declaration or doctype.
///
/// Normalizing an already-normalized icon with the same arguments returns it
/// unchanged.
pub fn normalize_icon(raw: &str, size: u32, color: &str) -> Result<String, MarkupError> {
    let document = Element::parse(raw)?;
    let mut svg = document
        .into_first(SVG_TAG)
        .ok_or(MarkupError::MissingRoot)?;

    let size = size.to_string();
    svg.set_attr("width", size.as_str());
    svg.set_attr("height", size.as_str());
    svg.for_each_named_mut(PATH_TAG, &mut |path: &mut Element| path.set_attr("fill", color));

    Ok(svg.to_markup())
}
