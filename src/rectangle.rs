use crate::constants::frame;
use crate::error::*;

/// Renders a rectangle of the given size using box drawing characters.
/// Every row, including the last one, ends with a new line.
///
/// # Arguments
///
/// * `width` - Number of columns, corners included
/// * `height` - Number of rows, corners included
///
/// # Errors
///
/// Returns `Error::InvalidRectangle` if any side is shorter than 2.
///
/// # Examples
///
/// ```
/// use strkit::rectangle::rectangle;
///
/// assert_eq!(rectangle(2, 2).unwrap(), "┌┐\n└┘\n");
/// assert_eq!(rectangle(4, 3).unwrap(), "┌──┐\n│  │\n└──┘\n");
/// ```
pub fn rectangle(width: usize, height: usize) -> Result<String> {
    if width < 2 || height < 2 {
        return Err(Error::InvalidRectangle { width, height });
    }

    let inner = width - 2;
    let row = |left: char, fill: char, right: char| {
        let mut line = String::with_capacity((inner + 2) * fill.len_utf8() + 1);
        line.push(left);
        line.extend(std::iter::repeat(fill).take(inner));
        line.push(right);
        line.push('\n');
        line
    };

    let mut result = row(frame::TOP_LEFT, frame::HORIZONTAL, frame::TOP_RIGHT);
    let middle = row(frame::VERTICAL, frame::FILL, frame::VERTICAL);
    for _ in 0..height - 2 {
        result.push_str(&middle);
    }
    result.push_str(&row(
        frame::BOTTOM_LEFT,
        frame::HORIZONTAL,
        frame::BOTTOM_RIGHT,
    ));

    Ok(result)
}
