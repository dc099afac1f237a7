/// Font size and line height that scale linearly with the viewport width
/// between two breakpoints, as CSS `clamp()` expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidType {
    pub font_size: String,
    pub line_height: String,
}

/// Sizes are in px; `ratio` scales the line height relative to the font size
pub fn fluid_type(min_size: f64, max_size: f64, min_screen: f64, max_screen: f64, ratio: f64) -> FluidType {
    FluidType {
        font_size: clamp(min_size, max_size, min_screen, max_screen),
        line_height: clamp(min_size * ratio, max_size * ratio, min_screen, max_screen),
    }
}

/// Inline style taking the font size from `size` and the line height from `leading`
pub fn type_style(size: &FluidType, leading: &FluidType) -> String {
    format!("font-size: {}; line-height: {}", size.font_size, leading.line_height)
}

pub fn heading_style() -> String {
    type_style(
        &fluid_type(48.0, 64.0, 300.0, 2400.0, 1.5),
        &fluid_type(28.0, 32.0, 300.0, 2400.0, 1.5),
    )
}

pub fn subheading_style() -> String {
    type_style(
        &fluid_type(20.0, 24.0, 300.0, 2400.0, 1.5),
        &fluid_type(16.0, 20.0, 300.0, 2400.0, 1.5),
    )
}

fn clamp(min: f64, max: f64, min_screen: f64, max_screen: f64) -> String {
    if max_screen <= min_screen || min >= max {
        return format!("{}px", number(min));
    }
    let slope = (max - min) / (max_screen - min_screen);
    let intercept = min - slope * min_screen;
    format!(
        "clamp({}px, {}px + {}vw, {}px)",
        number(min),
        number(intercept),
        number(slope * 100.0),
        number(max)
    )
}

/// At most four decimals, no trailing zeros
fn number(value: f64) -> String {
    let formatted = format!("{:.4}", value);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}
