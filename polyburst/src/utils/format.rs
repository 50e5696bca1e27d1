//! Parsing and formatting helpers

use glam::{DVec2, IVec2};

/// Parse a pixel position written as `X,Y`
pub fn parse_pixel(value: &str) -> Result<IVec2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid X in '{value}': {e}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid Y in '{value}': {e}"))?;

    Ok(IVec2::new(x, y))
}

/// Format a point with two decimals
pub fn format_point(point: DVec2) -> String {
    format!("({:.2}, {:.2})", point.x, point.y)
}

/// Format a duration in seconds
pub fn format_seconds(seconds: f64) -> String {
    format!("{seconds:.3}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixel() {
        assert_eq!(parse_pixel("10,20"), Ok(IVec2::new(10, 20)));
        assert_eq!(parse_pixel(" -5 , 7 "), Ok(IVec2::new(-5, 7)));
    }

    #[test]
    fn test_parse_pixel_rejects_garbage() {
        assert!(parse_pixel("abc").unwrap_err().contains("expected X,Y"));
        assert!(parse_pixel("1,two").unwrap_err().contains("invalid Y"));
        assert!(parse_pixel("1.5,2").unwrap_err().contains("invalid X"));
    }

    #[test]
    fn test_format_point() {
        assert_eq!(format_point(DVec2::new(1.0, -2.345)), "(1.00, -2.35)");
        assert_eq!(format_seconds(0.5), "0.500s");
    }
}
