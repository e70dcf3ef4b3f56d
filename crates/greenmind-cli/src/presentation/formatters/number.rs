/// CO₂ total in grams, two decimals: `0.65g`
pub fn format_grams(grams: f64) -> String {
    format!("{:.2}g", grams)
}

/// Water total in liters, three decimals: `0.325L`
pub fn format_liters(liters: f64) -> String {
    format!("{:.3}L", liters)
}

/// Table figures at their natural precision: `0.0008`, `52`, `12.25`.
/// Only a zero fraction is dropped.
pub fn format_quantity(value: f64) -> String {
    format!("{}", value)
}

/// Approximate token counts: `65` or `16.9`
pub fn format_tokens(tokens: f64) -> String {
    if tokens.fract() == 0.0 && tokens.abs() < 1e15 {
        format!("{:.0}", tokens)
    } else {
        format!("{:.1}", tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grams() {
        assert_eq!(format_grams(0.65), "0.65g");
        assert_eq!(format_grams(2.6), "2.60g");
        assert_eq!(format_grams(0.0), "0.00g");
    }

    #[test]
    fn test_format_liters() {
        assert_eq!(format_liters(0.325), "0.325L");
        assert_eq!(format_liters(1.3), "1.300L");
    }

    #[test]
    fn test_format_quantity_keeps_precision() {
        assert_eq!(format_quantity(0.0008), "0.0008");
        assert_eq!(format_quantity(0.004), "0.004");
        assert_eq!(format_quantity(65.0), "65");
        assert_eq!(format_quantity(97.5), "97.5");
        assert_eq!(format_quantity(0.04), "0.04");
        assert_eq!(format_quantity(12.25), "12.25");
    }

    #[test]
    fn test_format_tokens() {
        assert_eq!(format_tokens(65.0), "65");
        assert_eq!(format_tokens(13.0 * 1.3), "16.9");
    }
}
