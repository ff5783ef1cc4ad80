/// Canonical parse for free-form price text, shared by the feed's value
/// ordering and the server's listing ingest.
///
/// Prices are typed with a comma as the decimal separator and periods as
/// thousands separators ("1.500,00" is one thousand five hundred). Strip
/// the periods, turn the comma into a period, and parse; anything that
/// still fails parses as zero so a malformed price sorts to the bottom
/// instead of failing the whole feed.
pub fn parse_display_price(display: &str) -> f64 {
    display
        .trim()
        .replace('.', "")
        .replace(',', ".")
        .parse()
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thousands_and_decimal_comma() {
        assert_eq!(parse_display_price("1.500,00"), 1500.0);
        assert_eq!(parse_display_price("20,00"), 20.0);
        assert_eq!(parse_display_price("1.234.567,89"), 1_234_567.89);
    }

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_display_price("300"), 300.0);
        assert_eq!(parse_display_price(" 300 "), 300.0);
    }

    #[test]
    fn malformed_input_parses_as_zero() {
        assert_eq!(parse_display_price(""), 0.0);
        assert_eq!(parse_display_price("abc"), 0.0);
        assert_eq!(parse_display_price("R$ 100"), 0.0);
    }
}
