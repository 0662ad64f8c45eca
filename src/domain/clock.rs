/// Format a number of whole seconds as `HH:MM:SS`.
/// Hours are not wrapped, so long sessions simply widen the first field.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_elapsed(0), "00:00:00");
    }

    #[test]
    fn test_seconds_minutes_hours() {
        assert_eq!(format_elapsed(3), "00:00:03");
        assert_eq!(format_elapsed(61), "00:01:01");
        assert_eq!(format_elapsed(3599), "00:59:59");
        assert_eq!(format_elapsed(3600), "01:00:00");
        assert_eq!(format_elapsed(36_000 + 754), "10:12:34");
    }

    #[test]
    fn test_past_99_hours() {
        assert_eq!(format_elapsed(100 * 3600), "100:00:00");
    }
}
