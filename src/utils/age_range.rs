/// Recommended age ranges are stored as `"min-max"` strings on exercises.
/// An absent or empty range falls back to 18-70. A present but malformed
/// range yields `None`, which callers treat as "no age is suitable".
pub const DEFAULT_AGE_RANGE: (i32, i32) = (18, 70);

pub fn parse_age_range(raw: &str) -> Option<(i32, i32)> {
    if raw.trim().is_empty() {
        return Some(DEFAULT_AGE_RANGE);
    }
    let (min, max) = raw.split_once('-')?;
    let min = min.trim().parse::<i32>().ok()?;
    let max = max.trim().parse::<i32>().ok()?;
    Some((min, max))
}

/// Whether `age` falls inside the exercise's recommended range.
pub fn age_in_range(age: i32, raw: &str) -> bool {
    match parse_age_range(raw) {
        Some((min, max)) => age >= min && age <= max,
        None => false,
    }
}
