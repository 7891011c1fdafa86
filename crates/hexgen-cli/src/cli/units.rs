const UNIT: u64 = 1024;
const PREFIXES: &[u8] = b"kMGTPE";

/// Formats a byte count with binary (1024) steps and one decimal, e.g.
/// `1536` becomes `"1.5 kB"`. Counts below 1024 are printed as-is.
pub fn human_readable_size(size: u64) -> String {
    if size < UNIT {
        return format!("{size} B");
    }

    let (mut div, mut exp) = (UNIT, 0);
    let mut n = size / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!(
        "{:.1} {}B",
        size as f64 / div as f64,
        char::from(PREFIXES[exp])
    )
}
