// Helpers for formatting sizes in reports

pub fn bytes2hr(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let value = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} bytes")
    } else if value < KB * KB {
        format!("{:.2} KB", value / KB)
    } else if value < KB * KB * KB {
        format!("{:.2} MB", value / (KB * KB))
    } else {
        format!("{:.2} GB", value / (KB * KB * KB))
    }
}

pub fn bits2hr(bits: usize) -> String {
    bytes2hr(bits.div_ceil(8))
}

/// Memory held by a list of strings: the vector's slots plus each string's
/// heap buffer.
pub fn strings_footprint(items: &[String]) -> usize {
    std::mem::size_of_val(items)
        + items.iter().map(String::capacity).sum::<usize>()
}
