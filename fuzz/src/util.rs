/// Reads `data` as little endian `i32`s, a trailing partial value is dropped.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Checks the sorted `v` against the std stable sort of `original`.
pub fn check_sorted(original: &[i32], v: &[i32]) {
    let mut expected = original.to_vec();
    expected.sort();
    assert_eq!(expected, v);
}
