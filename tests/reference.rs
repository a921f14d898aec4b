//! Regression test against the golden reference dataset.
//!
//! The JSON file maps comma-separated spin sextuples to the exact value of
//! the corresponding 6-j symbol as rendered by the symbolic reference
//! library. Every entry must match bit-for-bit, not just numerically.

use std::collections::BTreeMap;

use wigner_6j::closed_form_3nj;

#[test]
fn reference_dataset() {
    let data = include_str!("reference_3nj_closed_form.json");
    let reference: BTreeMap<String, String> =
        serde_json::from_str(data).expect("reference dataset is valid JSON");

    assert!(!reference.is_empty());

    for (key, expected) in &reference {
        let spins: Vec<i32> = key
            .split(',')
            .map(|j| j.parse::<i32>().expect("integer spin in reference key"))
            .collect();
        assert_eq!(spins.len(), 6, "malformed key {}", key);

        // reference keys store the spins themselves, the crate takes them
        // doubled
        let value = closed_form_3nj(
            2 * spins[0],
            2 * spins[1],
            2 * spins[2],
            2 * spins[3],
            2 * spins[4],
            2 * spins[5],
        );

        assert_eq!(
            &value.to_string(),
            expected,
            "mismatch for spins {}",
            key
        );
    }
}
