//! Assorted list helpers.

use std::cmp::Ordering;

/// One run of a natural sort key: either digits or everything else.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    Text(&'a str),
    Number(u128),
}

impl PartialOrd for Chunk<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Chunk<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => a.cmp(b),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Greater,
        }
    }
}

fn natural_key(s: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits = None;
    for (i, c) in s.char_indices() {
        let digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != digit => {
                chunks.push(make_chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(digit);
    }
    if let Some(prev) = in_digits {
        chunks.push(make_chunk(&s[start..], prev));
    }
    chunks
}

fn make_chunk(run: &str, digits: bool) -> Chunk<'_> {
    if digits {
        if let Ok(n) = run.parse() {
            return Chunk::Number(n);
        }
    }
    Chunk::Text(run)
}

/// Sorts strings the way humans expect: `file2` before `file11`.
pub fn humansort<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_key(a.as_ref()).cmp(&natural_key(b.as_ref())));
}

/// Maps `x` linearly from `range_x` onto `range_y`.
#[must_use]
pub fn lin_interp(x: f64, range_x: (f64, f64), range_y: (f64, f64)) -> f64 {
    let s = (x - range_x.0) / (range_x.1 - range_x.0);
    range_y.0 * (1.0 - s) + range_y.1 * s
}

/// Snaps every value to the centre of one of `bands` equal-width bands
/// spanning the input range.
///
/// Fewer than two bands returns the input unchanged.
#[must_use]
pub fn make_bands(values: &[f64], bands: usize) -> Vec<f64> {
    if bands < 2 || values.is_empty() {
        return values.to_vec();
    }
    let vmin = values.iter().copied().fold(f64::INFINITY, f64::min);
    let vmax = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let width = (vmax - vmin) / bands as f64;
    if width == 0.0 {
        return values.to_vec();
    }
    let centres: Vec<f64> = (0..bands)
        .map(|i| vmin + width * i as f64 + width / 2.0)
        .collect();
    let tol = width / 2.0 * 1.001;

    values
        .iter()
        .filter_map(|&v| centres.iter().copied().find(|c| (v - c).abs() < tol))
        .collect()
}

/// Flattens nested index lists into one list, preserving order.
#[must_use]
pub fn flatten<T: Clone, R: AsRef<[T]>>(rows: &[R]) -> Vec<T> {
    rows.iter().flat_map(|r| r.as_ref().iter().cloned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humansort() {
        let mut names = vec!["file11", "file1", "file2", "a", "file10b", "file10a"];
        humansort(&mut names);
        assert_eq!(
            names,
            vec!["a", "file1", "file2", "file10a", "file10b", "file11"]
        );
    }

    #[test]
    fn test_humansort_owned_strings() {
        let mut names = vec!["z23".to_string(), "z3".to_string()];
        humansort(&mut names);
        assert_eq!(names, vec!["z3", "z23"]);
    }

    #[test]
    fn test_lin_interp() {
        assert!((lin_interp(5.0, (0.0, 10.0), (100.0, 200.0)) - 150.0).abs() < 1e-12);
        assert!((lin_interp(0.0, (0.0, 10.0), (1.0, -1.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_make_bands() {
        let values = [0.0, 0.1, 0.5, 0.9, 1.0];
        let banded = make_bands(&values, 2);
        assert_eq!(banded.len(), values.len());
        assert!((banded[0] - 0.25).abs() < 1e-12);
        assert!((banded[1] - 0.25).abs() < 1e-12);
        assert!((banded[3] - 0.75).abs() < 1e-12);
        assert!((banded[4] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_make_bands_passthrough() {
        assert_eq!(make_bands(&[1.0, 2.0], 1), vec![1.0, 2.0]);
        assert_eq!(make_bands(&[3.0, 3.0], 4), vec![3.0, 3.0]);
    }

    #[test]
    fn test_flatten() {
        let rows = vec![vec![0, 1], vec![], vec![2]];
        assert_eq!(flatten(&rows), vec![0, 1, 2]);
    }
}
