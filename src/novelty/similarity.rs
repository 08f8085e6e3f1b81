// Cosine similarity and the dense target-by-related similarity matrix.

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Mismatched lengths, empty vectors, and zero-norm vectors all return 0.0
/// so a degenerate embedding can never divide by zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom < f64::EPSILON {
        0.0
    } else {
        // Float error can push identical vectors slightly past 1.0
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Row-major matrix of cosine similarities.
/// Rows are target sentences, columns are related sentences.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compare every target vector against every related vector.
    pub fn compute(targets: &[Vec<f64>], related: &[Vec<f64>]) -> Self {
        let mut values = Vec::with_capacity(targets.len() * related.len());
        for t in targets {
            for r in related {
                values.push(cosine_similarity(t, r));
            }
        }

        Self {
            rows: targets.len(),
            cols: related.len(),
            values,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Similarity between target `row` and related `col`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.values.get(row * self.cols + col).copied()
    }

    /// All similarities for one target sentence.
    pub fn row(&self, row: usize) -> &[f64] {
        if row >= self.rows {
            return &[];
        }
        &self.values[row * self.cols..(row + 1) * self.cols]
    }

    /// Similarity of each target sentence to its nearest related sentence.
    ///
    /// A matrix with no columns yields 0.0 per row.
    pub fn row_maxima(&self) -> Vec<f64> {
        (0..self.rows)
            .map(|r| {
                self.row(r)
                    .iter()
                    .copied()
                    .fold(None, |best: Option<f64>, v| {
                        Some(best.map_or(v, |b| b.max(v)))
                    })
                    .unwrap_or(0.0)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_identical() {
        let a = vec![1.0, 2.0, 3.0];
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_cosine_opposite_is_negative() {
        // Unlike overlap scoring, the matrix keeps the full [-1, 1] range
        let sim = cosine_similarity(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]);
        assert!((sim + 1.0).abs() < 1e-10, "got {sim}");
    }

    #[test]
    fn test_cosine_zero_vector() {
        let sim = cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_cosine_mismatched_dimensions() {
        let sim = cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(sim, 0.0, "Mismatched dims should return 0.0");
    }

    #[test]
    fn test_cosine_empty() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_matrix_shape_and_lookup() {
        let targets = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let related = vec![vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, -1.0]];
        let m = SimilarityMatrix::compute(&targets, &related);

        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!((m.get(0, 0).unwrap() - 1.0).abs() < 1e-10);
        assert!((m.get(1, 2).unwrap() + 1.0).abs() < 1e-10);
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 3).is_none());
        assert_eq!(m.row(1).len(), 3);
    }

    #[test]
    fn test_row_maxima_picks_nearest_neighbor() {
        let targets = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let related = vec![vec![1.0, 0.0], vec![1.0, 1.0]];
        let m = SimilarityMatrix::compute(&targets, &related);
        let maxima = m.row_maxima();

        assert!((maxima[0] - 1.0).abs() < 1e-10);
        // (0,1)·(1,1) / sqrt(2)
        assert!((maxima[1] - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_row_maxima_all_negative_row() {
        let targets = vec![vec![1.0, 0.0]];
        let related = vec![vec![-1.0, 0.0], vec![-1.0, -1.0]];
        let maxima = SimilarityMatrix::compute(&targets, &related).row_maxima();
        assert!((maxima[0] + std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_row_maxima_no_columns() {
        let targets = vec![vec![1.0, 0.0]];
        let m = SimilarityMatrix::compute(&targets, &[]);
        assert_eq!(m.row_maxima(), vec![0.0]);
    }
}
