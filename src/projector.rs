//! # Dot-Product Projector
//!
//! Reduces each sample to the component of user acceleration along gravity.

use crate::Sample;

/// Project every sample, keeping index alignment with `samples`.
///
/// Components above roughly `1e154` overflow the products to infinity;
/// [`Parser`](crate::Parser) rejects such series with `ParseError::NonFinite`.
pub fn project(samples: &[Sample]) -> Vec<f64> {
    samples.iter().map(Sample::dot).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(user: [f64; 3], gravity: [f64; 3]) -> Sample {
        Sample {
            x: user[0],
            y: user[1],
            z: user[2],
            xg: gravity[0],
            yg: gravity[1],
            zg: gravity[2],
        }
    }

    #[test]
    fn test_orthogonal_is_zero() {
        let samples = [sample([1.0, 0.0, 0.0], [0.0, 1.0, 0.0])];
        assert_eq!(project(&samples), vec![0.0]);
    }

    #[test]
    fn test_identical_vectors() {
        let samples = [sample([1.0, 1.0, 1.0], [1.0, 1.0, 1.0])];
        assert_eq!(project(&samples), vec![3.0]);
    }

    #[test]
    fn test_alignment_preserved() {
        let samples = [
            sample([2.0, 0.0, 0.0], [3.0, 0.0, 0.0]),
            sample([0.0, 0.0, -1.0], [0.0, 0.0, 9.0]),
            sample([0.0, 0.0, 0.0], [0.0, 0.0, 9.81]),
        ];
        assert_eq!(project(&samples), vec![6.0, -9.0, 0.0]);
        assert!(project(&[]).is_empty());
    }
}
