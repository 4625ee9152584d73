use ndarray::Array1;

/// Numerically stable softmax; returns an empty array for empty input.
///
/// Returns `None` if any logit is NaN or infinite.
pub(crate) fn softmax(logits: &[f32]) -> Option<Array1<f32>> {
    if logits.is_empty() {
        return Some(Array1::zeros(0));
    }
    if !logits.iter().all(|v| v.is_finite()) {
        return None;
    }
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exps = Array1::from_iter(logits.iter().map(|&x| (x - max).exp()));
    let sum = exps.sum();
    (sum > 0.0 && sum.is_finite()).then(|| exps / sum)
}

/// Index and value of the largest element. Ties go to the lowest index.
pub(crate) fn argmax(values: &Array1<f32>) -> Option<(usize, f32)> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f32)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ if v.is_nan() => best,
            _ => Some((i, v)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]).unwrap();
        assert!((probs.sum() - 1.0).abs() < 1e-6);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_softmax_handles_large_logits() {
        let probs = softmax(&[1000.0, 1000.0]).unwrap();
        assert!((probs[0] - 0.5).abs() < 1e-6);
        assert!((probs[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_empty() {
        assert_eq!(softmax(&[]).unwrap().len(), 0);
    }

    #[test]
    fn test_softmax_rejects_non_finite_logits() {
        assert!(softmax(&[0.1, f32::NAN, 0.3]).is_none());
        assert!(softmax(&[0.1, f32::INFINITY, 0.3]).is_none());
        assert!(softmax(&[f32::NEG_INFINITY, 0.0]).is_none());
    }

    #[test]
    fn test_argmax_prefers_first_on_tie() {
        let values = Array1::from(vec![0.25, 0.5, 0.5]);
        assert_eq!(argmax(&values), Some((1, 0.5)));
    }

    #[test]
    fn test_argmax_empty() {
        assert_eq!(argmax(&Array1::zeros(0)), None);
    }
}
