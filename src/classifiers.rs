//! On-device classifiers
//!
//! Three pure functions, one per simulated capability:
//! - Voice: keyword spotting over a raw command line (e.g., "call mom")
//! - Biometric: face-vector match by Euclidean distance
//! - Signal: short-horizon strength prediction by arithmetic mean

/// Static keyword list, zero allocation
const COMMAND_KEYWORDS: &[&str] = &["call", "pay", "send", "open"];

/// Distance below which two face vectors are considered the same person.
pub const FACE_MATCH_THRESHOLD: f64 = 5.0;

/// First keyword (in table order) occurring anywhere in `line`.
/// Matching is case-sensitive substring search.
pub fn matched_keyword(line: &str) -> Option<&'static str> {
    COMMAND_KEYWORDS
        .iter()
        .copied()
        .find(|kw| line.contains(kw))
}

/// True iff the line contains any recognized command keyword.
pub fn recognize(line: &str) -> bool {
    matched_keyword(line).is_some()
}

/// Euclidean distance between two pixel-intensity vectors, paired
/// element-wise. Callers wanting strict matching check lengths first;
/// `authenticate` does.
pub fn euclidean_distance(a: &[i32], b: &[i32]) -> f64 {
    let sum_sq: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(x - y);
            d * d
        })
        .sum();
    sum_sq.sqrt()
}

/// True iff `input` matches the stored template: equal lengths and
/// Euclidean distance below [`FACE_MATCH_THRESHOLD`].
///
/// Two zero-length vectors are distance 0 apart and therefore
/// authenticate; callers own rejecting empty captures.
pub fn authenticate(input: &[i32], stored: &[i32]) -> bool {
    if input.len() != stored.len() {
        return false;
    }
    euclidean_distance(input, stored) < FACE_MATCH_THRESHOLD
}

/// Predicted next signal strength: the arithmetic mean of the history,
/// or 0.0 for an empty history.
pub fn predict(samples: &[i32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f64 = samples.iter().map(|s| f64::from(*s)).sum();
    sum / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_keyword_anywhere_in_line() {
        let cases = vec![
            ("call mom", true),
            ("please send cash", true),
            ("pay the bill", true),
            ("open messages", true),
            ("recall everything", true), // "call" as substring
            ("hello world", false),
            ("", false),
            ("CALL MOM", false), // case-sensitive
        ];

        for (line, expected) in cases {
            assert_eq!(recognize(line), expected, "line: {:?}", line);
        }
    }

    #[test]
    fn test_matched_keyword_reports_table_order() {
        assert_eq!(matched_keyword("open to pay"), Some("pay"));
        assert_eq!(matched_keyword("call mom"), Some("call"));
        assert_eq!(matched_keyword("nothing here"), None);
    }

    #[test]
    fn test_euclidean_distance_demo_vectors() {
        let input = [100, 98, 105, 97];
        let stored = [102, 97, 106, 96];
        let d = euclidean_distance(&input, &stored);
        assert!((d - 7.0_f64.sqrt()).abs() < 1e-9, "distance was {}", d);
    }

    #[test]
    fn test_authenticate_within_threshold() {
        assert!(authenticate(&[100, 98, 105, 97], &[102, 97, 106, 96]));
    }

    #[test]
    fn test_authenticate_self_match() {
        let cases: Vec<&[i32]> = vec![&[0], &[100, 98, 105, 97], &[-5, 7, 0]];
        for v in cases {
            assert!(authenticate(v, v), "vector: {:?}", v);
        }
    }

    #[test]
    fn test_authenticate_rejects_distant_vector() {
        assert!(!authenticate(&[100, 98, 105, 97], &[120, 98, 105, 97]));
    }

    #[test]
    fn test_authenticate_rejects_length_mismatch() {
        assert!(!authenticate(&[100, 98, 105], &[100, 98, 105, 97]));
    }

    #[test]
    fn test_authenticate_empty_vectors_pass() {
        // Documented edge: zero-length capture is distance 0 from a
        // zero-length template.
        assert!(authenticate(&[], &[]));
    }

    #[test]
    fn test_predict_mean() {
        assert_eq!(predict(&[-85, -80, -78, -90]), -83.25);
        assert_eq!(predict(&[10]), 10.0);
    }

    #[test]
    fn test_predict_empty_history() {
        assert_eq!(predict(&[]), 0.0);
    }
}
