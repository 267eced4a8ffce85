//! Label encoding of node names.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

/// Maps node names to `0..n` in sorted name order.
///
/// Names sort numerically when every name is an integer, otherwise by
/// string order.
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl LabelEncoder {
    /// Fit the encoder on every name (duplicates are fine).
    pub fn fit<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = names.into_iter().map(str::to_string).collect();
        classes.sort_unstable();
        classes.dedup();

        let numeric: Option<Vec<i64>> = classes.iter().map(|c| c.trim().parse().ok()).collect();
        if let Some(values) = numeric {
            let mut keyed: Vec<(i64, String)> = values.into_iter().zip(classes).collect();
            keyed.sort_by(|a, b| match a.0.cmp(&b.0) {
                Ordering::Equal => a.1.cmp(&b.1),
                other => other,
            });
            classes = keyed.into_iter().map(|(_, c)| c).collect();
        }

        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self { classes, index }
    }

    /// Code of a name seen during fitting.
    pub fn transform(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Names in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no names were seen.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
