use crate::core::{Dataset, Example, Label};

/// Two well separated clusters of two points each.
pub fn two_clusters() -> Dataset {
    labeled(&[
        (&[1.0, 2.0], Label::Positive),
        (&[5.0, 5.0], Label::Negative),
        (&[1.5, 2.5], Label::Positive),
        (&[4.5, 5.5], Label::Negative),
    ])
}

pub fn labeled(rows: &[(&[f64], Label)]) -> Dataset {
    Dataset::new(
        rows.iter()
            .map(|(features, label)| Example::labeled(features.to_vec(), *label))
            .collect(),
    )
    .expect("fixture rows share one dimensionality")
}

pub fn unlabeled(rows: &[&[f64]]) -> Dataset {
    Dataset::new(rows.iter().map(|f| Example::unlabeled(f.to_vec())).collect())
        .expect("fixture rows share one dimensionality")
}

/// One-feature examples, in the given order.
pub fn labeled_sequence(items: &[(f64, Label)]) -> Dataset {
    Dataset::new(
        items
            .iter()
            .map(|&(x, label)| Example::labeled(vec![x], label))
            .collect(),
    )
    .expect("one feature each")
}

/// `n` one-feature examples alternating `Positive` (at `i`) and `Negative`
/// (at `100 + i`), so the classes never overlap.
pub fn separable_line(n: usize) -> Dataset {
    let items: Vec<(f64, Label)> = (0..n)
        .map(|i| {
            if i % 2 == 0 {
                (i as f64, Label::Positive)
            } else {
                (100.0 + i as f64, Label::Negative)
            }
        })
        .collect();
    labeled_sequence(&items)
}
