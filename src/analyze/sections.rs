/// Labels from `labels` that do not occur verbatim in `text`, in table order.
pub fn missing_exact(text: &str, labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| !text.contains(label.as_str()))
        .cloned()
        .collect()
}

/// Labels whose lower-cased form does not occur in `lowered`, in table order.
///
/// `lowered` must already be lower-cased.
pub fn missing_folded(lowered: &str, labels: &[String]) -> Vec<String> {
    labels
        .iter()
        .filter(|label| !lowered.contains(label.to_lowercase().as_str()))
        .cloned()
        .collect()
}
