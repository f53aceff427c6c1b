/// Normalize raw player input: surrounding whitespace stripped, lowercased.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Check whether `candidate` can be spelled from the letters of `root`.
///
/// Each candidate letter consumes one remaining occurrence from a working
/// copy of the root's letters; a letter with no remaining occurrence fails
/// the whole candidate. Only counts matter, so which occurrence gets
/// consumed is irrelevant.
pub fn can_be_created(candidate: &str, root: &str) -> bool {
    let mut remaining: Vec<char> = root.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => return false,
        }
    }

    true
}
