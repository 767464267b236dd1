/// Strip everything but ASCII letters and digits, then lowercase.
///
/// `"Amazon Prime Video"` becomes `"amazonprimevideo"` and `"Disney+"`
/// becomes `"disney"`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Label of the Radarr tag that marks availability on `provider`.
///
/// The prefix is lowercased but keeps its punctuation, so `elsewherr_` and
/// `Netflix` give `elsewherr_netflix`.
pub fn canonical_label(prefix: &str, provider: &str) -> String {
    format!("{}{}", prefix, normalize(provider)).to_lowercase()
}
