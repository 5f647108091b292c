/// Resolver prefix for bare DOIs
const DOI_RESOLVER: &str = "https://doi.org/";

/// Turn a survey's reference string into a URL that can be opened.
///
/// Anything that is not already an http(s) link is treated as a DOI.
pub fn reference_url(reference: &str) -> String {
    let reference = reference.trim();
    if reference.starts_with("http") {
        reference.to_string()
    } else {
        format!("{}{}", DOI_RESOLVER, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doi_is_prefixed() {
        assert_eq!(
            reference_url("10.1093/mnras/stab1234"),
            "https://doi.org/10.1093/mnras/stab1234"
        );
    }

    #[test]
    fn test_http_kept() {
        assert_eq!(reference_url("https://www.4most.eu"), "https://www.4most.eu");
        assert_eq!(reference_url("http://example.org/x"), "http://example.org/x");
    }

    #[test]
    fn test_other_treated_as_doi() {
        assert_eq!(reference_url("arXiv:2101.00001"), "https://doi.org/arXiv:2101.00001");
    }
}
