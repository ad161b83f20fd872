/// Letters outside ASCII that survive slug derivation. The site publishes in
/// Icelandic, so heading anchors keep the full Icelandic alphabet.
const ICELANDIC_LETTERS: &str = "áðéíóúýþæö";

/// Derives a URL/anchor-safe id from heading text.
///
/// Lowercases, keeps ASCII alphanumerics and Icelandic letters, collapses
/// whitespace runs to a single hyphen and strips everything else. Pure
/// function of the text: identical headings produce identical slugs, so
/// duplicate headings collide on purpose (the anchor lookup resolves to the
/// first match).
pub fn slugify(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || ICELANDIC_LETTERS.contains(c) {
            cleaned.push(c);
        } else if c.is_whitespace() {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Inngangur", "inngangur")]
    #[case("Þjónusta og verð", "þjónusta-og-verð")]
    #[case("Hvað er SEO?", "hvað-er-seo")]
    #[case("  Extra   spacing  ", "extra-spacing")]
    #[case("E-mail & markaðssetning", "email-markaðssetning")]
    #[case("100% árangur", "100-árangur")]
    #[case("!!!", "")]
    fn derives_expected_slug(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(slugify(input), expected);
    }

    #[test]
    fn slug_is_pure_function_of_text() {
        assert_eq!(slugify("Niðurstöður"), slugify("Niðurstöður"));
    }
}
