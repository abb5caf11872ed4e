//! Nickname slugging — lowercase, ASCII-folded, underscore-joined.

/// Fold common accented Latin letters to ASCII. Input is already lowercased.
fn fold(ch: char) -> Option<&'static str> {
    Some(match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ñ' => "n",
        'ç' => "c",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        _ => return None,
    })
}

/// Slug a display string: lowercase, accents folded to ASCII, every run of
/// other characters collapsed to a single underscore, no underscores at the
/// ends.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        let piece = if ch.is_ascii_alphanumeric() {
            None
        } else {
            match fold(ch) {
                Some(folded) => Some(folded),
                None => {
                    pending_separator = true;
                    continue;
                }
            }
        };
        if pending_separator && !slug.is_empty() {
            slug.push('_');
        }
        pending_separator = false;
        match piece {
            Some(folded) => slug.push_str(folded),
            None => slug.push(ch),
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_label_and_value_with_underscores() {
        assert_eq!(slugify("Person-Matt"), "person_matt");
        assert_eq!(slugify("Employer-UMass Boston"), "employer_umass_boston");
    }

    #[test]
    fn folds_accents_to_ascii() {
        assert_eq!(slugify("Person-Hélène"), "person_helene");
        assert_eq!(slugify("Straße"), "strasse");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("Person-Johnny B. Goode"), "person_johnny_b_goode");
    }

    #[test]
    fn no_leading_or_trailing_underscores() {
        assert_eq!(slugify("-Matt-"), "matt");
        assert_eq!(slugify("(Employer)"), "employer");
    }

    #[test]
    fn unfoldable_characters_become_separators() {
        assert_eq!(slugify("Person-山田"), "person");
        assert_eq!(slugify("a☃b"), "a_b");
    }
}
