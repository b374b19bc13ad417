//! URL query-string assembly.

use crate::text::url_encoded;

/// Build a percent-encoded query string from ordered key/value pairs.
///
/// Entries are joined with `&` in iteration order; keys and values are
/// escaped under the same allow-list as [`crate::text::url_encoded`],
/// so `=` and `&` inside a key or value never introduce structure.
/// An empty sequence yields an empty string.
///
/// # Examples
///
/// ```
/// use weekline::query::to_query_string;
///
/// let query = to_query_string([("q", "day & night"), ("page", "2")]);
/// assert_eq!(query, "q=day%20%26%20night&page=2");
/// ```
pub fn to_query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut query = String::new();
    for (key, value) in pairs {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&url_encoded(key));
        query.push('=');
        query.push_str(&url_encoded(value));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_string() {
        let pairs: [(&str, &str); 0] = [];
        assert_eq!(to_query_string(pairs), "");
    }

    #[test]
    fn test_single_pair_has_no_separator() {
        assert_eq!(to_query_string([("key", "value")]), "key=value");
    }

    #[test]
    fn test_pairs_join_in_iteration_order() {
        let query = to_query_string([("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(query, "b=2&a=1&c=3");
    }

    #[test]
    fn test_keys_and_values_are_escaped() {
        let query = to_query_string([("redirect url", "https://example.com/?next=1")]);
        assert_eq!(
            query,
            "redirect%20url=https%3A%2F%2Fexample.com%2F%3Fnext%3D1"
        );
    }
}
