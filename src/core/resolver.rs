use crate::domain::model::{LinkTemplate, SearchResult, PLACEHOLDER};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters a URI component keeps literal, plus `+` which stands for a space.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'+');

/// Encodes a query for use inside a template url.
///
/// Spaces become `+` and every other reserved character is percent-encoded,
/// except `+` itself which is always kept literal.
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(&query.replace(' ', "+"), QUERY_ENCODE_SET).to_string()
}

/// Substitutes `query` into every template, keeping template order.
pub fn resolve(query: &str, templates: &[LinkTemplate]) -> Vec<SearchResult> {
    let encoded = encode_query(query);
    tracing::debug!("Resolving '{}' as '{}' against {} templates", query, encoded, templates.len());

    templates
        .iter()
        .map(|template| SearchResult {
            platform: template.name.clone(),
            url: template.url.replacen(PLACEHOLDER, &encoded, 1),
        })
        .collect()
}
