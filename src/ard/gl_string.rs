//! GL string tokenizing helpers
//!
//! Only the delimiter structure of a GL string is handled here: splitting it
//! into allele tokens and rebuilding it after each token has been rewritten.

/// GL string delimiters, loosest binding first
pub const DELIMITERS: [char; 5] = ['^', '|', '+', '~', '/'];

/// Iterate over the allele tokens of a GL string, in order
///
/// Empty tokens (from leading, trailing or doubled delimiters) are yielded as
/// empty strings so callers can reject them.
pub fn tokens(gl_string: &str) -> impl Iterator<Item = &str> {
    gl_string.split(|c: char| DELIMITERS.contains(&c))
}

/// Rebuild a GL string, replacing every allele token with the alternatives
/// returned by `rewrite_token`
///
/// Alternatives are joined with `/`. Within a `/` group, duplicates collapse to
/// their first occurrence.
pub fn rewrite<E, F>(gl_string: &str, rewrite_token: &F) -> Result<String, E>
where
    F: Fn(&str) -> Result<Vec<String>, E>,
{
    rewrite_at(gl_string, 0, rewrite_token)
}

fn rewrite_at<E, F>(gl_string: &str, level: usize, rewrite_token: &F) -> Result<String, E>
where
    F: Fn(&str) -> Result<Vec<String>, E>,
{
    let delimiter = DELIMITERS[level];

    if level == DELIMITERS.len() - 1 {
        let mut alternatives: Vec<String> = Vec::new();
        for token in gl_string.split(delimiter) {
            for allele in rewrite_token(token)? {
                if !alternatives.contains(&allele) {
                    alternatives.push(allele);
                }
            }
        }
        return Ok(alternatives.join("/"));
    }

    let mut parts = Vec::new();
    for part in gl_string.split(delimiter) {
        parts.push(rewrite_at(part, level + 1, rewrite_token)?);
    }
    Ok(parts.join(&delimiter.to_string()))
}
