/// Split a raw command line into tokens, the way a simple shell would.
///
/// * Tokens are separated by spaces, except within a `"` quoted region.
/// * The quotes themselves are removed.
/// * A `\` makes the following character literal (ex: `\"` or `\\`); a `\` directly before a newline removes both.
///
/// ### Example
/// ```
/// # use cmdreader_builder as cmdreader;
/// use cmdreader::tokenize;
///
/// assert_eq!(
///     tokenize(r#"--message "hello world" a\ b"#),
///     vec!["--message", "hello world", "a b"]
/// );
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::default();
    let mut current = String::default();
    let mut quoted = false;
    let mut escaped = false;

    for c in line.chars() {
        if escaped {
            escaped = false;

            if c != '\n' {
                current.push(c);
            }

            continue;
        }

        match c {
            '\\' => escaped = true,
            '"' => quoted = !quoted,
            ' ' if !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Join the items back together with single spaces.
///
/// Useful to reconstitute free text captured by a sequential collection.
///
/// ### Example
/// ```
/// # use cmdreader_builder as cmdreader;
/// use cmdreader::squash;
///
/// assert_eq!(squash(vec!["hello", "big", "world"]), "hello big world");
/// ```
pub fn squash<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::default();

    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }

        out.push_str(item.as_ref());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   ", vec![])]
    #[case("abc", vec!["abc"])]
    #[case("  abc  def ", vec!["abc", "def"])]
    #[case("--foo=bar -xy 12", vec!["--foo=bar", "-xy", "12"])]
    #[case(r#""a b" c"#, vec!["a b", "c"])]
    #[case(r#"--name="a b""#, vec!["--name=a b"])]
    #[case(r#"a"b c"d"#, vec!["ab cd"])]
    #[case(r#""""#, vec![])]
    #[case(r#""unterminated quote"#, vec!["unterminated quote"])]
    #[case(r#"a\ b"#, vec!["a b"])]
    #[case(r#"\"quoted\""#, vec!["\"quoted\""])]
    #[case(r#"a\\b"#, vec![r#"a\b"#])]
    #[case("a\\\nb", vec!["ab"])]
    #[case("tab\tinside", vec!["tab\tinside"])]
    #[case(r#"trailing\"#, vec!["trailing"])]
    fn tokenize_line(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokenize(line), expected);
    }

    #[rstest]
    #[case(vec![], "")]
    #[case(vec!["a"], "a")]
    #[case(vec!["a", "b", "c"], "a b c")]
    #[case(vec!["a b", "", "c"], "a b  c")]
    fn squash_items(#[case] items: Vec<&str>, #[case] expected: &str) {
        assert_eq!(squash(items), expected);
    }

    #[test]
    fn squash_owned() {
        let items: Vec<String> = vec!["x".to_string(), "y".to_string()];
        assert_eq!(squash(&items), "x y");
    }
}
