//! Splitting and cutting of command line tokens.

/// Split a token into its header, i.e. the leading run of hyphens, and its name.
///
/// A token without leading hyphen, or made only of hyphens, has an empty header and the whole
/// token is returned as the name.
pub fn split(token: &str) -> (&str, &str) {
    let run = token.bytes().take_while(|&b| b == b'-').count();

    if run == 0 || run == token.len() {
        return ("", token);
    }

    token.split_at(run)
}

/// Cut the first token out of a sequence, returning it with the rest of the sequence.
///
/// An empty sequence gives an empty token and an empty rest.
pub fn cut<S>(tokens: &[S]) -> (&str, &[S])
where
    S: AsRef<str>,
{
    match tokens.split_first() {
        Some((head, tail)) => (head.as_ref(), tail),
        None => ("", &[]),
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[test]
    fn it_should_split_short_and_long_headers() {
        assert_that!(split("-v"), eq(("-", "v")));
        assert_that!(split("--verbose"), eq(("--", "verbose")));
        assert_that!(split("------x"), eq(("------", "x")));
    }

    #[test]
    fn it_should_keep_inner_hyphens_in_name() {
        assert_that!(split("--dry-run"), eq(("--", "dry-run")));
        assert_that!(split("-k=-1"), eq(("-", "k=-1")));
    }

    #[test]
    fn it_should_not_split_bare_tokens() {
        assert_that!(split("value"), eq(("", "value")));
        assert_that!(split(""), eq(("", "")));
        assert_that!(split("a-b"), eq(("", "a-b")));
    }

    #[test]
    fn it_should_not_split_hyphen_only_tokens() {
        assert_that!(split("-"), eq(("", "-")));
        assert_that!(split("--"), eq(("", "--")));
        assert_that!(split("---"), eq(("", "---")));
    }

    #[test]
    fn it_should_cut_head_from_tail() {
        let argv = ["a", "b", "c"];

        let (head, tail) = cut(&argv);
        assert_that!(head, eq("a"));
        assert_that!(tail, eq(&["b", "c"][..]));
    }

    #[test]
    fn it_should_cut_last_token_with_empty_tail() {
        let (head, tail) = cut(&["a"]);
        assert_that!(head, eq("a"));
        assert_that!(tail.is_empty(), eq(true));
    }

    #[test]
    fn it_should_cut_empty_sequence() {
        let argv: [&str; 0] = [];

        let (head, tail) = cut(&argv);
        assert_that!(head, eq(""));
        assert_that!(tail.is_empty(), eq(true));
    }
}
