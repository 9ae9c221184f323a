//! Ordered command-line argument assembly.
//!
//! Tokens are stored verbatim and handed to the OS as an argument vector,
//! so the child always receives each token as a single argument. Quoting
//! only enters the picture when a command line is rendered to one string
//! for display.

/// Accumulates the argument vector for one tool invocation.
///
/// Append-only; insertion order defines the exact command line. Duplicate
/// tokens are kept as given.
#[derive(Debug, Default, Clone)]
pub struct ArgumentBuilder {
    args: Vec<String>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one token to the end of the vector.
    pub fn append(&mut self, token: impl Into<String>) -> &mut Self {
        self.args.push(token.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// The final token vector handed to the process. Read-only from here on.
    pub fn render(self) -> Vec<String> {
        self.args
    }

    /// Single-line rendering with shell-safe quoting, for log output.
    pub fn render_line(&self) -> String {
        self.args
            .iter()
            .map(|t| quote(t))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote a value so a shell would read it back as a single token.
///
/// Clean tokens pass through untouched; anything carrying whitespace or
/// shell metacharacters is wrapped in double quotes with embedded `"` and
/// `\` escaped.
pub fn quote(value: &str) -> String {
    if !needs_quoting(value) {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|c| {
            c.is_whitespace()
                || matches!(
                    c,
                    '"' | '\'' | '$' | '&' | '|' | ';' | '<' | '>' | '(' | ')' | '`' | '\\' | '*'
                        | '?' | '#'
                )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut builder = ArgumentBuilder::new();
        builder.append("install");
        builder.append("--verbose");
        builder.append("--no-ansi");

        assert_eq!(builder.render(), vec!["install", "--verbose", "--no-ansi"]);
    }

    #[test]
    fn duplicates_are_not_suppressed() {
        let mut builder = ArgumentBuilder::new();
        builder.append("--verbose");
        builder.append("--verbose");

        assert_eq!(builder.render(), vec!["--verbose", "--verbose"]);
    }

    #[test]
    fn clean_tokens_render_unquoted() {
        assert_eq!(quote("--no-clean"), "--no-clean");
        assert_eq!(quote("/usr/local/bin/pod"), "/usr/local/bin/pod");
    }

    #[test]
    fn whitespace_forces_quoting() {
        assert_eq!(
            quote("--project-directory=/tmp/My Project"),
            "\"--project-directory=/tmp/My Project\""
        );
    }

    #[test]
    fn embedded_quotes_and_backslashes_are_escaped() {
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote(r"C:\tmp dir"), r#""C:\\tmp dir""#);
    }

    #[test]
    fn empty_token_is_quoted() {
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn render_line_quotes_only_what_needs_it() {
        let mut builder = ArgumentBuilder::new();
        builder.append("install");
        builder.append("--project-directory=/tmp/My Project");

        assert_eq!(
            builder.render_line(),
            "install \"--project-directory=/tmp/My Project\""
        );
    }
}
