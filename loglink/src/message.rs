//! Positional `{}` substitution.
//!
//! Each `{}` in a template is replaced by the [`Display`] of the next
//! argument. A placeholder preceded by a single backslash (`\{}`) is emitted
//! literally and consumes no argument; a doubled backslash (`\\{}`) emits one
//! backslash followed by the substituted argument. Once the arguments run out
//! the remainder of the template is emitted verbatim, and surplus arguments
//! are ignored.
//!
//! ```
//! use loglink::message::substitute;
//!
//! assert_eq!(substitute("{} + {} = {}", &[&1, &2, &3]), "1 + 2 = 3");
//! assert_eq!(substitute("set \\{} to {}", &[&"x"]), "set {} to x");
//! assert_eq!(substitute("{} and {}", &[&"only"]), "only and {}");
//! ```

use std::fmt::{self, Display};

const PLACEHOLDER: &str = "{}";

/// A template paired with its arguments, rendered lazily through
/// [`Display`].
///
/// Backends receive this value so that substitution only happens if and when
/// the backend actually writes the line.
#[derive(Clone, Copy)]
pub struct Substitution<'a> {
    template: &'a str,
    args: &'a [&'a dyn Display],
}

impl<'a> Substitution<'a> {
    /// Pair `template` with `args`.
    pub fn new(template: &'a str, args: &'a [&'a dyn Display]) -> Self {
        Substitution { template, args }
    }

    /// The raw template.
    pub fn template(&self) -> &'a str {
        self.template
    }

    /// The raw arguments.
    pub fn args(&self) -> &'a [&'a dyn Display] {
        self.args
    }
}

impl fmt::Debug for Substitution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("template", &self.template)
            .field("args", &self.args.len())
            .finish()
    }
}

impl Display for Substitution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.template;
        let mut args = self.args.iter();

        while args.len() > 0 {
            let Some(pos) = rest.find(PLACEHOLDER) else {
                break;
            };
            let head = &rest[..pos];
            rest = &rest[pos + PLACEHOLDER.len()..];

            match head.bytes().rev().take_while(|b| *b == b'\\').count() {
                0 => {
                    f.write_str(head)?;
                }
                1 => {
                    // escaped: literal placeholder, argument kept for later
                    f.write_str(&head[..head.len() - 1])?;
                    f.write_str(PLACEHOLDER)?;
                    continue;
                }
                _ => {
                    f.write_str(&head[..head.len() - 1])?;
                }
            }
            if let Some(arg) = args.next() {
                arg.fmt(f)?;
            }
        }
        f.write_str(rest)
    }
}

/// Substitute `args` into `template` eagerly.
pub fn substitute(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_owned();
    }
    Substitution::new(template, args).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hello {}", &[&"world" as &dyn Display], "hello world")]
    #[case("{}{}", &[&1 as &dyn Display, &2], "12")]
    #[case("a={} b={} c={}", &[&1 as &dyn Display, &"two", &3.5], "a=1 b=two c=3.5")]
    #[case("{} {} {} {} {}", &[&1 as &dyn Display, &2, &3, &4, &5], "1 2 3 4 5")]
    #[case("no placeholders", &[&1 as &dyn Display], "no placeholders")]
    #[case("{} and {}", &[&"one" as &dyn Display], "one and {}")]
    #[case("{}", &[&1 as &dyn Display, &2], "1")]
    #[case("plain {}", &[] as &[&dyn Display], "plain {}")]
    #[case("\\{} is {}", &[&"x" as &dyn Display], "{} is x")]
    #[case("path C:\\\\{}", &[&"dir" as &dyn Display], "path C:\\dir")]
    #[case("{", &[&1 as &dyn Display], "{")]
    #[case("}{}{", &[&1 as &dyn Display], "}1{")]
    #[case("ü{}ß", &[&"é" as &dyn Display], "üéß")]
    fn positional_substitution(
        #[case] template: &str,
        #[case] args: &[&dyn Display],
        #[case] expected: &str,
    ) {
        assert_eq!(substitute(template, args), expected);
        assert_eq!(Substitution::new(template, args).to_string(), expected);
    }

    #[test]
    fn debug_does_not_render_args() {
        let args: [&dyn Display; 1] = [&1];
        let sub = Substitution::new("x={}", &args);
        assert_eq!(
            format!("{sub:?}"),
            r#"Substitution { template: "x={}", args: 1 }"#
        );
        assert_eq!(sub.template(), "x={}");
        assert_eq!(sub.args().len(), 1);
    }
}
