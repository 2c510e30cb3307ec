use super::error::TreeError;
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize, verify},
    sequence::{delimited, preceded},
    IResult, Parser,
};

/// Characters that terminate an unquoted name.
const RESERVED: &str = ":[],()";

/// The decoded per-node payload: `name`, `name:length`, `name:length[comment]`,
/// `:length`, `:length[comment]` or `name[comment]`.
///
/// Presence of a field is distinct from a zero length or an empty comment, so
/// every field is an `Option`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    pub name: Option<String>,
    pub length: Option<f64>,
    pub comment: Option<String>,
}

/// Decode a raw payload fragment into its typed fields.
///
/// Grammar: an optional name (any characters except `:`, `[`, `]`, `,`, `(`,
/// `)`), an optional `:` followed by a decimal number, an optional `[...]`
/// comment. Empty input yields all fields absent.
///
/// A non-numeric length, trailing garbage or an unterminated bracket is a
/// `MalformedPayload` error, never a silent default.
pub fn decode_info(text: &str) -> Result<Info, TreeError> {
    if text.is_empty() {
        return Ok(Info::default());
    }

    let name = take_while(|c: char| !RESERVED.contains(c));

    // Standard floating point formats including scientific notation.
    // The textual grammar cannot spell NaN, but an overflowing exponent
    // would otherwise parse to infinity, so the value is checked as well.
    let length = preceded(
        char(':'),
        verify(
            map_res(
                recognize((
                    opt(char('-')),
                    digit1,
                    opt((char('.'), digit1)),
                    opt((
                        alt((char('e'), char('E'))),
                        opt(alt((char('+'), char('-')))),
                        digit1,
                    )),
                )),
                |s: &str| s.parse::<f64>(),
            ),
            |x: &f64| x.is_finite(),
        ),
    );

    let comment = delimited(char('['), take_while(|c: char| c != ']'), char(']'));

    let mut parser = all_consuming((name, opt(length), opt(comment)));
    let result: IResult<&str, (&str, Option<f64>, Option<&str>)> = parser.parse(text);

    match result {
        Ok((_, (name, length, comment))) => Ok(Info {
            name: if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            },
            length,
            comment: comment.map(|s: &str| s.to_string()),
        }),
        Err(_) => Err(TreeError::MalformedPayload {
            text: text.to_string(),
        }),
    }
}

/// Encode the typed fields back into a payload fragment.
///
/// The length uses Rust's shortest round-trip `Display`, so re-parsing the
/// emitted text reproduces the same numeric value.
pub fn encode_info(name: Option<&str>, length: Option<f64>, comment: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(name) = name {
        out.push_str(name);
    }
    if let Some(length) = length {
        out.push_str(&format!(":{}", length));
    }
    if let Some(comment) = comment {
        out.push('[');
        out.push_str(comment);
        out.push(']');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decode_forms() {
        let info = decode_info("").unwrap();
        assert_eq!(info, Info::default());

        let info = decode_info("Homo").unwrap();
        assert_eq!(info.name.as_deref(), Some("Homo"));
        assert_eq!(info.length, None);
        assert_eq!(info.comment, None);

        let info = decode_info("Homo:0.00655").unwrap();
        assert_eq!(info.name.as_deref(), Some("Homo"));
        assert_relative_eq!(info.length.unwrap(), 0.00655);

        let info = decode_info("Homo:0.00655[94]").unwrap();
        assert_eq!(info.name.as_deref(), Some("Homo"));
        assert_relative_eq!(info.length.unwrap(), 0.00655);
        assert_eq!(info.comment.as_deref(), Some("94"));

        let info = decode_info(":12.5").unwrap();
        assert_eq!(info.name, None);
        assert_relative_eq!(info.length.unwrap(), 12.5);

        let info = decode_info(":12.5[80]").unwrap();
        assert_eq!(info.name, None);
        assert_eq!(info.comment.as_deref(), Some("80"));

        let info = decode_info("Homo[94]").unwrap();
        assert_eq!(info.name.as_deref(), Some("Homo"));
        assert_eq!(info.length, None);
        assert_eq!(info.comment.as_deref(), Some("94"));
    }

    #[test]
    fn test_decode_scientific() {
        let info = decode_info("A:0.2e-1").unwrap();
        assert_relative_eq!(info.length.unwrap(), 0.02);

        let info = decode_info("A:-3").unwrap();
        assert_relative_eq!(info.length.unwrap(), -3.0);

        let info = decode_info("A:1E2").unwrap();
        assert_relative_eq!(info.length.unwrap(), 100.0);
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(
            decode_info("a:xyz"),
            Err(TreeError::MalformedPayload { .. })
        ));
        assert!(matches!(
            decode_info("a:1.5junk"),
            Err(TreeError::MalformedPayload { .. })
        ));
        assert!(matches!(
            decode_info("a:1."),
            Err(TreeError::MalformedPayload { .. })
        ));
        // Unterminated comment bracket
        assert!(matches!(
            decode_info("a:1.5[94"),
            Err(TreeError::MalformedPayload { .. })
        ));
        // Overflowing exponent must not produce infinity
        assert!(matches!(
            decode_info("a:1e999"),
            Err(TreeError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_encode_forms() {
        assert_eq!(encode_info(None, None, None), "");
        assert_eq!(encode_info(Some("Homo"), None, None), "Homo");
        assert_eq!(encode_info(Some("Homo"), Some(0.5), None), "Homo:0.5");
        assert_eq!(
            encode_info(Some("Homo"), Some(0.5), Some("94")),
            "Homo:0.5[94]"
        );
        assert_eq!(encode_info(None, Some(0.5), None), ":0.5");
        assert_eq!(encode_info(None, Some(0.5), Some("94")), ":0.5[94]");
        assert_eq!(encode_info(Some("Homo"), None, Some("94")), "Homo[94]");
    }

    #[test]
    fn test_codec_round_trip() {
        for text in ["Pan:0.00684", ":1.25[100]", "x:0.1", "n1[&R]"] {
            let info = decode_info(text).unwrap();
            let encoded = encode_info(
                info.name.as_deref(),
                info.length,
                info.comment.as_deref(),
            );
            assert_eq!(decode_info(&encoded).unwrap(), info);
        }
    }
}
