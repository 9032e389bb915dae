use nom::{bytes::complete::is_not, combinator::all_consuming, IResult};
use tracing::warn;

use super::error::MarkupError;

/// Characters that would break the opening tag if they appeared in a tag name
const TAG_NAME_FORBIDDEN: &str = " \t\r\n\x0c\"'<>/=";

/// Attempt to parse the whole input as a tag name
fn parse_tag_name(input: &str) -> IResult<&str, &str> {
    all_consuming(is_not(TAG_NAME_FORBIDDEN))(input)
}

/// Reject tag names that are empty or would produce malformed markup
pub(crate) fn validate_tag_name(name: &str) -> Result<&str, MarkupError> {
    match parse_tag_name(name) {
        Ok((_, name)) => Ok(name),
        Err(_) => {
            warn!(tag = name, "Rejected tag name");
            Err(MarkupError::InvalidArgument(format!(
                "invalid tag name {:?}",
                name
            )))
        }
    }
}

#[cfg(test)]
#[test]
fn test_tag_name_parse() {
    assert_eq!(parse_tag_name("div"), Ok(("", "div")));
    assert_eq!(parse_tag_name("my-widget"), Ok(("", "my-widget")));
    assert_eq!(parse_tag_name("svg:rect"), Ok(("", "svg:rect")));

    assert!(parse_tag_name("").is_err());
    assert!(parse_tag_name("two words").is_err());
    assert!(parse_tag_name("<p").is_err());
    assert!(parse_tag_name("br/").is_err());
    assert!(parse_tag_name("a=b").is_err());
}

#[cfg(test)]
#[test]
fn test_validate_tag_name() {
    assert_eq!(validate_tag_name("p"), Ok("p"));
    assert_eq!(
        validate_tag_name(""),
        Err(MarkupError::InvalidArgument("invalid tag name \"\"".to_string()))
    );
}
