//! Edition extraction. First match wins; the value keeps the spelling found
//! in the name, minus any surrounding braces.

use crate::{Span, Token, TokenKind};

pub(crate) fn extract(text: &str) -> Option<Token> {
    let re = regex!(
        r"(?i)(?:^|[^\p{L}0-9])(?P<edition>Omnibus(?:[ _]Edition)?|Deluxe(?:[ _]Edition)?|Special[ _]Edition|Uncensored|Full[ _]Colou?r|Kanzenban|Complete[ _]Edition|Perfect[ _]Edition|Collector'?s[ _]Edition|\{[^}]*Edition\})"
    );
    let caps = re.captures(text)?;
    let edition = caps.name("edition")?;
    let value = edition.as_str().trim_matches(['{', '}']).replace('_', " ").trim().to_string();

    Some(Token {
        kind: TokenKind::Edition,
        span: Span::new(edition.start(), edition.end()),
        value,
        pattern: re.as_str(),
    })
}
