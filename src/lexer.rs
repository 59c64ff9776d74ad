use crate::ast::{Token, TokenKind, TokenValue};
use crate::error::LexError;

pub struct Lexer {
    /// Characters paired with their byte offset in the source.
    input: Vec<(usize, char)>,
    position: usize,
    end: usize,
}

/// Tokenizes a whole expression. The result always ends with one `Eof` token.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(expression).tokenize()
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.char_indices().collect(),
            position: 0,
            end: input.len(),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).map(|&(_, ch)| ch)
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).map(|&(_, ch)| ch)
    }

    /// Byte offset of the current character, or the input length at the end.
    fn offset(&self) -> usize {
        self.input
            .get(self.position)
            .map_or(self.end, |&(offset, _)| offset)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char) -> Result<String, LexError> {
        let start = self.offset();
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    self.advance();
                    match self.current_char() {
                        Some('n') => result.push('\n'),
                        Some('t') => result.push('\t'),
                        Some('r') => result.push('\r'),
                        // \\, \", \' and unknown escapes all yield the escaped char
                        Some(ch) => result.push(ch),
                        None => break,
                    }
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString {
            quote,
            offset: start,
        })
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.offset();
        let mut number = String::new();

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match number.parse::<f64>() {
            Ok(n) if n.is_finite() => {
                Ok(Token::new(TokenKind::Number, TokenValue::Number(n), start))
            }
            _ => Err(LexError::InvalidNumber {
                text: number,
                offset: start,
            }),
        }
    }

    /// Scans `first` and, if `second` follows, the two-character form.
    fn one_or_two(
        &mut self,
        first: char,
        second: char,
        single: TokenKind,
        double: TokenKind,
    ) -> Token {
        let start = self.offset();
        self.advance();
        if self.current_char() == Some(second) {
            self.advance();
            Token::text(double, format!("{first}{second}"), start)
        } else {
            Token::text(single, first.to_string(), start)
        }
    }

    /// Scans an operator that is only valid doubled, like `&&`.
    fn doubled(&mut self, ch: char, kind: TokenKind) -> Result<Token, LexError> {
        let start = self.offset();
        if self.peek_char(1) != Some(ch) {
            return Err(LexError::IncompleteOperator { ch, offset: start });
        }
        self.advance();
        self.advance();
        Ok(Token::text(kind, format!("{ch}{ch}"), start))
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let start = self.offset();
        self.advance();
        Token::text(kind, ch.to_string(), start)
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.offset();
        match self.current_char() {
            None => Ok(Token::eof(start)),
            Some('(') => Ok(self.single(TokenKind::LeftParen, '(')),
            Some(')') => Ok(self.single(TokenKind::RightParen, ')')),
            Some(',') => Ok(self.single(TokenKind::Comma, ',')),
            Some('=') => Ok(self.one_or_two('=', '=', TokenKind::Equals, TokenKind::Equals)),
            Some('!') => Ok(self.one_or_two('!', '=', TokenKind::Not, TokenKind::NotEquals)),
            Some('>') => Ok(self.one_or_two('>', '=', TokenKind::Greater, TokenKind::GreaterEqual)),
            Some('<') => Ok(self.one_or_two('<', '=', TokenKind::Less, TokenKind::LessEqual)),
            Some('&') => self.doubled('&', TokenKind::And),
            Some('|') => self.doubled('|', TokenKind::Or),
            Some(quote @ ('"' | '\'')) => {
                let s = self.read_string(quote)?;
                Ok(Token::text(TokenKind::String, s, start))
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if ch.is_alphabetic() => {
                let ident = self.read_identifier();

                let kind = match ident.as_str() {
                    "true" | "false" => {
                        let value = TokenValue::Boolean(ident == "true");
                        return Ok(Token::new(TokenKind::Boolean, value, start));
                    }
                    "AND" => TokenKind::And,
                    "OR" => TokenKind::Or,
                    "NOT" => TokenKind::Not,
                    "contains" => TokenKind::Contains,
                    "startsWith" => TokenKind::StartsWith,
                    _ => TokenKind::Identifier,
                };
                Ok(Token::text(kind, ident, start))
            }
            Some(ch) => Err(LexError::UnexpectedChar { ch, offset: start }),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("AND OR NOT contains startsWith true false");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::And);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Or);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Not);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Contains);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::StartsWith);
    assert_eq!(lexer.next_token().unwrap().value, TokenValue::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().value, TokenValue::Boolean(false));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_call() {
    let kinds: Vec<TokenKind> = tokenize("inFolder(file, 'work') && x >= 2")
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::String,
            TokenKind::RightParen,
            TokenKind::And,
            TokenKind::Identifier,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}
