use crate::{
    ast::{
        Node, Token, TokenKind, TokenValue,
        operators::{self, comparison_operator},
    },
    config::DEFAULT_MAX_DEPTH,
    error::ParseError,
};

/// Recursive-descent parser over a token list.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expr           := orExpr
/// orExpr         := andExpr ( OR andExpr )*
/// andExpr        := notExpr ( AND notExpr )*
/// notExpr        := NOT notExpr | comparisonExpr
/// comparisonExpr := primary ( compOp primary )?
/// primary        := literal | IDENT ( '(' args? ')' )? | '(' orExpr ')'
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    max_depth: usize,
}

/// Parses a token list produced by [`crate::lexer::tokenize`].
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Node, ParseError> {
    Parser::new(tokens).parse()
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let offset = tokens.last().map_or(0, |t| t.offset);
            tokens.push(Token::eof(offset));
        }
        Parser {
            tokens,
            position: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn current(&self) -> &Token {
        // `new` guarantees a trailing Eof and `advance` never moves past it
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            expected,
            kind: token.kind,
            value: token.value.clone(),
            offset: token.offset,
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if !self.check(kind) {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(())
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
                offset: self.current().offset,
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Rejects a freshly built node whose tree is taller than `max_depth`.
    ///
    /// Children were checked when they were built, so `height` recurses at
    /// most `max_depth` levels.
    fn bounded(&self, node: Node, offset: usize) -> Result<Node, ParseError> {
        if node.height() > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
                offset,
            });
        }
        Ok(node)
    }

    /// Parse primary expressions: literals, identifiers, calls and groups
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let node = match (&self.current().kind, &self.current().value) {
            (TokenKind::String, TokenValue::Text(s)) => Node::string(s.clone()),
            (TokenKind::Number, TokenValue::Number(n)) => Node::number(*n),
            (TokenKind::Boolean, TokenValue::Boolean(b)) => Node::boolean(*b),
            (TokenKind::Identifier, TokenValue::Text(name)) => {
                let name = name.clone();
                self.advance();
                return self.parse_identifier_or_call(name);
            }
            (TokenKind::LeftParen, _) => {
                self.descend()?;
                self.advance();
                let expr = self.parse_or()?;
                self.expect(TokenKind::RightParen, "')'")?;
                self.ascend();
                return Ok(expr);
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.advance();
        Ok(node)
    }

    /// Identifiers are opaque property names; dotted paths are not part of
    /// the grammar since the lexer never joins `.` into an identifier.
    fn parse_identifier_or_call(&mut self, name: String) -> Result<Node, ParseError> {
        if !self.check(TokenKind::LeftParen) {
            return Ok(Node::identifier(name));
        }
        let offset = self.current().offset;
        self.descend()?;
        self.advance(); // '('

        let mut arguments = vec![];
        if !self.check(TokenKind::RightParen) {
            arguments.push(self.parse_or()?);
            while self.check(TokenKind::Comma) {
                self.advance();
                arguments.push(self.parse_or()?);
            }
        }

        self.expect(TokenKind::RightParen, "',' or ')'")?;
        self.ascend();
        self.bounded(Node::call(name, arguments), offset)
    }

    fn parse_comparison(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_primary()?;

        match comparison_operator(self.current().kind) {
            Some(op) => {
                let offset = self.current().offset;
                self.advance();
                let right = self.parse_primary()?;
                self.bounded(Node::binary(op, left, right), offset)
            }
            None => Ok(left),
        }
    }

    fn parse_not(&mut self) -> Result<Node, ParseError> {
        if !self.check(TokenKind::Not) {
            return self.parse_comparison();
        }

        let op = self
            .current()
            .value
            .as_text()
            .unwrap_or(operators::NOT)
            .to_string();
        let offset = self.current().offset;
        self.descend()?;
        self.advance();
        let operand = self.parse_not()?;
        self.ascend();
        self.bounded(Node::unary(op, operand), offset)
    }

    fn parse_and(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_not()?;

        while self.check(TokenKind::And) {
            let offset = self.current().offset;
            self.advance();
            let right = self.parse_not()?;
            left = self.bounded(Node::binary(operators::AND, left, right), offset)?;
        }
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_and()?;

        while self.check(TokenKind::Or) {
            let offset = self.current().offset;
            self.advance();
            let right = self.parse_and()?;
            left = self.bounded(Node::binary(operators::OR, left, right), offset)?;
        }
        Ok(left)
    }

    pub fn parse_expression(&mut self) -> Result<Node, ParseError> {
        self.parse_or()
    }

    /// Parses a complete expression; anything left before `Eof` is an error.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        let expr = self.parse_expression()?;
        if !self.check(TokenKind::Eof) {
            let token = self.current();
            return Err(ParseError::TrailingInput {
                kind: token.kind,
                value: token.value.clone(),
                offset: token.offset,
            });
        }
        Ok(expr)
    }
}
