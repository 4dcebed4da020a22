//! Lenient parser for the hierarchical configuration text format.
//!
//! ```text
//! file    ::= item*
//! item    ::= name ( '{' item* '}' | value ) ';'?
//! ```
//!
//! Tokens are separated by whitespace. `{`, `}` and `;` are punctuation, `#`
//! starts a comment running to the end of the line. Any part of a name or value
//! may be quoted with `"` or `'` to include whitespace or punctuation.
//!
//! The parser never fails. A stray `}` at the top level is skipped, the end of
//! input closes every open section, and a trailing name with nothing after it
//! becomes a leaf with an empty value.

use crate::node::ConfigNode;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Open,
    Close,
    Semi,
}

/// Byte-level tokenizer. All structural characters are ASCII.
struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.peek() {
            if b.is_ascii_whitespace() {
                self.pos += 1;
            } else if b == b'#' {
                while let Some(b) = self.peek() {
                    self.pos += 1;
                    if b == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.skip_trivia();
        let b = self.peek()?;
        match b {
            b'{' => {
                self.pos += 1;
                Some(Token::Open)
            }
            b'}' => {
                self.pos += 1;
                Some(Token::Close)
            }
            b';' => {
                self.pos += 1;
                Some(Token::Semi)
            }
            _ => Some(Token::Text(self.word())),
        }
    }

    /// A word runs to the next whitespace or punctuation outside quotes.
    /// Quoted segments may sit next to bare text (`"Built-In Mic"|Speaker`).
    fn word(&mut self) -> String {
        let mut bytes = Vec::new();
        while let Some(c) = self.peek() {
            if c == b'"' || c == b'\'' {
                self.pos += 1;
                let start = self.pos;
                while self.peek().is_some_and(|q| q != c) {
                    self.pos += 1;
                }
                bytes.extend_from_slice(&self.input[start..self.pos]);
                // Consume the closing quote; an unterminated quote runs to EOF.
                if self.peek().is_some() {
                    self.pos += 1;
                }
            } else if c.is_ascii_whitespace() || matches!(c, b'{' | b'}' | b';' | b'#') {
                break;
            } else {
                bytes.push(c);
                self.pos += 1;
            }
        }
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Recursive descent over the token stream, one token of lookahead.
struct Parser<'a> {
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let lookahead = lexer.next_token();
        Self { lexer, lookahead }
    }

    fn advance(&mut self) -> Option<Token> {
        std::mem::replace(&mut self.lookahead, self.lexer.next_token())
    }

    /// Parse items until `}` (when `nested`) or end of input.
    fn parse_items(&mut self, nested: bool) -> Vec<ConfigNode> {
        let mut children = Vec::new();
        while let Some(token) = self.advance() {
            match token {
                Token::Text(name) => children.push(self.parse_item(name)),
                Token::Close if nested => break,
                Token::Close => tracing::debug!("cnode: ignoring unmatched '}}'"),
                Token::Open => {
                    // Anonymous section: keep its content under an empty name.
                    tracing::debug!("cnode: section without a name");
                    let nested_children = self.parse_items(true);
                    children.push(ConfigNode::section("", nested_children));
                }
                Token::Semi => {}
            }
        }
        children
    }

    /// `item ::= name ( '{' item* '}' | value ) ';'?`
    fn parse_item(&mut self, name: String) -> ConfigNode {
        let node = if self.lookahead == Some(Token::Open) {
            self.advance();
            ConfigNode::section(name, self.parse_items(true))
        } else if matches!(self.lookahead, Some(Token::Text(_))) {
            match self.advance() {
                Some(Token::Text(value)) => ConfigNode::leaf(name, value),
                _ => ConfigNode::leaf(name, ""),
            }
        } else {
            ConfigNode::leaf(name, "")
        };
        if self.lookahead == Some(Token::Semi) {
            self.advance();
        }
        node
    }
}

/// Parse configuration text into a tree rooted at an unnamed node.
pub fn parse(input: &str) -> ConfigNode {
    let mut parser = Parser::new(input);
    ConfigNode::section("", parser.parse_items(false))
}
