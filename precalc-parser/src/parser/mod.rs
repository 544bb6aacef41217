pub mod binary;
pub mod call;
pub mod equation;
pub mod error;
pub mod expr;
pub mod iter;
pub mod literal;
pub mod paren;
pub mod token;
pub mod unary;

use error::{Error, kind};
use precalc_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Attempts to parse a value from the given stream of tokens, using multiple parsing functions
/// in order. The first function that succeeds is used to parse the value.
///
/// This function can also catch fatal errors and immediately short-circuit the parsing
/// process.
///
/// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
/// value is returned. Otherwise, the stream is left unchanged and the error of the last
/// attempted parsing function is returned.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($expr:expr),+ $(,)?) => {{
        $(
            match $expr {
                Ok(value) => return Ok(value),
                Err(err) if err.fatal => return Err(err),
                // ignore this error and try the next parser, or return it
                err => err,
            }
        )+
    }};
}

/// A high-level parser for expressions and equations. This is the type to use to parse an
/// arbitrary piece of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Creates a fatal error that points at the current token, or the end of the source code if
    /// the cursor is at the end of the stream.
    pub fn error_fatal(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new_fatal(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Set the cursor of this parser to the cursor of another parser over the same source. This
    /// is used to commit to a speculative parse done on a clone.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.current_token().map_or(false, |token| token.is_whitespace()) {
            self.cursor += 1;
        }
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(&mut self, delimiter: TokenKind) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    // a trailing delimiter is not allowed, and neither is a fatal error
                    self.cursor = start;
                    return Err(err);
                },
            }

            let mut ahead = self.clone();
            match ahead.next_token() {
                Ok(token) if token.kind == delimiter => self.set_cursor(&ahead),
                _ => return Ok(values),
            }
        }
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. This function can be used in the [`Parse::parse`]
    /// implementation of a type with the given [`Parser`], as it will automatically backtrack the
    /// cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Speculatively parses a value from the given stream of tokens, with a validation predicate.
    /// The value must parse successfully, **and** the predicate must return [`Ok`] for this
    /// function to return successfully.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_then<T: Parse, F>(&mut self, predicate: F) -> Result<T, Error>
    where
        F: FnOnce(&T, &Parser) -> Result<(), Error>,
    {
        let start = self.cursor;

        // closure workaround allows us to use `?` in the closure
        let compute = || {
            let value = T::parse(self)?;
            predicate(&value, self)?;
            Ok(value)
        };

        match compute() {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens (apart from
    /// trailing whitespace) must be consumed by the parser; if not, an error is returned.
    ///
    /// This is the entry point used by consumers of the library. The errors are returned as a
    /// list so that callers can report each of them.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Vec<Error>> {
        let value = T::parse(self).map_err(|err| vec![err])?;
        self.skip_whitespace();

        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::CloseParen => {
                Err(vec![self.error(kind::UnclosedParenthesis { opening: false })])
            },
            Some(_) => Err(vec![self.error(kind::ExpectedEof)]),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// Implementations may leave the stream in any state when they fail; use
    /// [`Parser::try_parse`] to backtrack automatically.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// This means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative.
    ///
    /// This means `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors. Implicit
    /// multiplication shares this precedence.
    Factor,

    /// Precedence of unary negation (`-`) and unary plus (`+`).
    Neg,

    /// Precedence of exponentiation (`^` or `**`).
    Exp,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use binary::Binary;
    use call::Call;
    use equation::Equation;
    use expr::Expr;
    use literal::{Literal, LitNum, LitSym};
    use paren::Paren;
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use unary::Unary;

    fn num(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Number(LitNum { value: value.to_string(), span }))
    }

    fn sym(name: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal::Symbol(LitSym { name: name.to_string(), span }))
    }

    fn bin(lhs: Expr, kind: BinOpKind, implicit: bool, op_span: Range<usize>, rhs: Expr) -> Expr {
        let span = lhs.span().start..rhs.span().end;
        Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op: BinOp { kind, implicit, span: op_span },
            rhs: Box::new(rhs),
            span,
        })
    }

    #[test]
    fn literal_int() {
        let mut parser = Parser::new("16");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, num("16", 0..2));
    }

    #[test]
    fn literal_float() {
        let mut parser = Parser::new("3.14");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, num("3.14", 0..4));
    }

    #[test]
    fn literal_symbol() {
        let mut parser = Parser::new("pi");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, sym("pi", 0..2));
    }

    #[test]
    fn trailing_whitespace() {
        let mut parser = Parser::new("  x   ");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, sym("x", 2..3));
    }

    #[test]
    fn binary_left_associativity() {
        let mut parser = Parser::new("3 - 2 - 1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            bin(num("3", 0..1), BinOpKind::Sub, false, 2..3, num("2", 4..5)),
            BinOpKind::Sub,
            false,
            6..7,
            num("1", 8..9),
        ));
    }

    #[test]
    fn binary_right_associativity() {
        let mut parser = Parser::new("2 ^ 3 ^ 4");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("2", 0..1),
            BinOpKind::Exp,
            false,
            2..3,
            bin(num("3", 4..5), BinOpKind::Exp, false, 6..7, num("4", 8..9)),
        ));
    }

    #[test]
    fn binary_precedence() {
        let mut parser = Parser::new("1 + 2 * 3");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("1", 0..1),
            BinOpKind::Add,
            false,
            2..3,
            bin(num("2", 4..5), BinOpKind::Mul, false, 6..7, num("3", 8..9)),
        ));
    }

    #[test]
    fn double_star_power() {
        let mut parser = Parser::new("x**2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(sym("x", 0..1), BinOpKind::Exp, false, 1..3, num("2", 3..4)));
    }

    #[test]
    fn implicit_multiplication() {
        let mut parser = Parser::new("2x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("2", 0..1),
            BinOpKind::Mul,
            true,
            1..1,
            bin(sym("x", 1..2), BinOpKind::Exp, false, 2..3, num("2", 3..4)),
        ));
    }

    #[test]
    fn implicit_multiplication_after_division() {
        let mut parser = Parser::new("1/2x");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            bin(num("1", 0..1), BinOpKind::Div, false, 1..2, num("2", 2..3)),
            BinOpKind::Mul,
            true,
            3..3,
            sym("x", 3..4),
        ));
    }

    #[test]
    fn implicit_multiplication_paren() {
        let mut parser = Parser::new("3(x + 1)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("3", 0..1),
            BinOpKind::Mul,
            true,
            1..1,
            Expr::Paren(Paren {
                expr: Box::new(bin(sym("x", 2..3), BinOpKind::Add, false, 4..5, num("1", 6..7))),
                span: 1..8,
            }),
        ));
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let mut parser = Parser::new("-x^2");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Unary(Unary {
            operand: Box::new(bin(sym("x", 1..2), BinOpKind::Exp, false, 2..3, num("2", 3..4))),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
    }

    #[test]
    fn negative_exponent() {
        let mut parser = Parser::new("2^-1");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, bin(
            num("2", 0..1),
            BinOpKind::Exp,
            false,
            1..2,
            Expr::Unary(Unary {
                operand: Box::new(num("1", 3..4)),
                op: UnaryOp { kind: UnaryOpKind::Neg, span: 2..3 },
                span: 2..4,
            }),
        ));
    }

    #[test]
    fn function_call() {
        let mut parser = Parser::new("log(x, 2)");
        let expr = parser.try_parse_full::<Expr>().unwrap();

        assert_eq!(expr, Expr::Call(Call {
            name: LitSym { name: "log".to_string(), span: 0..3 },
            args: vec![sym("x", 4..5), num("2", 7..8)],
            span: 0..9,
            paren_span: 3..9,
        }));
    }

    #[test]
    fn equation_both_sides() {
        let mut parser = Parser::new("x + y = 3");
        let eq = parser.try_parse_full::<Equation>().unwrap();

        assert_eq!(eq.lhs, bin(sym("x", 0..1), BinOpKind::Add, false, 2..3, sym("y", 4..5)));
        assert_eq!(eq.rhs, Some(num("3", 8..9)));
        assert_eq!(eq.span, 0..9);
    }

    #[test]
    fn equation_without_rhs() {
        let mut parser = Parser::new("x - y - 1");
        let eq = parser.try_parse_full::<Equation>().unwrap();

        assert_eq!(eq.rhs, None);
        assert_eq!(eq.symbols().into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn dangling_operator() {
        let mut parser = Parser::new("x**");
        let errs = parser.try_parse_full::<Expr>().unwrap_err();

        assert_eq!(errs.len(), 1);
        assert!(errs[0].kind.as_any().is::<kind::UnexpectedEof>());
    }

    #[test]
    fn unclosed_paren() {
        let mut parser = Parser::new("2(x + 1");
        let errs = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(errs[0].kind.as_any().is::<kind::UnclosedParenthesis>());
        assert_eq!(errs[0].spans, vec![1..2]);
    }

    #[test]
    fn extra_close_paren() {
        let mut parser = Parser::new("x + 1)");
        let errs = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(errs[0].kind.as_any().is::<kind::UnclosedParenthesis>());
    }

    #[test]
    fn empty_paren() {
        let mut parser = Parser::new("3()");
        let errs = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(errs[0].kind.as_any().is::<kind::EmptyParenthesis>());
    }

    #[test]
    fn chained_equation() {
        let mut parser = Parser::new("x = y = 1");
        let errs = parser.try_parse_full::<Equation>().unwrap_err();

        assert!(errs[0].kind.as_any().is::<kind::ChainedEquation>());
    }

    #[test]
    fn expression_rejects_equals() {
        let mut parser = Parser::new("x = 1");
        let errs = parser.try_parse_full::<Expr>().unwrap_err();

        assert!(errs[0].kind.as_any().is::<kind::ExpectedEof>());
    }

    #[test]
    fn display_power() {
        for source in ["x^2 - 4", "x**2 - 4"] {
            let expr = Parser::new(source).try_parse_full::<Expr>().unwrap();
            assert_eq!(expr.to_string(), "x**2 - 4");
        }
    }

    #[test]
    fn empty_input() {
        let mut parser = Parser::new("   ");
        assert!(parser.try_parse_full::<Expr>().is_err());
    }
}
