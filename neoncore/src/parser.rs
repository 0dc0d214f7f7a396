//! Recursive-descent parser and evaluator
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('-' | '+') unary | power
//! power   := primary ('**' unary)?
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! `**` binds tighter than a unary sign on its left (`-2**2 == -4`) but its
//! right operand may carry one (`2**-1 == 0.5`), and it is right
//! associative.
//!
//! Runs of `+ -` or `* /` are kept as flat [`Expr::Chain`]s and folded in a
//! loop, so only parentheses, signs and `**` nest, and those are capped at
//! [`MAX_DEPTH`].

use crate::error::{CalcError, Result};
use crate::lexer::{tokenize, Spanned, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Plus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Unary(UnaryOp, Box<Expr>),
    Power(Box<Expr>, Box<Expr>),
    /// `first op1 x1 op2 x2 ...`, evaluated left to right.
    Chain(Box<Expr>, Vec<(BinaryOp, Expr)>),
}

impl Expr {
    pub fn eval(&self) -> Result<f64> {
        let value = match self {
            Expr::Number(n) => *n,
            Expr::Unary(UnaryOp::Neg, inner) => -inner.eval()?,
            Expr::Unary(UnaryOp::Plus, inner) => inner.eval()?,
            Expr::Power(base, exponent) => power(base.eval()?, exponent.eval()?)?,
            Expr::Chain(first, rest) => {
                let mut acc = first.eval()?;
                for (op, operand) in rest {
                    acc = apply_binary(*op, acc, operand.eval()?)?;
                }
                acc
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NotFinite)
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
        BinaryOp::Div => Ok(lhs / rhs),
    }
}

/// `base ** exponent` with the domain checks a real-valued calculator needs.
pub fn power(base: f64, exponent: f64) -> Result<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(CalcError::Domain { function: "pow", operand: base });
    }
    Ok(base.powf(exponent))
}

/// Parse `input` into an expression tree.
pub fn parse(input: &str) -> Result<Expr> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(CalcError::Empty);
    }
    let mut parser = Parser { tokens: &tokens, pos: 0, depth: 0 };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(Spanned { token: Token::RParen, .. }) => Err(CalcError::UnbalancedParens),
        Some(other) => Err(unexpected(other)),
    }
}

/// Parse and evaluate `input` in one step.
pub fn eval(input: &str) -> Result<f64> {
    parse(input)?.eval()
}

/// Nesting limit for parentheses, chained unary signs and `**`.
pub const MAX_DEPTH: usize = 256;

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Spanned> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, token: Token) -> bool {
        match self.peek() {
            Some(s) if s.token == token => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<Expr> {
        let first = self.term()?;
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(Token::Plus) {
                BinaryOp::Add
            } else if self.eat(Token::Minus) {
                BinaryOp::Sub
            } else {
                return Ok(chain(first, rest));
            };
            rest.push((op, self.term()?));
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let first = self.unary()?;
        let mut rest = Vec::new();
        loop {
            let op = if self.eat(Token::Star) {
                BinaryOp::Mul
            } else if self.eat(Token::Slash) {
                BinaryOp::Div
            } else {
                return Ok(chain(first, rest));
            };
            rest.push((op, self.unary()?));
        }
    }

    fn unary(&mut self) -> Result<Expr> {
        let op = if self.eat(Token::Minus) {
            UnaryOp::Neg
        } else if self.eat(Token::Plus) {
            UnaryOp::Plus
        } else {
            return self.power();
        };
        self.descend()?;
        let operand = self.unary()?;
        self.depth -= 1;
        Ok(Expr::Unary(op, Box::new(operand)))
    }

    fn power(&mut self) -> Result<Expr> {
        let base = self.primary()?;
        if !self.eat(Token::Pow) {
            return Ok(base);
        }
        self.descend()?;
        let exponent = self.unary()?;
        self.depth -= 1;
        Ok(Expr::Power(Box::new(base), Box::new(exponent)))
    }

    fn primary(&mut self) -> Result<Expr> {
        let Some(tok) = self.advance() else {
            return Err(CalcError::UnexpectedEnd);
        };
        match tok.token {
            Token::Number(n) => Ok(Expr::Number(n)),
            Token::LParen => {
                self.descend()?;
                let inner = self.expr()?;
                self.depth -= 1;
                if self.eat(Token::RParen) {
                    Ok(inner)
                } else if self.peek().is_none() {
                    Err(CalcError::UnbalancedParens)
                } else {
                    Err(unexpected(&self.tokens[self.pos]))
                }
            }
            _ => Err(unexpected(tok)),
        }
    }
}

fn chain(first: Expr, rest: Vec<(BinaryOp, Expr)>) -> Expr {
    if rest.is_empty() {
        first
    } else {
        Expr::Chain(Box::new(first), rest)
    }
}

fn unexpected(tok: &Spanned) -> CalcError {
    CalcError::UnexpectedToken {
        token: tok.token.to_string(),
        pos: tok.pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(input: &str, expected: f64) {
        let got = eval(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert!((got - expected).abs() < 1e-12, "{input}: got {got}, expected {expected}");
    }

    #[test]
    fn test_precedence() {
        approx("2+3*4", 14.0);
        approx("(2+3)*4", 20.0);
        approx("10-4-3", 3.0);
        approx("100/10/5", 2.0);
        approx("2*3^2", 18.0);
    }

    #[test]
    fn test_power_associativity_and_signs() {
        approx("2^3^2", 512.0);
        approx("-2^2", -4.0);
        approx("(-2)^2", 4.0);
        approx("2^-1", 0.5);
        approx("2**10", 1024.0);
    }

    #[test]
    fn test_unary_chains() {
        approx("--3", 3.0);
        approx("-+-3", 3.0);
        approx("3--2", 5.0);
        approx("4*-2", -8.0);
    }

    #[test]
    fn test_tree_shape() {
        let expr = parse("1-2-3").unwrap();
        let expected = Expr::Chain(
            Box::new(Expr::Number(1.0)),
            vec![(BinaryOp::Sub, Expr::Number(2.0)), (BinaryOp::Sub, Expr::Number(3.0))],
        );
        assert_eq!(expr, expected);

        let expr = parse("2*3^2").unwrap();
        let expected = Expr::Chain(
            Box::new(Expr::Number(2.0)),
            vec![(
                BinaryOp::Mul,
                Expr::Power(Box::new(Expr::Number(3.0)), Box::new(Expr::Number(2.0))),
            )],
        );
        assert_eq!(expr, expected);
        assert_eq!(parse("7").unwrap(), Expr::Number(7.0));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(eval(""), Err(CalcError::Empty));
        assert_eq!(eval("   "), Err(CalcError::Empty));
        assert_eq!(eval("3+"), Err(CalcError::UnexpectedEnd));
        assert_eq!(eval("(1+2"), Err(CalcError::UnbalancedParens));
        assert_eq!(eval("1+2)"), Err(CalcError::UnbalancedParens));
        assert!(matches!(eval("*3"), Err(CalcError::UnexpectedToken { .. })));
        assert!(matches!(eval("2(3)"), Err(CalcError::UnexpectedToken { .. })));
        assert!(matches!(eval("()"), Err(CalcError::UnexpectedToken { .. })));
        assert!(matches!(eval("2//3"), Err(CalcError::UnexpectedToken { .. })));
    }

    #[test]
    fn test_numeric_errors() {
        assert_eq!(eval("5/0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("5/(2-2)"), Err(CalcError::DivisionByZero));
        assert_eq!(eval("0^-1"), Err(CalcError::DivisionByZero));
        assert!(matches!(eval("(-8)^0.5"), Err(CalcError::Domain { .. })));
        assert_eq!(eval("10^400"), Err(CalcError::NotFinite));
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
        assert_eq!(eval(&deep), Err(CalcError::TooDeep(MAX_DEPTH)));
        let shallow = format!("{}1{}", "(".repeat(50), ")".repeat(50));
        approx(&shallow, 1.0);
    }

    #[test]
    fn test_long_sum_chain() {
        let sum = vec!["1"; 100_000].join("+");
        approx(&sum, 100_000.0);
        let mixed = vec!["3-2"; 50_000].join("+");
        approx(&mixed, 50_000.0);
    }

    #[test]
    fn test_long_product_chain() {
        let product = vec!["1"; 100_000].join("*");
        approx(&product, 1.0);
        let halving = format!("1024{}", "/2".repeat(10));
        approx(&halving, 1.0);
    }

    #[test]
    fn test_long_sign_and_power_chains_are_rejected() {
        let signs = format!("{}5", "-".repeat(300));
        assert_eq!(eval(&signs), Err(CalcError::TooDeep(MAX_DEPTH)));
        let even_signs = format!("{}5", "-".repeat(200));
        approx(&even_signs, 5.0);
        let tower = vec!["1"; 300].join("^");
        assert_eq!(eval(&tower), Err(CalcError::TooDeep(MAX_DEPTH)));
    }
}
