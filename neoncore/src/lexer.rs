//! Tokenizer for calculator expressions
//!
//! Accepts decimal literals (`12`, `1.5`, `.5`, `3.`), the operators
//! `+ - * / ** ^` and parentheses. Whitespace is skipped. `^` and `**` both
//! produce [`Token::Pow`].

use crate::error::{CalcError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Slash => f.write_str("/"),
            Token::Pow => f.write_str("**"),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// A token and the character offset it started at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub pos: usize,
}

pub fn tokenize(input: &str) -> Result<Vec<Spanned>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let pos = i;
        let token = match c {
            c if c.is_whitespace() => {
                i += 1;
                continue;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                tokens.push(Spanned { token: number(&literal)?, pos });
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Token::Pow
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Pow,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(CalcError::UnexpectedChar { ch: other, pos }),
        };
        tokens.push(Spanned { token, pos });
        i += 1;
    }

    Ok(tokens)
}

fn number(literal: &str) -> Result<Token> {
    // A lone "." or a second decimal point is not a number.
    if literal == "." || literal.matches('.').count() > 1 {
        return Err(CalcError::MalformedNumber(literal.to_string()));
    }
    // Integers can't carry leading zeros ("05"), but "0", "00" and "05.5" are fine.
    if !literal.contains('.') && literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
        return Err(CalcError::MalformedNumber(literal.to_string()));
    }
    literal
        .parse::<f64>()
        .map(Token::Number)
        .map_err(|_| CalcError::MalformedNumber(literal.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn test_operators_and_numbers() {
        assert_eq!(
            kinds("2+3*(4-1)/5"),
            vec![
                Token::Number(2.0),
                Token::Plus,
                Token::Number(3.0),
                Token::Star,
                Token::LParen,
                Token::Number(4.0),
                Token::Minus,
                Token::Number(1.0),
                Token::RParen,
                Token::Slash,
                Token::Number(5.0),
            ]
        );
    }

    #[test]
    fn test_caret_and_double_star_are_power() {
        assert_eq!(kinds("2^3"), vec![Token::Number(2.0), Token::Pow, Token::Number(3.0)]);
        assert_eq!(kinds("2**3"), vec![Token::Number(2.0), Token::Pow, Token::Number(3.0)]);
        // three stars: power then multiply
        assert_eq!(kinds("***"), vec![Token::Pow, Token::Star]);
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(kinds(".5"), vec![Token::Number(0.5)]);
        assert_eq!(kinds("3."), vec![Token::Number(3.0)]);
        assert_eq!(kinds("0.25"), vec![Token::Number(0.25)]);
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(tokenize("1.2.3"), Err(CalcError::MalformedNumber("1.2.3".into())));
        assert_eq!(tokenize("."), Err(CalcError::MalformedNumber(".".into())));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(tokenize("05"), Err(CalcError::MalformedNumber("05".into())));
        assert_eq!(tokenize("1+007"), Err(CalcError::MalformedNumber("007".into())));
        assert_eq!(kinds("0"), vec![Token::Number(0.0)]);
        assert_eq!(kinds("00"), vec![Token::Number(0.0)]);
        assert_eq!(kinds("05.5"), vec![Token::Number(5.5)]);
        assert_eq!(kinds("10"), vec![Token::Number(10.0)]);
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(tokenize("2%3"), Err(CalcError::UnexpectedChar { ch: '%', pos: 1 }));
        assert!(tokenize("import os").is_err());
    }

    #[test]
    fn test_whitespace_and_positions() {
        let tokens = tokenize(" 1 + 2").unwrap();
        assert_eq!(tokens[0].pos, 1);
        assert_eq!(tokens[1].pos, 3);
        assert_eq!(tokens[2].pos, 5);
    }
}
