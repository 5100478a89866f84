//! Parser for the expression language
//!
//! Builds generic trees out of token streams with chumsky combinators.
//! The grammar is newline-separated statements over ordinary arithmetic
//! expressions:
//!
//! ```text
//! module    = (statement NEWLINE+)*
//! statement = IDENT "=" expression
//!           | "return" expression?
//!           | expression
//! expression= sum, with "*" "/" over "+" "-", prefix "-", and atoms:
//!             literal | IDENT "(" args ")" | IDENT | "[" args "]" | "(" expression ")"
//! ```
//!
//! Every production maps directly onto one node shape (`Module`, `Assign`,
//! `Return`, `Expr`, `BinOp`, `UnaryOp`, `Call`, `List`, `Name`,
//! `Constant`), with fieldless operator nodes (`Add`, `Sub`, `Mult`, `Div`,
//! `USub`) as the operator field values.

use chumsky::{prelude::*, Stream};

use crate::ast::{Node, Scalar, Value};
use crate::expr::lexer::lex;
use crate::expr::tokens::Token;
use crate::expr::{Location, ParseError};

type ParserError = Simple<Token>;

/// Parse source text into a `Module` tree.
pub fn parse_source(source: &str) -> Result<Value, ParseError> {
    let tokens = lex(source)?;
    let end_of_input = source.len()..source.len() + 1;
    let stream = Stream::from_iter(end_of_input, tokens.into_iter());

    module()
        .parse(stream)
        .map_err(|errors| convert_error(source, errors))
}

fn convert_error(source: &str, errors: Vec<ParserError>) -> ParseError {
    match errors.into_iter().next() {
        Some(error) => match error.found() {
            Some(token) => ParseError::UnexpectedToken {
                token: token.to_string(),
                location: Location::from_offset(source, error.span().start),
            },
            None => ParseError::UnexpectedEnd,
        },
        None => ParseError::UnexpectedEnd,
    }
}

fn identifier() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span, token| match token {
        Token::Ident(name) => Ok(name),
        token => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
    })
}

fn name_node(id: String) -> Node {
    Node::new("Name").field("id", id)
}

fn expression() -> impl Parser<Token, Value, Error = ParserError> + Clone {
    recursive(|expression| {
        let literal = filter_map(|span, token| {
            let scalar = match token {
                Token::Int(value) => Scalar::Int(value),
                Token::Float(text) => match text.parse::<f64>() {
                    Ok(value) => Scalar::Float(value),
                    Err(_) => {
                        return Err(Simple::expected_input_found(
                            span,
                            Vec::new(),
                            Some(Token::Float(text)),
                        ))
                    }
                },
                Token::Str(value) => Scalar::Str(value),
                Token::True => Scalar::Bool(true),
                Token::False => Scalar::Bool(false),
                Token::None => Scalar::None,
                token => {
                    return Err(Simple::expected_input_found(span, Vec::new(), Some(token)))
                }
            };
            Ok(Value::from(Node::new("Constant").field("value", scalar)))
        });

        let arguments = expression
            .clone()
            .separated_by(just(Token::Comma))
            .allow_trailing();

        let call = identifier()
            .then(
                arguments
                    .clone()
                    .delimited_by(just(Token::LParen), just(Token::RParen)),
            )
            .map(|(id, args)| {
                Value::from(
                    Node::new("Call")
                        .field("func", name_node(id))
                        .field("args", args),
                )
            });

        let name = identifier().map(|id| Value::from(name_node(id)));

        let list = arguments
            .delimited_by(just(Token::LBracket), just(Token::RBracket))
            .map(|elts| Value::from(Node::new("List").field("elts", elts)));

        let grouped = expression
            .clone()
            .delimited_by(just(Token::LParen), just(Token::RParen));

        let atom = call.or(name).or(literal).or(list).or(grouped);

        let unary = just(Token::Minus)
            .repeated()
            .then(atom)
            .foldr(|_minus, operand| {
                Value::from(
                    Node::new("UnaryOp")
                        .field("op", Node::new("USub"))
                        .field("operand", operand),
                )
            });

        let product_operator = filter_map(|span, token| match token {
            Token::Star => Ok("Mult"),
            Token::Slash => Ok("Div"),
            token => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
        });

        let product = unary
            .clone()
            .then(product_operator.then(unary).repeated())
            .foldl(binary_operation);

        let sum_operator = filter_map(|span, token| match token {
            Token::Plus => Ok("Add"),
            Token::Minus => Ok("Sub"),
            token => Err(Simple::expected_input_found(span, Vec::new(), Some(token))),
        });

        product
            .clone()
            .then(sum_operator.then(product).repeated())
            .foldl(binary_operation)
    })
}

fn binary_operation(left: Value, (operator, right): (&'static str, Value)) -> Value {
    Value::from(
        Node::new("BinOp")
            .field("left", left)
            .field("op", Node::new(operator))
            .field("right", right),
    )
}

fn module() -> impl Parser<Token, Value, Error = ParserError> {
    let assign = identifier()
        .then_ignore(just(Token::Equals))
        .then(expression())
        .map(|(id, value)| {
            Value::from(
                Node::new("Assign")
                    .field("target", name_node(id))
                    .field("value", value),
            )
        });

    let return_statement = just(Token::Return)
        .ignore_then(expression().or_not())
        .map(|value| {
            Value::from(
                Node::new("Return")
                    .field("value", value.unwrap_or(Value::Scalar(Scalar::None))),
            )
        });

    let expression_statement =
        expression().map(|value| Value::from(Node::new("Expr").field("value", value)));

    let statement = assign.or(return_statement).or(expression_statement);

    // A statement ends at one or more newlines, or at the end of input
    let terminator = just(Token::Newline)
        .repeated()
        .at_least(1)
        .ignored()
        .or(end());

    just(Token::Newline)
        .repeated()
        .ignore_then(statement.then_ignore(terminator).repeated())
        .then_ignore(end())
        .map(|body| Value::from(Node::new("Module").field("body", body)))
}
