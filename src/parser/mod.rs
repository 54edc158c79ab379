//! PEST-based parser for flare scripts
//!
//! Turns script source into the immutable `Script` the engine executes.
//! Directives keep their source line so runtime errors can point back at
//! the script.

use pest::Parser;
use pest_derive::Parser;

use crate::executor::types::{Arg, CallExpr, Directive, Expr, Script};


/* ===================== PEST Parser ===================== */

#[derive(Parser)]
#[grammar = "parser/flare.pest"]
struct FlareParser;

/* ===================== Error Types ===================== */

#[derive(Debug)]
pub enum ParseError {
    PestError(String),
    BuildError(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::PestError(msg) => write!(f, "{}", msg),
            ParseError::BuildError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<pest::error::Error<Rule>> for ParseError {
    fn from(err: pest::error::Error<Rule>) -> Self {
        ParseError::PestError(err.to_string())
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/* ===================== Public API ===================== */

/// Parse flare script source into an executable script
pub fn parse_script(source: &str) -> ParseResult<Script> {
    let mut pairs = FlareParser::parse(Rule::program, source)?;
    let program = pairs.next().unwrap();

    let mut directives = Vec::new();
    for pair in program.into_inner() {
        if pair.as_rule() == Rule::statement {
            directives.push(build_statement(pair)?);
        }
    }

    Ok(Script { directives })
}

/* ===================== AST Builder ===================== */

fn build_statement(pair: pest::iterators::Pair<Rule>) -> ParseResult<Directive> {
    // statement = { assignment | call }
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::assignment => {
            // assignment = { identifier ~ "=" ~ call }
            let mut parts = inner.into_inner();
            let binding = parts.next().unwrap().as_str().to_string();
            let call = build_call(parts.next().unwrap())?;
            Ok(Directive {
                binding: Some(binding),
                name: call.name,
                args: call.args,
                line: call.line,
            })
        }
        Rule::call => {
            let call = build_call(inner)?;
            Ok(Directive {
                binding: None,
                name: call.name,
                args: call.args,
                line: call.line,
            })
        }
        rule => Err(ParseError::BuildError(format!(
            "Unexpected statement content: {:?}",
            rule
        ))),
    }
}

fn build_call(pair: pest::iterators::Pair<Rule>) -> ParseResult<CallExpr> {
    // call = { identifier ~ "(" ~ arg_list? ~ ")" }
    let (line, _) = pair.line_col();
    let mut inner = pair.into_inner();
    let name = inner.next().unwrap().as_str().to_string();

    let mut args = Vec::new();
    if let Some(arg_list) = inner.next() {
        for arg_pair in arg_list.into_inner() {
            args.push(build_arg(arg_pair)?);
        }
    }

    Ok(CallExpr { name, args, line })
}

fn build_arg(pair: pest::iterators::Pair<Rule>) -> ParseResult<Arg> {
    // arg = { keyword_arg | value }
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::keyword_arg => {
            // keyword_arg = { identifier ~ "=" ~ value }
            let mut parts = inner.into_inner();
            let name = parts.next().unwrap().as_str().to_string();
            let value = build_value(parts.next().unwrap())?;
            Ok(Arg {
                name: Some(name),
                value,
            })
        }
        Rule::value => Ok(Arg {
            name: None,
            value: build_value(inner)?,
        }),
        rule => Err(ParseError::BuildError(format!(
            "Unexpected argument content: {:?}",
            rule
        ))),
    }
}

fn build_value(pair: pest::iterators::Pair<Rule>) -> ParseResult<Expr> {
    // value = { string | number | boolean | call | reference }
    let inner = pair.into_inner().next().unwrap();

    match inner.as_rule() {
        Rule::string => {
            let raw = inner.into_inner().next().unwrap().as_str();
            Ok(Expr::Str(unescape(raw)))
        }
        Rule::number => inner
            .as_str()
            .parse::<f64>()
            .map(Expr::Num)
            .map_err(|e| ParseError::BuildError(format!("Invalid number literal: {}", e))),
        Rule::boolean => Ok(Expr::Bool(inner.as_str() == "true")),
        Rule::call => Ok(Expr::Call(build_call(inner)?)),
        Rule::reference => Ok(Expr::Ref(inner.as_str().to_string())),
        rule => Err(ParseError::BuildError(format!(
            "Unexpected value content: {:?}",
            rule
        ))),
    }
}

/// Process string escapes (`\"`, `\\`, `\n`, `\t`)
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }

    out
}
