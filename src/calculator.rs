use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::{read_line, CalcError};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

pub fn parse_operand(s: &str) -> Result<f64, CalcError> {
    s.trim()
        .parse()
        .map_err(|_| CalcError::InvalidNumber(s.to_string()))
}

pub fn calculate(a: f64, op: Operator, b: f64) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div if b == 0.0 => Err(CalcError::DivisionByZero),
        Operator::Div => Ok(a / b),
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Ask for two operands and an operator, then compute.
///
/// `None` when the input ends at any prompt. A bad first operand is reported
/// right away; otherwise the second operand is checked before the operator.
pub fn run_calculator<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Result<f64, CalcError>>> {
    let Some(a) = prompt(input, output, "Primer numero: ")? else {
        return Ok(None);
    };
    let a = match parse_operand(&a) {
        Ok(a) => a,
        Err(err) => return Ok(Some(Err(err))),
    };
    let Some(op) = prompt(input, output, "Operacion: +, -, /, *")? else {
        return Ok(None);
    };
    let Some(b) = prompt(input, output, "Segundo numero: ")? else {
        return Ok(None);
    };

    let result = parse_operand(&b).and_then(|b| calculate(a, op.parse::<Operator>()?, b));
    Ok(Some(result))
}

pub fn format_calculation(result: &Result<f64, CalcError>) -> String {
    match result {
        Ok(value) => format!("Resultado: {value:?}"),
        Err(err) => err.to_string(),
    }
}
