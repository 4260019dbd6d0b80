//! In this file, we parse textual `spec` representations of NFAs.
//!
//! The format is line oriented:
//!
//! ```text
//! q0 q1 q2          <- state labels
//! q0                <- start state
//! q2                <- final states
//! a b               <- alphabet (regular symbols only)
//! q0 a q1           <- one transition per line
//! q1 lambda q2
//! ```
//!
//! The literal `lambda` in the symbol position of a transition denotes an
//! epsilon transition. It is reserved: declaring it in the alphabet line is
//! rejected, so a regular symbol can never collide with the marker.

use nom::{character::complete::space1, error::ParseError, Parser};

use crate::automaton::{
    error::ValidationError,
    nfa::{NFAEdge, NFA},
};

/// The literal that marks an epsilon transition in the text format.
pub const EPSILON_MARKER: &str = "lambda";

fn token<'a, E: ParseError<&'a str>>(input: &'a str) -> nom::IResult<&'a str, &'a str, E> {
    nom::bytes::complete::is_not(" \t\r\n")(input)
}

fn token_list<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, Vec<&'a str>, E> {
    nom::multi::separated_list1(space1, token).parse(input)
}

fn transition_line<'a, E: ParseError<&'a str>>(
    input: &'a str,
) -> nom::IResult<&'a str, (&'a str, &'a str, &'a str), E> {
    let (input, from) = token(input)?;
    let (input, _) = space1(input)?;
    let (input, symbol) = token(input)?;
    let (input, _) = space1(input)?;
    let (input, to) = token(input)?;

    Ok((input, (from, symbol, to)))
}

#[test]
fn test_token_list_1() {
    let input = "q0 q1   q2";
    let (rest, tokens) = token_list::<nom::error::Error<&str>>(input).unwrap();
    assert_eq!(tokens, vec!["q0", "q1", "q2"]);
    assert_eq!(rest, "");
}

#[test]
fn test_transition_line_1() {
    let input = "q0 a q1";
    let (rest, (from, symbol, to)) = transition_line::<nom::error::Error<&str>>(input).unwrap();
    assert_eq!(from, "q0");
    assert_eq!(symbol, "a");
    assert_eq!(to, "q1");
    assert_eq!(rest, "");
}

#[test]
fn test_transition_line_2() {
    let input = "q1 lambda q2";
    let (_, (from, symbol, to)) = transition_line::<nom::error::Error<&str>>(input).unwrap();
    assert_eq!(from, "q1");
    assert_eq!(symbol, EPSILON_MARKER);
    assert_eq!(to, "q2");
}

/// One transition triple together with the 1-based input line it came from.
#[derive(Debug, Clone)]
pub struct TransitionSpec<'a> {
    pub from: &'a str,
    pub symbol: &'a str,
    pub to: &'a str,
    pub line: usize,
}

#[derive(Debug, Clone)]
pub struct NfaSpec<'a> {
    pub states: Vec<&'a str>,
    pub start: &'a str,
    pub finals: Vec<&'a str>,
    pub alphabet: Vec<&'a str>,
    pub transitions: Vec<TransitionSpec<'a>>,
}

impl<'a> NfaSpec<'a> {
    pub fn parse(input: &'a str) -> Result<NfaSpec<'a>, ValidationError> {
        let lines: Vec<&str> = input.lines().collect();

        let states = section_tokens(&lines, 0, "state labels")?;
        let start_tokens = section_tokens(&lines, 1, "start state")?;
        let start = *start_tokens
            .first()
            .ok_or(ValidationError::MissingSection("start state"))?;
        let finals = optional_section_tokens(&lines, 2, "final states")?;
        let alphabet = section_tokens(&lines, 3, "alphabet")?;

        if let Some(&marker) = alphabet.iter().find(|&&symbol| symbol == EPSILON_MARKER) {
            return Err(ValidationError::ReservedEpsilonMarker(marker.to_string()));
        }

        let mut transitions = vec![];
        for (index, line) in lines.iter().enumerate().skip(4) {
            let line_number = index + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match transition_line::<nom::error::Error<&str>>(trimmed) {
                Ok((rest, (from, symbol, to))) if rest.trim().is_empty() => {
                    transitions.push(TransitionSpec {
                        from,
                        symbol,
                        to,
                        line: line_number,
                    });
                }
                _ => {
                    return Err(ValidationError::MalformedTransition { line: line_number });
                }
            }
        }

        Ok(NfaSpec {
            states,
            start,
            finals,
            alphabet,
            transitions,
        })
    }

    /// Converts the parsed spec into a validated automaton. Epsilon markers
    /// become [`NFAEdge::Epsilon`]; everything else stays a regular symbol.
    pub fn to_nfa(&self) -> Result<NFA<String, String>, ValidationError> {
        let transitions = self
            .transitions
            .iter()
            .map(|transition| {
                let edge = if transition.symbol == EPSILON_MARKER {
                    NFAEdge::Epsilon
                } else {
                    NFAEdge::Symbol(transition.symbol.to_string())
                };

                (transition.from.to_string(), edge, transition.to.to_string())
            })
            .collect();

        NFA::from_parts(
            self.states.iter().map(|label| label.to_string()).collect(),
            self.start.to_string(),
            self.finals.iter().map(|label| label.to_string()).collect(),
            self.alphabet.iter().map(|symbol| symbol.to_string()).collect(),
            transitions,
        )
    }
}

/// A section line that must contain at least one token.
fn section_tokens<'a>(
    lines: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<Vec<&'a str>, ValidationError> {
    let line = lines
        .get(index)
        .ok_or(ValidationError::MissingSection(name))?
        .trim();

    match token_list::<nom::error::Error<&str>>(line) {
        Ok((rest, tokens)) if rest.trim().is_empty() => Ok(tokens),
        _ => Err(ValidationError::MissingSection(name)),
    }
}

/// A section line that may be empty (the final-state set can be).
fn optional_section_tokens<'a>(
    lines: &[&'a str],
    index: usize,
    name: &'static str,
) -> Result<Vec<&'a str>, ValidationError> {
    let line = lines
        .get(index)
        .ok_or(ValidationError::MissingSection(name))?
        .trim();

    if line.is_empty() {
        return Ok(vec![]);
    }

    section_tokens(lines, index, name)
}

#[test]
fn test_spec_1() {
    let input = "q0 q1 q2\nq0\nq2\na b\nq0 a q1\nq1 lambda q2\n";
    let spec = NfaSpec::parse(input).unwrap();

    assert_eq!(spec.states, vec!["q0", "q1", "q2"]);
    assert_eq!(spec.start, "q0");
    assert_eq!(spec.finals, vec!["q2"]);
    assert_eq!(spec.alphabet, vec!["a", "b"]);
    assert_eq!(spec.transitions.len(), 2);
    assert_eq!(spec.transitions[1].symbol, EPSILON_MARKER);
    assert_eq!(spec.transitions[1].line, 6);
}

#[test]
fn test_spec_blank_transition_lines_are_skipped() {
    let input = "q0 q1\nq0\nq1\na\n\nq0 a q1\n\n";
    let spec = NfaSpec::parse(input).unwrap();
    assert_eq!(spec.transitions.len(), 1);
    assert_eq!(spec.transitions[0].line, 6);
}

#[test]
fn test_spec_missing_sections() {
    assert_eq!(
        NfaSpec::parse("q0 q1\nq0\n").unwrap_err(),
        ValidationError::MissingSection("final states")
    );
    assert_eq!(
        NfaSpec::parse("").unwrap_err(),
        ValidationError::MissingSection("state labels")
    );
}

#[test]
fn test_spec_malformed_transition() {
    let input = "q0 q1\nq0\nq1\na\nq0 a\n";
    assert_eq!(
        NfaSpec::parse(input).unwrap_err(),
        ValidationError::MalformedTransition { line: 5 }
    );
}

#[test]
fn test_spec_reserved_marker() {
    let input = "q0 q1\nq0\nq1\na lambda\nq0 a q1\n";
    assert_eq!(
        NfaSpec::parse(input).unwrap_err(),
        ValidationError::ReservedEpsilonMarker("lambda".to_string())
    );
}

#[test]
fn test_spec_to_nfa_undeclared_symbol() {
    let input = "q0 q1\nq0\nq1\na\nq0 b q1\n";
    let spec = NfaSpec::parse(input).unwrap();
    assert_eq!(
        spec.to_nfa().unwrap_err(),
        ValidationError::UndeclaredTransitionSymbol {
            symbol: "\"b\"".to_string()
        }
    );
}
