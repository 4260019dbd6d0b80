use thiserror::Error;

/// Errors raised while building an [NFA](super::nfa::NFA) from declared
/// states, alphabet and transitions. These are fatal to the current run; no
/// partial automaton is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the declared state set is empty")]
    EmptyStateSet,

    #[error("start state {0} is not in the declared state set")]
    UndeclaredStartState(String),

    #[error("final state {0} is not in the declared state set")]
    UndeclaredFinalState(String),

    #[error("transition endpoint {state} is not in the declared state set")]
    UndeclaredTransitionState { state: String },

    #[error("transition symbol {symbol} is not in the declared alphabet")]
    UndeclaredTransitionSymbol { symbol: String },

    #[error("the epsilon marker `{0}` cannot be declared as a regular alphabet symbol")]
    ReservedEpsilonMarker(String),

    #[error("missing input section: {0}")]
    MissingSection(&'static str),

    #[error("malformed transition on line {line}: expected `<from> <symbol> <to>`")]
    MalformedTransition { line: usize },
}

/// Errors raised by lookups on a successfully constructed [NFA]. Given prior
/// validation these are unreachable from the parsing path and indicate API
/// misuse.
///
/// [NFA]: super::nfa::NFA
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("unknown state {0}")]
    UnknownState(String),

    #[error("unknown symbol {0}")]
    UnknownSymbol(String),
}
