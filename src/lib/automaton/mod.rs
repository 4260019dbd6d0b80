use std::{fmt::Debug, hash::Hash};

pub mod determinize;
pub mod dfa;
pub mod error;
pub mod nfa;
pub mod spec;

/// This trait represents types that can be used as state labels in an
/// automaton.
pub trait AutNode: Debug + Clone + PartialEq + Eq + Hash {}
impl<T> AutNode for T where T: Debug + Clone + PartialEq + Eq + Hash {}

/// This trait represents types that can be used as alphabet symbols in an
/// automaton.
pub trait AutEdge: Debug + Clone + PartialEq + Eq + Hash + Ord {}
impl<T> AutEdge for T where T: Debug + Clone + PartialEq + Eq + Hash + Ord {}

/// Incremental construction of an automaton, state by state and transition by
/// transition.
pub trait AutBuild<NIndex, N: AutNode, E> {
    fn add_state(&mut self, data: N) -> NIndex;
    fn add_transition(&mut self, from: NIndex, to: NIndex, label: E);
}

/// An automaton over a fixed alphabet that can run a word.
pub trait Automaton<E: AutEdge> {
    fn accepts(&self, input: &[E]) -> bool;
    fn alphabet(&self) -> &[E];
}
