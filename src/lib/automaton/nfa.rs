use std::collections::VecDeque;

use hashbrown::HashMap;

use super::{
    dfa::DfaNode,
    error::{LookupError, ValidationError},
    AutEdge, AutNode, Automaton,
};

/// Stable index of an NFA state, assigned in declaration order at
/// construction time.
pub type StateId = usize;

/// A label along an NFA transition: either a regular alphabet symbol or the
/// epsilon marker. Keeping epsilon as its own variant means a regular symbol
/// can never collide with it, no matter what tokens the input uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NFAEdge<E: AutEdge> {
    Symbol(E),
    Epsilon,
}

/// A nondeterministic finite automaton with epsilon transitions.
///
/// The automaton is built once by [`NFA::from_parts`] from validated input and
/// is read-only afterwards. State identity is by label; every state also gets
/// a stable [StateId] used for set operations. The transition relation is
/// stored as a table keyed by `(state, edge)` pairs, so destination sets are
/// looked up in amortized constant time.
#[derive(Debug, Clone)]
pub struct NFA<N: AutNode, E: AutEdge> {
    labels: Vec<N>,
    index: HashMap<N, StateId>,
    start: StateId,
    accepting: Vec<bool>,
    alphabet: Vec<E>,
    delta: HashMap<(StateId, NFAEdge<E>), Vec<StateId>>,
}

impl<N: AutNode, E: AutEdge> NFA<N, E> {
    /// Builds an NFA from a set of state labels, a start label, a set of
    /// final labels, an alphabet of regular symbols and a list of transition
    /// triples.
    ///
    /// Duplicate state labels, alphabet symbols and transition triples are
    /// folded without effect. Any reference to an undeclared state or symbol
    /// fails with a [ValidationError] naming the offending entity.
    pub fn from_parts(
        states: Vec<N>,
        start: N,
        finals: Vec<N>,
        alphabet: Vec<E>,
        transitions: Vec<(N, NFAEdge<E>, N)>,
    ) -> Result<Self, ValidationError> {
        if states.is_empty() {
            return Err(ValidationError::EmptyStateSet);
        }

        let mut labels: Vec<N> = Vec::with_capacity(states.len());
        let mut index: HashMap<N, StateId> = HashMap::with_capacity(states.len());

        for label in states {
            if !index.contains_key(&label) {
                index.insert(label.clone(), labels.len());
                labels.push(label);
            }
        }

        let start = *index
            .get(&start)
            .ok_or_else(|| ValidationError::UndeclaredStartState(format!("{:?}", start)))?;

        let mut accepting = vec![false; labels.len()];
        for label in finals {
            match index.get(&label) {
                Some(&state) => accepting[state] = true,
                None => {
                    return Err(ValidationError::UndeclaredFinalState(format!("{:?}", label)));
                }
            }
        }

        let mut deduped_alphabet: Vec<E> = Vec::with_capacity(alphabet.len());
        for symbol in alphabet {
            if !deduped_alphabet.contains(&symbol) {
                deduped_alphabet.push(symbol);
            }
        }

        let mut delta: HashMap<(StateId, NFAEdge<E>), Vec<StateId>> = HashMap::new();
        for (from, edge, to) in transitions {
            let from = *index.get(&from).ok_or_else(|| {
                ValidationError::UndeclaredTransitionState {
                    state: format!("{:?}", from),
                }
            })?;
            let to = *index.get(&to).ok_or_else(|| {
                ValidationError::UndeclaredTransitionState {
                    state: format!("{:?}", to),
                }
            })?;

            if let NFAEdge::Symbol(symbol) = &edge {
                if !deduped_alphabet.contains(symbol) {
                    return Err(ValidationError::UndeclaredTransitionSymbol {
                        symbol: format!("{:?}", symbol),
                    });
                }
            }

            delta.entry((from, edge)).or_default().push(to);
        }

        for targets in delta.values_mut() {
            targets.sort_unstable();
            targets.dedup();
        }

        Ok(NFA {
            labels,
            index,
            start,
            accepting,
            alphabet: deduped_alphabet,
            delta,
        })
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.labels.len()
    }

    /// Resolves a state label to its stable index.
    pub fn state_id(&self, label: &N) -> Result<StateId, LookupError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| LookupError::UnknownState(format!("{:?}", label)))
    }

    pub fn label(&self, state: StateId) -> &N {
        &self.labels[state]
    }

    /// Maps a set of states to their labels.
    pub fn labels_of(&self, states: &[StateId]) -> Vec<N> {
        states.iter().map(|&state| self.label(state).clone()).collect()
    }

    /// Returns the set of states reachable in one step from `state` along
    /// `edge`. The set may be empty. Fails if either argument was never
    /// declared.
    pub fn transitions_from(
        &self,
        state: StateId,
        edge: &NFAEdge<E>,
    ) -> Result<&[StateId], LookupError> {
        if state >= self.labels.len() {
            return Err(LookupError::UnknownState(state.to_string()));
        }

        if let NFAEdge::Symbol(symbol) = edge {
            if !self.alphabet.contains(symbol) {
                return Err(LookupError::UnknownSymbol(format!("{:?}", symbol)));
            }
        }

        Ok(self.transitions_from_unchecked(state, edge))
    }

    /// Like [`NFA::transitions_from`], but without the declaration checks.
    pub fn transitions_from_unchecked(&self, state: StateId, edge: &NFAEdge<E>) -> &[StateId] {
        match self.delta.get(&(state, edge.clone())) {
            Some(targets) => targets,
            None => &[],
        }
    }

    /// Calculates the epsilon closure of a state: the least set containing
    /// the state itself that is closed under epsilon transitions. The
    /// traversal visits each state at most once, so cyclic epsilon graphs
    /// terminate. The result is sorted.
    pub fn e_closure(&self, state: StateId) -> Vec<StateId> {
        let mut closure = vec![state];
        let mut queue = VecDeque::new();
        queue.push_back(state);

        while let Some(state) = queue.pop_front() {
            for &target in self.transitions_from_unchecked(state, &NFAEdge::Epsilon) {
                if !closure.contains(&target) {
                    closure.push(target);
                    queue.push_back(target);
                }
            }
        }

        closure.sort_unstable();
        closure
    }

    /// Extends a set of states to its epsilon closure in place.
    pub fn extend_to_e_closure(&self, states: &mut Vec<StateId>) {
        let mut queue: VecDeque<StateId> = states.iter().copied().collect();

        while let Some(state) = queue.pop_front() {
            for &target in self.transitions_from_unchecked(state, &NFAEdge::Epsilon) {
                if !states.contains(&target) {
                    states.push(target);
                    queue.push_back(target);
                }
            }
        }
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting[state]
    }

    /// Checks if a set of states contains an accepting state.
    pub fn is_accepting_set(&self, states: &[StateId]) -> bool {
        states.iter().any(|&state| self.is_accepting(state))
    }

    /// Creates a DFA state from a set of NFA states.
    pub fn state_from_set(&self, states: &[StateId]) -> DfaNode<Vec<N>> {
        DfaNode::new(self.is_accepting_set(states), self.labels_of(states))
    }
}

impl<N: AutNode, E: AutEdge> Automaton<E> for NFA<N, E> {
    fn accepts(&self, input: &[E]) -> bool {
        let mut current_states = vec![self.start];
        self.extend_to_e_closure(&mut current_states);

        for symbol in input {
            let mut next_states = vec![];

            for &state in &current_states {
                next_states.extend_from_slice(
                    self.transitions_from_unchecked(state, &NFAEdge::Symbol(symbol.clone())),
                );
            }

            if next_states.is_empty() {
                return false;
            }

            self.extend_to_e_closure(&mut next_states);

            current_states = next_states;
        }

        self.is_accepting_set(&current_states)
    }

    fn alphabet(&self) -> &[E] {
        &self.alphabet
    }
}
