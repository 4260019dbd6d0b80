use std::collections::VecDeque;

use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::{
    dfa::DFA,
    nfa::{NFAEdge, StateId, NFA},
    AutBuild, AutEdge, AutNode, Automaton,
};

impl<N: AutNode, E: AutEdge> NFA<N, E> {
    /// Determinizes the NFA to a DFA via subset construction.
    ///
    /// Each DFA state is a set of NFA states, kept in canonical form (sorted,
    /// deduplicated) so that two sets with the same members are always the
    /// same DFA state. Discovery is driven by a FIFO worklist; the worklist is
    /// finite because there are at most `2^n - 1` non-empty subsets, and each
    /// subset is enqueued at most once.
    ///
    /// The resulting DFA is partial: when no member of a state set has a
    /// transition for a symbol, no edge is emitted. Epsilon transitions are
    /// respected throughout.
    pub fn determinize(&self) -> DFA<Vec<N>, E> {
        let mut state_map: HashMap<Vec<StateId>, NodeIndex> = HashMap::new();

        let mut dfa = DFA::new(self.alphabet().to_vec());

        let start_state_set = self.e_closure(self.start());
        let dfa_start = dfa.add_state(self.state_from_set(&start_state_set));
        dfa.set_start(dfa_start);

        state_map.insert(start_state_set.clone(), dfa_start);

        let mut queue = VecDeque::new();
        queue.push_back(start_state_set);

        while let Some(state) = queue.pop_front() {
            for symbol in self.alphabet() {
                let mut target_state = vec![];

                for &member in &state {
                    target_state.extend_from_slice(
                        self.transitions_from_unchecked(member, &NFAEdge::Symbol(symbol.clone())),
                    );
                }

                self.extend_to_e_closure(&mut target_state);

                // No successor for this symbol: the edge is omitted instead
                // of being routed into a dead state.
                if target_state.is_empty() {
                    continue;
                }

                target_state.sort_unstable();
                target_state.dedup();

                let target_dfa_state = if let Some(&existing) = state_map.get(&target_state) {
                    existing
                } else {
                    let new_state = dfa.add_state(self.state_from_set(&target_state));
                    state_map.insert(target_state.clone(), new_state);
                    queue.push_back(target_state);
                    new_state
                };

                dfa.add_transition(state_map[&state], target_dfa_state, symbol.clone());
            }
        }

        dfa
    }
}
