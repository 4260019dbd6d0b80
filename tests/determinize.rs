use std::collections::HashSet;

use nfa_determinize::automaton::{
    dfa::DfaDescription,
    nfa::{NFAEdge, NFA},
};

#[test]
fn test_single_symbol_with_epsilon() {
    // states {1,2,3}, start 1, final {3}, transitions (1,a,2) and (2,eps,3):
    // the DFA is {1} --a--> {2,3} with only {2,3} accepting.
    let nfa = NFA::from_parts(
        vec![1u32, 2, 3],
        1,
        vec![3],
        vec!['a'],
        vec![(1, NFAEdge::Symbol('a'), 2), (2, NFAEdge::Epsilon, 3)],
    )
    .unwrap();

    let dfa = nfa.determinize();
    let description = DfaDescription::from(&dfa);

    assert_eq!(description.states.len(), 2);
    assert_eq!(description.states[description.start].label, "{1}");
    assert!(!description.states[description.start].accepting);

    let target = &description.states[1 - description.start];
    assert_eq!(target.label, "{2,3}");
    assert!(target.accepting);

    assert_eq!(description.edges.len(), 1);
    assert_eq!(description.edges[0].symbol, "a");
    assert_eq!(description.edges[0].from, description.start);
}

#[test]
fn test_state_count_stays_below_subset_bound() {
    let nfa = NFA::from_parts(
        vec![0u32, 1, 2],
        0,
        vec![2],
        vec!['a', 'b'],
        vec![
            (0, NFAEdge::Symbol('a'), 0),
            (0, NFAEdge::Symbol('a'), 1),
            (0, NFAEdge::Symbol('b'), 2),
            (1, NFAEdge::Symbol('a'), 2),
            (1, NFAEdge::Epsilon, 0),
            (2, NFAEdge::Symbol('b'), 1),
        ],
    )
    .unwrap();

    let dfa = nfa.determinize();

    // at most 2^3 - 1 non-empty subsets of three NFA states
    assert!(dfa.state_count() <= 7);
}

#[test]
fn test_every_dfa_state_is_reachable() {
    let nfa = NFA::from_parts(
        vec![0u32, 1, 2, 3],
        0,
        vec![3],
        vec!['a', 'b'],
        vec![
            (0, NFAEdge::Symbol('a'), 1),
            (0, NFAEdge::Symbol('a'), 2),
            (1, NFAEdge::Symbol('b'), 3),
            (2, NFAEdge::Symbol('a'), 3),
            (3, NFAEdge::Epsilon, 0),
        ],
    )
    .unwrap();

    let description = DfaDescription::from(&nfa.determinize());

    let mut visited = HashSet::from([description.start]);
    let mut frontier = vec![description.start];
    while let Some(state) = frontier.pop() {
        for edge in description.edges.iter().filter(|edge| edge.from == state) {
            if visited.insert(edge.to) {
                frontier.push(edge.to);
            }
        }
    }

    assert_eq!(visited.len(), description.states.len());
}

#[test]
fn test_at_most_one_edge_per_state_and_symbol() {
    let nfa = NFA::from_parts(
        vec![0u32, 1, 2, 3],
        0,
        vec![3],
        vec!['a', 'b'],
        vec![
            (0, NFAEdge::Symbol('a'), 1),
            (0, NFAEdge::Symbol('a'), 2),
            (1, NFAEdge::Symbol('b'), 3),
            (2, NFAEdge::Symbol('b'), 3),
            (2, NFAEdge::Epsilon, 1),
        ],
    )
    .unwrap();

    let description = DfaDescription::from(&nfa.determinize());

    let mut seen = HashSet::new();
    for edge in &description.edges {
        assert!(
            seen.insert((edge.from, edge.symbol.clone())),
            "duplicate edge for state {} and symbol {}",
            edge.from,
            edge.symbol
        );
    }
}

#[test]
fn test_missing_transitions_are_omitted() {
    // 'b' has no transitions anywhere, so no DFA state may have a 'b' edge
    // and no dead state is created for it.
    let nfa = NFA::from_parts(
        vec![0u32, 1],
        0,
        vec![1],
        vec!['a', 'b'],
        vec![(0, NFAEdge::Symbol('a'), 1)],
    )
    .unwrap();

    let description = DfaDescription::from(&nfa.determinize());

    assert_eq!(description.states.len(), 2);
    assert!(description.edges.iter().all(|edge| edge.symbol == "a"));
    assert!(description.states.iter().all(|state| state.label != "{}"));
}

#[test]
fn test_epsilon_only_nfa() {
    // the start closure is the only DFA state and it picks up the accepting
    // flag through the epsilon chain
    let nfa = NFA::from_parts(
        vec![0u32, 1],
        0,
        vec![1],
        vec!['a'],
        vec![(0, NFAEdge::Epsilon, 1)],
    )
    .unwrap();

    let description = DfaDescription::from(&nfa.determinize());

    assert_eq!(description.states.len(), 1);
    assert_eq!(description.states[0].label, "{0,1}");
    assert!(description.states[0].accepting);
    assert!(description.edges.is_empty());
}
