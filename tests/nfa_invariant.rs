use nfa_determinize::{
    automaton::nfa::{NFAEdge, NFA},
    validation::same_language::assert_same_language,
};

#[test]
fn test_determinize_invariant_to_state_declaration_order() {
    let transitions = vec![
        (0u32, NFAEdge::Symbol('a'), 1),
        (0, NFAEdge::Epsilon, 2),
        (1, NFAEdge::Symbol('b'), 2),
        (2, NFAEdge::Symbol('a'), 3),
        (2, NFAEdge::Epsilon, 4),
        (3, NFAEdge::Symbol('b'), 2),
    ];

    let nfa_a = NFA::from_parts(
        vec![0, 1, 2, 3, 4],
        0,
        vec![4],
        vec!['a', 'b'],
        transitions.clone(),
    )
    .unwrap();

    // same automaton, states declared in a different order
    let nfa_b = NFA::from_parts(
        vec![0, 2, 1, 4, 3],
        0,
        vec![4],
        vec!['a', 'b'],
        transitions,
    )
    .unwrap();

    let dfa_a = nfa_a.determinize();
    let dfa_b = nfa_b.determinize();

    assert_eq!(dfa_a.state_count(), dfa_b.state_count());
    assert_eq!(dfa_a.edge_count(), dfa_b.edge_count());
    assert_same_language(&nfa_a, &dfa_a, 6);
    assert_same_language(&nfa_b, &dfa_b, 6);
    assert_same_language(&dfa_a, &dfa_b, 6);
}
