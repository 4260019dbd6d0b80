use nfa_determinize::automaton::{
    dfa::{DfaNode, DFA},
    AutBuild, Automaton,
};

#[test]
fn test_dfa() {
    let mut dfa = DFA::<u32, char>::new(vec!['a', 'b']);
    let q0 = dfa.add_state(DfaNode::non_accepting(0));
    let q1 = dfa.add_state(DfaNode::non_accepting(1));
    let q2 = dfa.add_state(DfaNode::accepting(2));
    dfa.set_start(q0);

    dfa.add_transition(q0, q1, 'a');
    dfa.add_transition(q1, q2, 'b');
    dfa.add_transition(q2, q1, 'a');

    assert_eq!(dfa.get_start(), Some(q0));
    assert!(!dfa.is_accepting(q0));
    assert!(dfa.is_accepting(q2));

    let input = "ababab";
    assert!(dfa.accepts(&input.chars().collect::<Vec<_>>()));

    let input = "ababa";
    assert!(!dfa.accepts(&input.chars().collect::<Vec<_>>()));
}

#[test]
fn test_partial_dfa_rejects_on_missing_edge() {
    let mut dfa = DFA::<u32, char>::new(vec!['a', 'b']);
    let q0 = dfa.add_state(DfaNode::non_accepting(0));
    let q1 = dfa.add_state(DfaNode::accepting(1));
    dfa.set_start(q0);

    dfa.add_transition(q0, q1, 'a');

    assert!(dfa.accepts(&['a']));
    // no 'b' edge anywhere: the walk falls off the graph and rejects
    assert!(!dfa.accepts(&['b']));
    assert!(!dfa.accepts(&['a', 'b', 'a']));
}

#[test]
#[should_panic(expected = "Transition conflict")]
fn test_conflicting_transition_panics() {
    let mut dfa = DFA::<u32, char>::new(vec!['a']);
    let q0 = dfa.add_state(DfaNode::non_accepting(0));
    let q1 = dfa.add_state(DfaNode::accepting(1));
    let q2 = dfa.add_state(DfaNode::accepting(2));
    dfa.set_start(q0);

    dfa.add_transition(q0, q1, 'a');
    dfa.add_transition(q0, q2, 'a');
}
