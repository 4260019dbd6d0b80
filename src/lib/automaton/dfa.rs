use std::fmt::{Debug, Display};

use itertools::Itertools;
use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
    Direction,
};
use serde::{Deserialize, Serialize};

use super::{AutBuild, AutEdge, AutNode, Automaton};

/// A state in a DFA: an accepting flag plus some data of type `T`. For DFAs
/// produced by determinization the data is the set of member NFA state
/// labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DfaNode<T: AutNode> {
    pub accepting: bool,
    pub data: T,
}

impl<T: AutNode> DfaNode<T> {
    pub fn new(accepting: bool, data: T) -> Self {
        DfaNode { accepting, data }
    }

    pub fn accepting(data: T) -> Self {
        DfaNode::new(true, data)
    }

    pub fn non_accepting(data: T) -> Self {
        DfaNode::new(false, data)
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

/// A deterministic finite automaton.
///
/// The DFA may be partial: a state is allowed to have no outgoing transition
/// for a symbol, in which case a run over that symbol simply rejects. No
/// explicit dead state is ever materialized.
#[derive(Clone)]
pub struct DFA<N: AutNode, E: AutEdge> {
    start: Option<NodeIndex>,
    pub graph: DiGraph<DfaNode<N>, E>,
    alphabet: Vec<E>,
}

impl<N: AutNode, E: AutEdge> DFA<N, E> {
    pub fn new(alphabet: Vec<E>) -> Self {
        let graph = DiGraph::new();

        DFA {
            alphabet,
            start: None,
            graph,
        }
    }

    pub fn set_start(&mut self, start: NodeIndex) {
        self.start = Some(start);
    }

    pub fn get_start(&self) -> Option<NodeIndex> {
        self.start
    }

    pub fn state_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_accepting(&self, state: NodeIndex) -> bool {
        self.graph[state].accepting
    }
}

impl<N: AutNode, E: AutEdge> AutBuild<NodeIndex, DfaNode<N>, E> for DFA<N, E> {
    fn add_state(&mut self, data: DfaNode<N>) -> NodeIndex {
        self.graph.add_node(data)
    }

    fn add_transition(&mut self, from: NodeIndex, to: NodeIndex, label: E) {
        let existing_edge = self
            .graph
            .edges_directed(from, Direction::Outgoing)
            .find(|edge| *edge.weight() == label);
        if let Some(edge) = existing_edge {
            let target = edge.target();
            if target != to {
                panic!(
                    "Transition conflict, adding the new transition causes this automaton to no longer be deterministic. Existing: {:?} -{:?}-> {:?}. New: {:?} -{:?}-> {:?}",
                    from, label, target, from, label, to
                );
            }
        }

        self.graph.add_edge(from, to, label);
    }
}

impl<N: AutNode, E: AutEdge> Automaton<E> for DFA<N, E> {
    fn accepts(&self, input: &[E]) -> bool {
        let mut current_state = Some(self.start.expect("DFA must have a start state"));

        for symbol in input {
            assert!(
                self.alphabet.contains(symbol),
                "Symbol {:?} not in alphabet",
                symbol
            );

            if let Some(state) = current_state {
                current_state = self
                    .graph
                    .edges_directed(state, Direction::Outgoing)
                    .find(|edge| edge.weight() == symbol)
                    .map(|edge| edge.target());
            } else {
                return false;
            }
        }

        match current_state.and_then(|state| self.graph.node_weight(state)) {
            Some(data) => data.accepting,
            None => false,
        }
    }

    fn alphabet(&self) -> &[E] {
        &self.alphabet
    }
}

impl<N: AutNode, E: AutEdge> Debug for DFA<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DFA")
            .field("alphabet", &self.alphabet)
            .field("start", &self.start)
            .field(
                "states",
                &self
                    .graph
                    .node_indices()
                    .map(|node| (node, &self.graph[node]))
                    .collect_vec(),
            )
            .field(
                "edges",
                &self
                    .graph
                    .edge_references()
                    .map(|edge| {
                        format!(
                            "{:?} --- {:?} --> {:?}",
                            edge.source(),
                            edge.weight(),
                            edge.target()
                        )
                    })
                    .collect_vec(),
            )
            .finish()
    }
}

/// The emission boundary of a determinization run: every discovered DFA state
/// with its joined member-set label and accepting flag, the start state, and
/// one entry per transition edge. Renderers and serializers consume this
/// value; the conversion engine never hands them anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaDescription {
    pub states: Vec<DfaStateDescription>,
    pub start: usize,
    pub edges: Vec<DfaEdgeDescription>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaStateDescription {
    pub label: String,
    pub accepting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DfaEdgeDescription {
    pub from: usize,
    pub symbol: String,
    pub to: usize,
}

impl<N: AutNode + Display, E: AutEdge + Display> From<&DFA<Vec<N>, E>> for DfaDescription {
    fn from(dfa: &DFA<Vec<N>, E>) -> Self {
        let states = dfa
            .graph
            .node_indices()
            .map(|node| {
                let weight = &dfa.graph[node];
                DfaStateDescription {
                    label: format!("{{{}}}", weight.data.iter().join(",")),
                    accepting: weight.accepting,
                }
            })
            .collect();

        let edges = dfa
            .graph
            .edge_references()
            .map(|edge| DfaEdgeDescription {
                from: edge.source().index(),
                symbol: edge.weight().to_string(),
                to: edge.target().index(),
            })
            .collect();

        DfaDescription {
            states,
            start: dfa
                .get_start()
                .expect("DFA must have a start state")
                .index(),
            edges,
        }
    }
}

impl DfaDescription {
    /// Renders the description as a Graphviz dot graph. Accepting states get
    /// a double circle, the start state is marked by a pseudo edge from an
    /// invisible START node.
    pub fn to_graphviz(&self) -> String {
        let mut dot = String::new();
        dot.push_str("digraph finite_state_machine {\n");
        dot.push_str("fontname=\"Helvetica,Arial,sans-serif\"\n");
        dot.push_str("node [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("edge [fontname=\"Helvetica,Arial,sans-serif\"]\n");
        dot.push_str("rankdir=LR;\n");
        dot.push_str("node [shape=point,label=\"\"]START\n");

        let accepting_states = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(index, _)| index.to_string())
            .join(" ");

        dot.push_str(&format!("node [shape = doublecircle]; {};\n", accepting_states));
        dot.push_str("node [shape = circle];\n");

        for (index, state) in self.states.iter().enumerate() {
            dot.push_str(&format!("{} [ label=\"{}\" ];\n", index, state.label));
        }

        dot.push_str(&format!("START -> {};\n", self.start));

        for edge in &self.edges {
            dot.push_str(&format!(
                "{} -> {} [ label=\"{}\" ];\n",
                edge.from, edge.to, edge.symbol
            ));
        }

        dot.push_str("}\n");

        dot
    }
}

#[test]
fn test_description_json_round_trip() {
    let description = DfaDescription {
        states: vec![
            DfaStateDescription {
                label: "{q0}".to_string(),
                accepting: false,
            },
            DfaStateDescription {
                label: "{q1,q2}".to_string(),
                accepting: true,
            },
        ],
        start: 0,
        edges: vec![DfaEdgeDescription {
            from: 0,
            symbol: "a".to_string(),
            to: 1,
        }],
    };

    let json = serde_json::to_string(&description).unwrap();
    let parsed: DfaDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(description, parsed);
}
