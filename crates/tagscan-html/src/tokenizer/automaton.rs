//! Graphviz rendering of the tag automaton.
//!
//! The edges are read off [`transition`] itself, so the diagram cannot drift
//! from the tokenizer that actually runs.

use core::fmt::Write;

use strum::IntoEnumIterator;

use super::state_machine::{Action, InputClass, TokenizerState, transition};

/// All input classes that move `from` to `to` with the same action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Source state.
    pub from: TokenizerState,
    /// Character classes that trigger this edge.
    pub on: Vec<InputClass>,
    /// Target state.
    pub to: TokenizerState,
    /// Action taken on the edge.
    pub action: Action,
}

/// Every edge of the automaton, grouped by `(from, to, action)`.
#[must_use]
pub fn transitions() -> Vec<Transition> {
    let mut edges: Vec<Transition> = Vec::new();
    for from in TokenizerState::iter() {
        for class in InputClass::iter() {
            let (to, action) = transition(from, class);
            if let Some(edge) = edges
                .iter_mut()
                .find(|e| e.from == from && e.to == to && e.action == action)
            {
                edge.on.push(class);
            } else {
                edges.push(Transition {
                    from,
                    on: vec![class],
                    to,
                    action,
                });
            }
        }
    }
    edges
}

/// Render the automaton as a Graphviz `digraph`.
///
/// `Data` is drawn as the accepting state: a tag is emitted exactly when the
/// machine returns to it with the `emit` action.
#[must_use]
pub fn to_dot() -> String {
    let mut out = String::from("digraph tag_tokenizer {\n");
    out.push_str("    rankdir=LR;\n");
    out.push_str("    node [shape=circle];\n");
    let _ = writeln!(out, "    {} [shape=doublecircle];", TokenizerState::Data);

    for edge in transitions() {
        let classes: Vec<String> = edge.on.iter().map(ToString::to_string).collect();
        let mut label = classes.join(", ");
        if edge.action != Action::Ignore {
            let _ = write!(label, " / {}", edge.action);
        }
        let _ = writeln!(
            out,
            "    {} -> {} [label=\"{label}\"];",
            edge.from, edge.to
        );
    }

    out.push_str("}\n");
    out
}
