//! Property-based tests of the context tree safety rules using proptest

use oxjsonld_stream::{ContextTreeOptions, NodeId, SafetyState, SinkEvent};
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Operation {
    /// Creates a child of the n-th created node (modulo the node count)
    CreateChild(usize),
    /// Adds a flag to the n-th created node
    UpdateState(usize, u8),
    /// Adds a triple to the n-th created node
    AddTriple(usize),
}

fn flag_strategy() -> impl Strategy<Value = u8> {
    prop_oneof![Just(1_u8), Just(2_u8), Just(4_u8)]
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<usize>().prop_map(Operation::CreateChild),
        (any::<usize>(), flag_strategy()).prop_map(|(n, f)| Operation::UpdateState(n, f)),
        any::<usize>().prop_map(Operation::AddTriple),
    ]
}

fn flag(bits: u8) -> SafetyState {
    match bits {
        1 => SafetyState::ID_DECLARED,
        2 => SafetyState::CONTEXT_DECLARED,
        _ => SafetyState::PARENT_SAFE,
    }
}

fn emitted_objects(events: &[SinkEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            SinkEvent::NonLiteral { object, .. } => Some(object.clone()),
            _ => None,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// States only grow, triples of unsafe nodes are never emitted and nothing is lost with forced flushing
    #[test]
    fn test_safety_invariants(operations in prop::collection::vec(operation_strategy(), 1..64)) {
        let mut tree = ContextTreeOptions::new()
            .flush_pending_on_finish()
            .for_sink(Vec::<SinkEvent>::new());
        let mut nodes = vec![tree.root()];
        let mut owners = HashMap::<String, NodeId>::new();
        let mut previous_states = HashMap::<NodeId, SafetyState>::new();

        for (i, operation) in operations.into_iter().enumerate() {
            match operation {
                Operation::CreateChild(n) => {
                    let parent = nodes[n % nodes.len()];
                    nodes.push(tree.init_child_context(parent, None));
                }
                Operation::UpdateState(n, bits) => {
                    tree.update_state(nodes[n % nodes.len()], flag(bits));
                }
                Operation::AddTriple(n) => {
                    let node = nodes[n % nodes.len()];
                    let object = format!("http://example.com/o{i}");
                    tree.add_non_literal(node, "http://example.com/p", &object);
                    owners.insert(object, node);
                }
            }

            for node in &nodes {
                let state = tree.node(*node).state();
                if let Some(previous) = previous_states.insert(*node, state) {
                    prop_assert!(state.contains(previous));
                }
            }
            for object in emitted_objects(tree.sink()) {
                prop_assert!(tree.node(owners[&object]).state().is_safe());
            }
        }

        let added = owners.len();
        let (events, statistics) = tree.finish();
        let mut emitted = emitted_objects(&events);
        prop_assert_eq!(emitted.len(), added);
        emitted.sort();
        emitted.dedup();
        prop_assert_eq!(emitted.len(), added);
        prop_assert_eq!(statistics.malformed_triples, 0);
        prop_assert_eq!(statistics.dropped_triples, 0);
    }

    /// Without forced flushing the triples are either emitted or reported as dropped
    #[test]
    fn test_dropped_triples_are_counted(operations in prop::collection::vec(operation_strategy(), 1..64)) {
        let mut tree = ContextTreeOptions::new().for_sink(Vec::<SinkEvent>::new());
        let mut nodes = vec![tree.root()];
        let mut added = 0;

        for operation in operations {
            match operation {
                Operation::CreateChild(n) => {
                    let parent = nodes[n % nodes.len()];
                    nodes.push(tree.init_child_context(parent, None));
                }
                Operation::UpdateState(n, bits) => {
                    tree.update_state(nodes[n % nodes.len()], flag(bits));
                }
                Operation::AddTriple(n) => {
                    let object = format!("http://example.com/o{added}");
                    tree.add_non_literal(nodes[n % nodes.len()], "http://example.com/p", &object);
                    added += 1;
                }
            }
        }

        let (events, statistics) = tree.finish();
        prop_assert_eq!(emitted_objects(&events).len() + statistics.dropped_triples, added);
    }
}
