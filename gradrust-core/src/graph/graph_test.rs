use super::*;
use crate::config::RuleMode;
use approx::assert_relative_eq;

#[test]
fn test_new_graph_is_empty() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.config(), GraphConfig::default());
    assert_eq!(graph.config().rule_mode, RuleMode::Accumulate);
    assert_eq!(graph.config().log_zero_sentinel, -100.0);
}

#[test]
fn test_leaf_creation() {
    let graph = Graph::new();
    let a = graph.leaf(1.25);
    let b = graph.leaf(1.25);
    assert_eq!(graph.len(), 2);
    assert!(a.is_leaf());
    assert_eq!(a.data(), 1.25);
    assert_eq!(a.grad(), 0.0);
    // Equal values, distinct nodes.
    assert!(!a.same_node(&b));
    assert!(a.same_node(&a.clone()));
}

#[test]
fn test_clone_shares_arena() {
    let graph = Graph::new();
    let alias = graph.clone();
    let x = alias.leaf(3.0);
    assert!(graph.same_graph(&alias));
    assert!(graph.same_graph(x.graph()));
    assert_eq!(graph.len(), 1);
    assert!(!graph.same_graph(&Graph::new()));
}

#[test]
fn test_rewind_discards_later_nodes() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let w = graph.leaf(2.0);
    let checkpoint = graph.checkpoint();
    assert_eq!(checkpoint.len(), 1);

    let y = &w * 3.0;
    y.backward()?;
    assert_eq!(graph.len(), 3);

    graph.rewind(checkpoint);
    assert_eq!(graph.len(), 1);
    // Surviving nodes keep their value and gradient.
    assert_eq!(w.data(), 2.0);
    assert_relative_eq!(w.grad(), 3.0);
    assert_eq!(
        y.try_data(),
        Err(GradRustError::StaleNode {
            index: y.id().index(),
            generation: 0
        })
    );
    Ok(())
}

#[test]
fn test_rewound_slot_does_not_alias() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let checkpoint = graph.checkpoint();
    let old = graph.leaf(1.0);
    graph.rewind(checkpoint);
    let new = graph.leaf(9.0);

    assert_eq!(old.id().index(), new.id().index());
    assert_ne!(old.id().generation(), new.id().generation());
    assert!(old.try_data().is_err());
    assert_eq!(new.try_data()?, 9.0);
    Ok(())
}

#[test]
fn test_rewind_to_later_checkpoint_is_noop() {
    let graph = Graph::new();
    let _a = graph.leaf(1.0);
    let later = graph.checkpoint();
    let early = Checkpoint { len: 0 };
    graph.rewind(early);
    assert!(graph.is_empty());
    graph.rewind(later);
    assert!(graph.is_empty());
}

#[test]
fn test_set_data_leaf_only() -> Result<(), GradRustError> {
    let graph = Graph::new();
    let w = graph.leaf(1.0);
    w.set_data(-0.5)?;
    assert_eq!(w.data(), -0.5);

    let y = &w + 1.0;
    assert_eq!(
        y.set_data(10.0),
        Err(GradRustError::NotALeaf {
            index: y.id().index()
        })
    );
    assert_eq!(y.data(), 0.5);
    Ok(())
}

#[test]
fn test_debug_format() {
    let graph = Graph::new();
    let _ = graph.leaf(1.0);
    let text = format!("{:?}", graph);
    assert!(text.starts_with("Graph(nodes=1"));
}
