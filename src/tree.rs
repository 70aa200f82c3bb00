//! In-memory fault tree model.
//!
//! A [`FaultTree`] is built once from a list of [`NodeSpec`] records and is
//! read-only afterwards. The first record is the root (the *top event*).
//! Construction checks that the records form a single tree:
//!
//! - every child code resolves to a node,
//! - no code is declared twice,
//! - every node except the root has exactly one parent,
//! - every node is reachable from the root,
//! - every basic event has a probability in `[0, 1]`.
//!
//! Together these rule out shared subtrees and cycles.
//!
//! # Examples
//!
//! ```
//! use fta_rs::gate::Gate;
//! use fta_rs::tree::{FaultTree, NodeSpec};
//!
//! let tree = FaultTree::build([
//!     NodeSpec::gate(0, Gate::Or, [1, 2]),
//!     NodeSpec::basic(1, 0.1),
//!     NodeSpec::basic(2, 0.2),
//! ])
//! .unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! assert_eq!(tree.to_string(), "0(+ 1 2)");
//! ```

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{MalformedReason, Result};
use crate::gate::Gate;
use crate::types::Code;

/// Input record describing one fault tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub code: Code,
    pub gate: Gate,
    /// Occurrence probability within the mission time; only read for basic events.
    pub probability: f64,
    pub children: Vec<Code>,
}

impl NodeSpec {
    /// A basic (leaf) event.
    pub fn basic(code: u32, probability: f64) -> Self {
        Self {
            code: Code::new(code),
            gate: Gate::Or,
            probability,
            children: Vec::new(),
        }
    }

    /// An intermediate event combining its children with `gate`.
    pub fn gate(code: u32, gate: Gate, children: impl IntoIterator<Item = u32>) -> Self {
        Self {
            code: Code::new(code),
            gate,
            probability: 0.0,
            children: children.into_iter().map(Code::new).collect(),
        }
    }
}

/// A validated fault tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    code: Code,
    gate: Gate,
    probability: f64,
    children: Vec<Code>,
}

impl Node {
    pub fn code(&self) -> Code {
        self.code
    }
    pub fn gate(&self) -> Gate {
        self.gate
    }
    pub fn probability(&self) -> f64 {
        self.probability
    }
    pub fn children(&self) -> &[Code] {
        &self.children
    }
    pub fn is_basic(&self) -> bool {
        self.children.is_empty()
    }
}

/// An immutable fault tree rooted at its top event.
#[derive(Debug, Clone)]
pub struct FaultTree {
    /// Nodes in declaration order; `nodes[0]` is the root.
    nodes: Vec<Node>,
    index: HashMap<Code, usize>,
}

impl FaultTree {
    /// Builds and validates a fault tree. The first record is the root.
    pub fn build(specs: impl IntoIterator<Item = NodeSpec>) -> Result<Self> {
        let nodes: Vec<Node> = specs
            .into_iter()
            .map(|spec| Node {
                code: spec.code,
                gate: spec.gate,
                probability: spec.probability,
                children: spec.children,
            })
            .collect();

        if nodes.is_empty() {
            return Err(MalformedReason::Empty.into());
        }

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.code, i).is_some() {
                return Err(MalformedReason::DuplicateCode(node.code).into());
            }
        }

        let root = nodes[0].code;
        let mut has_parent = vec![false; nodes.len()];
        for node in &nodes {
            if node.is_basic() && !(0.0..=1.0).contains(&node.probability) {
                return Err(MalformedReason::ProbabilityOutOfRange {
                    code: node.code,
                    probability: node.probability,
                }
                .into());
            }
            for &child in &node.children {
                let Some(&i) = index.get(&child) else {
                    return Err(MalformedReason::DanglingChild {
                        parent: node.code,
                        child,
                    }
                    .into());
                };
                if child == root {
                    return Err(MalformedReason::RootHasParent(root).into());
                }
                if has_parent[i] {
                    return Err(MalformedReason::MultipleParents(child).into());
                }
                has_parent[i] = true;
            }
        }

        let tree = Self { nodes, index };

        // With single parents and a parentless root, anything unreachable
        // is either a second component or a cycle.
        let mut visited = vec![false; tree.nodes.len()];
        let mut stack = vec![0];
        while let Some(i) = stack.pop() {
            visited[i] = true;
            stack.extend(tree.nodes[i].children.iter().map(|c| tree.index[c]));
        }
        if let Some(i) = visited.iter().position(|&v| !v) {
            return Err(MalformedReason::Unreachable(tree.nodes[i].code).into());
        }

        debug!(
            "built fault tree with {} nodes ({} basic events), root {}",
            tree.len(),
            tree.basic_events().len(),
            root
        );
        Ok(tree)
    }
}

impl FaultTree {
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn node(&self, code: Code) -> Option<&Node> {
        self.index.get(&code).map(|&i| &self.nodes[i])
    }

    /// Whether `code` names a basic event. Unknown codes are not basic.
    pub fn is_basic(&self, code: Code) -> bool {
        self.node(code).is_some_and(|n| n.is_basic())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Basic events in pre-order (first-seen) traversal order from the root.
    pub fn basic_events(&self) -> Vec<Code> {
        let mut events = Vec::new();
        let mut stack = vec![self.root().code];
        while let Some(code) = stack.pop() {
            let node = &self.nodes[self.index[&code]];
            if node.is_basic() {
                events.push(code);
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        events
    }

    /// Number of gate levels from the root to the deepest basic event.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root().code, 0)];
        while let Some((code, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            let node = &self.nodes[self.index[&code]];
            stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }
        max_depth
    }

    fn fmt_node(&self, code: Code, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.nodes[self.index[&code]];
        write!(f, "{}", code)?;
        if node.is_basic() {
            return Ok(());
        }
        write!(f, "({}", node.gate)?;
        for &child in &node.children {
            write!(f, " ")?;
            self.fmt_node(child, f)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for FaultTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(self.root().code, f)
    }
}
