//! AVL tree keyed by candidate id. Shows self-balancing insertion step by step.

use std::cmp::Ordering;

use tracing::debug;

use crate::algorithms::trace::{ExecutionStep, ExecutionTrace, TraceBuilder};
use crate::models::Candidate;

pub const ALGORITHM_NAME: &str = "AVL Tree Construction";

#[derive(Debug, Clone)]
pub struct AvlNode {
    pub record: Candidate,
    pub left: Option<Box<AvlNode>>,
    pub right: Option<Box<AvlNode>>,
    height: i32,
}

impl AvlNode {
    fn new(record: Candidate) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(node: &Option<Box<AvlNode>>) -> i32 {
    node.as_ref().map_or(0, |n| n.height)
}

fn child_id(node: &Option<Box<AvlNode>>) -> Option<i64> {
    node.as_ref().map(|n| n.record.id)
}

/// Inserts every record in input order, starting from an empty tree.
///
/// Duplicate ids are dropped; the first record with a given id wins.
pub fn insert_all(records: &[Candidate]) -> (Option<Box<AvlNode>>, ExecutionTrace) {
    let mut trace = TraceBuilder::new(ALGORITHM_NAME);
    let mut root = None;

    for record in records {
        trace.push(
            ExecutionStep::new(format!(
                "Inserting Candidate {} ({})",
                record.id, record.full_name
            ))
            .var("insert_id", record.id)
            .var("insert_val", &record.full_name),
        );
        root = Some(insert(root, record, &mut trace));
    }

    debug!(
        records = records.len(),
        steps = trace.step_count(),
        height = height(&root),
        "AVL construction finished"
    );
    (root, trace.finish())
}

fn insert(
    node: Option<Box<AvlNode>>,
    record: &Candidate,
    trace: &mut TraceBuilder,
) -> Box<AvlNode> {
    let mut node = match node {
        Some(node) => node,
        None => return Box::new(AvlNode::new(record.clone())),
    };

    let key = record.id;
    match key.cmp(&node.record.id) {
        Ordering::Less => node.left = Some(insert(node.left.take(), record, trace)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), record, trace)),
        Ordering::Equal => return node,
    }

    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        if let Some(left_id) = child_id(&node.left) {
            if key < left_id {
                trace.push(rotation_step("Right Rotation (LL Case)", &node));
                return rotate_right(node);
            }
            if key > left_id {
                trace.push(rotation_step("Left-Right Rotation (LR Case)", &node));
                node.left = node.left.take().map(rotate_left);
                return rotate_right(node);
            }
        }
    } else if balance < -1 {
        if let Some(right_id) = child_id(&node.right) {
            if key > right_id {
                trace.push(rotation_step("Left Rotation (RR Case)", &node));
                return rotate_left(node);
            }
            if key < right_id {
                trace.push(rotation_step("Right-Left Rotation (RL Case)", &node));
                node.right = node.right.take().map(rotate_right);
                return rotate_left(node);
            }
        }
    }

    node
}

fn rotation_step(description: &str, node: &AvlNode) -> ExecutionStep {
    ExecutionStep::new(description)
        .var("pivot_id", node.record.id)
        .var("balance", node.balance_factor())
}

// Only `y` and `x` change height; their subtrees are untouched.
fn rotate_right(mut y: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut x) = y.left.take() else {
        return y;
    };
    y.left = x.right.take();
    y.update_height();
    x.right = Some(y);
    x.update_height();
    x
}

fn rotate_left(mut x: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut y) = x.right.take() else {
        return x;
    };
    x.right = y.left.take();
    x.update_height();
    y.left = Some(x);
    y.update_height();
    y
}

/// Ids in in-order (ascending) traversal order.
pub fn in_order_ids(root: &Option<Box<AvlNode>>) -> Vec<i64> {
    let mut ids = Vec::new();
    collect_in_order(root, &mut ids);
    ids
}

fn collect_in_order(node: &Option<Box<AvlNode>>, ids: &mut Vec<i64>) {
    if let Some(n) = node {
        collect_in_order(&n.left, ids);
        ids.push(n.record.id);
        collect_in_order(&n.right, ids);
    }
}
