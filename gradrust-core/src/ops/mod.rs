//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation on [`Value`] lives here.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`, `pow_op`, ...) that
//!   computes the forward value and records a new node tagged with the matching [`Op`].
//!   These are the fallible entry points: they report stale handles and operands from
//!   different graphs as [`GradRustError`]s.
//! - **`_backward` Functions:** Next to each primitive forward function sits its local
//!   derivative rule. The backward engine dispatches to it on the node's [`Op`] tag.
//!   Composite operations (`neg`, `sub`, `div`, `sigmoid`) record no tag of their own and
//!   inherit their gradients from the primitives they are built from.
//! - **Operator overloading:** `+ - * /` and unary `-` on `Value`, `&Value` and `f64`
//!   live in [`arithmetic::overload`].
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, pow, neg, sub, div.
//! - [`math_elem`]: exp, natural log.
//! - [`activation`]: relu, sigmoid.
//! - [`reduction`]: sum and mean over a slice of values.

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

pub use activation::{relu_op, sigmoid_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, ln_op};
pub use reduction::{mean_op, sum_op};

use crate::config::RuleMode;
use crate::error::GradRustError;
use crate::graph::arena::Arena;
use crate::graph::{NodeId, Op};
use crate::value::Value;

/// Forward value and fully accumulated gradient of the node whose rule is firing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Upstream {
    pub(crate) value: f64,
    pub(crate) grad: f64,
}

/// Reads the operand of a unary operation.
pub(crate) fn unary_input(a: &Value) -> Result<f64, GradRustError> {
    a.try_data()
}

/// Reads both operands of a binary operation, which must share a graph.
pub(crate) fn binary_inputs(
    a: &Value,
    b: &Value,
    operation: &str,
) -> Result<(f64, f64), GradRustError> {
    a.graph().check_owns(b, operation)?;
    Ok((a.try_data()?, b.try_data()?))
}

/// Writes a local contribution into `id`. Contributions from `pow`, `exp` and `log` pass
/// `replaceable = true`; under [`RuleMode::SourceCompatible`] they replace the gradient
/// instead of adding to it.
pub(crate) fn deposit(
    arena: &mut Arena,
    id: NodeId,
    delta: f64,
    replaceable: bool,
) -> Result<(), GradRustError> {
    if replaceable && arena.config.rule_mode == RuleMode::SourceCompatible {
        arena.set_grad(id, delta)
    } else {
        arena.accumulate_grad(id, delta)
    }
}

/// Applies the local derivative rule of node `id`, reading its gradient as it stands.
pub(crate) fn apply_local_rule(arena: &mut Arena, id: NodeId) -> Result<(), GradRustError> {
    let node = arena.get(id)?;
    let op = node.op;
    let upstream = Upstream {
        value: node.value,
        grad: node.grad,
    };
    match op {
        Op::Leaf => Ok(()),
        Op::Add(a, b) => arithmetic::add::add_backward(arena, upstream, a, b),
        Op::Mul(a, b) => arithmetic::mul::mul_backward(arena, upstream, a, b),
        Op::Pow(a, p) => arithmetic::pow::pow_backward(arena, upstream, a, p),
        Op::Exp(a) => math_elem::exp::exp_backward(arena, upstream, a),
        Op::Log(a) => math_elem::ln::ln_backward(arena, upstream, a),
        Op::Relu(a) => activation::relu::relu_backward(arena, upstream, a),
    }
}
