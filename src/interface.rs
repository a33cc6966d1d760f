//! External interface: the two entry points the query engine and the storage
//! layer call into. This is the only module allowed to touch [`crate::obs`]
//! — parser, evaluator, projector and emitter stay pure.
use crate::ast::{BinaryOp, Expr, UnaryOp};
use crate::declared_type::DeclaredType;
use crate::emit;
use crate::error::{NumericError, NumericResult};
use crate::eval::{self, BindingResolver};
use crate::number::NumberValue;
use crate::obs::{self, NumericMetricsEvent};
use crate::parser;
use crate::project;

/// `evaluate_arithmetic(ast_json) -> result_value_json` from §6: reduce an
/// arithmetic AST and return a typed-literal JSON object whose `@value` is a
/// JSON number (never a string) carrying the full digit-faithful rendering.
pub fn evaluate_arithmetic(
    ast_json: &serde_json::Value,
    resolver: &impl BindingResolver,
) -> NumericResult<serde_json::Value> {
    let expr = parse_ast(ast_json)?;

    let result = eval::eval(&expr, resolver);
    let (value, declared) = match result {
        Ok(ok) => {
            obs::record(NumericMetricsEvent::EvalOk);
            ok
        }
        Err(err) => {
            obs::record(NumericMetricsEvent::EvalFault);
            return Err(err);
        }
    };

    let wire = match project::project(&value, declared) {
        Ok(wire) => {
            obs::record(NumericMetricsEvent::ProjectOk);
            wire
        }
        Err(err) => {
            obs::record(NumericMetricsEvent::ProjectFault);
            return Err(err);
        }
    };

    let token = emit::emit_to_string(&wire)?;
    let number = numeric_json_from_token(token)?;

    Ok(serde_json::json!({
        "@type": declared.as_xsd_str(),
        "@value": number,
    }))
}

/// `project_stored_literal(raw_bytes, xsd_type) -> wire_form` from §6: parse
/// a stored typed literal and project it straight to its wire form, without
/// going through the evaluator (there is no arithmetic here, just a read).
pub fn project_stored_literal(
    raw_bytes: &str,
    xsd_type: &str,
) -> NumericResult<project::WireForm> {
    let declared: DeclaredType = xsd_type.parse()?;

    let value = match parser::parse_typed_lexical(raw_bytes, declared) {
        Ok(v) => {
            obs::record(NumericMetricsEvent::ParseOk);
            v
        }
        Err(err) => {
            obs::record(NumericMetricsEvent::ParseFault);
            return Err(err);
        }
    };

    match project::project(&value, declared) {
        Ok(wire) => {
            obs::record(NumericMetricsEvent::ProjectOk);
            Ok(wire)
        }
        Err(err) => {
            obs::record(NumericMetricsEvent::ProjectFault);
            Err(err)
        }
    }
}

/// Build a `serde_json::Value::Number` directly from an already-rendered
/// digit-faithful token, relying on the crate's `arbitrary_precision` feature
/// so the construction never round-trips through `f64`.
fn numeric_json_from_token(token: String) -> NumericResult<serde_json::Value> {
    Ok(serde_json::Value::Number(
        serde_json::Number::from_string_unchecked(token),
    ))
}

/// Parse the AST shape described at the input boundary in §6:
/// `{"op": "Plus"|..., "left": <node>, "right": <node>}` for binary nodes,
/// `{"op": "Floor", "argument": <node>}` for the unary node, `{"var": name}`
/// for a binding reference, and a bare JSON number or typed-literal object
/// (`{"data": <literal>}` or the literal itself) for a leaf.
fn parse_ast(node: &serde_json::Value) -> NumericResult<Expr> {
    if let Some(obj) = node.as_object() {
        if let Some(op) = obj.get("op").and_then(serde_json::Value::as_str) {
            return parse_op_node(op, obj, node);
        }
        if let Some(var) = obj.get("var").and_then(serde_json::Value::as_str) {
            return Ok(Expr::binding(var));
        }
        if let Some(data) = obj.get("data") {
            let (value, _) = parser::parse_json_leaf(data)?;
            return Ok(Expr::literal(value));
        }
    }

    // Bare JSON number or typed-literal object used directly as a leaf.
    let (value, _) = parser::parse_json_leaf(node)?;
    Ok(Expr::literal(value))
}

fn parse_op_node(
    op: &str,
    obj: &serde_json::Map<String, serde_json::Value>,
    node: &serde_json::Value,
) -> NumericResult<Expr> {
    let field = |name: &str| {
        obj.get(name)
            .ok_or_else(|| NumericError::malformed(node.to_string()))
    };

    if op == "Floor" {
        let argument = parse_ast(field("argument")?)?;
        return Ok(Expr::unary(UnaryOp::Floor, argument));
    }

    let binary_op = match op {
        "Plus" => BinaryOp::Plus,
        "Minus" => BinaryOp::Minus,
        "Times" => BinaryOp::Times,
        "Divide" => BinaryOp::Divide,
        "Div" => BinaryOp::Div,
        "Exp" => BinaryOp::Exp,
        other => return Err(NumericError::malformed(format!("unknown operator: {other}"))),
    };

    let left = parse_ast(field("left")?)?;
    let right = parse_ast(field("right")?)?;
    Ok(Expr::binary(binary_op, left, right))
}

/// Convenience resolver for callers with no bindings (e.g. a fully literal
/// AST, or tests).
pub fn no_bindings(_name: &str) -> Option<NumberValue> {
    None
}
