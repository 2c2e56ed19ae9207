//! Import of ESTree JSON documents into a `NodeArena`.
//!
//! flatlit does not parse JavaScript source. Any ESTree-producing parser
//! (acorn, espree, babel with the `estree` plugin) can supply the input;
//! this module converts the subset of node types the workspace models.
//! Unknown node types are rejected with the offending `type` in the error.

use anyhow::{Context, Result, bail};
use flatlit_common::limits::MAX_ESTREE_DEPTH;
use serde_json::Value;

use crate::ast::{
    FunctionData, LiteralValue, Node, NodeArena, NodeIndex, NodeList, PropertyData,
    PropertyKind, VariableKind,
};

/// Parse ESTree JSON text and import it.
///
/// serde_json stops at 128 levels of JSON nesting, so deeply nested text
/// fails here as invalid JSON before `MAX_ESTREE_DEPTH` is reached. The
/// depth guard in [`from_estree`] covers documents built in memory.
pub fn from_estree_str(text: &str) -> Result<(NodeArena, NodeIndex)> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    from_estree(&value)
}

/// Import an ESTree document. Returns the arena and the root node.
///
/// The root is usually a `Program`, but any supported node is accepted.
pub fn from_estree(root: &Value) -> Result<(NodeArena, NodeIndex)> {
    let mut importer = EstreeImporter {
        arena: NodeArena::new(),
        depth: 0,
    };
    let root_idx = importer.node(root)?;
    tracing::debug!(nodes = importer.arena.len(), "imported ESTree document");
    Ok((importer.arena, root_idx))
}

struct EstreeImporter {
    arena: NodeArena,
    depth: u32,
}

impl EstreeImporter {
    fn node(&mut self, value: &Value) -> Result<NodeIndex> {
        if self.depth >= MAX_ESTREE_DEPTH {
            bail!("ESTree document is nested deeper than {MAX_ESTREE_DEPTH} levels");
        }
        self.depth += 1;
        let result = self.node_inner(value);
        self.depth -= 1;
        result
    }

    fn node_inner(&mut self, value: &Value) -> Result<NodeIndex> {
        let node_type = str_field(value, "type")?;
        let idx = match node_type {
            "Program" => {
                let body = self.list(value, "body")?;
                self.arena.add_program(body)
            }
            "BlockStatement" => {
                let body = self.list(value, "body")?;
                self.arena.add_block(body)
            }
            "VariableDeclaration" => {
                let kind = match str_field(value, "kind")? {
                    "var" => VariableKind::Var,
                    "let" => VariableKind::Let,
                    "const" => VariableKind::Const,
                    other => bail!("unsupported variable declaration kind `{other}`"),
                };
                let declarations = self.list(value, "declarations")?;
                self.arena.add_variable_declaration(kind, declarations)
            }
            "VariableDeclarator" => {
                let id = self.required(value, "id")?;
                let init = self.optional(value, "init")?;
                self.arena.add_variable_declarator(id, init)
            }
            "ExpressionStatement" => {
                let expression = self.required(value, "expression")?;
                self.arena.add_expression_statement(expression)
            }
            "ReturnStatement" => {
                let argument = self.optional(value, "argument")?;
                self.arena.add_return(argument)
            }
            "IfStatement" => {
                let test = self.required(value, "test")?;
                let consequent = self.required(value, "consequent")?;
                let alternate = self.optional(value, "alternate")?;
                self.arena.add_if(test, consequent, alternate)
            }
            "WhileStatement" => {
                let test = self.required(value, "test")?;
                let body = self.required(value, "body")?;
                self.arena.add_while(test, body)
            }
            "ForStatement" => {
                let init = self.optional(value, "init")?;
                let test = self.optional(value, "test")?;
                let update = self.optional(value, "update")?;
                let body = self.required(value, "body")?;
                self.arena.add_for(init, test, update, body)
            }
            "ThrowStatement" => {
                let argument = self.required(value, "argument")?;
                self.arena.add_throw(argument)
            }
            "BreakStatement" => {
                let label = self.optional(value, "label")?;
                self.arena.add_break(label)
            }
            "ContinueStatement" => {
                let label = self.optional(value, "label")?;
                self.arena.add_continue(label)
            }
            "EmptyStatement" => self.arena.add_empty_statement(),
            "FunctionDeclaration" | "FunctionExpression" | "ArrowFunctionExpression" => {
                if bool_field(value, "async") || bool_field(value, "generator") {
                    bail!("async and generator functions are not supported");
                }
                let name = self.optional(value, "id")?;
                let params = self.list(value, "params")?;
                let body = self.required(value, "body")?;
                let data = FunctionData {
                    name,
                    params: NodeList::from(params),
                    body,
                    is_expression_body: bool_field(value, "expression"),
                };
                self.arena.add_node(match node_type {
                    "FunctionDeclaration" => Node::FunctionDeclaration(data),
                    "FunctionExpression" => Node::FunctionExpression(data),
                    _ => Node::ArrowFunctionExpression(data),
                })
            }
            "Identifier" => {
                let name = str_field(value, "name")?;
                self.arena.add_identifier(name)
            }
            "Literal" => self.literal(value)?,
            "ThisExpression" => self.arena.add_this(),
            "ObjectExpression" => {
                let properties = self.list(value, "properties")?;
                self.arena.add_object_literal(properties)
            }
            "Property" => {
                let key = self.required(value, "key")?;
                let property_value = self.required(value, "value")?;
                let kind = match value.get("kind").and_then(Value::as_str).unwrap_or("init") {
                    "init" => PropertyKind::Init,
                    "get" => PropertyKind::Get,
                    "set" => PropertyKind::Set,
                    other => bail!("unsupported property kind `{other}`"),
                };
                self.arena.add_property_data(PropertyData {
                    key,
                    value: property_value,
                    computed: bool_field(value, "computed"),
                    shorthand: bool_field(value, "shorthand"),
                    method: bool_field(value, "method"),
                    kind,
                })
            }
            "SpreadElement" => {
                let argument = self.required(value, "argument")?;
                self.arena.add_spread(argument)
            }
            "ArrayExpression" => {
                let elements = self.list(value, "elements")?;
                self.arena.add_array_literal(elements)
            }
            "MemberExpression" => {
                if bool_field(value, "optional") {
                    bail!("optional member access is not supported");
                }
                let object = self.required(value, "object")?;
                let property = self.required(value, "property")?;
                self.arena
                    .add_member_access(object, property, bool_field(value, "computed"))
            }
            "AssignmentExpression" => {
                let operator = str_field(value, "operator")?;
                let left = self.required(value, "left")?;
                let right = self.required(value, "right")?;
                self.arena.add_assignment(operator, left, right)
            }
            "BinaryExpression" | "LogicalExpression" => {
                let operator = str_field(value, "operator")?;
                let left = self.required(value, "left")?;
                let right = self.required(value, "right")?;
                self.arena.add_binary(operator, left, right)
            }
            "CallExpression" => {
                if bool_field(value, "optional") {
                    bail!("optional calls are not supported");
                }
                let callee = self.required(value, "callee")?;
                let arguments = self.list(value, "arguments")?;
                self.arena.add_call(callee, arguments)
            }
            "NewExpression" => {
                let callee = self.required(value, "callee")?;
                let arguments = self.list(value, "arguments")?;
                self.arena.add_new(callee, arguments)
            }
            "UnaryExpression" => {
                let operator = str_field(value, "operator")?;
                let argument = self.required(value, "argument")?;
                self.arena.add_unary(operator, argument)
            }
            "UpdateExpression" => {
                let operator = str_field(value, "operator")?;
                let argument = self.required(value, "argument")?;
                self.arena
                    .add_update(operator, argument, bool_field(value, "prefix"))
            }
            "ConditionalExpression" => {
                let test = self.required(value, "test")?;
                let consequent = self.required(value, "consequent")?;
                let alternate = self.required(value, "alternate")?;
                self.arena.add_conditional(test, consequent, alternate)
            }
            "SequenceExpression" => {
                let expressions = self.list(value, "expressions")?;
                self.arena.add_sequence(expressions)
            }
            "TemplateLiteral" => {
                let quasis = template_quasis(value)?;
                let expressions = self.list(value, "expressions")?;
                if quasis.len() != expressions.len() + 1 {
                    bail!(
                        "template literal has {} quasis for {} expressions",
                        quasis.len(),
                        expressions.len()
                    );
                }
                self.arena.add_template_literal(quasis, expressions)
            }
            "ObjectPattern" => {
                let properties = self.list(value, "properties")?;
                self.arena.add_object_pattern(properties)
            }
            "ArrayPattern" => {
                let elements = self.list(value, "elements")?;
                self.arena.add_array_pattern(elements)
            }
            "AssignmentPattern" => {
                let left = self.required(value, "left")?;
                let right = self.required(value, "right")?;
                self.arena.add_assignment_pattern(left, right)
            }
            "RestElement" => {
                let argument = self.required(value, "argument")?;
                self.arena.add_rest_element(argument)
            }
            // `preserveParens` output; parentheses carry no meaning here.
            "ParenthesizedExpression" => self.required(value, "expression")?,
            other => bail!("unsupported ESTree node type `{other}`"),
        };
        Ok(idx)
    }

    fn literal(&mut self, value: &Value) -> Result<NodeIndex> {
        if value.get("regex").is_some() {
            bail!("regular expression literals are not supported");
        }
        if value.get("bigint").is_some() {
            bail!("bigint literals are not supported");
        }
        let literal = match value.get("value") {
            Some(Value::String(s)) => LiteralValue::String(s.clone()),
            Some(Value::Number(n)) => match n.as_f64() {
                Some(n) => LiteralValue::Number(n),
                None => bail!("numeric literal `{n}` is out of range"),
            },
            Some(Value::Bool(b)) => LiteralValue::Boolean(*b),
            Some(Value::Null) | None => LiteralValue::Null,
            Some(other) => bail!("unsupported literal value `{other}`"),
        };
        let raw = value.get("raw").and_then(Value::as_str).map(str::to_string);
        Ok(self.arena.add_literal(literal, raw))
    }

    fn required(&mut self, value: &Value, name: &str) -> Result<NodeIndex> {
        let child = value
            .get(name)
            .filter(|child| !child.is_null())
            .with_context(|| format!("missing required field `{name}`"))?;
        self.node(child)
            .with_context(|| format!("in field `{name}`"))
    }

    fn optional(&mut self, value: &Value, name: &str) -> Result<NodeIndex> {
        match value.get(name) {
            None | Some(Value::Null) => Ok(NodeIndex::NONE),
            Some(child) => self
                .node(child)
                .with_context(|| format!("in field `{name}`")),
        }
    }

    /// Import an array field. `null` entries (array holes) become `NodeIndex::NONE`.
    fn list(&mut self, value: &Value, name: &str) -> Result<Vec<NodeIndex>> {
        let Some(items) = value.get(name).and_then(Value::as_array) else {
            bail!("field `{name}` is missing or not an array");
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if item.is_null() {
                    Ok(NodeIndex::NONE)
                } else {
                    self.node(item)
                        .with_context(|| format!("in `{name}[{i}]`"))
                }
            })
            .collect()
    }
}

fn str_field<'v>(value: &'v Value, name: &str) -> Result<&'v str> {
    value
        .get(name)
        .and_then(Value::as_str)
        .with_context(|| format!("missing string field `{name}`"))
}

/// Raw text of each `TemplateElement` in a template literal.
fn template_quasis(value: &Value) -> Result<Vec<String>> {
    let Some(items) = value.get("quasis").and_then(Value::as_array) else {
        bail!("field `quasis` is missing or not an array");
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.get("value")
                .and_then(|v| v.get("raw"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .with_context(|| format!("missing raw text in `quasis[{i}]`"))
        })
        .collect()
}

fn bool_field(value: &Value, name: &str) -> bool {
    value.get(name).and_then(Value::as_bool).unwrap_or(false)
}

#[cfg(test)]
#[path = "../tests/estree_tests.rs"]
mod tests;
