//! Object-literal flattening.
//!
//! Rewrites an object literal that initializes a plain variable into an
//! emptied literal followed by one assignment statement per property:
//!
//! ```javascript
//! var x = { a: 1, b: { c: 2 } };
//! ```
//!
//! becomes
//!
//! ```javascript
//! var x = {};
//! x["a"] = 1;
//! x["b"] = {};
//! x["b"]["c"] = 2;
//! ```
//!
//! # Shared value nodes
//!
//! A generated assignment takes the property's value by `NodeIndex`, not by
//! copy. When that value is itself an object literal it is flattened right
//! away, so the assignment already sees the emptied literal.
//!
//! # Statement order
//!
//! Every `transform` call anchors at the same top-level host statement.
//! `insert_after` places a later block nearer the anchor than an earlier
//! one, and nested literals are inserted while their parent's properties
//! are still being generated. The parent's own block is inserted last and
//! therefore lands first, so a nested literal's assignments always follow
//! the statement that attaches it to its parent.
//!
//! Properties the rewrite cannot express (spread entries, unresolvable
//! computed keys, pattern-shaped values) stay in the literal. The rewrite
//! never fails.

use flatlit_ast::ast::{LiteralValue, Node, NodeArena, NodeIndex, PropertyKind};
use flatlit_ast::syntax::{
    format_js_number, get_enclosing_scope, insert_after, rebuild_parent_links,
};
use rustc_hash::FxHashSet;

use crate::options::FlattenOptions;

/// Why a literal was left untouched by `extract`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IneligibleReason {
    /// The node passed in is not an object literal.
    NotObjectLiteral,
    /// The literal's parent is not a variable declarator.
    ParentNotDeclarator,
    /// The literal sits in the declarator but is not its initializer.
    NotInitializer,
    /// The declarator binds a destructuring pattern, not a plain identifier.
    DestructuringBinding,
    /// The host statement is not a direct member of its scope's statement
    /// list, so there is nowhere to insert after it.
    HostNotInScope,
}

/// What `extract` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractOutcome {
    Ineligible(IneligibleReason),
    /// The literal was flattened; `statements` counts every inserted
    /// statement, nested levels included.
    Rewritten { statements: usize },
}

/// Result of `ObjectLiteralFlattener::extract`.
///
/// `node_to_replace` is always the literal itself: unchanged when
/// ineligible, emptied in place when rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractResult {
    pub node_to_replace: NodeIndex,
    pub host_statement: NodeIndex,
    pub literal: NodeIndex,
    pub outcome: ExtractOutcome,
}

impl ExtractResult {
    pub const fn is_rewritten(&self) -> bool {
        matches!(self.outcome, ExtractOutcome::Rewritten { .. })
    }
}

/// Flattens object literals into per-property assignment statements.
pub struct ObjectLiteralFlattener<'a> {
    arena: &'a mut NodeArena,
    options: &'a FlattenOptions,
    /// Statements inserted by the current `extract` call.
    statements_inserted: usize,
}

impl<'a> ObjectLiteralFlattener<'a> {
    pub fn new(arena: &'a mut NodeArena, options: &'a FlattenOptions) -> Self {
        ObjectLiteralFlattener {
            arena,
            options,
            statements_inserted: 0,
        }
    }

    /// Flatten `literal` if it initializes a plain variable declared by
    /// `host_statement`.
    pub fn extract(&mut self, literal: NodeIndex, host_statement: NodeIndex) -> ExtractResult {
        let outcome = match self.check_eligibility(literal, host_statement) {
            Err(reason) => {
                tracing::trace!(literal = literal.0, ?reason, "object literal left in place");
                ExtractOutcome::Ineligible(reason)
            }
            Ok(declared_name) => {
                self.statements_inserted = 0;
                self.transform(literal, host_statement, declared_name, 0);
                tracing::debug!(
                    literal = literal.0,
                    host = host_statement.0,
                    statements = self.statements_inserted,
                    "flattened object literal"
                );
                ExtractOutcome::Rewritten {
                    statements: self.statements_inserted,
                }
            }
        };

        ExtractResult {
            node_to_replace: literal,
            host_statement,
            literal,
            outcome,
        }
    }

    /// Returns the declared identifier when `literal` may be flattened.
    fn check_eligibility(
        &self,
        literal: NodeIndex,
        host_statement: NodeIndex,
    ) -> Result<NodeIndex, IneligibleReason> {
        if !self.arena.is_object_expression(literal) {
            return Err(IneligibleReason::NotObjectLiteral);
        }
        let parent = self.arena.get_parent(literal);
        let Some(declarator) = self.arena.get_variable_declarator(parent) else {
            return Err(IneligibleReason::ParentNotDeclarator);
        };
        if declarator.init != literal {
            return Err(IneligibleReason::NotInitializer);
        }
        if !self.arena.is_identifier(declarator.id) {
            return Err(IneligibleReason::DestructuringBinding);
        }

        let scope = get_enclosing_scope(self.arena, host_statement);
        let anchored = self
            .arena
            .get_statement_list(scope)
            .is_some_and(|list| list.nodes.contains(&host_statement));
        if !anchored {
            return Err(IneligibleReason::HostNotInScope);
        }

        Ok(declarator.id)
    }

    /// Flatten `literal` in place against `host_expression`, inserting the
    /// generated statements right after `host_statement`.
    fn transform(
        &mut self,
        literal: NodeIndex,
        host_statement: NodeIndex,
        host_expression: NodeIndex,
        depth: u32,
    ) {
        let Some(properties) = self
            .arena
            .get_object_literal(literal)
            .map(|data| data.properties.nodes.clone())
        else {
            return;
        };

        let (statements, removed) =
            self.generate(&properties, host_statement, host_expression, depth);
        if statements.is_empty() {
            return;
        }

        if let Some(data) = self.arena.get_object_literal_mut(literal) {
            data.properties.nodes = properties
                .iter()
                .enumerate()
                .filter(|(position, _)| !removed.contains(position))
                .map(|(_, &property)| property)
                .collect();
        }

        let scope = get_enclosing_scope(self.arena, host_statement);
        insert_after(self.arena, scope, &statements, host_statement);
        self.statements_inserted += statements.len();
        rebuild_parent_links(self.arena, scope);
    }

    /// Build one assignment statement per extractable property, flattening
    /// nested literals as they are met. Returns the statements and the
    /// positions of the properties they replace, both in property order.
    fn generate(
        &mut self,
        properties: &[NodeIndex],
        host_statement: NodeIndex,
        host_expression: NodeIndex,
        depth: u32,
    ) -> (Vec<NodeIndex>, FxHashSet<usize>) {
        let mut statements = Vec::with_capacity(properties.len());
        let mut removed = FxHashSet::default();

        for (position, &property) in properties.iter().enumerate() {
            let Some(data) = self.arena.get_property(property) else {
                // Spread entries have no key to assign to.
                continue;
            };
            let (key, value, computed) = (data.key, data.value, data.computed);
            let is_accessor = data.kind != PropertyKind::Init || data.method;

            if is_accessor && !self.options.flatten_accessors {
                continue;
            }
            if !self.is_assignable_value(value) {
                tracing::trace!(property = property.0, "pattern-shaped value left in place");
                continue;
            }
            let Some(name) = self.resolve_key_name(key) else {
                tracing::trace!(property = property.0, "unresolvable key left in place");
                continue;
            };

            // `[bar]: v` must stay a reference to `bar`, not the name "bar".
            let member_component = if computed && !self.arena.is_literal(key) {
                self.arena.add_identifier(name)
            } else {
                self.arena.add_string_literal(name)
            };
            let object = self.arena.clone_subtree(host_expression);
            let member = self.arena.add_member_access(object, member_component, true);
            let assignment = self.arena.add_assignment("=", member, value);
            let statement = self.arena.add_expression_statement(assignment);

            if self.arena.is_object_expression(value) {
                if depth < self.options.max_nesting_depth {
                    self.transform(value, host_statement, member, depth + 1);
                } else {
                    tracing::debug!(
                        depth,
                        "nesting limit reached, nested literal assigned whole"
                    );
                }
            }

            statements.push(statement);
            removed.insert(position);
        }

        (statements, removed)
    }

    /// A property value can be assigned unless it is absent or a binding
    /// pattern, which never belongs in an object literal.
    fn is_assignable_value(&self, value: NodeIndex) -> bool {
        self.arena
            .kind_of(value)
            .is_some_and(|kind| !kind.is_binding_pattern())
    }

    /// Name a property by the shape of its key node: string and numeric
    /// literals by their string form, identifiers by their text. Any other
    /// key shape has no static name.
    fn resolve_key_name(&self, key: NodeIndex) -> Option<String> {
        match self.arena.get(key)? {
            Node::Literal(data) => match &data.value {
                LiteralValue::String(value) => Some(value.clone()),
                LiteralValue::Number(value) => Some(format_js_number(*value)),
                LiteralValue::Boolean(_) | LiteralValue::Null => None,
            },
            Node::Identifier(data) => Some(data.escaped_text.clone()),
            Node::Program(_)
            | Node::BlockStatement(_)
            | Node::VariableDeclaration(_)
            | Node::VariableDeclarator(_)
            | Node::ExpressionStatement(_)
            | Node::ReturnStatement(_)
            | Node::IfStatement(_)
            | Node::FunctionDeclaration(_)
            | Node::WhileStatement(_)
            | Node::ForStatement(_)
            | Node::ThrowStatement(_)
            | Node::BreakStatement(_)
            | Node::ContinueStatement(_)
            | Node::EmptyStatement
            | Node::FunctionExpression(_)
            | Node::ArrowFunctionExpression(_)
            | Node::ThisExpression
            | Node::ObjectExpression(_)
            | Node::Property(_)
            | Node::SpreadElement(_)
            | Node::ArrayExpression(_)
            | Node::MemberExpression(_)
            | Node::AssignmentExpression(_)
            | Node::BinaryExpression(_)
            | Node::CallExpression(_)
            | Node::NewExpression(_)
            | Node::UnaryExpression(_)
            | Node::UpdateExpression(_)
            | Node::ConditionalExpression(_)
            | Node::SequenceExpression(_)
            | Node::TemplateLiteral(_)
            | Node::ObjectPattern(_)
            | Node::ArrayPattern(_)
            | Node::AssignmentPattern(_)
            | Node::RestElement(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/object_extraction.rs"]
mod tests;
