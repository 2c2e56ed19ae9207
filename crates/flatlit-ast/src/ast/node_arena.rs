//! NodeArena creation methods (add_* methods).
//!
//! This module contains all node creation methods for the NodeArena. Every
//! builder records the new node as the parent of its children, so a tree
//! built bottom-up has consistent parent links without a separate pass.

use super::base::{NodeIndex, NodeList};
use super::node::*;

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on huge inputs.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let safe_capacity = capacity.min(Self::MAX_NODE_PREALLOC);
        NodeArena {
            nodes: Vec::with_capacity(safe_capacity),
            extended_info: Vec::with_capacity(safe_capacity),
        }
    }

    /// Number of nodes ever allocated, including detached ones.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.extended_info.clear();
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    /// Set the parent for a single child node.
    #[inline]
    pub(crate) fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add a node and adopt its children.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let mut children = Vec::new();
        node.for_each_child(|child| children.push(child));

        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    pub fn add_program(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::Program(BlockData {
            statements: NodeList::from(statements),
        }))
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::BlockStatement(BlockData {
            statements: NodeList::from(statements),
        }))
    }

    pub fn add_variable_declaration(
        &mut self,
        kind: VariableKind,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(Node::VariableDeclaration(VariableDeclarationData {
            kind,
            declarations: NodeList::from(declarations),
        }))
    }

    pub fn add_variable_declarator(&mut self, id: NodeIndex, init: NodeIndex) -> NodeIndex {
        self.add_node(Node::VariableDeclarator(VariableDeclaratorData { id, init }))
    }

    /// Wrap an expression as a statement: `expr;`
    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add_node(Node::ExpressionStatement(ExprStatementData { expression }))
    }

    pub fn add_return(&mut self, argument: NodeIndex) -> NodeIndex {
        self.add_node(Node::ReturnStatement(ReturnData { argument }))
    }

    pub fn add_if(
        &mut self,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::IfStatement(IfStatementData {
            test,
            consequent,
            alternate,
        }))
    }

    pub fn add_while(&mut self, test: NodeIndex, body: NodeIndex) -> NodeIndex {
        self.add_node(Node::WhileStatement(WhileData { test, body }))
    }

    /// Create `for (init; test; update) body`. Any header slot may be NONE.
    pub fn add_for(
        &mut self,
        init: NodeIndex,
        test: NodeIndex,
        update: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::ForStatement(ForStatementData {
            init,
            test,
            update,
            body,
        }))
    }

    pub fn add_throw(&mut self, argument: NodeIndex) -> NodeIndex {
        self.add_node(Node::ThrowStatement(ReturnData { argument }))
    }

    pub fn add_break(&mut self, label: NodeIndex) -> NodeIndex {
        self.add_node(Node::BreakStatement(JumpData { label }))
    }

    pub fn add_continue(&mut self, label: NodeIndex) -> NodeIndex {
        self.add_node(Node::ContinueStatement(JumpData { label }))
    }

    pub fn add_empty_statement(&mut self) -> NodeIndex {
        self.add_node(Node::EmptyStatement)
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        params: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::FunctionDeclaration(FunctionData {
            name,
            params: NodeList::from(params),
            body,
            is_expression_body: false,
        }))
    }

    pub fn add_function_expression(
        &mut self,
        name: NodeIndex,
        params: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::FunctionExpression(FunctionData {
            name,
            params: NodeList::from(params),
            body,
            is_expression_body: false,
        }))
    }

    pub fn add_arrow_function(
        &mut self,
        params: Vec<NodeIndex>,
        body: NodeIndex,
        is_expression_body: bool,
    ) -> NodeIndex {
        self.add_node(Node::ArrowFunctionExpression(FunctionData {
            name: NodeIndex::NONE,
            params: NodeList::from(params),
            body,
            is_expression_body,
        }))
    }

    /// Create an identifier node from a name.
    pub fn add_identifier(&mut self, name: impl Into<String>) -> NodeIndex {
        self.add_node(Node::Identifier(IdentifierData {
            escaped_text: name.into(),
        }))
    }

    pub fn add_literal(&mut self, value: LiteralValue, raw: Option<String>) -> NodeIndex {
        self.add_node(Node::Literal(LiteralData { value, raw }))
    }

    /// Create a string literal node.
    pub fn add_string_literal(&mut self, value: impl Into<String>) -> NodeIndex {
        self.add_literal(LiteralValue::String(value.into()), None)
    }

    pub fn add_numeric_literal(&mut self, value: f64) -> NodeIndex {
        self.add_literal(LiteralValue::Number(value), None)
    }

    pub fn add_boolean_literal(&mut self, value: bool) -> NodeIndex {
        self.add_literal(LiteralValue::Boolean(value), None)
    }

    pub fn add_null_literal(&mut self) -> NodeIndex {
        self.add_literal(LiteralValue::Null, None)
    }

    pub fn add_this(&mut self) -> NodeIndex {
        self.add_node(Node::ThisExpression)
    }

    pub fn add_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::ObjectExpression(ObjectLiteralData {
            properties: NodeList::from(properties),
        }))
    }

    /// Add a plain `key: value` (or `[key]: value`) property.
    pub fn add_property(&mut self, key: NodeIndex, value: NodeIndex, computed: bool) -> NodeIndex {
        self.add_property_data(PropertyData {
            key,
            value,
            computed,
            shorthand: false,
            method: false,
            kind: PropertyKind::Init,
        })
    }

    /// Add a shorthand property `{ name }`. Key and value are distinct
    /// identifier nodes with the same text.
    pub fn add_shorthand_property(&mut self, name: &str) -> NodeIndex {
        let key = self.add_identifier(name);
        let value = self.add_identifier(name);
        self.add_property_data(PropertyData {
            key,
            value,
            computed: false,
            shorthand: true,
            method: false,
            kind: PropertyKind::Init,
        })
    }

    pub fn add_property_data(&mut self, data: PropertyData) -> NodeIndex {
        self.add_node(Node::Property(data))
    }

    pub fn add_spread(&mut self, argument: NodeIndex) -> NodeIndex {
        self.add_node(Node::SpreadElement(SpreadData { argument }))
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::ArrayExpression(ArrayLiteralData {
            elements: NodeList::from(elements),
        }))
    }

    /// Create a member access. `computed` selects `object[property]` over
    /// `object.property`.
    pub fn add_member_access(
        &mut self,
        object: NodeIndex,
        property: NodeIndex,
        computed: bool,
    ) -> NodeIndex {
        self.add_node(Node::MemberExpression(AccessExprData {
            object,
            property,
            computed,
        }))
    }

    /// Create an assignment expression: `left <operator> right`.
    pub fn add_assignment(
        &mut self,
        operator: impl Into<String>,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::AssignmentExpression(BinaryExprData {
            operator: operator.into(),
            left,
            right,
        }))
    }

    pub fn add_binary(
        &mut self,
        operator: impl Into<String>,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::BinaryExpression(BinaryExprData {
            operator: operator.into(),
            left,
            right,
        }))
    }

    pub fn add_call(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::CallExpression(CallExprData {
            callee,
            arguments: NodeList::from(arguments),
        }))
    }

    pub fn add_new(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::NewExpression(CallExprData {
            callee,
            arguments: NodeList::from(arguments),
        }))
    }

    /// Create a prefix unary expression such as `-x` or `typeof x`.
    pub fn add_unary(&mut self, operator: impl Into<String>, argument: NodeIndex) -> NodeIndex {
        self.add_node(Node::UnaryExpression(UnaryExprData {
            operator: operator.into(),
            argument,
            prefix: true,
        }))
    }

    /// Create `++x` / `x--` style updates.
    pub fn add_update(
        &mut self,
        operator: impl Into<String>,
        argument: NodeIndex,
        prefix: bool,
    ) -> NodeIndex {
        self.add_node(Node::UpdateExpression(UnaryExprData {
            operator: operator.into(),
            argument,
            prefix,
        }))
    }

    pub fn add_conditional(
        &mut self,
        test: NodeIndex,
        consequent: NodeIndex,
        alternate: NodeIndex,
    ) -> NodeIndex {
        self.add_node(Node::ConditionalExpression(ConditionalExprData {
            test,
            consequent,
            alternate,
        }))
    }

    pub fn add_sequence(&mut self, expressions: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::SequenceExpression(SequenceExprData {
            expressions: NodeList::from(expressions),
        }))
    }

    /// Create a template literal. `quasis` holds the raw text chunks and
    /// must be one longer than `expressions`.
    pub fn add_template_literal(
        &mut self,
        quasis: Vec<String>,
        expressions: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.add_node(Node::TemplateLiteral(TemplateLiteralData {
            quasis,
            expressions: NodeList::from(expressions),
        }))
    }

    pub fn add_object_pattern(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::ObjectPattern(ObjectLiteralData {
            properties: NodeList::from(properties),
        }))
    }

    pub fn add_array_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add_node(Node::ArrayPattern(ArrayLiteralData {
            elements: NodeList::from(elements),
        }))
    }

    pub fn add_assignment_pattern(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.add_node(Node::AssignmentPattern(AssignmentPatternData { left, right }))
    }

    pub fn add_rest_element(&mut self, argument: NodeIndex) -> NodeIndex {
        self.add_node(Node::RestElement(SpreadData { argument }))
    }

    /// Deep-copy the subtree rooted at `index`.
    ///
    /// The copy is detached (its root has no parent) and shares no nodes
    /// with the original.
    pub fn clone_subtree(&mut self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index).cloned() else {
            return NodeIndex::NONE;
        };
        let copy = node.map_children(|child| self.clone_subtree(child));
        self.add_node(copy)
    }
}

#[cfg(test)]
#[path = "../../tests/node_arena_tests.rs"]
mod tests;
