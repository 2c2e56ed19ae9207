//! NodeArena access methods, shape predicates and child iteration.

use super::base::{NodeIndex, NodeList};
use super::node::*;

impl NodeArena {
    /// Get a node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get a mutable node by index
    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Parent of a node, or `NodeIndex::NONE`.
    #[inline]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map_or(NodeIndex::NONE, |info| info.parent)
    }

    #[inline]
    pub fn kind_of(&self, index: NodeIndex) -> Option<NodeKind> {
        self.get(index).map(Node::kind)
    }

    #[inline]
    pub fn is_kind(&self, index: NodeIndex, kind: NodeKind) -> bool {
        self.kind_of(index) == Some(kind)
    }

    // =========================================================================
    // Shape predicates
    // =========================================================================

    pub fn is_variable_declarator(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::VariableDeclarator)
    }

    pub fn is_identifier(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::Identifier)
    }

    pub fn is_literal(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::Literal)
    }

    pub fn is_object_expression(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::ObjectExpression)
    }

    pub fn is_object_pattern(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::ObjectPattern)
    }

    pub fn is_array_pattern(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::ArrayPattern)
    }

    pub fn is_assignment_pattern(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::AssignmentPattern)
    }

    pub fn is_rest_element(&self, index: NodeIndex) -> bool {
        self.is_kind(index, NodeKind::RestElement)
    }

    pub fn is_statement(&self, index: NodeIndex) -> bool {
        self.kind_of(index).is_some_and(NodeKind::is_statement)
    }

    // =========================================================================
    // Typed data access
    // =========================================================================

    /// Identifier text, or `None` if the node is not an identifier.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get(index)? {
            Node::Identifier(data) => Some(&data.escaped_text),
            _ => None,
        }
    }

    pub fn get_literal(&self, index: NodeIndex) -> Option<&LiteralData> {
        match self.get(index)? {
            Node::Literal(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_property(&self, index: NodeIndex) -> Option<&PropertyData> {
        match self.get(index)? {
            Node::Property(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable_declarator(&self, index: NodeIndex) -> Option<&VariableDeclaratorData> {
        match self.get(index)? {
            Node::VariableDeclarator(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_access_expr(&self, index: NodeIndex) -> Option<&AccessExprData> {
        match self.get(index)? {
            Node::MemberExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_assignment(&self, index: NodeIndex) -> Option<&BinaryExprData> {
        match self.get(index)? {
            Node::AssignmentExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_expression_statement(&self, index: NodeIndex) -> Option<&ExprStatementData> {
        match self.get(index)? {
            Node::ExpressionStatement(data) => Some(data),
            _ => None,
        }
    }

    /// Property list of an object literal (not of an object pattern).
    pub fn get_object_literal(&self, index: NodeIndex) -> Option<&ObjectLiteralData> {
        match self.get(index)? {
            Node::ObjectExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_object_literal_mut(&mut self, index: NodeIndex) -> Option<&mut ObjectLiteralData> {
        match self.get_mut(index)? {
            Node::ObjectExpression(data) => Some(data),
            _ => None,
        }
    }

    /// Statement list of a program or block.
    pub fn get_statement_list(&self, index: NodeIndex) -> Option<&NodeList> {
        match self.get(index)? {
            Node::Program(data) | Node::BlockStatement(data) => Some(&data.statements),
            _ => None,
        }
    }

    pub fn get_statement_list_mut(&mut self, index: NodeIndex) -> Option<&mut NodeList> {
        match self.get_mut(index)? {
            Node::Program(data) | Node::BlockStatement(data) => Some(&mut data.statements),
            _ => None,
        }
    }

    /// Direct children of a node, in source order. Absent slots are skipped.
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        if let Some(node) = self.get(index) {
            node.for_each_child(|child| children.push(child));
        }
        children
    }
}

impl Node {
    /// Visit every present child index in source order.
    pub fn for_each_child(&self, mut f: impl FnMut(NodeIndex)) {
        let mut visit = |index: NodeIndex| {
            if index.is_some() {
                f(index);
            }
        };
        match self {
            Self::Program(data) | Self::BlockStatement(data) => {
                data.statements.iter().for_each(&mut visit);
            }
            Self::VariableDeclaration(data) => data.declarations.iter().for_each(&mut visit),
            Self::VariableDeclarator(data) => {
                visit(data.id);
                visit(data.init);
            }
            Self::ExpressionStatement(data) => visit(data.expression),
            Self::ReturnStatement(data) | Self::ThrowStatement(data) => visit(data.argument),
            Self::IfStatement(data) => {
                visit(data.test);
                visit(data.consequent);
                visit(data.alternate);
            }
            Self::WhileStatement(data) => {
                visit(data.test);
                visit(data.body);
            }
            Self::ForStatement(data) => {
                visit(data.init);
                visit(data.test);
                visit(data.update);
                visit(data.body);
            }
            Self::BreakStatement(data) | Self::ContinueStatement(data) => visit(data.label),
            Self::FunctionDeclaration(data)
            | Self::FunctionExpression(data)
            | Self::ArrowFunctionExpression(data) => {
                visit(data.name);
                data.params.iter().for_each(&mut visit);
                visit(data.body);
            }
            Self::Identifier(_)
            | Self::Literal(_)
            | Self::ThisExpression
            | Self::EmptyStatement => {}
            Self::ObjectExpression(data) | Self::ObjectPattern(data) => {
                data.properties.iter().for_each(&mut visit);
            }
            Self::Property(data) => {
                visit(data.key);
                visit(data.value);
            }
            Self::SpreadElement(data) | Self::RestElement(data) => visit(data.argument),
            Self::ArrayExpression(data) | Self::ArrayPattern(data) => {
                data.elements.iter().for_each(&mut visit);
            }
            Self::MemberExpression(data) => {
                visit(data.object);
                visit(data.property);
            }
            Self::AssignmentExpression(data) | Self::BinaryExpression(data) => {
                visit(data.left);
                visit(data.right);
            }
            Self::CallExpression(data) | Self::NewExpression(data) => {
                visit(data.callee);
                data.arguments.iter().for_each(&mut visit);
            }
            Self::UnaryExpression(data) | Self::UpdateExpression(data) => visit(data.argument),
            Self::ConditionalExpression(data) => {
                visit(data.test);
                visit(data.consequent);
                visit(data.alternate);
            }
            Self::SequenceExpression(data) => data.expressions.iter().for_each(&mut visit),
            Self::TemplateLiteral(data) => data.expressions.iter().for_each(&mut visit),
            Self::AssignmentPattern(data) => {
                visit(data.left);
                visit(data.right);
            }
        }
    }

    /// Rebuild this node with every present child index passed through `f`.
    pub fn map_children(self, mut f: impl FnMut(NodeIndex) -> NodeIndex) -> Node {
        let mut map = |index: NodeIndex| {
            if index.is_some() { f(index) } else { index }
        };
        let mut map_list = |list: NodeList, map: &mut dyn FnMut(NodeIndex) -> NodeIndex| {
            NodeList::from(list.nodes.into_iter().map(map).collect::<Vec<_>>())
        };
        match self {
            Self::Program(data) => Self::Program(BlockData {
                statements: map_list(data.statements, &mut map),
            }),
            Self::BlockStatement(data) => Self::BlockStatement(BlockData {
                statements: map_list(data.statements, &mut map),
            }),
            Self::VariableDeclaration(data) => Self::VariableDeclaration(VariableDeclarationData {
                kind: data.kind,
                declarations: map_list(data.declarations, &mut map),
            }),
            Self::VariableDeclarator(data) => Self::VariableDeclarator(VariableDeclaratorData {
                id: map(data.id),
                init: map(data.init),
            }),
            Self::ExpressionStatement(data) => Self::ExpressionStatement(ExprStatementData {
                expression: map(data.expression),
            }),
            Self::ReturnStatement(data) => Self::ReturnStatement(ReturnData {
                argument: map(data.argument),
            }),
            Self::IfStatement(data) => Self::IfStatement(IfStatementData {
                test: map(data.test),
                consequent: map(data.consequent),
                alternate: map(data.alternate),
            }),
            Self::WhileStatement(data) => Self::WhileStatement(WhileData {
                test: map(data.test),
                body: map(data.body),
            }),
            Self::ForStatement(data) => Self::ForStatement(ForStatementData {
                init: map(data.init),
                test: map(data.test),
                update: map(data.update),
                body: map(data.body),
            }),
            Self::ThrowStatement(data) => Self::ThrowStatement(ReturnData {
                argument: map(data.argument),
            }),
            Self::BreakStatement(data) => Self::BreakStatement(JumpData {
                label: map(data.label),
            }),
            Self::ContinueStatement(data) => Self::ContinueStatement(JumpData {
                label: map(data.label),
            }),
            Self::FunctionDeclaration(data) => {
                Self::FunctionDeclaration(map_function(data, &mut map, &mut map_list))
            }
            Self::FunctionExpression(data) => {
                Self::FunctionExpression(map_function(data, &mut map, &mut map_list))
            }
            Self::ArrowFunctionExpression(data) => {
                Self::ArrowFunctionExpression(map_function(data, &mut map, &mut map_list))
            }
            leaf @ (Self::Identifier(_)
            | Self::Literal(_)
            | Self::ThisExpression
            | Self::EmptyStatement) => leaf,
            Self::ObjectExpression(data) => Self::ObjectExpression(ObjectLiteralData {
                properties: map_list(data.properties, &mut map),
            }),
            Self::ObjectPattern(data) => Self::ObjectPattern(ObjectLiteralData {
                properties: map_list(data.properties, &mut map),
            }),
            Self::Property(data) => Self::Property(PropertyData {
                key: map(data.key),
                value: map(data.value),
                ..data
            }),
            Self::SpreadElement(data) => Self::SpreadElement(SpreadData {
                argument: map(data.argument),
            }),
            Self::RestElement(data) => Self::RestElement(SpreadData {
                argument: map(data.argument),
            }),
            Self::ArrayExpression(data) => Self::ArrayExpression(ArrayLiteralData {
                elements: map_list(data.elements, &mut map),
            }),
            Self::ArrayPattern(data) => Self::ArrayPattern(ArrayLiteralData {
                elements: map_list(data.elements, &mut map),
            }),
            Self::MemberExpression(data) => Self::MemberExpression(AccessExprData {
                object: map(data.object),
                property: map(data.property),
                computed: data.computed,
            }),
            Self::AssignmentExpression(data) => Self::AssignmentExpression(BinaryExprData {
                left: map(data.left),
                right: map(data.right),
                operator: data.operator,
            }),
            Self::BinaryExpression(data) => Self::BinaryExpression(BinaryExprData {
                left: map(data.left),
                right: map(data.right),
                operator: data.operator,
            }),
            Self::CallExpression(data) => Self::CallExpression(CallExprData {
                callee: map(data.callee),
                arguments: map_list(data.arguments, &mut map),
            }),
            Self::NewExpression(data) => Self::NewExpression(CallExprData {
                callee: map(data.callee),
                arguments: map_list(data.arguments, &mut map),
            }),
            Self::UnaryExpression(data) => Self::UnaryExpression(UnaryExprData {
                argument: map(data.argument),
                ..data
            }),
            Self::UpdateExpression(data) => Self::UpdateExpression(UnaryExprData {
                argument: map(data.argument),
                ..data
            }),
            Self::ConditionalExpression(data) => {
                Self::ConditionalExpression(ConditionalExprData {
                    test: map(data.test),
                    consequent: map(data.consequent),
                    alternate: map(data.alternate),
                })
            }
            Self::SequenceExpression(data) => Self::SequenceExpression(SequenceExprData {
                expressions: map_list(data.expressions, &mut map),
            }),
            Self::TemplateLiteral(data) => Self::TemplateLiteral(TemplateLiteralData {
                expressions: map_list(data.expressions, &mut map),
                quasis: data.quasis,
            }),
            Self::AssignmentPattern(data) => Self::AssignmentPattern(AssignmentPatternData {
                left: map(data.left),
                right: map(data.right),
            }),
        }
    }
}

fn map_function(
    data: FunctionData,
    map: &mut dyn FnMut(NodeIndex) -> NodeIndex,
    map_list: &mut dyn FnMut(NodeList, &mut dyn FnMut(NodeIndex) -> NodeIndex) -> NodeList,
) -> FunctionData {
    let name = map(data.name);
    let params = map_list(data.params, &mut *map);
    let body = map(data.body);
    FunctionData {
        name,
        params,
        body,
        is_expression_body: data.is_expression_body,
    }
}
