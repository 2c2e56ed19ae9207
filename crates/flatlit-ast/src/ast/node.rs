//! Node definitions for the arena AST.
//!
//! The node set is closed: `Node` has one variant per ESTree construct the
//! workspace understands, and `NodeKind` mirrors it without payload so that
//! classification helpers can match exhaustively.

use super::base::{NodeIndex, NodeList};

/// Variable declaration keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// Object property kind, as in ESTree `Property.kind`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// Literal value payload.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
}

/// Statement list owner (program or block).
#[derive(Clone, Debug, Default)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    pub kind: VariableKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclaratorData {
    /// Binding target: an identifier or a destructuring pattern.
    pub id: NodeIndex,
    /// Initializer, or `NodeIndex::NONE`.
    pub init: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    pub argument: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub test: NodeIndex,
    pub consequent: NodeIndex,
    pub alternate: NodeIndex,
}

/// Function declaration, function expression or arrow function.
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub name: NodeIndex,
    pub params: NodeList,
    /// Block statement, or an expression for concise arrow bodies.
    pub body: NodeIndex,
    /// Arrow function with a concise (expression) body.
    pub is_expression_body: bool,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

#[derive(Clone, Debug)]
pub struct LiteralData {
    pub value: LiteralValue,
    /// Source spelling, when the literal came from input.
    pub raw: Option<String>,
}

/// Object literal or object pattern.
#[derive(Clone, Debug, Default)]
pub struct ObjectLiteralData {
    /// `Property`, `SpreadElement` (literals) or `RestElement` (patterns).
    pub properties: NodeList,
}

#[derive(Clone, Debug)]
pub struct PropertyData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
    pub shorthand: bool,
    pub method: bool,
    pub kind: PropertyKind,
}

/// Spread element or rest element.
#[derive(Clone, Debug)]
pub struct SpreadData {
    pub argument: NodeIndex,
}

/// Array literal or array pattern. Holes are `NodeIndex::NONE`.
#[derive(Clone, Debug, Default)]
pub struct ArrayLiteralData {
    pub elements: NodeList,
}

/// Member access: `object.property` or `object[property]`.
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub object: NodeIndex,
    pub property: NodeIndex,
    pub computed: bool,
}

/// Binary or assignment expression.
#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub operator: String,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Clone, Debug)]
pub struct AssignmentPatternData {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// `while (test) body`
#[derive(Clone, Debug)]
pub struct WhileData {
    pub test: NodeIndex,
    pub body: NodeIndex,
}

/// `for (init; test; update) body`. Absent clauses are `NodeIndex::NONE`.
#[derive(Clone, Debug)]
pub struct ForStatementData {
    /// Variable declaration, expression, or `NodeIndex::NONE`.
    pub init: NodeIndex,
    pub test: NodeIndex,
    pub update: NodeIndex,
    pub body: NodeIndex,
}

/// `break` or `continue`, with an optional label identifier.
#[derive(Clone, Debug)]
pub struct JumpData {
    pub label: NodeIndex,
}

/// Unary (`-x`, `typeof x`) or update (`++x`, `x--`) expression.
#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: String,
    pub argument: NodeIndex,
    /// Operator written before the argument. Always true for unary.
    pub prefix: bool,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub test: NodeIndex,
    pub consequent: NodeIndex,
    pub alternate: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SequenceExprData {
    pub expressions: NodeList,
}

/// Untagged template literal. `quasis` holds the raw text around each
/// substitution and has one more entry than `expressions`.
#[derive(Clone, Debug)]
pub struct TemplateLiteralData {
    pub quasis: Vec<String>,
    pub expressions: NodeList,
}

/// A single AST node.
#[derive(Clone, Debug)]
pub enum Node {
    // Statements and statement-list owners
    Program(BlockData),
    BlockStatement(BlockData),
    VariableDeclaration(VariableDeclarationData),
    VariableDeclarator(VariableDeclaratorData),
    ExpressionStatement(ExprStatementData),
    ReturnStatement(ReturnData),
    IfStatement(IfStatementData),
    FunctionDeclaration(FunctionData),
    WhileStatement(WhileData),
    ForStatement(ForStatementData),
    ThrowStatement(ReturnData),
    BreakStatement(JumpData),
    ContinueStatement(JumpData),
    EmptyStatement,

    // Expressions
    FunctionExpression(FunctionData),
    ArrowFunctionExpression(FunctionData),
    Identifier(IdentifierData),
    Literal(LiteralData),
    ThisExpression,
    ObjectExpression(ObjectLiteralData),
    Property(PropertyData),
    SpreadElement(SpreadData),
    ArrayExpression(ArrayLiteralData),
    MemberExpression(AccessExprData),
    AssignmentExpression(BinaryExprData),
    BinaryExpression(BinaryExprData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    UnaryExpression(UnaryExprData),
    UpdateExpression(UnaryExprData),
    ConditionalExpression(ConditionalExprData),
    SequenceExpression(SequenceExprData),
    TemplateLiteral(TemplateLiteralData),

    // Binding patterns
    ObjectPattern(ObjectLiteralData),
    ArrayPattern(ArrayLiteralData),
    AssignmentPattern(AssignmentPatternData),
    RestElement(SpreadData),
}

/// Payload-free mirror of `Node`, used for exhaustive classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    BlockStatement,
    VariableDeclaration,
    VariableDeclarator,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,
    FunctionDeclaration,
    WhileStatement,
    ForStatement,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    EmptyStatement,
    FunctionExpression,
    ArrowFunctionExpression,
    Identifier,
    Literal,
    ThisExpression,
    ObjectExpression,
    Property,
    SpreadElement,
    ArrayExpression,
    MemberExpression,
    AssignmentExpression,
    BinaryExpression,
    CallExpression,
    NewExpression,
    UnaryExpression,
    UpdateExpression,
    ConditionalExpression,
    SequenceExpression,
    TemplateLiteral,
    ObjectPattern,
    ArrayPattern,
    AssignmentPattern,
    RestElement,
}

impl NodeKind {
    /// ESTree `type` string for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::BlockStatement => "BlockStatement",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::ReturnStatement => "ReturnStatement",
            Self::IfStatement => "IfStatement",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::WhileStatement => "WhileStatement",
            Self::ForStatement => "ForStatement",
            Self::ThrowStatement => "ThrowStatement",
            Self::BreakStatement => "BreakStatement",
            Self::ContinueStatement => "ContinueStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::FunctionExpression => "FunctionExpression",
            Self::ArrowFunctionExpression => "ArrowFunctionExpression",
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
            Self::ThisExpression => "ThisExpression",
            Self::ObjectExpression => "ObjectExpression",
            Self::Property => "Property",
            Self::SpreadElement => "SpreadElement",
            Self::ArrayExpression => "ArrayExpression",
            Self::MemberExpression => "MemberExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::CallExpression => "CallExpression",
            Self::NewExpression => "NewExpression",
            Self::UnaryExpression => "UnaryExpression",
            Self::UpdateExpression => "UpdateExpression",
            Self::ConditionalExpression => "ConditionalExpression",
            Self::SequenceExpression => "SequenceExpression",
            Self::TemplateLiteral => "TemplateLiteral",
            Self::ObjectPattern => "ObjectPattern",
            Self::ArrayPattern => "ArrayPattern",
            Self::AssignmentPattern => "AssignmentPattern",
            Self::RestElement => "RestElement",
        }
    }

    /// Whether nodes of this kind appear in a statement list.
    pub const fn is_statement(self) -> bool {
        match self {
            Self::BlockStatement
            | Self::VariableDeclaration
            | Self::ExpressionStatement
            | Self::ReturnStatement
            | Self::IfStatement
            | Self::FunctionDeclaration
            | Self::WhileStatement
            | Self::ForStatement
            | Self::ThrowStatement
            | Self::BreakStatement
            | Self::ContinueStatement
            | Self::EmptyStatement => true,
            Self::Program
            | Self::VariableDeclarator
            | Self::FunctionExpression
            | Self::ArrowFunctionExpression
            | Self::Identifier
            | Self::Literal
            | Self::ThisExpression
            | Self::ObjectExpression
            | Self::Property
            | Self::SpreadElement
            | Self::ArrayExpression
            | Self::MemberExpression
            | Self::AssignmentExpression
            | Self::BinaryExpression
            | Self::CallExpression
            | Self::NewExpression
            | Self::UnaryExpression
            | Self::UpdateExpression
            | Self::ConditionalExpression
            | Self::SequenceExpression
            | Self::TemplateLiteral
            | Self::ObjectPattern
            | Self::ArrayPattern
            | Self::AssignmentPattern
            | Self::RestElement => false,
        }
    }

    /// Whether nodes of this kind own an ordered, mutable statement list.
    pub const fn owns_statement_list(self) -> bool {
        match self {
            Self::Program | Self::BlockStatement => true,
            Self::VariableDeclaration
            | Self::VariableDeclarator
            | Self::ExpressionStatement
            | Self::ReturnStatement
            | Self::IfStatement
            | Self::FunctionDeclaration
            | Self::WhileStatement
            | Self::ForStatement
            | Self::ThrowStatement
            | Self::BreakStatement
            | Self::ContinueStatement
            | Self::EmptyStatement
            | Self::FunctionExpression
            | Self::ArrowFunctionExpression
            | Self::Identifier
            | Self::Literal
            | Self::ThisExpression
            | Self::ObjectExpression
            | Self::Property
            | Self::SpreadElement
            | Self::ArrayExpression
            | Self::MemberExpression
            | Self::AssignmentExpression
            | Self::BinaryExpression
            | Self::CallExpression
            | Self::NewExpression
            | Self::UnaryExpression
            | Self::UpdateExpression
            | Self::ConditionalExpression
            | Self::SequenceExpression
            | Self::TemplateLiteral
            | Self::ObjectPattern
            | Self::ArrayPattern
            | Self::AssignmentPattern
            | Self::RestElement => false,
        }
    }

    /// Whether this kind is a destructuring/binding pattern shape.
    pub const fn is_binding_pattern(self) -> bool {
        match self {
            Self::ObjectPattern
            | Self::ArrayPattern
            | Self::AssignmentPattern
            | Self::RestElement => true,
            Self::Program
            | Self::BlockStatement
            | Self::VariableDeclaration
            | Self::VariableDeclarator
            | Self::ExpressionStatement
            | Self::ReturnStatement
            | Self::IfStatement
            | Self::FunctionDeclaration
            | Self::WhileStatement
            | Self::ForStatement
            | Self::ThrowStatement
            | Self::BreakStatement
            | Self::ContinueStatement
            | Self::EmptyStatement
            | Self::FunctionExpression
            | Self::ArrowFunctionExpression
            | Self::Identifier
            | Self::Literal
            | Self::ThisExpression
            | Self::ObjectExpression
            | Self::Property
            | Self::SpreadElement
            | Self::ArrayExpression
            | Self::MemberExpression
            | Self::AssignmentExpression
            | Self::BinaryExpression
            | Self::CallExpression
            | Self::NewExpression
            | Self::UnaryExpression
            | Self::UpdateExpression
            | Self::ConditionalExpression
            | Self::SequenceExpression
            | Self::TemplateLiteral => false,
        }
    }
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::BlockStatement(_) => NodeKind::BlockStatement,
            Self::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Self::VariableDeclarator(_) => NodeKind::VariableDeclarator,
            Self::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Self::ReturnStatement(_) => NodeKind::ReturnStatement,
            Self::IfStatement(_) => NodeKind::IfStatement,
            Self::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Self::WhileStatement(_) => NodeKind::WhileStatement,
            Self::ForStatement(_) => NodeKind::ForStatement,
            Self::ThrowStatement(_) => NodeKind::ThrowStatement,
            Self::BreakStatement(_) => NodeKind::BreakStatement,
            Self::ContinueStatement(_) => NodeKind::ContinueStatement,
            Self::EmptyStatement => NodeKind::EmptyStatement,
            Self::FunctionExpression(_) => NodeKind::FunctionExpression,
            Self::ArrowFunctionExpression(_) => NodeKind::ArrowFunctionExpression,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Literal(_) => NodeKind::Literal,
            Self::ThisExpression => NodeKind::ThisExpression,
            Self::ObjectExpression(_) => NodeKind::ObjectExpression,
            Self::Property(_) => NodeKind::Property,
            Self::SpreadElement(_) => NodeKind::SpreadElement,
            Self::ArrayExpression(_) => NodeKind::ArrayExpression,
            Self::MemberExpression(_) => NodeKind::MemberExpression,
            Self::AssignmentExpression(_) => NodeKind::AssignmentExpression,
            Self::BinaryExpression(_) => NodeKind::BinaryExpression,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NewExpression(_) => NodeKind::NewExpression,
            Self::UnaryExpression(_) => NodeKind::UnaryExpression,
            Self::UpdateExpression(_) => NodeKind::UpdateExpression,
            Self::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Self::SequenceExpression(_) => NodeKind::SequenceExpression,
            Self::TemplateLiteral(_) => NodeKind::TemplateLiteral,
            Self::ObjectPattern(_) => NodeKind::ObjectPattern,
            Self::ArrayPattern(_) => NodeKind::ArrayPattern,
            Self::AssignmentPattern(_) => NodeKind::AssignmentPattern,
            Self::RestElement(_) => NodeKind::RestElement,
        }
    }
}

/// Side-table data kept per node, parallel to `NodeArena::nodes`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtendedNodeInfo {
    /// Parent node, or `NodeIndex::NONE` for roots and detached nodes.
    pub parent: NodeIndex,
}

/// Owner of every node in a tree.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) extended_info: Vec<ExtendedNodeInfo>,
}
