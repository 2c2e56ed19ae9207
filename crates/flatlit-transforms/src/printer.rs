//! JavaScript printer for the arena AST.
//!
//! Produces compact, readable output: one statement per line, four-space
//! indentation inside blocks, object literals on a single line and string
//! literals in double quotes. Parentheses are inserted from operator
//! precedence, not copied from the input.

use flatlit_ast::ast::{
    FunctionData, LiteralValue, Node, NodeArena, NodeIndex, NodeKind, NodeList, PropertyData,
    PropertyKind, VariableDeclarationData,
};
use flatlit_ast::syntax::format_js_number;

/// Binding power of an expression position. Higher binds tighter.
mod precedence {
    pub const SEQUENCE: u8 = 1;
    pub const ASSIGNMENT: u8 = 2;
    pub const CONDITIONAL: u8 = 3;
    /// Anything tighter than a conditional: assignment targets and tests.
    pub const SHORT_CIRCUIT: u8 = 4;
    pub const UNARY: u8 = 16;
    pub const POSTFIX: u8 = 17;
    pub const CALL_OR_MEMBER: u8 = 18;
    pub const PRIMARY: u8 = 20;
}

pub struct NodePrinter<'a> {
    arena: &'a NodeArena,
    output: String,
    indent: usize,
}

impl<'a> NodePrinter<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        NodePrinter {
            arena,
            output: String::new(),
            indent: 0,
        }
    }

    /// Render a node (statement, program or expression) to a string.
    pub fn emit_to_string(arena: &NodeArena, node: NodeIndex) -> String {
        let mut printer = NodePrinter::new(arena);
        printer.emit(node);
        printer.finish()
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn emit(&mut self, node: NodeIndex) {
        match self.arena.kind_of(node) {
            Some(kind) if kind.is_statement() || kind == NodeKind::Program => {
                self.emit_statement(node);
            }
            Some(_) => self.emit_expression(node, 0),
            None => {}
        }
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn emit_statement(&mut self, node: NodeIndex) {
        let Some(n) = self.arena.get(node) else {
            return;
        };
        match n {
            Node::Program(data) => {
                for (i, stmt) in data.statements.iter().enumerate() {
                    if i > 0 {
                        self.output.push('\n');
                    }
                    self.emit_statement(stmt);
                }
            }
            Node::BlockStatement(data) => self.emit_block(&data.statements),
            Node::VariableDeclaration(data) => {
                self.emit_variable_declaration(data);
                self.output.push(';');
            }
            Node::ExpressionStatement(data) => {
                let needs_parens = self.starts_with_object_or_function(data.expression);
                if needs_parens {
                    self.output.push('(');
                }
                self.emit_expression(data.expression, 0);
                if needs_parens {
                    self.output.push(')');
                }
                self.output.push(';');
            }
            Node::ReturnStatement(data) => {
                self.output.push_str("return");
                if data.argument.is_some() {
                    self.output.push(' ');
                    self.emit_expression(data.argument, 0);
                }
                self.output.push(';');
            }
            Node::IfStatement(data) => {
                self.output.push_str("if (");
                self.emit_expression(data.test, 0);
                self.output.push_str(") ");
                self.emit_statement(data.consequent);
                if data.alternate.is_some() {
                    self.output.push_str(" else ");
                    self.emit_statement(data.alternate);
                }
            }
            Node::WhileStatement(data) => {
                self.output.push_str("while (");
                self.emit_expression(data.test, 0);
                self.output.push_str(") ");
                self.emit_statement(data.body);
            }
            Node::ForStatement(data) => {
                self.output.push_str("for (");
                match self.arena.get(data.init) {
                    Some(Node::VariableDeclaration(decl)) => self.emit_variable_declaration(decl),
                    Some(_) => self.emit_expression(data.init, 0),
                    None => {}
                }
                self.output.push(';');
                if data.test.is_some() {
                    self.output.push(' ');
                    self.emit_expression(data.test, 0);
                }
                self.output.push(';');
                if data.update.is_some() {
                    self.output.push(' ');
                    self.emit_expression(data.update, 0);
                }
                self.output.push_str(") ");
                self.emit_statement(data.body);
            }
            Node::ThrowStatement(data) => {
                self.output.push_str("throw ");
                self.emit_expression(data.argument, 0);
                self.output.push(';');
            }
            Node::BreakStatement(data) => self.emit_jump("break", data.label),
            Node::ContinueStatement(data) => self.emit_jump("continue", data.label),
            Node::EmptyStatement => self.output.push(';'),
            Node::FunctionDeclaration(data) => self.emit_function("function", data),
            // Expressions in statement position (detached trees in tests).
            _ => self.emit_expression(node, 0),
        }
    }

    fn emit_block(&mut self, statements: &NodeList) {
        if statements.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{\n");
        self.indent += 1;
        for stmt in statements.iter() {
            self.write_indent();
            self.emit_statement(stmt);
            self.output.push('\n');
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push('}');
    }

    /// `kind a = 1, b` without the trailing semicolon, shared with `for` heads.
    fn emit_variable_declaration(&mut self, data: &VariableDeclarationData) {
        self.output.push_str(data.kind.as_str());
        self.output.push(' ');
        for (i, decl) in data.declarations.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.emit_declarator(decl);
        }
    }

    fn emit_jump(&mut self, keyword: &str, label: NodeIndex) {
        self.output.push_str(keyword);
        if label.is_some() {
            self.output.push(' ');
            self.emit_expression(label, precedence::PRIMARY);
        }
        self.output.push(';');
    }

    fn emit_declarator(&mut self, decl: NodeIndex) {
        let Some(data) = self.arena.get_variable_declarator(decl) else {
            return;
        };
        self.emit_expression(data.id, 0);
        if data.init.is_some() {
            self.output.push_str(" = ");
            self.emit_expression(data.init, precedence::ASSIGNMENT);
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn emit_expression(&mut self, node: NodeIndex, min_precedence: u8) {
        let Some(n) = self.arena.get(node) else {
            return;
        };
        let own = expression_precedence(n);
        let parens = own < min_precedence;
        if parens {
            self.output.push('(');
        }

        match n {
            Node::Identifier(data) => self.output.push_str(&data.escaped_text),
            Node::Literal(data) => self.emit_literal(&data.value),
            Node::ThisExpression => self.output.push_str("this"),
            Node::ObjectExpression(data) | Node::ObjectPattern(data) => {
                self.emit_object_entries(&data.properties);
            }
            Node::Property(data) => self.emit_property(data),
            Node::SpreadElement(data) | Node::RestElement(data) => {
                self.output.push_str("...");
                self.emit_expression(data.argument, precedence::ASSIGNMENT);
            }
            Node::ArrayExpression(data) | Node::ArrayPattern(data) => {
                self.output.push('[');
                let count = data.elements.len();
                for (i, element) in data.elements.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    if element.is_none() && i + 1 == count {
                        // Trailing hole needs its own comma.
                        self.output.push(',');
                    }
                    self.emit_expression(element, precedence::ASSIGNMENT);
                }
                self.output.push(']');
            }
            Node::MemberExpression(data) => {
                let numeric_object = matches!(
                    self.arena.get_literal(data.object).map(|l| &l.value),
                    Some(LiteralValue::Number(_))
                );
                if numeric_object && !data.computed {
                    self.output.push('(');
                    self.emit_expression(data.object, 0);
                    self.output.push(')');
                } else {
                    self.emit_expression(data.object, precedence::CALL_OR_MEMBER);
                }
                if data.computed {
                    self.output.push('[');
                    self.emit_expression(data.property, 0);
                    self.output.push(']');
                } else {
                    self.output.push('.');
                    self.emit_expression(data.property, precedence::PRIMARY);
                }
            }
            Node::AssignmentExpression(data) => {
                self.emit_expression(data.left, precedence::SHORT_CIRCUIT);
                self.output.push(' ');
                self.output.push_str(&data.operator);
                self.output.push(' ');
                self.emit_expression(data.right, precedence::ASSIGNMENT);
            }
            Node::BinaryExpression(data) => {
                let op = binary_precedence(&data.operator);
                // `**` is right-associative and rejects a bare unary base;
                // everything else groups left.
                let (left_min, right_min) = if data.operator == "**" {
                    (precedence::POSTFIX, op)
                } else {
                    (op, op + 1)
                };
                let left_min = self.operand_precedence(&data.operator, data.left, left_min);
                let right_min = self.operand_precedence(&data.operator, data.right, right_min);
                self.emit_expression(data.left, left_min);
                self.output.push(' ');
                self.output.push_str(&data.operator);
                self.output.push(' ');
                self.emit_expression(data.right, right_min);
            }
            Node::CallExpression(data) => {
                self.emit_expression(data.callee, precedence::CALL_OR_MEMBER);
                self.emit_argument_list(&data.arguments);
            }
            Node::NewExpression(data) => {
                self.output.push_str("new ");
                // `new a.b()()` would call the result of `new a.b()`.
                if self.member_chain_has_call(data.callee) {
                    self.output.push('(');
                    self.emit_expression(data.callee, 0);
                    self.output.push(')');
                } else {
                    self.emit_expression(data.callee, precedence::CALL_OR_MEMBER);
                }
                self.emit_argument_list(&data.arguments);
            }
            Node::UnaryExpression(data) => {
                self.output.push_str(&data.operator);
                let word = data.operator.starts_with(|c: char| c.is_ascii_alphabetic());
                if word {
                    self.output.push(' ');
                }
                let start = self.output.len();
                self.emit_expression(data.argument, precedence::UNARY);
                // `- -x` and `+ +x` must not fuse into `--x` / `++x`.
                let last = data.operator.chars().last();
                let fused = matches!(last, Some('-' | '+'))
                    && self.output[start..].chars().next() == last;
                if fused {
                    self.output.insert(start, ' ');
                }
            }
            Node::UpdateExpression(data) => {
                if data.prefix {
                    self.output.push_str(&data.operator);
                    self.emit_expression(data.argument, precedence::CALL_OR_MEMBER);
                } else {
                    self.emit_expression(data.argument, precedence::CALL_OR_MEMBER);
                    self.output.push_str(&data.operator);
                }
            }
            Node::ConditionalExpression(data) => {
                self.emit_expression(data.test, precedence::SHORT_CIRCUIT);
                self.output.push_str(" ? ");
                self.emit_expression(data.consequent, precedence::ASSIGNMENT);
                self.output.push_str(" : ");
                self.emit_expression(data.alternate, precedence::ASSIGNMENT);
            }
            Node::SequenceExpression(data) => {
                for (i, expression) in data.expressions.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.emit_expression(expression, precedence::ASSIGNMENT);
                }
            }
            Node::TemplateLiteral(data) => {
                self.output.push('`');
                let mut expressions = data.expressions.iter();
                for (i, quasi) in data.quasis.iter().enumerate() {
                    if i > 0
                        && let Some(expression) = expressions.next()
                    {
                        self.output.push_str("${");
                        self.emit_expression(expression, 0);
                        self.output.push('}');
                    }
                    self.output.push_str(quasi);
                }
                self.output.push('`');
            }
            Node::AssignmentPattern(data) => {
                self.emit_expression(data.left, precedence::SHORT_CIRCUIT);
                self.output.push_str(" = ");
                self.emit_expression(data.right, precedence::ASSIGNMENT);
            }
            Node::FunctionExpression(data) => self.emit_function("function", data),
            Node::ArrowFunctionExpression(data) => {
                self.emit_argument_list(&data.params);
                self.output.push_str(" => ");
                if data.is_expression_body {
                    let wrap_body = self.starts_with_object_or_function(data.body);
                    if wrap_body {
                        self.output.push('(');
                    }
                    self.emit_expression(data.body, precedence::ASSIGNMENT);
                    if wrap_body {
                        self.output.push(')');
                    }
                } else {
                    self.emit_statement(data.body);
                }
            }
            Node::Program(_)
            | Node::BlockStatement(_)
            | Node::VariableDeclaration(_)
            | Node::VariableDeclarator(_)
            | Node::ExpressionStatement(_)
            | Node::ReturnStatement(_)
            | Node::IfStatement(_)
            | Node::WhileStatement(_)
            | Node::ForStatement(_)
            | Node::ThrowStatement(_)
            | Node::BreakStatement(_)
            | Node::ContinueStatement(_)
            | Node::EmptyStatement
            | Node::FunctionDeclaration(_) => self.emit_statement(node),
        }

        if parens {
            self.output.push(')');
        }
    }

    /// Whether the printed form of `node` begins with `{` or `function`.
    /// In statement position or as an arrow body such an expression would
    /// be read as a block or a declaration, so the caller wraps it.
    fn starts_with_object_or_function(&self, mut node: NodeIndex) -> bool {
        loop {
            node = match self.arena.get(node) {
                Some(
                    Node::ObjectExpression(_)
                    | Node::ObjectPattern(_)
                    | Node::FunctionExpression(_),
                ) => return true,
                Some(Node::MemberExpression(data)) => data.object,
                Some(Node::CallExpression(data)) => data.callee,
                Some(Node::AssignmentExpression(data) | Node::BinaryExpression(data)) => data.left,
                Some(Node::ConditionalExpression(data)) => data.test,
                Some(Node::SequenceExpression(data)) => match data.expressions.nodes.first() {
                    Some(&first) => first,
                    None => return false,
                },
                Some(Node::UpdateExpression(data)) if !data.prefix => data.argument,
                _ => return false,
            };
        }
    }

    /// Following `.object` / `.callee` from `node`, is there a call?
    fn member_chain_has_call(&self, mut node: NodeIndex) -> bool {
        loop {
            node = match self.arena.get(node) {
                Some(Node::CallExpression(_)) => return true,
                Some(Node::MemberExpression(data)) => data.object,
                _ => return false,
            };
        }
    }

    /// `??` cannot be mixed with `||` or `&&` without parentheses, even
    /// where precedence alone would allow it.
    fn operand_precedence(&self, operator: &str, operand: NodeIndex, min: u8) -> u8 {
        let operand_op = match self.arena.get(operand) {
            Some(Node::BinaryExpression(data)) => data.operator.as_str(),
            _ => return min,
        };
        let mixed = match operator {
            "??" => matches!(operand_op, "||" | "&&"),
            "||" | "&&" => operand_op == "??",
            _ => false,
        };
        if mixed { precedence::PRIMARY } else { min }
    }

    fn emit_literal(&mut self, value: &LiteralValue) {
        match value {
            LiteralValue::String(s) => self.emit_string(s),
            LiteralValue::Number(n) => self.output.push_str(&format_js_number(*n)),
            LiteralValue::Boolean(b) => self.output.push_str(if *b { "true" } else { "false" }),
            LiteralValue::Null => self.output.push_str("null"),
        }
    }

    /// Double-quoted string literal. JSON string escaping is valid JavaScript.
    fn emit_string(&mut self, value: &str) {
        match serde_json::to_string(value) {
            Ok(quoted) => self.output.push_str(&quoted),
            Err(_) => {
                self.output.push('"');
                self.output.push_str(value);
                self.output.push('"');
            }
        }
    }

    fn emit_object_entries(&mut self, properties: &NodeList) {
        if properties.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{ ");
        for (i, property) in properties.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.emit_expression(property, 0);
        }
        self.output.push_str(" }");
    }

    fn emit_property(&mut self, data: &PropertyData) {
        let accessor_prefix = match data.kind {
            PropertyKind::Init => None,
            PropertyKind::Get => Some("get "),
            PropertyKind::Set => Some("set "),
        };
        if accessor_prefix.is_some() || data.method {
            if let Some(prefix) = accessor_prefix {
                self.output.push_str(prefix);
            }
            self.emit_property_key(data);
            match self.arena.get(data.value) {
                Some(Node::FunctionExpression(function)) => {
                    self.emit_argument_list(&function.params);
                    self.output.push(' ');
                    self.emit_statement(function.body);
                }
                _ => {
                    self.output.push_str(": ");
                    self.emit_expression(data.value, precedence::ASSIGNMENT);
                }
            }
            return;
        }

        if data.shorthand {
            self.emit_expression(data.value, precedence::ASSIGNMENT);
            return;
        }
        self.emit_property_key(data);
        self.output.push_str(": ");
        self.emit_expression(data.value, precedence::ASSIGNMENT);
    }

    fn emit_property_key(&mut self, data: &PropertyData) {
        if data.computed {
            self.output.push('[');
            self.emit_expression(data.key, precedence::ASSIGNMENT);
            self.output.push(']');
        } else {
            self.emit_expression(data.key, precedence::PRIMARY);
        }
    }

    fn emit_function(&mut self, keyword: &str, data: &FunctionData) {
        self.output.push_str(keyword);
        if data.name.is_some() {
            self.output.push(' ');
            self.emit_expression(data.name, precedence::PRIMARY);
        }
        self.emit_argument_list(&data.params);
        self.output.push(' ');
        self.emit_statement(data.body);
    }

    fn emit_argument_list(&mut self, arguments: &NodeList) {
        self.output.push('(');
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.emit_expression(argument, precedence::ASSIGNMENT);
        }
        self.output.push(')');
    }
}

fn expression_precedence(node: &Node) -> u8 {
    match node {
        Node::SequenceExpression(_) => precedence::SEQUENCE,
        Node::AssignmentExpression(_)
        | Node::ArrowFunctionExpression(_)
        | Node::AssignmentPattern(_) => precedence::ASSIGNMENT,
        Node::ConditionalExpression(_) => precedence::CONDITIONAL,
        Node::BinaryExpression(data) => binary_precedence(&data.operator),
        Node::UnaryExpression(_) => precedence::UNARY,
        Node::UpdateExpression(data) if data.prefix => precedence::UNARY,
        Node::UpdateExpression(_) => precedence::POSTFIX,
        Node::CallExpression(_) | Node::NewExpression(_) | Node::MemberExpression(_) => {
            precedence::CALL_OR_MEMBER
        }
        _ => precedence::PRIMARY,
    }
}

fn binary_precedence(operator: &str) -> u8 {
    match operator {
        "??" => 4,
        "||" => 5,
        "&&" => 6,
        "|" => 7,
        "^" => 8,
        "&" => 9,
        "==" | "!=" | "===" | "!==" => 10,
        "<" | ">" | "<=" | ">=" | "instanceof" | "in" => 11,
        "<<" | ">>" | ">>>" => 12,
        "+" | "-" => 13,
        "*" | "/" | "%" => 14,
        "**" => 15,
        _ => precedence::SHORT_CIRCUIT,
    }
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
