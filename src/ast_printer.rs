use crate::expr::{Expr, LiteralValue};
use crate::stmt::Stmt;
use crate::token::TokenType;
use crate::value::format_number;

/// Renders syntax trees as text: the parenthesized prefix form used for
/// debugging the parser, and a reverse‑polish form of expressions.
pub struct AstPrinter;

impl AstPrinter {
    /// Prefix form: `-123 * (45.67)` → `(* (- 123) (group 45.67))`.
    pub fn print(expr: &Expr) -> String {
        match expr {
            // ── literals ────────────────────────────────────────────────
            Expr::Literal(lit) => literal(lit),

            // ── grouping ────────────────────────────────────────────────
            Expr::Grouping(inner) => format!("(group {})", Self::print(inner)),

            // ── operators ───────────────────────────────────────────────
            Expr::Unary { operator, right } => {
                format!("({} {})", operator.lexeme, Self::print(right))
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!(
                "({} {} {})",
                operator.lexeme,
                Self::print(left),
                Self::print(right)
            ),

            // ── names and objects ───────────────────────────────────────
            Expr::Variable { name, .. } => name.lexeme.clone(),

            Expr::Assign { name, value, .. } => {
                format!("(= {} {})", name.lexeme, Self::print(value))
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut s = format!("(call {}", Self::print(callee));
                for arg in arguments {
                    s.push(' ');
                    s.push_str(&Self::print(arg));
                }
                s.push(')');
                s
            }

            Expr::Get { object, name } => format!("(. {} {})", Self::print(object), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!(
                "(= (. {} {}) {})",
                Self::print(object),
                name.lexeme,
                Self::print(value)
            ),

            Expr::This { .. } => "this".into(),

            Expr::Super { method, .. } => format!("(super {})", method.lexeme),
        }
    }

    /// Reverse polish: `(1 + 2) * (4 - 3)` → `1 2 + 4 3 - *`.  Negation is
    /// written `~` to keep it apart from subtraction.
    pub fn rpn(expr: &Expr) -> String {
        match expr {
            Expr::Literal(lit) => literal(lit),

            Expr::Grouping(inner) => Self::rpn(inner),

            Expr::Unary { operator, right } => {
                let op: &str = if operator.token_type == TokenType::MINUS {
                    "~"
                } else {
                    operator.lexeme.as_str()
                };
                format!("{} {}", Self::rpn(right), op)
            }

            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => format!("{} {} {}", Self::rpn(left), Self::rpn(right), operator.lexeme),

            Expr::Call {
                callee, arguments, ..
            } => {
                let mut parts: Vec<String> = arguments.iter().map(Self::rpn).collect();
                parts.push(Self::rpn(callee));
                parts.push(format!("call/{}", arguments.len()));
                parts.join(" ")
            }

            Expr::Assign { name, value, .. } => format!("{} {} =", Self::rpn(value), name.lexeme),

            Expr::Set {
                object,
                name,
                value,
            } => format!("{} {} .{} =", Self::rpn(object), Self::rpn(value), name.lexeme),

            Expr::Get { object, name } => format!("{} .{}", Self::rpn(object), name.lexeme),

            Expr::Variable { .. } | Expr::This { .. } | Expr::Super { .. } => Self::print(expr),
        }
    }

    /// Prefix form of a whole statement.
    pub fn print_stmt(stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => format!("(; {})", Self::print(expr)),

            Stmt::Print(expr) => format!("(print {})", Self::print(expr)),

            Stmt::Var { name, initializer } => match initializer {
                Some(init) => format!("(var {} = {})", name.lexeme, Self::print(init)),
                None => format!("(var {})", name.lexeme),
            },

            Stmt::Block(statements) => {
                let mut s = String::from("(block");
                for inner in statements {
                    s.push(' ');
                    s.push_str(&Self::print_stmt(inner));
                }
                s.push(')');
                s
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => match else_branch {
                Some(else_branch) => format!(
                    "(if-else {} {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch),
                    Self::print_stmt(else_branch)
                ),
                None => format!(
                    "(if {} {})",
                    Self::print(condition),
                    Self::print_stmt(then_branch)
                ),
            },

            Stmt::While { condition, body } => {
                format!("(while {} {})", Self::print(condition), Self::print_stmt(body))
            }

            Stmt::Function(decl) => {
                let params: Vec<&str> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
                let body: Vec<String> = decl.body.iter().map(Self::print_stmt).collect();
                format!(
                    "(fun {}({}) {})",
                    decl.name.lexeme,
                    params.join(" "),
                    body.join(" ")
                )
            }

            Stmt::Return { value, .. } => match value {
                Some(value) => format!("(return {})", Self::print(value)),
                None => "(return)".into(),
            },

            Stmt::Class {
                name,
                superclass,
                methods,
            } => {
                let mut s = format!("(class {}", name.lexeme);
                if let Some(superclass) = superclass {
                    s.push_str(&format!(" < {}", Self::print(superclass)));
                }
                for method in methods {
                    s.push(' ');
                    s.push_str(&Self::print_stmt(&Stmt::Function(method.clone())));
                }
                s.push(')');
                s
            }
        }
    }
}

fn literal(lit: &LiteralValue) -> String {
    match lit {
        LiteralValue::True => "true".into(),

        LiteralValue::False => "false".into(),

        LiteralValue::Nil => "nil".into(),

        LiteralValue::Str(s) => s.clone(),

        LiteralValue::Number(n) => format_number(*n),
    }
}
