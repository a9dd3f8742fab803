use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(String),
    Binary(char, Box<Expr>, Box<Expr>),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    Call(String, Vec<Expr>),
}

/// Function name and parameter names. An empty name marks the anonymous
/// wrapper around a top-level expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub proto: Prototype,
    pub body: Expr,
}

/// Root of one top-level unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Expr(Expr),
    Prototype(Prototype),
    Function(Function),
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::new("", vec![])
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty()
    }
}

impl Function {
    pub fn new(proto: Prototype, body: Expr) -> Self {
        Function { proto, body }
    }
}

impl Expr {
    pub fn binary(op: char, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        match self {
            Expr::Number(n) => writeln!(f, "{}Number: {}", pad, n),
            Expr::Variable(name) => writeln!(f, "{}Variable: {}", pad, name),
            Expr::Binary(op, lhs, rhs) => {
                writeln!(f, "{}Binary op: {}", pad, op)?;
                lhs.write_tree(f, indent + 2)?;
                rhs.write_tree(f, indent + 2)
            }
            Expr::If(cond, then, otherwise) => {
                writeln!(f, "{}If", pad)?;
                writeln!(f, "{}  Condition:", pad)?;
                cond.write_tree(f, indent + 4)?;
                writeln!(f, "{}  Then:", pad)?;
                then.write_tree(f, indent + 4)?;
                writeln!(f, "{}  Else:", pad)?;
                otherwise.write_tree(f, indent + 4)
            }
            Expr::Call(callee, args) => {
                writeln!(f, "{}Call: {}", pad, callee)?;
                for arg in args {
                    arg.write_tree(f, indent + 2)?;
                }
                Ok(())
            }
        }
    }
}

impl Prototype {
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{}Prototype: {}", pad, self.name)?;
        writeln!(f, "{}  Args: {}", pad, self.params.join(" "))
    }
}

impl Function {
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = " ".repeat(indent);
        writeln!(f, "{}Function definition:", pad)?;
        self.proto.write_tree(f, indent + 2)?;
        writeln!(f, "{}  Body:", pad)?;
        self.body.write_tree(f, indent + 4)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Expr(e) => e.write_tree(f, 0),
            Node::Prototype(p) => p.write_tree(f, 0),
            Node::Function(func) => func.write_tree(f, 0),
        }
    }
}
