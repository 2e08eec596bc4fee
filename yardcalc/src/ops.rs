/// Binary operators understood by the evaluator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn from_symbol(symbol: &str) -> Option<BinOp> {
        match symbol {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "^" => Some(BinOp::Pow),
            _ => None,
        }
    }

    // all of them associate to the left, including '^'
    pub fn precedence(self) -> i32 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div => 2,
            BinOp::Pow => 3,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
            BinOp::Pow => lhs.powf(rhs),
        }
    }
}

/// Single argument functions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Ln,
    Sqrt,
}

impl MathFn {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFn::Sin => x.sin(),
            MathFn::Cos => x.cos(),
            MathFn::Tan => x.tan(),
            MathFn::Ln => x.ln(),
            MathFn::Sqrt => x.sqrt(),
        }
    }
}

/// Every function name the evaluator accepts.
///
/// `log_` is the only two argument function. Its base is the reduced group
/// right before it in postfix order and its argument is the raw number
/// token right after it, so `log_{2}8` is the base 2 logarithm of 8.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Func {
    LogBase,
    Unary(MathFn),
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        match name {
            "log_" => Some(Func::LogBase),
            "sin" => Some(Func::Unary(MathFn::Sin)),
            "cos" => Some(Func::Unary(MathFn::Cos)),
            "tan" => Some(Func::Unary(MathFn::Tan)),
            "log" => Some(Func::Unary(MathFn::Ln)),
            "sqrt" => Some(Func::Unary(MathFn::Sqrt)),
            _ => None,
        }
    }
}

pub fn log_base(base: f64, x: f64) -> f64 {
    x.log2() / base.log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols() {
        for (sym, op) in [("+", BinOp::Add), ("-", BinOp::Sub), ("*", BinOp::Mul),
                          ("/", BinOp::Div), ("^", BinOp::Pow)] {
            assert_eq!(BinOp::from_symbol(sym), Some(op));
        }
        assert_eq!(BinOp::from_symbol("%"), None);
        assert_eq!(BinOp::from_symbol("NEGATE"), None);
    }

    #[test]
    fn operand_order() {
        assert_eq!(BinOp::Sub.apply(7.0, 2.0), 5.0);
        assert_eq!(BinOp::Div.apply(8.0, 2.0), 4.0);
        assert_eq!(BinOp::Pow.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn function_names() {
        assert_eq!(Func::from_name("log"), Some(Func::Unary(MathFn::Ln)));
        assert_eq!(Func::from_name("log_"), Some(Func::LogBase));
        assert_eq!(Func::from_name("ln"), None);
        assert_eq!(Func::from_name("SIN"), None);
    }

    #[test]
    fn logarithms() {
        assert_eq!(log_base(2.0, 8.0), 3.0);
        assert_eq!(MathFn::Ln.apply(1.0), 0.0);
    }
}
