use precalc_parser::parser::literal::Literal;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::UndefinedVariable, Error},
    eval::Eval,
    value::Value,
};
use crate::primitive::rational_from_decimal;

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        match self {
            Literal::Number(num) => Ok(Value::Exact(rational_from_decimal(&num.value))),
            Literal::Symbol(sym) => ctxt.get_var(&sym.name)
                .ok_or_else(|| Error::new(vec![sym.span.clone()], UndefinedVariable {
                    name: sym.name.clone(),
                    available: ctxt.var_names(),
                })),
        }
    }
}
