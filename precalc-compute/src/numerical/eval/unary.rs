use precalc_parser::parser::{token::op::UnaryOpKind, unary::Unary};
use crate::numerical::{ctxt::Ctxt, error::Error, eval::Eval, value::Value};
use super::binary::neg;

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        let operand = self.operand.eval(ctxt)?;
        Ok(match self.op.kind {
            UnaryOpKind::Neg => neg(operand),
            UnaryOpKind::Pos => operand,
        })
    }
}
