use precalc_parser::parser::call::Call;
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::{NonFiniteResult, UndefinedFunction}, Error},
    eval::Eval,
    value::Value,
};

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        let builtin = ctxt.get_func(&self.name.name)
            .ok_or_else(|| Error::new(self.outer_span().to_vec(), UndefinedFunction {
                name: self.name.name.clone(),
                suggestions: ctxt.get_similar_funcs(&self.name.name)
                    .into_iter()
                    .map(|s| s.to_string())
                    .collect(),
            }))?;

        let args = self.args.iter()
            .map(|arg| arg.eval(ctxt))
            .collect::<Result<Vec<_>, _>>()?;

        let value = builtin.eval(args).map_err(|err| err.into_error(self))?;
        if !value.is_finite() {
            return Err(Error::new(self.outer_span().to_vec(), NonFiniteResult {
                name: self.name.name.clone(),
            }));
        }

        Ok(value)
    }
}
