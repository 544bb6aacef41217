use crate::consts;
use levenshtein::levenshtein;
use std::{collections::HashMap, sync::Arc};
use super::{builtin::Builtin, value::Value};

/// A context to use when evaluating an expression, containing variables and functions that can be
/// used within the expression.
#[derive(Debug, Clone)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, Value>,

    /// The functions in the context.
    funcs: HashMap<String, Arc<dyn Builtin>>,
}

impl Default for Ctxt {
    fn default() -> Self {
        Self {
            vars: HashMap::from([
                ("pi".to_string(), consts::PI.clone().into()),
                ("E".to_string(), consts::E.clone().into()),
            ]),
            funcs: crate::funcs::all()
                .into_iter()
                .map(|(name, func)| (name.to_string(), func.into()))
                .collect(),
        }
    }
}

impl Ctxt {
    /// Creates a new empty context.
    ///
    /// The empty context is probably not very useful, as it does not contain any variables or
    /// functions. Consider using the [`Default`] implementation instead.
    pub fn new() -> Ctxt {
        Ctxt {
            vars: HashMap::new(),
            funcs: HashMap::new(),
        }
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: Value) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns a copy of the context with the given variable added.
    pub fn with_var(&self, name: &str, value: Value) -> Ctxt {
        let mut ctxt = self.clone();
        ctxt.add_var(name, value);
        ctxt
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<Value> {
        self.vars.get(name).cloned()
    }

    /// Returns the names of the variables in the context, in sorted order.
    pub fn var_names(&self) -> Vec<String> {
        let mut names = self.vars.keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    /// Get a builtin function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Arc<dyn Builtin>> {
        self.funcs.get(name)
    }

    /// Returns all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&str> {
        let mut similar = self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort();
        similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        let ctxt = Ctxt::default();
        assert!(ctxt.get_var("pi").is_some());
        assert!(ctxt.get_var("E").is_some());
        assert!(ctxt.get_var("x").is_none());
    }

    #[test]
    fn similar_funcs() {
        let ctxt = Ctxt::default();
        assert_eq!(ctxt.get_similar_funcs("sqr"), vec!["sqrt"]);
        assert_eq!(ctxt.get_similar_funcs("cso"), Vec::<&str>::new());
        assert_eq!(ctxt.get_similar_funcs("lg"), vec!["ln", "log"]);
    }
}
