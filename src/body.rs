//! Curried invocation chains: `{ a in { b in f(a, b) } }`.

use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing to curry.
    Empty,
    /// Terminal call of the curried function with every captured argument.
    Call { function: String, args: Vec<String> },
    /// Single-argument closure binding `param` around the rest of the chain.
    Closure { param: String, body: Box<Body> },
}

impl Body {
    /// Nests one closure per parameter, innermost last, around a call that
    /// passes the parameters back in the order they were received.
    pub fn curried<S: AsRef<str>>(function: &str, params: &[S]) -> Self {
        if params.is_empty() {
            return Body::Empty;
        }
        let args = params.iter().map(|p| p.as_ref().to_owned()).collect_vec();
        let call = Body::Call {
            function: function.to_owned(),
            args: args.clone(),
        };
        args.into_iter().rev().fold(call, |inner, param| Body::Closure {
            param,
            body: Box::new(inner),
        })
    }

    /// Parameters in the order their closures are opened.
    pub fn closure_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut cursor = self;
        while let Body::Closure { param, body } = cursor {
            params.push(param.as_str());
            cursor = &**body;
        }
        params
    }

    /// Arguments of the innermost call, if the chain ends in one.
    pub fn call_args(&self) -> Option<&[String]> {
        let mut cursor = self;
        loop {
            match cursor {
                Body::Empty => return None,
                Body::Call { args, .. } => return Some(args.as_slice()),
                Body::Closure { body, .. } => cursor = &**body,
            }
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0;
        let mut cursor = self;
        loop {
            match cursor {
                Body::Empty => break,
                Body::Call { function, args } => {
                    write!(f, "{function}({})", args.iter().join(", "))?;
                    break;
                }
                Body::Closure { param, body } => {
                    write!(f, "{{ {param} in ")?;
                    depth += 1;
                    cursor = &**body;
                }
            }
        }
        for _ in 0..depth {
            f.write_str(" }")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_body(params: &[&str], output: &str) {
        assert_eq!(Body::curried("f", params).to_string(), output)
    }

    #[test]
    fn empty() {
        test_body(&[], "");
        assert_eq!(Body::curried::<&str>("f", &[]), Body::Empty);
    }

    #[test]
    fn single() {
        test_body(&["a"], "{ a in f(a) }")
    }

    #[test]
    fn pair() {
        test_body(&["a", "b"], "{ a in { b in f(a, b) } }")
    }

    #[test]
    fn long() {
        test_body(
            &["x", "y", "z", "u"],
            "{ x in { y in { z in { u in f(x, y, z, u) } } } }",
        )
    }

    #[test]
    fn call_keeps_closure_order() {
        let params = ["x", "y", "z", "u", "v"];
        let body = Body::curried("f", &params);
        assert_eq!(body.closure_params(), params);
        assert_eq!(body.call_args().unwrap(), params);
        assert_eq!(Body::Empty.call_args(), None);
    }
}
