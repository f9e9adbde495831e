//! Renders one curry definition per arity.

use crate::alphabet::Alphabet;
use crate::body::Body;
use crate::error::Result;
use crate::signature::Signature;

/// Signature and body of one generated function, kept apart so their shapes
/// can be compared before they are flattened into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub signature: Signature,
    pub body: Body,
}

impl Definition {
    pub fn new(alphabet: &Alphabet, arity: usize) -> Result<Self> {
        let signature = Signature::new(alphabet.type_vars(arity)?, alphabet.reserved());
        let body = Body::curried(alphabet.target(), &signature.param_names());
        Ok(Self { signature, body })
    }

    pub fn render(&self) -> String {
        let Self { signature, body } = self;
        format!(
            "
/// Curry function from for function with {arity} arguments
public func curry<{generics}>(_ f: @escaping {parameter}) -> {curried} {{
    return {body}
}}
",
            arity = signature.arity(),
            generics = signature.generics(),
            parameter = signature.parameter_type(),
            curried = signature.curried_type(),
        )
    }
}

pub fn render_definition(alphabet: &Alphabet, arity: usize) -> Result<String> {
    Ok(Definition::new(alphabet, arity)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    fn abc() -> Alphabet {
        Alphabet::new("ABC".chars(), 'R', "f").unwrap()
    }

    #[test]
    fn abc_arity_two() {
        assert_eq!(
            render_definition(&abc(), 2).unwrap(),
            "
/// Curry function from for function with 2 arguments
public func curry<A, B, R>(_ f: @escaping (A, B) -> R) -> (A) -> (B) -> R {
    return { a in { b in f(a, b) } }
}
"
        )
    }

    #[test]
    fn standard_arity_three() {
        let alphabet = Alphabet::standard().unwrap();
        assert_eq!(
            render_definition(&alphabet, 3).unwrap(),
            "
/// Curry function from for function with 3 arguments
public func curry<X, Y, Z, R>(_ f: @escaping (X, Y, Z) -> R) -> (X) -> (Y) -> (Z) -> R {
    return { x in { y in { z in f(x, y, z) } } }
}
"
        )
    }

    #[test]
    fn signature_mirrors_body() {
        let alphabet = Alphabet::standard().unwrap();
        for arity in alphabet.arities() {
            let Definition { signature, body } = Definition::new(&alphabet, arity).unwrap();
            let bound = body
                .closure_params()
                .iter()
                .map(|p| p.to_ascii_uppercase())
                .collect::<Vec<_>>();
            let vars = signature
                .type_vars()
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>();
            assert_eq!(bound, vars);
            assert_eq!(body.call_args().unwrap().len(), arity);
            assert_eq!(signature.curried_type().matches("->").count(), arity);
        }
    }

    #[test]
    fn arity_beyond_alphabet() {
        assert!(matches!(
            render_definition(&abc(), 4),
            Err(Error::ArityOutOfRange { arity: 4, size: 3 })
        ));
    }
}
