use itertools::Itertools;

/// Generic signature of one curry function: its type variables plus the
/// reserved return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    type_vars: Vec<char>,
    reserved: char,
}

impl Signature {
    pub fn new(type_vars: &[char], reserved: char) -> Self {
        Self {
            type_vars: type_vars.to_vec(),
            reserved,
        }
    }

    pub fn arity(&self) -> usize {
        self.type_vars.len()
    }

    pub fn type_vars(&self) -> &[char] {
        &self.type_vars
    }

    /// Value-level names matching the type variables.
    pub fn param_names(&self) -> Vec<String> {
        self.type_vars
            .iter()
            .map(|t| t.to_ascii_lowercase().to_string())
            .collect()
    }

    /// `A, B, R`
    pub fn generics(&self) -> String {
        self.type_vars
            .iter()
            .chain(std::iter::once(&self.reserved))
            .join(", ")
    }

    /// `(A, B) -> R`
    pub fn parameter_type(&self) -> String {
        format!("({}) -> {}", self.type_vars.iter().join(", "), self.reserved)
    }

    /// `(A) -> (B) -> R`, right-associated.
    pub fn curried_type(&self) -> String {
        self.type_vars
            .iter()
            .map(|t| format!("({t}) -> "))
            .chain(std::iter::once(self.reserved.to_string()))
            .collect()
    }
}
