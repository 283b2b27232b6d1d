use super::BoolVar;

/// A value for every variable of a [`Model`](super::Model), indexed by [`BoolVar`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: Box<[bool]>,
}

impl Assignment {
    pub fn new(values: impl Into<Box<[bool]>>) -> Assignment {
        Assignment {
            values: values.into(),
        }
    }

    /// An assignment of `false` to `num_variables` variables.
    pub fn all_false(num_variables: usize) -> Assignment {
        Assignment::new(vec![false; num_variables])
    }

    pub fn value(&self, variable: BoolVar) -> bool {
        self.values[variable.index()]
    }

    pub fn set(&mut self, variable: BoolVar, value: bool) {
        self.values[variable.index()] = value;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
