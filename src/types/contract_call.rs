use super::TypedValue;
use serde::{Deserialize, Serialize};

/// A contract endpoint bound to the marketplace address, with its arguments
/// in the order the ABI declares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractCall {
    pub contract: String,
    pub function: String,
    pub args: Vec<TypedValue>,
}

impl ContractCall {
    pub fn new(contract: &str, function: &str) -> ContractCall {
        ContractCall {
            contract: contract.to_string(),
            function: function.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, value: TypedValue) -> ContractCall {
        self.args.push(value);
        self
    }

    pub fn args(mut self, values: impl IntoIterator<Item = TypedValue>) -> ContractCall {
        self.args.extend(values);
        self
    }
}
