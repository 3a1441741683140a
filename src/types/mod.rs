mod contract_call;
mod payment;
mod transaction;
mod typed_value;

pub use contract_call::*;
pub use payment::*;
pub use transaction::*;
pub use typed_value::*;
