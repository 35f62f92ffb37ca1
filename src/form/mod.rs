mod form_state;
pub mod submit;

pub use form_state::{FormField, FormState, parse_price};
pub use submit::{SubmitOutcome, submit_item};
