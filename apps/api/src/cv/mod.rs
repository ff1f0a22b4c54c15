// CV labeling: upload validation, prompt construction, forwarding to the
// completion provider. The model's reply is returned untouched.

pub mod handlers;
pub mod prompts;
pub mod schema;
pub mod upload;
