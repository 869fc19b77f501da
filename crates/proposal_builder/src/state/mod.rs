pub mod descriptor;
pub mod draft;
pub mod encoded_call;
pub mod kind;

pub use descriptor::*;
pub use draft::*;
pub use encoded_call::*;
pub use kind::*;
