mod registry;
mod text;
mod transform;

pub use registry::{TransformManager, TransformRegistry};
pub use text::{Trim, Unbracket, Upper};
pub use transform::Transform;
