// Primitive operations (own a node tag and a backward rule)
pub mod add;
pub mod mul;
pub mod pow;
// Composite operations (built from the primitives above)
pub mod div;
pub mod neg;
pub mod sub;

pub use add::{add_op, radd_op};
pub use div::{div_op, rdiv_op};
pub use mul::{mul_op, rmul_op};
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::{rsub_op, sub_op};
