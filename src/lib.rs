#![allow(clippy::needless_return, clippy::redundant_field_names)]

mod factorial;
mod rational;

mod wigner_6j;
pub use self::rational::SqrtRational;
pub use self::wigner_6j::{closed_form_3nj, triangle_coefficient};
