pub mod marca;

pub use marca::{Marca, MarcaInput};
