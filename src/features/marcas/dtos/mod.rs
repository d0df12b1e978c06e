pub mod marca_dto;

pub use marca_dto::{MarcaFormDto, MarcaFormValues};
