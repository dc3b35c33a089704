pub mod animal;
pub mod assess;
pub mod export;
pub mod scales;
pub mod weight;
