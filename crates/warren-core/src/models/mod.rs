pub mod animal;
pub mod assessment;
pub mod weight;
