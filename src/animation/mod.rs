pub mod entrance;
pub mod spring;
