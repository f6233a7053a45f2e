pub mod aerodynamics;
pub mod trajectory;
