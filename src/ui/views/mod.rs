pub mod acknowledgements;
pub mod intro;
pub mod practice;
pub mod review;
pub mod teaching;
