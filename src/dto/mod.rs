pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod signup;
