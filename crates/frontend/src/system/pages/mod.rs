pub mod gp;
pub mod login;
pub mod manager;
pub mod patient;
pub mod receptionist;
