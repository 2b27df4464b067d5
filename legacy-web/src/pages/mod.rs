pub mod home;
pub mod normativas;
pub mod not_found;
