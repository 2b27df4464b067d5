pub mod footer;
pub mod header;
pub mod hero;
pub mod loading_screen;
pub mod normativas_tabs;
pub mod rules;
pub mod team;
