//! Core layer - services built on the request pipeline

pub mod services;
