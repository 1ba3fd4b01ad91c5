//! Backend side of the GUI: command vocabulary and the worker thread.

pub mod commands;
pub mod runtime;
