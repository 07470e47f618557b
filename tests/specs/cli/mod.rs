//! `vigil` command-line specs

mod args;
mod help;
