mod common;

mod catalog;
mod recommendation;
