mod common;
mod reconcile;
mod resolver;
mod tree;
